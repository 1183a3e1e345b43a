//! Category operations.

use std::sync::Arc;

use async_trait::async_trait;

use clementine_core::CategoryId;

use crate::db::CategoryStore;
use crate::dispatch::{Command, CommandHandler, Query, QueryHandler};
use crate::error::ApiError;
use crate::models::Category;

/// Persist a freshly constructed category.
///
/// The identifier is generated by [`Category::new`] before dispatch, so the
/// caller already knows the id it will read back.
#[derive(Debug)]
pub struct CreateCategory {
    /// The category to store.
    pub category: Category,
}

impl Command for CreateCategory {}

/// Remove the category matching an id. No-op if absent.
#[derive(Debug)]
pub struct DeleteCategory {
    /// ID of the category to delete.
    pub id: CategoryId,
}

impl Command for DeleteCategory {}

/// Look up a category by id. Absence is a valid result, not a failure.
#[derive(Debug)]
pub struct GetCategoryById {
    /// ID of the category to fetch.
    pub id: CategoryId,
}

impl Query for GetCategoryById {
    type Output = Option<Category>;
}

/// List all categories, ordered by name.
#[derive(Debug)]
pub struct ListCategories;

impl Query for ListCategories {
    type Output = Vec<Category>;
}

/// Handler for [`CreateCategory`].
///
/// The one handler with validation: a blank name is rejected as a client
/// error before anything reaches the store.
pub struct CreateCategoryHandler {
    categories: Arc<dyn CategoryStore>,
}

impl CreateCategoryHandler {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CommandHandler<CreateCategory> for CreateCategoryHandler {
    async fn handle(&self, cmd: CreateCategory) -> Result<(), ApiError> {
        if cmd.category.name.trim().is_empty() {
            return Err(ApiError::BadRequest("category name must not be blank".into()));
        }
        self.categories.insert(&cmd.category).await?;
        Ok(())
    }
}

/// Handler for [`DeleteCategory`].
pub struct DeleteCategoryHandler {
    categories: Arc<dyn CategoryStore>,
}

impl DeleteCategoryHandler {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CommandHandler<DeleteCategory> for DeleteCategoryHandler {
    async fn handle(&self, cmd: DeleteCategory) -> Result<(), ApiError> {
        self.categories.delete(&cmd.id).await?;
        Ok(())
    }
}

/// Handler for [`GetCategoryById`].
pub struct GetCategoryByIdHandler {
    categories: Arc<dyn CategoryStore>,
}

impl GetCategoryByIdHandler {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl QueryHandler<GetCategoryById> for GetCategoryByIdHandler {
    async fn handle(&self, query: GetCategoryById) -> Result<Option<Category>, ApiError> {
        Ok(self.categories.get_by_id(&query.id).await?)
    }
}

/// Handler for [`ListCategories`].
pub struct ListCategoriesHandler {
    categories: Arc<dyn CategoryStore>,
}

impl ListCategoriesHandler {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl QueryHandler<ListCategories> for ListCategoriesHandler {
    async fn handle(&self, _query: ListCategories) -> Result<Vec<Category>, ApiError> {
        Ok(self.categories.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testing::harness;

    #[tokio::test]
    async fn test_create_then_get_returns_exact_triple() {
        let t = harness();
        let category = Category::new("Shoes", "Footwear");

        t.dispatcher
            .execute(CreateCategory {
                category: category.clone(),
            })
            .await
            .expect("create");

        let loaded = t
            .dispatcher
            .query(GetCategoryById {
                id: category.id.clone(),
            })
            .await
            .expect("get");

        assert_eq!(loaded, Some(category));
    }

    #[tokio::test]
    async fn test_blank_name_is_a_client_error() {
        let t = harness();

        let err = t
            .dispatcher
            .execute(CreateCategory {
                category: Category::new("   ", "whitespace only"),
            })
            .await
            .expect_err("blank name rejected");

        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(
            t.dispatcher
                .query(ListCategories)
                .await
                .expect("list")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_delete_then_get_returns_absent() {
        let t = harness();
        let category = Category::new("Shoes", "Footwear");
        t.dispatcher
            .execute(CreateCategory {
                category: category.clone(),
            })
            .await
            .expect("create");

        t.dispatcher
            .execute(DeleteCategory {
                id: category.id.clone(),
            })
            .await
            .expect("delete");

        let loaded = t
            .dispatcher
            .query(GetCategoryById { id: category.id })
            .await
            .expect("get");
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn test_deleting_missing_category_twice_is_a_no_op() {
        let t = harness();
        let missing = CategoryId::new("missing-1");

        for _ in 0..2 {
            t.dispatcher
                .execute(DeleteCategory {
                    id: missing.clone(),
                })
                .await
                .expect("delete of a missing category succeeds");
        }
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_name() {
        let t = harness();
        for (name, description) in [("Shoes", "Footwear"), ("Belts", "Accessories")] {
            t.dispatcher
                .execute(CreateCategory {
                    category: Category::new(name, description),
                })
                .await
                .expect("create");
        }

        let names: Vec<_> = t
            .dispatcher
            .query(ListCategories)
            .await
            .expect("list")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Belts", "Shoes"]);
    }
}
