//! Dashboard route handlers.
//!
//! Every page is a static placeholder: a shared layout, a heading, and a
//! short blurb. No state, no data fetching, no interaction - the screens
//! exist so the navigation shell is in place before each area is built out
//! against the API.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, routing::get};

/// Placeholder page template.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PlaceholderPage {
    /// Browser tab title.
    pub title: &'static str,
    /// Page heading.
    pub heading: &'static str,
    /// One-line description of what will live here.
    pub blurb: &'static str,
}

const fn page(
    title: &'static str,
    heading: &'static str,
    blurb: &'static str,
) -> PlaceholderPage {
    PlaceholderPage {
        title,
        heading,
        blurb,
    }
}

async fn overview() -> PlaceholderPage {
    page(
        "Overview",
        "Overview",
        "Store-wide summary will appear here.",
    )
}

async fn categories() -> PlaceholderPage {
    page(
        "Categories",
        "Categories",
        "Browse and manage product categories.",
    )
}

async fn customers() -> PlaceholderPage {
    page(
        "Customers",
        "Customers",
        "Customer accounts, addresses, and favorites.",
    )
}

async fn orders() -> PlaceholderPage {
    page("Orders", "Orders", "Order list and fulfillment status.")
}

async fn inventory() -> PlaceholderPage {
    page("Inventory", "Inventory", "Stock levels across locations.")
}

async fn reports() -> PlaceholderPage {
    page("Reports", "Reports", "Sales and performance reporting.")
}

async fn settings() -> PlaceholderPage {
    page("Settings", "Settings", "Store configuration and access control.")
}

async fn help() -> PlaceholderPage {
    page("Help", "Help", "Documentation and support contacts.")
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Build the dashboard router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(overview))
        .route("/categories", get(categories))
        .route("/customers", get(customers))
        .route("/orders", get(orders))
        .route("/inventory", get(inventory))
        .route("/reports", get(reports))
        .route("/settings", get(settings))
        .route("/help", get(help))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[test]
    fn test_placeholder_page_renders_heading_and_blurb() {
        let html = page("Orders", "Orders", "Order list and fulfillment status.")
            .render()
            .expect("render");
        assert!(html.contains("<h2>Orders</h2>"));
        assert!(html.contains("Order list and fulfillment status."));
        assert!(html.contains("Clementine"));
    }

    #[tokio::test]
    async fn test_every_page_serves_200() {
        let app = router();
        for path in [
            "/",
            "/categories",
            "/customers",
            "/orders",
            "/inventory",
            "/reports",
            "/settings",
            "/help",
        ] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri(path)
                        .body(Body::empty())
                        .expect("request"),
                )
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::OK, "page {path}");
        }
    }
}
