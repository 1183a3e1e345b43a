//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_string_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different entity types. All entity
//! identifiers in Clementine are opaque strings assigned at creation time
//! and immutable afterwards.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Constructors: `new()` (trusts input, for reconstruction from storage)
///   and `generate()` (fresh UUIDv4-backed identifier for new entities)
/// - Accessors: `as_str()`, `into_string()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use clementine_core::define_string_id;
/// define_string_id!(CategoryId);
/// define_string_id!(ProductId);
///
/// let category_id = CategoryId::generate();
/// let product_id = ProductId::new("p-1");
///
/// // These are different types, so this won't compile:
/// // let _: CategoryId = product_id;
/// ```
#[macro_export]
macro_rules! define_string_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing value, e.g. one loaded from
            /// storage. The value is trusted as-is.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh identifier for a newly created entity.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4().to_string())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying `String`.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_string_id!(CategoryId);
define_string_id!(UserId);
define_string_id!(ProductId);
define_string_id!(AddressId);
define_string_id!(FavoriteId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preserves_value() {
        let id = CategoryId::new("cat-1");
        assert_eq!(id.as_str(), "cat-1");
        assert_eq!(id.to_string(), "cat-1");
    }

    #[test]
    fn test_generate_is_unique() {
        let a = FavoriteId::generate();
        let b = FavoriteId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("p-42");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"p-42\"");

        let back: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_from_string_round_trip() {
        let id = UserId::from("u1");
        let s: String = id.clone().into();
        assert_eq!(UserId::from(s), id);
    }
}
