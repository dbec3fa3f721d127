//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Fixture IDs are
//! human-readable strings (`store1`, `prod5`), so the wrappers hold a `String`
//! rather than an integer.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use quickdash_core::define_id;
/// define_id!(StoreId);
/// define_id!(OrderId);
///
/// let store_id = StoreId::new("store1");
/// let order_id = OrderId::new("order1");
///
/// // These are different types, so this won't compile:
/// // let _: StoreId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
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
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
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
define_id!(StoreId);
define_id!(ProductId);
define_id!(OrderId);
define_id!(DriverId);
define_id!(UserId);
define_id!(AddressId);
define_id!(PaymentMethodId);
define_id!(CategoryId);

impl CategoryId {
    /// The sentinel category that matches every store.
    pub const ALL: &'static str = "all";

    /// Whether this is the `all` sentinel.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.as_str() == Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types_with_string_payloads() {
        let store_id = StoreId::new("store1");
        assert_eq!(store_id.as_str(), "store1");
        assert_eq!(store_id.to_string(), "store1");
        assert_eq!(StoreId::from("store1"), store_id);
    }

    #[test]
    fn category_all_sentinel() {
        assert!(CategoryId::new("all").is_all());
        assert!(!CategoryId::new("pharmacy").is_all());
    }
}
