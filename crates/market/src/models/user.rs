//! User profile domain types.

use serde::{Deserialize, Serialize};

use quickdash_core::{AddressId, OrderId, PaymentMethodId, UserId};

/// A customer profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Saved delivery addresses in display order.
    pub addresses: Vec<Address>,
    /// Saved payment methods in display order.
    pub payment_methods: Vec<PaymentMethod>,
    /// IDs of the user's orders, newest first.
    pub orders: Vec<OrderId>,
}

impl User {
    /// The address flagged as default, falling back to the first saved one.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }

    /// The payment method flagged as default, falling back to the first one.
    #[must_use]
    pub fn default_payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_methods
            .iter()
            .find(|p| p.is_default)
            .or_else(|| self.payment_methods.first())
    }
}

/// A saved delivery address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// Unique address ID.
    pub id: AddressId,
    /// Home, work, or other.
    #[serde(rename = "type")]
    pub kind: AddressKind,
    /// The full street address.
    pub address: String,
    /// Optional landmark hint for the courier.
    #[serde(default)]
    pub landmark: Option<String>,
    /// Whether this is the default delivery address.
    pub is_default: bool,
}

/// Address label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    Home,
    Work,
    Other,
}

/// A saved payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Unique payment method ID.
    pub id: PaymentMethodId,
    /// Card, UPI, or wallet.
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    /// Display name, e.g. "Visa ending in 4242".
    pub name: String,
    /// Secondary line, e.g. "Expires 09/26".
    pub details: String,
    /// Whether this is the default payment method.
    pub is_default: bool,
}

/// Payment method kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Card,
    Upi,
    Wallet,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(id: &str, is_default: bool) -> Address {
        Address {
            id: AddressId::new(id),
            kind: AddressKind::Home,
            address: format!("{id} street"),
            landmark: None,
            is_default,
        }
    }

    fn payment_method(id: &str, is_default: bool) -> PaymentMethod {
        PaymentMethod {
            id: PaymentMethodId::new(id),
            kind: PaymentKind::Card,
            name: format!("card {id}"),
            details: String::new(),
            is_default,
        }
    }

    fn test_user() -> User {
        User {
            id: UserId::new("user1"),
            name: "Test".into(),
            email: "test@example.com".into(),
            phone: String::new(),
            addresses: Vec::new(),
            payment_methods: Vec::new(),
            orders: Vec::new(),
        }
    }

    #[test]
    fn default_address_prefers_flag_then_first() {
        let mut user = test_user();
        user.addresses = vec![address("a", false), address("b", true)];
        assert_eq!(user.default_address().map(|a| a.id.as_str()), Some("b"));

        user.addresses = vec![address("a", false), address("b", false)];
        assert_eq!(user.default_address().map(|a| a.id.as_str()), Some("a"));

        user.addresses.clear();
        assert!(user.default_address().is_none());
    }

    #[test]
    fn default_payment_method_prefers_flag_then_first() {
        let mut user = test_user();
        user.payment_methods = vec![payment_method("pay1", false), payment_method("pay2", true)];
        assert_eq!(
            user.default_payment_method().map(|p| p.id.as_str()),
            Some("pay2")
        );

        user.payment_methods = vec![payment_method("pay1", false), payment_method("pay2", false)];
        assert_eq!(
            user.default_payment_method().map(|p| p.id.as_str()),
            Some("pay1")
        );

        user.payment_methods.clear();
        assert!(user.default_payment_method().is_none());
    }
}
