use std::collections::BTreeMap;

/// Represents a registered user in the system.
///
/// `wish_quota` caps how many items the user may still order. Every debit is
/// also tallied per product in `wished`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub wish_quota: u32,
    pub wished: BTreeMap<String, u32>,
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub wish_quota: u32,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, wish_quota: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            wish_quota,
        }
    }
}

impl User {
    /// Number of wishes already spent on `product_id`.
    pub fn wished_for(&self, product_id: &str) -> u32 {
        self.wished.get(product_id).copied().unwrap_or(0)
    }
}
