use std::collections::BTreeMap;
use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate};
use super::actions::{UserAction, UserActionResult};

impl Entity for User {
    type Id = String;
    type CreatePayload = UserCreate;
    type Action = UserAction;
    type ActionResult = UserActionResult;

    fn id(&self) -> &String { &self.id }

    /// Creates a new User from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the user
    /// * `payload` - User creation parameters containing name, email and wish quota
    fn from_create(id: String, payload: UserCreate) -> Result<Self, String> {
        if payload.email.trim().is_empty() {
            return Err("User email must not be empty".to_string());
        }
        Ok(Self {
            id,
            name: payload.name,
            email: payload.email,
            wish_quota: payload.wish_quota,
            wished: BTreeMap::new(),
        })
    }

    /// Debits the wish quota and tallies the debit against the product.
    fn handle_action(&mut self, action: UserAction) -> Result<UserActionResult, String> {
        match action {
            UserAction::SubtractWish { quantity, product_id } => {
                if quantity == 0 {
                    return Err("Wish quantity must be positive".to_string());
                }
                if self.wish_quota < quantity {
                    return Ok(UserActionResult::InsufficientWish { available: self.wish_quota });
                }
                self.wish_quota -= quantity;
                *self.wished.entry(product_id).or_insert(0) += quantity;
                Ok(UserActionResult::WishSubtracted { remaining: self.wish_quota })
            }
        }
    }
}
