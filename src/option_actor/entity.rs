use crate::actor_framework::Entity;
use crate::domain::{OptionCreate, ProductOption};
use super::actions::{OptionAction, OptionActionResult};

impl Entity for ProductOption {
    type Id = String;
    type CreatePayload = OptionCreate;
    type Action = OptionAction;
    type ActionResult = OptionActionResult;

    fn id(&self) -> &String { &self.id }

    /// Creates a new option from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the option
    /// * `payload` - Parent product id, option name, and starting quantity
    fn from_create(id: String, payload: OptionCreate) -> Result<Self, String> {
        if payload.name.trim().is_empty() {
            return Err("Option name must not be empty".to_string());
        }
        Ok(Self {
            id,
            product_id: payload.product_id,
            name: payload.name,
            quantity: payload.quantity,
        })
    }

    /// Handles option-specific actions.
    ///
    /// # Actions
    /// - `CheckQuantity`: Returns the current quantity
    /// - `SubtractQuantity(amount)`: Decrements stock if enough is left
    /// - `RestoreQuantity(amount)`: Increments stock
    ///
    /// # Errors
    /// Returns an error for a zero-sized subtraction.
    fn handle_action(&mut self, action: OptionAction) -> Result<OptionActionResult, String> {
        match action {
            OptionAction::CheckQuantity => {
                Ok(OptionActionResult::Quantity(self.quantity))
            }
            OptionAction::SubtractQuantity(0) => {
                Err("Quantity to subtract must be positive".to_string())
            }
            OptionAction::SubtractQuantity(amount) => {
                if self.quantity >= amount {
                    self.quantity -= amount;
                    Ok(OptionActionResult::Subtracted { remaining: self.quantity })
                } else {
                    Ok(OptionActionResult::Insufficient { available: self.quantity })
                }
            }
            OptionAction::RestoreQuantity(amount) => {
                self.quantity = self.quantity.saturating_add(amount);
                Ok(OptionActionResult::Restored { remaining: self.quantity })
            }
        }
    }
}
