use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate};

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the order
    /// * `payload` - Option, user, quantity, timestamp and message of the order
    fn from_create(id: String, payload: OrderCreate) -> Result<Self, String> {
        if payload.quantity == 0 {
            return Err("Order quantity must be positive".to_string());
        }
        Ok(Order::placed(id, payload))
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
