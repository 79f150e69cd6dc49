use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate};

impl Entity for Product {
    type Id = String;
    type CreatePayload = ProductCreate;
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    fn from_create(id: String, payload: ProductCreate) -> Result<Self, String> {
        if payload.name.trim().is_empty() {
            return Err("Product name must not be empty".to_string());
        }
        Ok(Self {
            id,
            name: payload.name,
            price: payload.price,
            image_url: payload.image_url,
        })
    }

    /// Products carry no custom actions.
    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
