//! Typed handles over the resource actors.
//!
//! Each client wraps a [`ResourceClient`](crate::actor_framework::ResourceClient)
//! and translates framework errors into its entity's error type.
//! [`OrderClient`] additionally orchestrates order placement across the others.

pub mod actor_client;
pub mod user_client;
pub mod product_client;
pub mod option_client;
pub mod order_client;

pub use actor_client::ActorClient;
pub use user_client::UserClient;
pub use product_client::ProductClient;
pub use option_client::OptionClient;
pub use order_client::OrderClient;
