use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};
use crate::actor_framework::{Entity, ResourceActor, ResourceClient};
use crate::clients::{OptionClient, OrderClient, ProductClient, UserClient};
use crate::domain::{Order, Product, ProductOption, User};
use crate::notification::{LogNotifier, NotificationGateway};
use super::config::AppConfig;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub option_client: OptionClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

/// Spawns a resource actor whose ids look like `{prefix}_1`, `{prefix}_2`, ...
fn spawn_resource<T>(buffer_size: usize, prefix: &'static str) -> (ResourceClient<T>, tokio::task::JoinHandle<()>)
where
    T: Entity<Id = String>,
{
    let counter = Arc::new(AtomicU64::new(1));
    let next_id = move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    };
    let (actor, client) = ResourceActor::<T>::new(buffer_size, next_id);
    (client, tokio::spawn(actor.run()))
}

impl OrderSystem {
    /// Starts the system with the logging notifier.
    pub fn new(config: &AppConfig) -> Self {
        let notifier = Arc::new(LogNotifier::new(config.kakao.message_link.clone()));
        Self::with_notifier(config, notifier)
    }

    pub fn with_notifier(config: &AppConfig, notifier: Arc<dyn NotificationGateway>) -> Self {
        let buffer_size = config.actors.buffer_size;
        info!(buffer_size, kakao_login = config.kakao.login_enabled, "Starting order system");

        let (user_resource, user_handle) = spawn_resource::<User>(buffer_size, "user");
        let user_client = UserClient::new(user_resource);

        let (product_resource, product_handle) = spawn_resource::<Product>(buffer_size, "product");
        let product_client = ProductClient::new(product_resource);

        let (option_resource, option_handle) = spawn_resource::<ProductOption>(buffer_size, "option");
        let option_client = OptionClient::new(option_resource, product_client.clone());

        let (order_resource, order_handle) = spawn_resource::<Order>(buffer_size, "order");
        let order_client = OrderClient::new(
            order_resource,
            user_client.clone(),
            option_client.clone(),
            notifier,
            config.kakao.clone(),
        );

        Self {
            order_client,
            user_client,
            product_client,
            option_client,
            handles: vec![user_handle, product_handle, option_handle, order_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        // Actors stop once every client (and clone) holding their sender is gone.
        drop(self.order_client);
        drop(self.option_client);
        drop(self.product_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ActorClient;
    use crate::domain::{OptionCreate, ProductCreate, UserCreate};

    #[tokio::test]
    async fn test_ids_are_prefixed_per_resource() {
        let system = OrderSystem::new(&AppConfig::default());

        let user_id = system.user_client.create_user(UserCreate::new("Alice", "alice@example.com", 5)).await.unwrap();
        let product_id = system.product_client.create_product(ProductCreate::new("Coffee", 4500, "coffee.png")).await.unwrap();
        let option_id = system.option_client.create_option(OptionCreate::new(product_id.clone(), "Iced", 3)).await.unwrap();

        assert_eq!(user_id, "user_1");
        assert_eq!(product_id, "product_1");
        assert_eq!(option_id, "option_1");
        assert_eq!(system.option_client.list().await.unwrap().len(), 1);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_stops_all_actors() {
        let system = OrderSystem::new(&AppConfig::default());
        assert_eq!(system.handles.len(), 4);
        assert!(system.shutdown().await.is_ok());
    }
}
