use std::collections::HashMap;
use std::sync::Arc;
use chrono::Utc;
use tracing::{debug, error, info, instrument, warn};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::app_system::KakaoConfig;
use crate::domain::{Order, OrderCreate, OrderDetail, OrderRequest, OrderResponse, ProductOption};
use crate::notification::NotificationGateway;
use crate::order_actor::OrderError;
use super::actor_client::ActorClient;
use super::{OptionClient, UserClient};

/// Client for interacting with the Order actor.
///
/// This client handles order placement: it resolves the user, option and
/// product, stores the order, debits stock and wish quota, and optionally
/// sends a confirmation message.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    user_client: UserClient,
    option_client: OptionClient,
    notifier: Arc<dyn NotificationGateway>,
    kakao: KakaoConfig,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        user_client: UserClient,
        option_client: OptionClient,
        notifier: Arc<dyn NotificationGateway>,
        kakao: KakaoConfig,
    ) -> Self {
        Self {
            inner,
            user_client,
            option_client,
            notifier,
            kakao,
        }
    }

    /// Places an order for `user_id`.
    ///
    /// Storing the order, debiting stock and debiting wish quota succeed or
    /// fail together; on failure the steps already applied are reversed.
    /// The confirmation message is sent afterwards and never undone.
    #[instrument(skip(self, request), fields(option_id = %request.option_id, quantity = request.quantity))]
    pub async fn create_order(&self, user_id: String, request: OrderRequest) -> Result<OrderResponse, OrderError> {
        info!("Processing create_order request");

        // Step 1: Resolve user, option and product
        let Some(user) = self.user_client.get(user_id.clone()).await? else {
            warn!("User not found");
            return Err(OrderError::Unauthorized(user_id));
        };
        let Some(option) = self.option_client.get(request.option_id.clone()).await? else {
            warn!("Option not found");
            return Err(OrderError::OptionNotFound(request.option_id));
        };
        let Some(product) = self.option_client.find_product_by_option_id(option.id.clone()).await? else {
            error!(product_id = %option.product_id, "Option has no product");
            return Err(OrderError::ProductNotFound(option.id));
        };
        if request.quantity == 0 {
            return Err(OrderError::InvalidQuantity(request.quantity));
        }

        // Step 2: Persist the order
        let payload = OrderCreate {
            option_id: option.id.clone(),
            user_id: user.id.clone(),
            quantity: request.quantity,
            created_at: Utc::now(),
            message: request.message,
            placed_option: option.clone(),
            placed_by: user.clone(),
        };
        let order_id = self.inner.create(payload.clone()).await.map_err(Self::map_error)?;
        let order = Order::placed(order_id, payload);
        debug!(order_id = %order.id, "Order stored");

        // Step 3: Debit stock
        if let Err(e) = self.option_client.subtract_quantity(option.id.clone(), order.quantity).await {
            warn!(error = %e, "Stock debit failed, rolling back");
            self.discard_order(&order.id).await;
            return Err(e.into());
        }

        // Step 4: Debit wish quota
        if let Err(e) = self.user_client.subtract_wish(user.id.clone(), order.quantity, product.id.clone()).await {
            warn!(error = %e, "Wish quota debit failed, rolling back");
            self.restore_stock(&option.id, order.quantity).await;
            self.discard_order(&order.id).await;
            return Err(e.into());
        }

        info!(order_id = %order.id, "Order placed successfully");

        // Step 5: Confirmation message, best effort
        if self.kakao.login_enabled {
            if let Err(e) = self.notifier.send_order_message(&order).await {
                warn!(order_id = %order.id, error = %e, "Order message not delivered");
            }
        } else {
            debug!("Kakao login disabled, skipping order message");
        }

        Ok(OrderResponse::from(order))
    }

    /// Lists every order of `user_id`, joined with the current option and user.
    ///
    /// A user without orders gets an empty list; the user is not looked up
    /// in that case. An option or user deleted since placement is shown as
    /// it was recorded on the order.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, user_id: String) -> Result<Vec<OrderDetail>, OrderError> {
        debug!("Processing list_orders request");
        let owner = user_id.clone();
        let orders = self.inner.query(move |order: &Order| order.user_id == owner).await
            .map_err(Self::map_error)?;
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let user = self.user_client.get(user_id).await?;
        if user.is_none() {
            debug!("User no longer exists, using recorded snapshots");
        }

        let mut options: HashMap<String, Option<ProductOption>> = HashMap::new();
        let mut details = Vec::with_capacity(orders.len());
        for order in orders {
            let current = match options.get(&order.option_id) {
                Some(cached) => cached.clone(),
                None => {
                    let fetched = self.option_client.get(order.option_id.clone()).await?;
                    options.insert(order.option_id.clone(), fetched.clone());
                    fetched
                }
            };
            details.push(OrderDetail {
                id: order.id,
                option: current.unwrap_or(order.placed_option),
                user: user.clone().unwrap_or(order.placed_by),
                quantity: order.quantity,
                created_at: order.created_at,
                message: order.message,
            });
        }

        info!(count = details.len(), "Orders listed");
        Ok(details)
    }

    async fn discard_order(&self, order_id: &str) {
        if let Err(e) = self.delete(order_id.to_string()).await {
            error!(order_id, error = %e, "Failed to roll back order");
        }
    }

    async fn restore_stock(&self, option_id: &str, quantity: u32) {
        if let Err(e) = self.option_client.restore_quantity(option_id.to_string(), quantity).await {
            error!(option_id, quantity, error = %e, "Failed to restore stock");
        }
    }
}

impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OrderError {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
