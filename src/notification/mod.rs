//! Order confirmation messages.
//!
//! [`NotificationGateway`] is the seam to the external messaging service.
//! [`LogNotifier`] renders the message and emits it through `tracing`.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument};
use crate::domain::Order;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotificationError {
    #[error("Message delivery failed: {0}")]
    Delivery(String),
}

/// Sends a confirmation for a freshly placed order.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    async fn send_order_message(&self, order: &Order) -> Result<(), NotificationError>;
}

/// Text and link that make up a confirmation message.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderMessage {
    pub text: String,
    pub link: String,
}

impl OrderMessage {
    pub fn for_order(order: &Order, link_base: &str) -> Self {
        let mut text = format!(
            "Your gift order {} has been placed.\nOption: {}\nQuantity: {}",
            order.id, order.option_id, order.quantity
        );
        if !order.message.is_empty() {
            text.push_str("\nMessage: ");
            text.push_str(&order.message);
        }
        Self {
            text,
            link: format!("{}/orders/{}", link_base.trim_end_matches('/'), order.id),
        }
    }
}

/// Gateway that only logs the rendered message.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    link_base: String,
}

impl LogNotifier {
    pub fn new(link_base: impl Into<String>) -> Self {
        Self { link_base: link_base.into() }
    }
}

#[async_trait]
impl NotificationGateway for LogNotifier {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn send_order_message(&self, order: &Order) -> Result<(), NotificationError> {
        if self.link_base.trim().is_empty() {
            return Err(NotificationError::Delivery("no message link configured".to_string()));
        }
        let message = OrderMessage::for_order(order, &self.link_base);
        info!(text = %message.text, link = %message.link, "Order message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use chrono::Utc;
    use crate::domain::{ProductOption, User};

    fn order(message: &str) -> Order {
        Order {
            id: "order_7".to_string(),
            option_id: "option_2".to_string(),
            user_id: "user_1".to_string(),
            quantity: 3,
            created_at: Utc::now(),
            message: message.to_string(),
            placed_option: ProductOption {
                id: "option_2".to_string(),
                product_id: "product_1".to_string(),
                name: "Hot".to_string(),
                quantity: 10,
            },
            placed_by: User {
                id: "user_1".to_string(),
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                wish_quota: 5,
                wished: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn test_message_includes_order_fields() {
        let message = OrderMessage::for_order(&order("Happy birthday"), "http://localhost:8080/");
        assert!(message.text.contains("order_7"));
        assert!(message.text.contains("Quantity: 3"));
        assert!(message.text.ends_with("Message: Happy birthday"));
        assert_eq!(message.link, "http://localhost:8080/orders/order_7");
    }

    #[test]
    fn test_empty_message_is_omitted() {
        let message = OrderMessage::for_order(&order(""), "http://gift.example");
        assert!(!message.text.contains("Message:"));
    }

    #[tokio::test]
    async fn test_log_notifier_succeeds() {
        let notifier = LogNotifier::new("http://localhost:8080");
        assert_eq!(notifier.send_order_message(&order("hi")).await, Ok(()));
    }

    #[tokio::test]
    async fn test_log_notifier_without_link_fails() {
        let notifier = LogNotifier::new("  ");
        let result = notifier.send_order_message(&order("hi")).await;
        assert_eq!(result, Err(NotificationError::Delivery("no message link configured".to_string())));
    }
}
