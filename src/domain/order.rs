use chrono::{DateTime, Utc};
use super::{ProductOption, User};

/// A placed order. Never modified once stored.
///
/// `placed_option` and `placed_by` record the option and user as they were
/// at placement, so the order stays listable after either is deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub option_id: String,
    pub user_id: String,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub message: String,
    pub placed_option: ProductOption,
    pub placed_by: User,
}

/// Payload for persisting a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub option_id: String,
    pub user_id: String,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub message: String,
    pub placed_option: ProductOption,
    pub placed_by: User,
}

/// What a user asks for when placing an order.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub option_id: String,
    pub quantity: u32,
    pub message: String,
}

/// Summary returned after a successful placement.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResponse {
    pub id: String,
    pub option_id: String,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

/// An order joined with the option and user it references.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub id: String,
    pub option: ProductOption,
    pub user: User,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub message: String,
}

impl Order {
    pub fn placed(id: impl Into<String>, payload: OrderCreate) -> Self {
        Self {
            id: id.into(),
            option_id: payload.option_id,
            user_id: payload.user_id,
            quantity: payload.quantity,
            created_at: payload.created_at,
            message: payload.message,
            placed_option: payload.placed_option,
            placed_by: payload.placed_by,
        }
    }
}

impl OrderRequest {
    pub fn new(option_id: impl Into<String>, quantity: u32, message: impl Into<String>) -> Self {
        Self {
            option_id: option_id.into(),
            quantity,
            message: message.into(),
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            option_id: order.option_id,
            quantity: order.quantity,
            created_at: order.created_at,
            message: order.message,
        }
    }
}
