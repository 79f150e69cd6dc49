use thiserror::Error;
use crate::option_actor::OptionError;
use crate::user_actor::UserError;

/// Errors that can occur while placing or listing orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("No logged-in user: {0}")]
    Unauthorized(String),
    #[error("Option not found: {0}")]
    OptionNotFound(String),
    #[error("No product owns option: {0}")]
    ProductNotFound(String),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Insufficient quantity: requested {requested}, available {available}")]
    InsufficientQuantity { requested: u32, available: u32 },
    #[error("Insufficient wish quota: requested {requested}, available {available}")]
    InsufficientWishQuota { requested: u32, available: u32 },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<UserError> for OrderError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(id) => OrderError::Unauthorized(id),
            UserError::InsufficientWishQuota { requested, available } => {
                OrderError::InsufficientWishQuota { requested, available }
            }
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<OptionError> for OrderError {
    fn from(e: OptionError) -> Self {
        match e {
            OptionError::NotFound(id) => OrderError::OptionNotFound(id),
            OptionError::InsufficientQuantity { requested, available } => {
                OrderError::InsufficientQuantity { requested, available }
            }
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
