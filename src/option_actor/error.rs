use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OptionError {
    #[error("Option not found: {0}")]
    NotFound(String),
    #[error("Insufficient quantity: requested {requested}, available {available}")]
    InsufficientQuantity { requested: u32, available: u32 },
    #[error("Option validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
