//! User-specific domain logic, including wish-quota accounting.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
