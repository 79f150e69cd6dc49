//! Product catalogue entries. Ordering only reads them.

pub mod entity;
pub mod error;

pub use error::*;
