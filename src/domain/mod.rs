pub mod user;
pub mod product;
pub mod option;
pub mod order;

pub use user::*;
pub use product::*;
pub use option::*;
pub use order::*;
