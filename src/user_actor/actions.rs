/// Custom actions for User entities.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Spends `quantity` wishes on `product_id`.
    ///
    /// Leaves the user untouched when the quota cannot cover it.
    SubtractWish { quantity: u32, product_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserActionResult {
    /// Quota left after the debit.
    WishSubtracted { remaining: u32 },
    /// Debit refused; nothing changed.
    InsufficientWish { available: u32 },
}
