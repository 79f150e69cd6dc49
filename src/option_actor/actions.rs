/// Custom actions for ProductOption entities.
///
/// These actions represent domain-specific operations that can be performed
/// on an option beyond standard CRUD operations.
#[derive(Debug, Clone)]
pub enum OptionAction {
    /// Reads the current quantity without modifying it.
    CheckQuantity,
    /// Removes the given amount from stock.
    ///
    /// Refused, without any change, when the amount exceeds what is available.
    SubtractQuantity(u32),
    /// Puts the given amount back into stock.
    RestoreQuantity(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionActionResult {
    Quantity(u32),
    Subtracted { remaining: u32 },
    Insufficient { available: u32 },
    Restored { remaining: u32 },
}
