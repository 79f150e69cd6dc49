/// A purchasable variant of a [`Product`](super::Product) with its own stock.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOption {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
pub struct OptionCreate {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
}

impl OptionCreate {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            quantity,
        }
    }
}
