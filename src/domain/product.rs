/// Represents a product in the catalogue. Read-only for ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: u32,
    pub image_url: String,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: u32, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }
}
