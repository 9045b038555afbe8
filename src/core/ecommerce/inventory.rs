use crate::domain::model::Product;
use std::collections::HashMap;

/// The product inventory, keyed by product id.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: HashMap<u32, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product, replacing any existing product with the same id.
    pub fn add_product(&mut self, product: Product) {
        self.products.insert(product.id, product);
    }

    pub fn get(&self, product_id: u32) -> Option<&Product> {
        self.products.get(&product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of the unit prices of all stocked products.
    pub fn total_value(&self) -> f64 {
        self.products.values().map(|p| p.price).sum()
    }
}
