use crate::core::ecommerce::inventory::Inventory;
use std::collections::HashMap;

/// A shopping cart: product id mapped to quantity.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: HashMap<u32, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a quantity of a product, accumulating with what is already there.
    pub fn add_to_cart(&mut self, product_id: u32, quantity: u32) {
        *self.items.entry(product_id).or_insert(0) += quantity;
    }

    pub fn quantity_of(&self, product_id: u32) -> u32 {
        self.items.get(&product_id).copied().unwrap_or(0)
    }

    pub fn items(&self) -> &HashMap<u32, u32> {
        &self.items
    }

    /// Total price of the cart against an inventory. Products missing from
    /// the inventory are skipped.
    pub fn total_price(&self, inventory: &Inventory) -> f64 {
        self.items
            .iter()
            .filter_map(|(product_id, quantity)| {
                inventory
                    .get(*product_id)
                    .map(|product| product.price * f64::from(*quantity))
            })
            .sum()
    }
}
