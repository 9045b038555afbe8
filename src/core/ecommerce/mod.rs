pub mod cart;
pub mod inventory;

pub use cart::Cart;
pub use inventory::Inventory;
