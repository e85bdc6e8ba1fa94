//! Item system: types, equipment, inventory, loot and shop.

pub mod drops;
pub mod equipment;
pub mod inventory;
pub mod shop;
pub mod types;

pub use drops::*;
pub use equipment::*;
pub use inventory::*;
pub use shop::*;
pub use types::*;
