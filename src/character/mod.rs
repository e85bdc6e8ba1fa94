//! Hero classes, stats, progression, and persistence.

pub mod class;
pub mod input;
pub mod manager;
pub mod progression;
pub mod types;

pub use class::*;
pub use input::*;
pub use manager::*;
pub use progression::*;
pub use types::*;
