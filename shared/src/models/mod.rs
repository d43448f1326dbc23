//! Domain models for the Gas Cylinder Inventory service

mod cylinder;
mod inventory;
mod restock;
mod sale;
mod supplier;

pub use cylinder::*;
pub use inventory::*;
pub use restock::*;
pub use sale::*;
pub use supplier::*;
