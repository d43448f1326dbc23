//! HTTP handlers for the Gas Cylinder Inventory service

mod cylinder;
mod health;
mod inventory;
mod restock;
mod sale;
mod supplier;

pub use cylinder::*;
pub use health::*;
pub use inventory::*;
pub use restock::*;
pub use sale::*;
pub use supplier::*;
