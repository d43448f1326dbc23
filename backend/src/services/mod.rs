//! Business logic services for the Gas Cylinder Inventory service

pub mod cylinder;
pub mod inventory;
pub mod restock;
pub mod sale;
pub mod supplier;

pub use cylinder::CylinderTypeService;
pub use inventory::InventoryService;
pub use restock::RestockService;
pub use sale::SaleService;
pub use supplier::SupplierService;
