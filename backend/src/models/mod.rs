//! Domain models for the Gas Cylinder Inventory service
//!
//! Re-exports models from the shared crate; database records live next to the
//! services that read and write them.

pub use shared::models::*;
