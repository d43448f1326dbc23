//! Shared types and models for the Gas Cylinder Inventory service
//!
//! This crate holds the storage-free part of the domain: stock arithmetic for
//! ledger rows, request inputs and their validation rules.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
