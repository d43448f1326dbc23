//! Ledger models: empty/full cylinder counts per (supplier, cylinder type)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// One half of a ledger row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Empty,
    Full,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Empty => "empty",
            Bucket::Full => "full",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Bucket::Empty),
            "full" => Ok(Bucket::Full),
            _ => Err(StockError::UnknownBucket(s.to_string())),
        }
    }
}

/// Rejections raised by ledger arithmetic before anything is written
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("Not enough {bucket} cylinders (available: {available}, requested: {requested})")]
    Insufficient {
        bucket: Bucket,
        available: i32,
        requested: i32,
    },

    #[error("Cannot transfer to the same status")]
    SameBucket,

    #[error("Status must be 'empty' or 'full', got '{0}'")]
    UnknownBucket(String),

    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(i32),

    #[error("Cylinder count exceeds the supported maximum")]
    Overflow,
}

/// Empty and full counts held by a single ledger row.
///
/// Every constructor path goes through [`StockLevel::apply_delta`], so a value
/// produced by this type never carries a negative count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StockLevel {
    pub empty_count: i32,
    pub full_count: i32,
}

impl StockLevel {
    pub fn new(empty_count: i32, full_count: i32) -> Self {
        Self {
            empty_count,
            full_count,
        }
    }

    pub fn count(&self, bucket: Bucket) -> i32 {
        match bucket {
            Bucket::Empty => self.empty_count,
            Bucket::Full => self.full_count,
        }
    }

    /// Physical stock on hand
    pub fn total(&self) -> i64 {
        i64::from(self.empty_count) + i64::from(self.full_count)
    }

    /// Add both deltas at once, failing if either count would go negative.
    /// Insufficient stock is reported in preference to overflow.
    pub fn apply_delta(self, delta_empty: i32, delta_full: i32) -> Result<Self, StockError> {
        let empty = shift(self.empty_count, delta_empty, Bucket::Empty);
        let full = shift(self.full_count, delta_full, Bucket::Full);

        match (empty, full) {
            (Err(e @ StockError::Insufficient { .. }), _)
            | (_, Err(e @ StockError::Insufficient { .. })) => Err(e),
            (empty, full) => Ok(Self {
                empty_count: empty?,
                full_count: full?,
            }),
        }
    }

    /// Receive `quantity` full cylinders from a supplier
    pub fn restock(self, quantity: i32) -> Result<Self, StockError> {
        ensure_positive(quantity)?;
        self.apply_delta(0, quantity)
    }

    /// Hand out `quantity` full cylinders; the customer's empties come back
    pub fn sell(self, quantity: i32) -> Result<Self, StockError> {
        ensure_positive(quantity)?;
        self.apply_delta(quantity, -quantity)
    }

    /// Reclassify `quantity` cylinders from one bucket to the other
    pub fn transfer(self, from: Bucket, to: Bucket, quantity: i32) -> Result<Self, StockError> {
        if from == to {
            return Err(StockError::SameBucket);
        }
        ensure_positive(quantity)?;

        match from {
            Bucket::Empty => self.apply_delta(-quantity, quantity),
            Bucket::Full => self.apply_delta(quantity, -quantity),
        }
    }
}

fn shift(current: i32, delta: i32, bucket: Bucket) -> Result<i32, StockError> {
    let next = current.checked_add(delta).ok_or(StockError::Overflow)?;
    if next < 0 {
        return Err(StockError::Insufficient {
            bucket,
            available: current,
            requested: delta.saturating_neg(),
        });
    }
    Ok(next)
}

fn ensure_positive(quantity: i32) -> Result<(), StockError> {
    if quantity <= 0 {
        return Err(StockError::NonPositiveQuantity(quantity));
    }
    Ok(())
}

/// Price of a restock or sale line: quantity × unit price
pub fn line_total(quantity: i32, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity) * unit_price
}
