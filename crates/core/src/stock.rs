//! Stock status

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use thiserror::Error;

const SOLD_OUT_LABEL: &str = "Sold Out";
const IN_STOCK_PREFIX: &str = "In Stock (";
const IN_STOCK_SUFFIX: &str = ")";

/// Errors raised when parsing a stock status label.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StockStatusError {
    /// The label is neither `Sold Out` nor `In Stock (N)`.
    #[error("unrecognised stock status: {0}")]
    Unrecognised(String),
}

/// Whether an item can currently be bought, and how many units are held.
///
/// Serialized as its display label, e.g. `"In Stock (15)"` or `"Sold Out"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    /// At least one unit is held across all variations.
    InStock(u64),

    /// Nothing is held. Negative totals also land here.
    SoldOut,
}

impl StockStatus {
    /// Status for the summed quantity of every variation.
    pub fn from_total(total_quantity: i64) -> Self {
        match u64::try_from(total_quantity) {
            Ok(0) | Err(_) => Self::SoldOut,
            Ok(count) => Self::InStock(count),
        }
    }

    /// Returns `true` when at least one unit is held.
    pub const fn is_in_stock(self) -> bool {
        matches!(self, Self::InStock(_))
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InStock(count) => write!(f, "{IN_STOCK_PREFIX}{count}{IN_STOCK_SUFFIX}"),
            Self::SoldOut => f.write_str(SOLD_OUT_LABEL),
        }
    }
}

impl FromStr for StockStatus {
    type Err = StockStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == SOLD_OUT_LABEL {
            return Ok(Self::SoldOut);
        }

        s.strip_prefix(IN_STOCK_PREFIX)
            .and_then(|rest| rest.strip_suffix(IN_STOCK_SUFFIX))
            .and_then(|count| count.parse::<u64>().ok())
            .filter(|count| *count > 0)
            .map(Self::InStock)
            .ok_or_else(|| StockStatusError::Unrecognised(s.to_string()))
    }
}

impl Serialize for StockStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StockStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;

        label.parse().map_err(D::Error::custom)
    }
}
