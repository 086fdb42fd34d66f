//! Stockroom
//!
//! Stockroom derives the selling price and stock status of catalog items from
//! their base price, the quantities held across their variations, and the moment
//! they are viewed.

pub mod discounts;
pub mod pricing;
pub mod stock;

pub use discounts::DiscountTier;
pub use pricing::{Pricing, derive_pricing};
pub use stock::{StockStatus, StockStatusError};
