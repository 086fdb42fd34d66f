//! Item Models
//!
//! Items as returned to callers, with price and stock status derived at the
//! moment of reading.

use jiff::{Timestamp, civil::DateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockroom::{DiscountTier, StockStatus, derive_pricing};

use crate::domain::items::records::{ItemRecord, ItemUuid, VariationRecord, VariationUuid};

/// Item Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub uuid: ItemUuid,
    pub reference: String,
    pub name: String,
    pub price: Decimal,
    pub current_price: Decimal,
    pub discount: DiscountTier,
    pub status: StockStatus,
    pub variations: Vec<Variation>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Item {
    /// Build an item from its stored record, pricing it as of `now`.
    #[must_use]
    pub fn priced(record: ItemRecord, now: DateTime) -> Self {
        let pricing = derive_pricing(record.price, record.quantities(), now);

        Self {
            uuid: record.uuid,
            reference: record.reference,
            name: record.name,
            price: record.price,
            current_price: pricing.current_price,
            discount: pricing.discount,
            status: pricing.status,
            variations: record.variations.into_iter().map(Variation::from).collect(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Variation Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    pub uuid: VariationUuid,
    pub item_uuid: ItemUuid,
    pub size: String,
    pub quantity: i32,
}

impl From<VariationRecord> for Variation {
    fn from(record: VariationRecord) -> Self {
        Self {
            uuid: record.uuid,
            item_uuid: record.item_uuid,
            size: record.size,
            quantity: record.quantity,
        }
    }
}
