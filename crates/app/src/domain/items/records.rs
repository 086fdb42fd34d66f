//! Item Records
//!
//! Rows as the aggregate store holds them. Records never carry derived pricing.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{domain::items::data::NewVariation, uuids::TypedUuid};

/// Item UUID
pub type ItemUuid = TypedUuid<ItemRecord>;

/// Variation UUID
pub type VariationUuid = TypedUuid<VariationRecord>;

/// Item Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub uuid: ItemUuid,
    pub reference: String,
    pub name: String,
    pub price: Decimal,
    pub variations: Vec<VariationRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ItemRecord {
    /// Quantities of every variation, in stored order.
    pub fn quantities(&self) -> impl Iterator<Item = i32> + '_ {
        self.variations.iter().map(|variation| variation.quantity)
    }
}

/// Variation Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationRecord {
    pub uuid: VariationUuid,
    pub item_uuid: ItemUuid,
    pub size: String,
    pub quantity: i32,
}

/// New Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct NewItemRecord {
    pub uuid: ItemUuid,
    pub reference: String,
    pub name: String,
    pub price: Decimal,
    pub variations: Vec<NewVariationRecord>,
}

/// Item Record Update
///
/// `variations` replaces the stored set wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecordUpdate {
    pub name: String,
    pub price: Decimal,
    pub variations: Vec<NewVariationRecord>,
}

/// New Variation Record
///
/// The owning item is supplied by the store, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVariationRecord {
    pub uuid: VariationUuid,
    pub size: String,
    pub quantity: i32,
}

impl NewVariationRecord {
    /// Copy caller-supplied variation data into a record with a fresh identity.
    #[must_use]
    pub fn fresh(variation: NewVariation) -> Self {
        Self {
            uuid: VariationUuid::new(),
            size: variation.size,
            quantity: variation.quantity,
        }
    }

    /// Attach this variation to its owning item.
    #[must_use]
    pub fn into_record(self, item_uuid: ItemUuid) -> VariationRecord {
        VariationRecord {
            uuid: self.uuid,
            item_uuid,
            size: self.size,
            quantity: self.quantity,
        }
    }
}
