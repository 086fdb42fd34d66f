//! Items Data
//!
//! Caller-supplied input. `status` and `current_price` are accepted so that a
//! previously returned [`Item`](crate::domain::items::models::Item) can be sent
//! straight back, but they are always recomputed and never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// New Item Data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub reference: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub variations: Vec<NewVariation>,
}

/// Item Update Data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub variations: Vec<NewVariation>,
}

/// New Variation Data
///
/// Any identity or parent link present in the incoming data is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVariation {
    pub size: String,
    pub quantity: i32,
}

impl NewVariation {
    pub fn new(size: impl Into<String>, quantity: i32) -> Self {
        Self {
            size: size.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn round_tripped_item_drops_variation_identity() -> TestResult {
        let json = r#"{
            "reference": "A123",
            "name": "Shorts",
            "price": "35",
            "status": "In Stock (7)",
            "current_price": "31.5",
            "variations": [
                {
                    "uuid": "0196a0b8-3f55-7c61-9d2f-3a8f0c9e6b12",
                    "item_uuid": "0196a0b8-3f55-7c61-9d2f-3a8f0c9e6b13",
                    "size": "Small",
                    "quantity": 7
                }
            ]
        }"#;

        let item: NewItem = serde_json::from_str(json)?;

        assert_eq!(item.price, Decimal::from(35));
        assert_eq!(item.variations, vec![NewVariation::new("Small", 7)]);

        Ok(())
    }

    #[test]
    fn optional_fields_default_when_missing() -> TestResult {
        let update: ItemUpdate = serde_json::from_str(r#"{"name": "Tie", "price": "15"}"#)?;

        assert!(update.status.is_none());
        assert!(update.current_price.is_none());
        assert!(update.variations.is_empty());

        Ok(())
    }
}
