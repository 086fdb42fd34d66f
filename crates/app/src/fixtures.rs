//! Catalog Fixtures
//!
//! The starter catalog loaded into an empty store.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::items::{
    ItemsService, ItemsServiceError,
    data::{NewItem, NewVariation},
    models::Item,
};

const CATALOG_YAML: &str = include_str!("../fixtures/catalog.yml");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to parse fixture YAML")]
    Parse(#[from] serde_norway::Error),

    #[error("invalid price: {0}")]
    InvalidPrice(String),

    #[error("failed to store fixture item")]
    Store(#[from] ItemsServiceError),
}

/// Wrapper for items in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    pub items: Vec<ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    pub reference: String,
    pub name: String,

    /// Base price as a decimal string (e.g., "35.00")
    pub price: String,

    #[serde(default)]
    pub variations: Vec<VariationFixture>,
}

/// Variation Fixture
#[derive(Debug, Deserialize)]
pub struct VariationFixture {
    pub size: String,
    pub quantity: i32,
}

impl TryFrom<ItemFixture> for NewItem {
    type Error = FixtureError;

    fn try_from(fixture: ItemFixture) -> Result<Self, Self::Error> {
        let price = fixture
            .price
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPrice(fixture.price.clone()))?;

        Ok(NewItem {
            reference: fixture.reference,
            name: fixture.name,
            price,
            status: None,
            current_price: None,
            variations: fixture
                .variations
                .into_iter()
                .map(|variation| NewVariation::new(variation.size, variation.quantity))
                .collect(),
        })
    }
}

/// Parse a catalog fixture from YAML.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a price cannot be parsed.
pub fn parse_catalog(yaml: &str) -> Result<Vec<NewItem>, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    fixture.items.into_iter().map(NewItem::try_from).collect()
}

/// The bundled starter catalog.
///
/// # Errors
///
/// Returns an error if the bundled fixture is invalid.
pub fn starter_catalog() -> Result<Vec<NewItem>, FixtureError> {
    parse_catalog(CATALOG_YAML)
}

/// Create every item of the starter catalog through `items`.
///
/// # Errors
///
/// Returns an error if the fixture is invalid or an item cannot be stored.
pub async fn seed(items: &dyn ItemsService) -> Result<Vec<Item>, FixtureError> {
    let mut seeded = Vec::new();

    for item in starter_catalog()? {
        seeded.push(items.create_item(item).await?);
    }

    let in_stock = seeded.iter().filter(|item| item.status.is_in_stock()).count();

    info!(count = seeded.len(), in_stock, "seeded starter catalog");

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use stockroom::StockStatus;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[test]
    fn starter_catalog_parses() -> TestResult {
        let items = starter_catalog()?;

        let references: Vec<&str> = items.iter().map(|item| item.reference.as_str()).collect();

        assert_eq!(references, vec!["A123", "B456", "C789"]);
        assert_eq!(items.first().map(|item| item.variations.len()), Some(3));

        Ok(())
    }

    #[test]
    fn invalid_price_is_rejected() {
        let yaml = "items:\n  - reference: X1\n    name: Broken\n    price: \"ten\"\n";

        let result = parse_catalog(yaml);

        assert!(matches!(result, Err(FixtureError::InvalidPrice(price)) if price == "ten"));
    }

    #[tokio::test]
    async fn seeding_prices_the_starter_catalog() -> TestResult {
        let ctx = TestContext::tuesday_morning()?;

        let seeded = seed(&ctx.items).await?;
        let summary: Vec<(&str, Decimal, StockStatus)> = seeded
            .iter()
            .map(|item| (item.name.as_str(), item.current_price, item.status))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Shorts", Decimal::new(315, 1), StockStatus::InStock(10)),
                ("Tie", Decimal::from(15), StockStatus::SoldOut),
                ("Shoes", Decimal::from(56), StockStatus::InStock(15)),
            ]
        );
        assert_eq!(
            seeded.iter().filter(|item| item.status.is_in_stock()).count(),
            2
        );
        assert_eq!(ctx.store.len().await, 3);

        Ok(())
    }
}
