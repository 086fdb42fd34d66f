//! Variations Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::items::records::{
    ItemUuid, NewVariationRecord, VariationRecord, VariationUuid,
};

const LIST_VARIATIONS_SQL: &str = include_str!("../sql/list_variations.sql");
const GET_ITEM_VARIATIONS_SQL: &str = include_str!("../sql/get_item_variations.sql");
const CREATE_VARIATIONS_SQL: &str = include_str!("../sql/create_variations.sql");
const DELETE_ITEM_VARIATIONS_SQL: &str = include_str!("../sql/delete_item_variations.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgVariationsRepository;

impl PgVariationsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_variations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<VariationRecord>, sqlx::Error> {
        query_as::<Postgres, VariationRecord>(LIST_VARIATIONS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_item_variations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemUuid,
    ) -> Result<Vec<VariationRecord>, sqlx::Error> {
        query_as::<Postgres, VariationRecord>(GET_ITEM_VARIATIONS_SQL)
            .bind(item.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert `variations` for `item`, keeping their order.
    pub(crate) async fn create_variations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemUuid,
        variations: Vec<NewVariationRecord>,
    ) -> Result<Vec<VariationRecord>, sqlx::Error> {
        if variations.is_empty() {
            return Ok(Vec::new());
        }

        let mut uuids: Vec<Uuid> = Vec::with_capacity(variations.len());
        let mut positions: Vec<i32> = Vec::with_capacity(variations.len());
        let mut sizes: Vec<String> = Vec::with_capacity(variations.len());
        let mut quantities: Vec<i32> = Vec::with_capacity(variations.len());

        for (index, variation) in variations.iter().enumerate() {
            let position =
                i32::try_from(index).map_err(|error| sqlx::Error::Encode(Box::new(error)))?;

            uuids.push(variation.uuid.into_uuid());
            positions.push(position);
            sizes.push(variation.size.clone());
            quantities.push(variation.quantity);
        }

        query(CREATE_VARIATIONS_SQL)
            .bind(item.into_uuid())
            .bind(uuids)
            .bind(positions)
            .bind(sizes)
            .bind(quantities)
            .execute(&mut **tx)
            .await?;

        Ok(variations
            .into_iter()
            .map(|variation| variation.into_record(item))
            .collect())
    }

    pub(crate) async fn delete_item_variations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ITEM_VARIATIONS_SQL)
            .bind(item.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Swap the whole variation set of `item` for `variations`.
    pub(crate) async fn replace_item_variations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: ItemUuid,
        variations: Vec<NewVariationRecord>,
    ) -> Result<Vec<VariationRecord>, sqlx::Error> {
        self.delete_item_variations(tx, item).await?;

        self.create_variations(tx, item, variations).await
    }
}

impl<'r> FromRow<'r, PgRow> for VariationRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: VariationUuid::from_uuid(row.try_get("uuid")?),
            item_uuid: ItemUuid::from_uuid(row.try_get("item_uuid")?),
            size: row.try_get("size")?,
            quantity: row.try_get("quantity")?,
        })
    }
}
