//! `PostgreSQL` Items Store

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use crate::{
    database::Db,
    domain::items::{
        errors::ItemsServiceError,
        records::{ItemRecord, ItemRecordUpdate, ItemUuid, NewItemRecord, VariationRecord},
        repositories::{ItemsStore, PgItemsRepository, PgVariationsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgItemsStore {
    db: Db,
    items: PgItemsRepository,
    variations: PgVariationsRepository,
}

impl PgItemsStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items: PgItemsRepository::new(),
            variations: PgVariationsRepository::new(),
        }
    }
}

#[async_trait]
impl ItemsStore for PgItemsStore {
    async fn list_items(&self) -> Result<Vec<ItemRecord>, ItemsServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let mut items = self.items.list_items(&mut tx).await?;
        let variations = self.variations.list_variations(&mut tx).await?;

        tx.commit().await?;

        let mut by_item: FxHashMap<ItemUuid, Vec<VariationRecord>> = FxHashMap::default();

        for variation in variations {
            by_item
                .entry(variation.item_uuid)
                .or_default()
                .push(variation);
        }

        for item in &mut items {
            item.variations = by_item.remove(&item.uuid).unwrap_or_default();
        }

        Ok(items)
    }

    async fn get_item(&self, item: ItemUuid) -> Result<Option<ItemRecord>, ItemsServiceError> {
        let mut tx = self.db.begin_read_transaction().await?;

        let Some(mut record) = self.items.get_item(&mut tx, item).await? else {
            return Ok(None);
        };

        record.variations = self.variations.get_item_variations(&mut tx, item).await?;

        tx.commit().await?;

        Ok(Some(record))
    }

    async fn create_item(&self, item: NewItemRecord) -> Result<ItemRecord, ItemsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut created = self.items.create_item(&mut tx, &item).await?;

        created.variations = self
            .variations
            .create_variations(&mut tx, created.uuid, item.variations)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_item(
        &self,
        item: ItemUuid,
        update: ItemRecordUpdate,
    ) -> Result<Option<ItemRecord>, ItemsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let Some(mut updated) = self
            .items
            .update_item(&mut tx, item, &update.name, update.price)
            .await?
        else {
            return Ok(None);
        };

        updated.variations = self
            .variations
            .replace_item_variations(&mut tx, item, update.variations)
            .await?;

        tx.commit().await?;

        Ok(Some(updated))
    }

    async fn delete_item(&self, item: ItemUuid) -> Result<bool, ItemsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.items.delete_item(&mut tx, item).await?;

        tx.commit().await?;

        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::items::{data::NewVariation, records::NewVariationRecord},
        test::TestDb,
    };

    use super::*;

    fn new_item(reference: &str, variations: &[(&str, i32)]) -> NewItemRecord {
        NewItemRecord {
            uuid: ItemUuid::new(),
            reference: reference.to_string(),
            name: "Shoes".to_string(),
            price: Decimal::new(7000, 2),
            variations: variations
                .iter()
                .map(|(size, quantity)| {
                    NewVariationRecord::fresh(NewVariation::new(*size, *quantity))
                })
                .collect(),
        }
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn create_then_get_preserves_variation_order() -> TestResult {
        let db = TestDb::new().await;
        let store = PgItemsStore::new(Db::new(db.pool().clone()));

        let created = store
            .create_item(new_item("C789", &[("9", 7), ("10", 8), ("8", 1)]))
            .await?;

        let loaded = store
            .get_item(created.uuid)
            .await?
            .ok_or("expected the item to exist")?;

        let sizes: Vec<&str> = loaded
            .variations
            .iter()
            .map(|variation| variation.size.as_str())
            .collect();

        assert_eq!(sizes, vec!["9", "10", "8"]);
        assert_eq!(loaded.price, Decimal::from(70));
        assert_eq!(loaded.variations, created.variations);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn list_groups_variations_by_item() -> TestResult {
        let db = TestDb::new().await;
        let store = PgItemsStore::new(Db::new(db.pool().clone()));

        let first = store.create_item(new_item("A123", &[("S", 1)])).await?;
        let second = store.create_item(new_item("B456", &[])).await?;

        let items = store.list_items().await?;

        assert_eq!(items.len(), 2);

        let loaded_first = items
            .iter()
            .find(|item| item.uuid == first.uuid)
            .ok_or("first item missing")?;
        let loaded_second = items
            .iter()
            .find(|item| item.uuid == second.uuid)
            .ok_or("second item missing")?;

        assert_eq!(loaded_first.variations.len(), 1);
        assert!(loaded_second.variations.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn update_replaces_variations_atomically() -> TestResult {
        let db = TestDb::new().await;
        let store = PgItemsStore::new(Db::new(db.pool().clone()));

        let created = store
            .create_item(new_item("A123", &[("S", 1), ("M", 2), ("L", 3)]))
            .await?;

        let updated = store
            .update_item(
                created.uuid,
                ItemRecordUpdate {
                    name: "Trainers".to_string(),
                    price: Decimal::from(80),
                    variations: vec![NewVariationRecord::fresh(NewVariation::new("XL", 4))],
                },
            )
            .await?
            .ok_or("expected the item to exist")?;

        assert_eq!(updated.name, "Trainers");
        assert_eq!(updated.variations.len(), 1);
        assert!(updated.updated_at >= created.updated_at);

        let loaded = store
            .get_item(created.uuid)
            .await?
            .ok_or("expected the item to exist")?;

        assert_eq!(loaded.variations, updated.variations);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn missing_items_are_not_errors() -> TestResult {
        let db = TestDb::new().await;
        let store = PgItemsStore::new(Db::new(db.pool().clone()));
        let missing = ItemUuid::new();

        assert!(store.get_item(missing).await?.is_none());
        assert!(!store.delete_item(missing).await?);
        assert!(
            store
                .update_item(
                    missing,
                    ItemRecordUpdate {
                        name: "Ghost".to_string(),
                        price: Decimal::ONE,
                        variations: Vec::new(),
                    },
                )
                .await?
                .is_none()
        );
        assert!(store.list_items().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn delete_cascades_to_variations() -> TestResult {
        let db = TestDb::new().await;
        let store = PgItemsStore::new(Db::new(db.pool().clone()));

        let created = store.create_item(new_item("A123", &[("S", 1)])).await?;

        assert!(store.delete_item(created.uuid).await?);

        let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM variations")
            .fetch_one(db.pool())
            .await?;

        assert_eq!(remaining, 0);

        Ok(())
    }

    fn alternating_update(round: usize) -> ItemRecordUpdate {
        let (name, sizes): (&str, &[&str]) = if round % 2 == 0 {
            ("one", &["S"][..])
        } else {
            ("three", &["S", "M", "L"][..])
        };

        ItemRecordUpdate {
            name: name.to_string(),
            price: Decimal::from(10),
            variations: sizes
                .iter()
                .map(|size| NewVariationRecord::fresh(NewVariation::new(*size, 1)))
                .collect(),
        }
    }

    fn is_consistent(record: &ItemRecord) -> bool {
        match record.name.as_str() {
            "one" => record.variations.len() == 1,
            "three" => record.variations.len() == 3,
            _ => false,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    #[ignore = "requires docker"]
    async fn reads_never_mix_versions_of_an_item() -> TestResult {
        let db = TestDb::new().await;
        let store = PgItemsStore::new(Db::new(db.pool().clone()));

        let created = store.create_item(new_item("A123", &[])).await?;

        store
            .update_item(created.uuid, alternating_update(0))
            .await?
            .ok_or("expected the item to exist")?;

        let writer = {
            let store = store.clone();

            tokio::spawn(async move {
                for round in 1..=500 {
                    store
                        .update_item(created.uuid, alternating_update(round))
                        .await?;
                }

                Ok::<(), ItemsServiceError>(())
            })
        };

        let mut reads = 0_usize;

        while !writer.is_finished() {
            let loaded = store
                .get_item(created.uuid)
                .await?
                .ok_or("expected the item to exist")?;

            assert!(
                is_consistent(&loaded),
                "get_item returned {:?} with {} variations",
                loaded.name,
                loaded.variations.len()
            );

            for listed in store.list_items().await? {
                assert!(
                    is_consistent(&listed),
                    "list_items returned {:?} with {} variations",
                    listed.name,
                    listed.variations.len()
                );
            }

            reads += 1;
        }

        writer.await??;

        assert!(reads > 0, "reader never ran alongside the writer");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn read_snapshot_survives_concurrent_delete() -> TestResult {
        let db = TestDb::new().await;
        let store = PgItemsStore::new(Db::new(db.pool().clone()));

        let created = store.create_item(new_item("A123", &[("S", 1)])).await?;
        let mut tx = store.db.begin_read_transaction().await?;

        let before = store.items.get_item(&mut tx, created.uuid).await?;

        assert!(store.delete_item(created.uuid).await?);

        let variations = store
            .variations
            .get_item_variations(&mut tx, created.uuid)
            .await?;

        tx.commit().await?;

        assert!(before.is_some());
        assert_eq!(variations.len(), 1, "snapshot should still hold the variation");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn duplicate_uuid_is_already_exists() -> TestResult {
        let db = TestDb::new().await;
        let store = PgItemsStore::new(Db::new(db.pool().clone()));
        let item = new_item("A123", &[]);

        store.create_item(item.clone()).await?;
        let result = store.create_item(item).await;

        assert!(
            matches!(result, Err(ItemsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }
}
