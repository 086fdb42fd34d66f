//! In-memory Items Store
//!
//! Keeps aggregates in insertion order behind a single lock, so every write
//! replaces an aggregate in one step and readers never observe a partial update.

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::sync::RwLock;

use crate::domain::items::{
    errors::ItemsServiceError,
    records::{
        ItemRecord, ItemRecordUpdate, ItemUuid, NewItemRecord, NewVariationRecord, VariationRecord,
    },
    repositories::ItemsStore,
};

#[derive(Debug, Default)]
pub struct InMemoryItemsStore {
    items: RwLock<Vec<ItemRecord>>,
}

impl InMemoryItemsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Returns `true` when no items are stored.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

fn owned_variations(
    item: ItemUuid,
    variations: Vec<NewVariationRecord>,
) -> Vec<VariationRecord> {
    variations
        .into_iter()
        .map(|variation| variation.into_record(item))
        .collect()
}

#[async_trait]
impl ItemsStore for InMemoryItemsStore {
    async fn list_items(&self) -> Result<Vec<ItemRecord>, ItemsServiceError> {
        Ok(self.items.read().await.clone())
    }

    async fn get_item(&self, item: ItemUuid) -> Result<Option<ItemRecord>, ItemsServiceError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|record| record.uuid == item)
            .cloned())
    }

    async fn create_item(&self, item: NewItemRecord) -> Result<ItemRecord, ItemsServiceError> {
        let mut items = self.items.write().await;

        if items.iter().any(|record| record.uuid == item.uuid) {
            return Err(ItemsServiceError::AlreadyExists);
        }

        let now = Timestamp::now();

        let record = ItemRecord {
            uuid: item.uuid,
            reference: item.reference,
            name: item.name,
            price: item.price,
            variations: owned_variations(item.uuid, item.variations),
            created_at: now,
            updated_at: now,
        };

        items.push(record.clone());

        Ok(record)
    }

    async fn update_item(
        &self,
        item: ItemUuid,
        update: ItemRecordUpdate,
    ) -> Result<Option<ItemRecord>, ItemsServiceError> {
        let mut items = self.items.write().await;

        let Some(record) = items.iter_mut().find(|record| record.uuid == item) else {
            return Ok(None);
        };

        record.name = update.name;
        record.price = update.price;
        record.variations = owned_variations(item, update.variations);
        record.updated_at = Timestamp::now();

        Ok(Some(record.clone()))
    }

    async fn delete_item(&self, item: ItemUuid) -> Result<bool, ItemsServiceError> {
        let mut items = self.items.write().await;
        let before = items.len();

        items.retain(|record| record.uuid != item);

        Ok(items.len() < before)
    }
}
