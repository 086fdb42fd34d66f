//! Items Service

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    clock::Clock,
    domain::items::{
        ItemsServiceError,
        data::{ItemUpdate, NewItem},
        models::Item,
        records::{ItemRecordUpdate, ItemUuid, NewItemRecord, NewVariationRecord},
        repositories::ItemsStore,
    },
};

/// Items service backed by an aggregate store.
///
/// Pricing is derived from the clock on every read, once per operation, so all
/// items returned by a single call share the same instant.
#[derive(Clone)]
pub struct StoreItemsService {
    store: Arc<dyn ItemsStore>,
    clock: Arc<dyn Clock>,
}

impl StoreItemsService {
    #[must_use]
    pub fn new(store: Arc<dyn ItemsStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl ItemsService for StoreItemsService {
    #[tracing::instrument(
        name = "items.service.list_items",
        skip(self),
        fields(item_count = tracing::field::Empty),
        err
    )]
    async fn list_items(&self) -> Result<Vec<Item>, ItemsServiceError> {
        let records = self.store.list_items().await?;
        let now = self.clock.now().datetime();

        Span::current().record("item_count", records.len());

        Ok(records
            .into_iter()
            .map(|record| Item::priced(record, now))
            .collect())
    }

    #[tracing::instrument(
        name = "items.service.get_item",
        skip(self, item),
        fields(item_uuid = %item),
        err
    )]
    async fn get_item(&self, item: ItemUuid) -> Result<Option<Item>, ItemsServiceError> {
        let record = self.store.get_item(item).await?;
        let now = self.clock.now().datetime();

        Ok(record.map(|record| Item::priced(record, now)))
    }

    #[tracing::instrument(
        name = "items.service.create_item",
        skip(self, item),
        fields(
            reference = %item.reference,
            item_uuid = tracing::field::Empty,
            variation_count = item.variations.len()
        ),
        err
    )]
    async fn create_item(&self, item: NewItem) -> Result<Item, ItemsServiceError> {
        let uuid = ItemUuid::new();

        Span::current().record("item_uuid", tracing::field::display(uuid));

        let record = self
            .store
            .create_item(NewItemRecord {
                uuid,
                reference: item.reference,
                name: item.name,
                price: item.price,
                variations: item
                    .variations
                    .into_iter()
                    .map(NewVariationRecord::fresh)
                    .collect(),
            })
            .await?;

        let created = Item::priced(record, self.clock.now().datetime());

        info!(
            item_uuid = %created.uuid,
            status = %created.status,
            "created item"
        );

        Ok(created)
    }

    #[tracing::instrument(
        name = "items.service.update_item",
        skip(self, item, update),
        fields(item_uuid = %item, variation_count = update.variations.len()),
        err
    )]
    async fn update_item(
        &self,
        item: ItemUuid,
        update: ItemUpdate,
    ) -> Result<Option<Item>, ItemsServiceError> {
        let record = self
            .store
            .update_item(
                item,
                ItemRecordUpdate {
                    name: update.name,
                    price: update.price,
                    variations: update
                        .variations
                        .into_iter()
                        .map(NewVariationRecord::fresh)
                        .collect(),
                },
            )
            .await?;

        let Some(record) = record else {
            info!("item to update not found");

            return Ok(None);
        };

        let updated = Item::priced(record, self.clock.now().datetime());

        info!(status = %updated.status, "updated item");

        Ok(Some(updated))
    }

    #[tracing::instrument(
        name = "items.service.delete_item",
        skip(self, item),
        fields(item_uuid = %item),
        err
    )]
    async fn delete_item(&self, item: ItemUuid) -> Result<bool, ItemsServiceError> {
        let deleted = self.store.delete_item(item).await?;

        info!(deleted, "deleted item");

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// Retrieves all items, priced as of now.
    async fn list_items(&self) -> Result<Vec<Item>, ItemsServiceError>;

    /// Retrieve a single item, or `None` when it does not exist.
    async fn get_item(&self, item: ItemUuid) -> Result<Option<Item>, ItemsServiceError>;

    /// Creates an item with a fresh identity.
    ///
    /// Any supplied status or current price is ignored and recomputed.
    async fn create_item(&self, item: NewItem) -> Result<Item, ItemsServiceError>;

    /// Overwrites an item's name and price and replaces all of its variations.
    ///
    /// Returns `None` when the item does not exist; nothing is created.
    async fn update_item(
        &self,
        item: ItemUuid,
        update: ItemUpdate,
    ) -> Result<Option<Item>, ItemsServiceError>;

    /// Deletes an item and its variations, reporting whether it existed.
    async fn delete_item(&self, item: ItemUuid) -> Result<bool, ItemsServiceError>;
}
