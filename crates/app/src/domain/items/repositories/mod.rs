//! Item Repositories
//!
//! [`ItemsStore`] is the aggregate store: it persists an item together with its
//! variations and applies every write to the whole aggregate atomically.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::items::{
    errors::ItemsServiceError,
    records::{ItemRecord, ItemRecordUpdate, ItemUuid, NewItemRecord},
};

mod items;
mod memory;
mod postgres;
mod variations;

pub use memory::InMemoryItemsStore;
pub use postgres::PgItemsStore;

pub(crate) use items::PgItemsRepository;
pub(crate) use variations::PgVariationsRepository;

#[automock]
#[async_trait]
pub trait ItemsStore: Send + Sync {
    /// Load every item with its variations.
    async fn list_items(&self) -> Result<Vec<ItemRecord>, ItemsServiceError>;

    /// Load one item with its variations, or `None` when it does not exist.
    async fn get_item(&self, item: ItemUuid) -> Result<Option<ItemRecord>, ItemsServiceError>;

    /// Insert an item and its variations.
    async fn create_item(&self, item: NewItemRecord) -> Result<ItemRecord, ItemsServiceError>;

    /// Overwrite an item's name and price and replace its variations.
    ///
    /// Returns `None` when the item does not exist.
    async fn update_item(
        &self,
        item: ItemUuid,
        update: ItemRecordUpdate,
    ) -> Result<Option<ItemRecord>, ItemsServiceError>;

    /// Remove an item and its variations, reporting whether it existed.
    async fn delete_item(&self, item: ItemUuid) -> Result<bool, ItemsServiceError>;
}
