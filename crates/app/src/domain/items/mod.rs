//! Items

pub mod data;
pub mod errors;
pub mod models;
pub mod records;
pub mod repositories;
pub mod service;

pub use errors::ItemsServiceError;
pub use repositories::{InMemoryItemsStore, ItemsStore, PgItemsStore};
pub use service::*;
