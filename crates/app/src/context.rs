//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    clock::Clock,
    database::{self, Db},
    domain::items::{InMemoryItemsStore, ItemsService, PgItemsStore, StoreItemsService},
    fixtures::{self, FixtureError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),

    #[error("failed to seed starter catalog")]
    Seed(#[source] FixtureError),
}

#[derive(Clone)]
pub struct AppContext {
    pub items: Arc<dyn ItemsService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to or migrating the database fails.
    pub async fn from_database_url(
        url: &str,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        let store = PgItemsStore::new(Db::new(pool));

        Ok(Self {
            items: Arc::new(StoreItemsService::new(Arc::new(store), clock)),
        })
    }

    /// Build application context over a process-local store holding the starter catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the starter catalog cannot be seeded.
    pub async fn in_memory(clock: Arc<dyn Clock>) -> Result<Self, AppInitError> {
        let service = StoreItemsService::new(Arc::new(InMemoryItemsStore::new()), clock);

        fixtures::seed(&service)
            .await
            .map_err(AppInitError::Seed)?;

        Ok(Self {
            items: Arc::new(service),
        })
    }
}
