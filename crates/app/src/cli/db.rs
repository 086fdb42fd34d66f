use std::sync::Arc;

use clap::{Args, Subcommand};
use stockroom_app::{
    database::{self, Db},
    domain::items::{PgItemsStore, StoreItemsService},
    fixtures,
};

use super::StoreArgs;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations
    Migrate,

    /// Insert the starter catalog
    Seed,
}

pub(crate) async fn run(command: DbCommand, store: &StoreArgs) -> Result<(), String> {
    let pool = database::connect(store.database_url()?)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"))?;

    match command.command {
        DbSubcommand::Migrate => {
            println!("migrations applied");
        }
        DbSubcommand::Seed => {
            let clock = Arc::new(store.clock()?);
            let service = StoreItemsService::new(Arc::new(PgItemsStore::new(Db::new(pool))), clock);

            let seeded = fixtures::seed(&service)
                .await
                .map_err(|error| format!("failed to seed starter catalog: {error}"))?;

            for item in seeded {
                println!("{} {} {}", item.uuid, item.reference, item.name);
            }
        }
    }

    Ok(())
}
