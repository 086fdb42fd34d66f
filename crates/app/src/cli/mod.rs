use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use stockroom_app::{clock::SystemClock, context::AppContext};

use crate::logging::LoggingArgs;

mod db;
mod items;

#[derive(Debug, Parser)]
#[command(name = "stockroom", about = "Stockroom item catalog CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,

    #[command(flatten)]
    store: StoreArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Items(items::ItemsCommand),
    Db(db::DbCommand),
}

/// Where items are kept and which wall clock prices them.
#[derive(Debug, Args)]
pub(crate) struct StoreArgs {
    /// PostgreSQL connection string; a seeded in-memory catalog is used when omitted
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// IANA time zone used for time-based discounts
    #[arg(long, global = true, env = "STOCKROOM_TIME_ZONE", default_value = "UTC")]
    time_zone: String,
}

impl StoreArgs {
    pub(crate) fn clock(&self) -> Result<SystemClock, String> {
        SystemClock::for_time_zone(&self.time_zone)
            .map_err(|error| format!("unknown time zone '{}': {error}", self.time_zone))
    }

    pub(crate) fn database_url(&self) -> Result<&str, String> {
        self.database_url
            .as_deref()
            .ok_or_else(|| "--database-url or DATABASE_URL is required".to_string())
    }

    pub(crate) async fn context(&self) -> Result<AppContext, String> {
        let clock = Arc::new(self.clock()?);

        let context = match &self.database_url {
            Some(url) => AppContext::from_database_url(url, clock).await,
            None => AppContext::in_memory(clock).await,
        };

        context.map_err(|error| format!("failed to initialise: {error}"))
    }
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Items(command) => items::run(command, &self.store).await,
            Commands::Db(command) => db::run(command, &self.store).await,
        }
    }
}
