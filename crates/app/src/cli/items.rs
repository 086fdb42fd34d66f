use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use stockroom_app::domain::items::{
    ItemsService,
    data::{ItemUpdate, NewItem, NewVariation},
    records::ItemUuid,
};

use super::StoreArgs;

#[derive(Debug, Args)]
pub(crate) struct ItemsCommand {
    #[command(subcommand)]
    command: ItemsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ItemsSubcommand {
    /// List every item with its current price and stock status
    List,

    /// Show a single item
    Show(ShowArgs),

    /// Create an item
    Create(CreateArgs),

    /// Overwrite an item's name and price and replace its variations
    Update(UpdateArgs),

    /// Delete an item and its variations
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Item UUID
    uuid: ItemUuid,
}

#[derive(Debug, Args)]
struct CreateArgs {
    /// Item reference code
    #[arg(long)]
    reference: String,

    /// Item display name
    #[arg(long)]
    name: String,

    /// Base price
    #[arg(long)]
    price: Decimal,

    /// Variation as SIZE=QUANTITY; repeat for each variation
    #[arg(long = "variation", value_parser = parse_variation)]
    variations: Vec<NewVariation>,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Item UUID
    uuid: ItemUuid,

    /// New display name
    #[arg(long)]
    name: String,

    /// New base price
    #[arg(long)]
    price: Decimal,

    /// Replacement variation as SIZE=QUANTITY; omit to clear all variations
    #[arg(long = "variation", value_parser = parse_variation)]
    variations: Vec<NewVariation>,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// Item UUID
    uuid: ItemUuid,
}

pub(crate) async fn run(command: ItemsCommand, store: &StoreArgs) -> Result<(), String> {
    let context = store.context().await?;
    let items = context.items.as_ref();

    match command.command {
        ItemsSubcommand::List => list(items).await,
        ItemsSubcommand::Show(args) => show(items, args).await,
        ItemsSubcommand::Create(args) => create(items, args).await,
        ItemsSubcommand::Update(args) => update(items, args).await,
        ItemsSubcommand::Delete(args) => delete(items, args).await,
    }
}

async fn list(items: &dyn ItemsService) -> Result<(), String> {
    let listed = items
        .list_items()
        .await
        .map_err(|error| format!("failed to list items: {error}"))?;

    print_json(&listed)
}

async fn show(items: &dyn ItemsService, args: ShowArgs) -> Result<(), String> {
    let item = items
        .get_item(args.uuid)
        .await
        .map_err(|error| format!("failed to load item: {error}"))?
        .ok_or_else(|| format!("item {} not found", args.uuid))?;

    print_json(&item)
}

async fn create(items: &dyn ItemsService, args: CreateArgs) -> Result<(), String> {
    let created = items
        .create_item(NewItem {
            reference: args.reference,
            name: args.name,
            price: args.price,
            status: None,
            current_price: None,
            variations: args.variations,
        })
        .await
        .map_err(|error| format!("failed to create item: {error}"))?;

    print_json(&created)
}

async fn update(items: &dyn ItemsService, args: UpdateArgs) -> Result<(), String> {
    let updated = items
        .update_item(
            args.uuid,
            ItemUpdate {
                name: args.name,
                price: args.price,
                status: None,
                current_price: None,
                variations: args.variations,
            },
        )
        .await
        .map_err(|error| format!("failed to update item: {error}"))?
        .ok_or_else(|| format!("item {} not found", args.uuid))?;

    print_json(&updated)
}

async fn delete(items: &dyn ItemsService, args: DeleteArgs) -> Result<(), String> {
    let deleted = items
        .delete_item(args.uuid)
        .await
        .map_err(|error| format!("failed to delete item: {error}"))?;

    if !deleted {
        return Err(format!("item {} not found", args.uuid));
    }

    println!("deleted {}", args.uuid);

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|error| format!("failed to encode output: {error}"))?;

    println!("{json}");

    Ok(())
}

/// Parse `SIZE=QUANTITY`. The last `=` separates the quantity so sizes may contain one.
fn parse_variation(value: &str) -> Result<NewVariation, String> {
    let (size, quantity) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected SIZE=QUANTITY, got '{value}'"))?;

    if size.trim().is_empty() {
        return Err(format!("variation size cannot be empty in '{value}'"));
    }

    let quantity = quantity
        .trim()
        .parse::<i32>()
        .map_err(|error| format!("invalid quantity in '{value}': {error}"))?;

    Ok(NewVariation::new(size.trim(), quantity))
}
