use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use stockpile::api::{ConfigAction, StockpileApi, StockpilePaths};
use stockpile::config::StockpileConfig;
use stockpile::error::{Result, StockpileError};
use stockpile::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;

mod args;
mod logging;
mod render;

use args::{Cli, Commands};
use render::{print_item_detail, print_items, print_messages};

const HOME_ENV: &str = "STOCKPILE_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StockpileApi<FileStore>,
    currency: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    if let Some(warning) = ctx.api.load_warning() {
        eprintln!("{}", warning.to_string().yellow());
    }

    match cli.command {
        Some(Commands::Add {
            name,
            quantity,
            price,
        }) => handle_add(&mut ctx, &name, quantity, price),
        Some(Commands::Update {
            item,
            quantity,
            price,
        }) => handle_update(&mut ctx, &item, quantity, price),
        Some(Commands::Spend { item, amount }) => handle_spend(&mut ctx, &item, amount),
        Some(Commands::Delete { item, yes }) => handle_delete(&mut ctx, &item, yes),
        Some(Commands::Show { name }) => handle_show(&ctx, &name),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Suggest { prefix }) => handle_suggest(&ctx, &prefix),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "stockpile", "stockpile")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            StockpileError::Api(format!(
                "Could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = StockpileConfig::load(&config_dir).unwrap_or_default();

    let data_file = match &cli.data {
        Some(path) => path.clone(),
        None => config.data_path(&config_dir),
    };

    let store = FileStore::new(data_file);
    let paths = StockpilePaths { config_dir };
    let api = StockpileApi::new(store, paths);

    Ok(AppContext {
        api,
        currency: config.currency,
    })
}

fn handle_add(ctx: &mut AppContext, name: &str, quantity: i64, price: f64) -> Result<()> {
    let result = ctx.api.add_item(name, quantity, price)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    item: &str,
    quantity: Option<i64>,
    price: Option<f64>,
) -> Result<()> {
    let id = ctx.api.resolve(item)?;
    let result = ctx.api.update_item(&id, quantity, price)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_spend(ctx: &mut AppContext, item: &str, amount: i64) -> Result<()> {
    let id = ctx.api.resolve(item)?;
    let result = ctx.api.record_spend(&id, amount)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, item: &str, skip_confirm: bool) -> Result<()> {
    let id = ctx.api.resolve(item)?;

    if !skip_confirm {
        let name = ctx
            .api
            .store()
            .get(&id)
            .map(|i| i.name().to_string())
            .unwrap_or_default();
        println!("This will permanently remove '{}' ({}).", name, id);
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(StockpileError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(StockpileError::Io)?;

        if input.trim() != "Y" {
            println!("{}", "Operation cancelled.".dimmed());
            return Ok(());
        }
    }

    let result = ctx.api.delete_item(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.get_item(name)?;
    for record in &result.listed_items {
        print_item_detail(record, &ctx.currency);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_items()?;
    print_items(&result.listed_items, result.summary.as_ref(), &ctx.currency);
    Ok(())
}

fn handle_suggest(ctx: &AppContext, prefix: &str) -> Result<()> {
    let result = ctx.api.suggest_names(prefix)?;
    for name in &result.names {
        println!("{}", name);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            for key in StockpileConfig::keys() {
                if let Some(val) = config.get(key) {
                    println!("{} = {}", key, val);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
