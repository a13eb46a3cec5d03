use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockpile", version)]
#[command(about = "Keep track of what is in stock and what it is worth", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this inventory file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item, or restock it if the name already exists
    #[command(alias = "a")]
    Add {
        /// Item name
        name: String,

        /// Units to add (whole number)
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Unit price
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },

    /// Set the quantity and/or unit price of an item
    #[command(alias = "u")]
    Update {
        /// Item id or name
        item: String,

        /// New total quantity
        #[arg(short, long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        /// New unit price
        #[arg(short, long, allow_negative_numbers = true)]
        price: Option<f64>,
    },

    /// Record units taken out of stock
    Spend {
        /// Item id or name
        item: String,

        /// Units spent
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },

    /// Delete an item
    #[command(alias = "rm")]
    Delete {
        /// Item id or name
        item: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show one item's stock and value
    #[command(alias = "s")]
    Show {
        /// Item name
        name: String,
    },

    /// List all items
    #[command(alias = "ls")]
    List,

    /// List item names starting with a prefix
    Suggest {
        /// Name prefix (case-insensitive)
        #[arg(default_value = "")]
        prefix: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
