//! QuickDash CLI - browse the mock marketplace and demo its flows.
//!
//! # Usage
//!
//! ```bash
//! # List stores, optionally filtered
//! qd-cli browse
//! qd-cli browse --category pharmacy
//! qd-cli browse --search burger
//!
//! # Show a store's products
//! qd-cli store store1
//!
//! # Show the tracking stepper for an order
//! qd-cli track order1
//!
//! # Simulate a driver delivery run end to end
//! qd-cli deliver order3
//! ```
//!
//! Log verbosity follows `RUST_LOG` via the standard env filter.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "qd-cli")]
#[command(author, version, about = "QuickDash marketplace CLI")]
struct Cli {
    /// Emit JSON instead of tables where supported
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stores, filtered by category or search term
    Browse {
        /// Category ID to filter by (default: all)
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text search; overrides the category filter
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one store with its products
    Store {
        /// Store ID, e.g. store1
        id: String,
    },
    /// Show the tracking stepper for an order
    Track {
        /// Order ID; the fixtures ship order1 (active) and order2 (delivered)
        id: String,
    },
    /// Simulate a driver run: accept an available order and step to delivery
    Deliver {
        /// Order ID from the available pool, e.g. order3
        id: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Browse { category, search } => {
            commands::browse::list_stores(category.as_deref(), search.as_deref(), cli.json)?;
        }
        Commands::Store { id } => commands::browse::show_store(&id, cli.json)?,
        Commands::Track { id } => commands::track::show(&id, cli.json)?,
        Commands::Deliver { id } => commands::deliver::simulate(&id)?,
    }
    Ok(())
}
