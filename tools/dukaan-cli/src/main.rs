//! Dukaan CLI - a bilingual storefront in the terminal.
//!
//! Commands:
//! - `dukaan home` - Featured products and categories
//! - `dukaan products` / `dukaan product` - Browse the catalog
//! - `dukaan categories` / `dukaan category` - Browse by category
//! - `dukaan search` - Search with filters
//! - `dukaan deals` - Discounted products and the deal countdown
//! - `dukaan cart` - Manage the cart
//! - `dukaan checkout` - Place an order
//! - `dukaan orders` - List, track and cancel orders
//! - `dukaan account` - Profile, addresses and preferences
//! - `dukaan lang` - Switch between English and Urdu
//! - `dukaan config` - Manage configuration
//! - `dukaan reset` - Forget the saved session

mod commands;
mod config;
mod context;
mod output;
mod state;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AccountArgs, CartArgs, CatalogArgs, CheckoutArgs, ConfigArgs, DealsArgs, LangArgs, OrdersArgs,
    ResetArgs, SearchArgs,
};

/// Dukaan - shop in English or Urdu from the terminal
#[derive(Parser)]
#[command(name = "dukaan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show featured products and categories
    Home,

    /// List products
    Products(CatalogArgs),

    /// Show one product
    Product {
        /// Product ID.
        id: u64,
    },

    /// List categories with product counts
    Categories,

    /// Show the products in one category
    Category {
        /// Category ID.
        id: u64,

        #[command(flatten)]
        filters: CatalogArgs,
    },

    /// Search products
    Search(SearchArgs),

    /// Show current deals
    Deals(DealsArgs),

    /// Manage the cart
    Cart(CartArgs),

    /// Place an order for the cart
    Checkout(CheckoutArgs),

    /// List, track and cancel orders
    Orders(OrdersArgs),

    /// Profile, addresses and preferences
    Account(AccountArgs),

    /// Show or change the display language
    Lang(LangArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Forget the saved cart, language and orders
    Reset(ResetArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Home => commands::catalog::home(&ctx).await,
        Commands::Products(args) => commands::catalog::products(args, &ctx).await,
        Commands::Product { id } => commands::catalog::product(id, &ctx).await,
        Commands::Categories => commands::catalog::categories(&ctx).await,
        Commands::Category { id, filters } => commands::catalog::category(id, filters, &ctx).await,
        Commands::Search(args) => commands::catalog::search(args, &ctx).await,
        Commands::Deals(args) => commands::catalog::deals(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
        Commands::Account(args) => commands::account::run(args, &ctx).await,
        Commands::Lang(args) => commands::lang::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
        Commands::Reset(args) => commands::reset(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
