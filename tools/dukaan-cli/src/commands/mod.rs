//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod lang;
pub mod orders;

use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use dukaan_commerce::account::AddressType;
use dukaan_commerce::checkout::PaymentMethod;
use dukaan_commerce::search::{
    Availability, CategoryFilter, DealTier, FilterPatch, PriceRange, SortKey,
};
use dukaan_commerce::{CategoryId, Money};
use dukaan_i18n::{t, Language, TextKey};

use crate::context::Context;
use crate::state::ShopState;

/// Filters shared by the listing commands.
#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Only products in this category.
    #[arg(long)]
    pub category: Option<u64>,

    /// Sort order (featured, price_asc, price_desc, newest, rating).
    #[arg(short, long)]
    pub sort: Option<SortKey>,

    /// Minimum price in rupees.
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum price in rupees.
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Minimum average rating.
    #[arg(long)]
    pub min_rating: Option<f32>,

    /// Stock filter (all, in_stock, out_of_stock).
    #[arg(long, value_parser = parse_availability)]
    pub availability: Option<Availability>,
}

impl CatalogArgs {
    /// The filter changes these flags ask for.
    pub fn patch(&self) -> FilterPatch {
        let mut patch = FilterPatch::default();
        if let Some(id) = self.category {
            patch = patch.category(CategoryFilter::Id(CategoryId::new(id)));
        }
        if let Some(sort) = self.sort {
            patch = patch.sort(sort);
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            patch = patch.price(PriceRange::new(
                self.min_price.map(Money::new),
                self.max_price.map(Money::new),
            ));
        }
        if let Some(rating) = self.min_rating {
            patch = patch.min_rating(rating);
        }
        if let Some(availability) = self.availability {
            patch = patch.availability(availability);
        }
        patch
    }
}

fn parse_availability(s: &str) -> Result<Availability, String> {
    Availability::from_str_opt(s).ok_or_else(|| format!("unknown availability '{}'", s))
}

fn parse_tier(s: &str) -> Result<DealTier, String> {
    DealTier::from_str_opt(s).ok_or_else(|| format!("unknown deal tier '{}'", s))
}

fn parse_address_type(s: &str) -> Result<AddressType, String> {
    match s.to_lowercase().as_str() {
        "home" => Ok(AddressType::Home),
        "work" => Ok(AddressType::Work),
        "other" => Ok(AddressType::Other),
        _ => Err(format!("unknown address type '{}'", s)),
    }
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in titles, descriptions and tags.
    pub query: String,

    #[command(flatten)]
    pub filters: CatalogArgs,
}

/// Arguments for the deals command.
#[derive(Args)]
pub struct DealsArgs {
    /// Only deals in this tier (mega, flash, clearance).
    #[arg(short, long, value_parser = parse_tier)]
    pub tier: Option<DealTier>,

    /// Watch the deal countdown for this many seconds.
    #[arg(long)]
    pub countdown: Option<u64>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart.
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        product: u64,
        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Remove a product.
    Remove {
        /// Product ID.
        product: u64,
    },
    /// Set a product's quantity. Zero or less removes it.
    Update {
        /// Product ID.
        product: u64,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Move a product to the saved-for-later list.
    Save {
        /// Product ID.
        product: u64,
    },
    /// Move a saved product back into the cart.
    Restore {
        /// Product ID.
        product: u64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args, Default)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip_code: Option<String>,

    /// Payment method (cod, card, bank).
    #[arg(short, long)]
    pub payment: Option<PaymentMethod>,

    /// Fill missing details from the account profile instead of prompting.
    #[arg(long)]
    pub from_profile: bool,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: Option<OrdersCommand>,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List recent orders.
    List {
        /// Only orders with this status.
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show an order and its tracking timeline.
    Track {
        /// Order code (ORD-...).
        code: String,
    },
    /// Cancel an order that has not shipped.
    Cancel {
        /// Order ID.
        id: u64,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Move an order to its next fulfilment step.
    Advance {
        /// Order ID.
        id: u64,
    },
    /// Show the account's order history.
    History,
}

/// Arguments for the account command.
#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: Option<AccountCommand>,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Show the profile.
    Show,
    /// Update profile fields.
    Update {
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_ur: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// List saved addresses.
    Addresses,
    /// Save a new address.
    AddAddress {
        /// Address type (home, work, other).
        #[arg(long, default_value = "home", value_parser = parse_address_type)]
        kind: AddressType,
        /// Label, e.g. "Office".
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long, default_value = "Pakistan")]
        country: String,
        #[arg(long)]
        postal_code: String,
        /// Make this the default address.
        #[arg(long)]
        default: bool,
    },
    /// Make an address the default.
    DefaultAddress {
        /// Address ID.
        id: u64,
    },
    /// Delete an address.
    RemoveAddress {
        /// Address ID.
        id: u64,
    },
    /// Change notification and newsletter preferences.
    Preferences {
        #[arg(long)]
        language: Option<Language>,
        #[arg(long)]
        email: Option<bool>,
        #[arg(long)]
        sms: Option<bool>,
        #[arg(long)]
        push: Option<bool>,
        #[arg(long)]
        newsletter: Option<bool>,
    },
    /// Change the account password.
    Password,
    /// Request a password reset link.
    ResetPassword {
        /// Account email.
        email: String,
    },
    /// Delete the account.
    Delete {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the lang command.
#[derive(Args)]
pub struct LangArgs {
    #[command(subcommand)]
    pub command: Option<LangCommand>,
}

#[derive(Subcommand)]
pub enum LangCommand {
    /// Show the current language.
    Show,
    /// Switch to a language (en, ur).
    Set {
        language: Language,
    },
    /// Switch to the other language.
    Toggle,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
    /// Print the config and state file locations.
    Path,
}

/// Arguments for the reset command.
#[derive(Args)]
pub struct ResetArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Run the reset command.
pub fn reset(args: ResetArgs, ctx: &Context) -> Result<()> {
    if !args.yes && !confirm("Forget the saved cart, language and orders?")? {
        ctx.output.warn("Reset cancelled");
        return Ok(());
    }
    ShopState::reset(ctx)?;
    ctx.output.success("Session reset");
    Ok(())
}

/// Await `work` behind a spinner labelled in the shopper's language.
pub async fn with_spinner<T>(
    ctx: &Context,
    language: Language,
    work: impl std::future::Future<Output = T>,
) -> T {
    let spinner = ctx.output.spinner(t(TextKey::Loading, language));
    let result = work.await;
    spinner.finish_and_clear();
    result
}

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dukaan_commerce::search::FilterCriteria;

    #[test]
    fn test_catalog_args_patch() {
        let args = CatalogArgs {
            category: Some(2),
            max_price: Some(3000),
            availability: Some(Availability::InStock),
            ..Default::default()
        };
        let criteria = FilterCriteria::default().with(args.patch());
        assert_eq!(criteria.category, CategoryFilter::Id(CategoryId::new(2)));
        assert_eq!(criteria.price, PriceRange::up_to(Money::new(3000)));
        assert_eq!(criteria.availability, Availability::InStock);
        assert_eq!(criteria.sort, SortKey::Featured);
    }

    #[test]
    fn test_empty_args_change_nothing() {
        assert!(CatalogArgs::default().patch().is_empty());
    }

    #[test]
    fn test_parsers() {
        assert_eq!(parse_address_type("Work"), Ok(AddressType::Work));
        assert!(parse_tier("mega").is_ok());
        assert!(parse_availability("sometimes").is_err());
    }
}
