//! Configuration management commands.

use std::path::PathBuf;

use anyhow::{bail, Result};
use dukaan_commerce::Money;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
        ConfigCommand::Path => show_paths(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    let config = &ctx.config;

    ctx.output.info("[storefront]");
    ctx.output
        .kv("default_language", config.storefront.default_language.code());
    ctx.output
        .kv("deal_threshold", &config.storefront.deal_threshold.to_string());

    ctx.output.info("[latency]");
    for key in ["enabled", "categories", "products", "orders", "users"] {
        ctx.output
            .kv(key, &get_config_value(config, &format!("latency.{}", key))?);
    }

    ctx.output.info("[pricing]");
    for key in ["free_shipping_threshold", "flat_shipping", "tax_percent"] {
        ctx.output
            .kv(key, &get_config_value(config, &format!("pricing.{}", key))?);
    }

    ctx.output.info("[storage]");
    ctx.output
        .kv("state_file", &config.storage.state_file.display().to_string());

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = ctx.config_path.as_deref() else {
        bail!("No config file found. Run `dukaan config init` to create one.");
    };

    let mut config = CliConfig::load(config_path)?;
    set_config_value(&mut config, key, value)?;

    let (errors, _) = config.validate();
    if let Some(error) = errors.first() {
        bail!("Refusing to save invalid config: {}", error);
    }
    config.save(config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.validate();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");
    Ok(())
}

fn show_paths(ctx: &Context) -> Result<()> {
    let config = ctx
        .config_path
        .as_ref()
        .map(|path| path.display().to_string());
    let state = ctx.state_path();

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "config": config, "state": state }));
        return Ok(());
    }

    ctx.output
        .kv("config", config.as_deref().unwrap_or("(defaults, no file)"));
    ctx.output.kv("state", &state.display().to_string());
    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    let value = match parts.as_slice() {
        ["storefront", "default_language"] => config.storefront.default_language.to_string(),
        ["storefront", "deal_threshold"] => config.storefront.deal_threshold.to_string(),
        ["latency", "enabled"] => config.latency.enabled.to_string(),
        ["latency", "categories"] => config.latency.categories.to_string(),
        ["latency", "products"] => config.latency.products.to_string(),
        ["latency", "orders"] => config.latency.orders.to_string(),
        ["latency", "users"] => config.latency.users.to_string(),
        ["pricing", "free_shipping_threshold"] => {
            config.pricing.free_shipping_threshold.rupees().to_string()
        }
        ["pricing", "flat_shipping"] => config.pricing.flat_shipping.rupees().to_string(),
        ["pricing", "tax_percent"] => config.pricing.tax_percent.to_string(),
        ["storage", "state_file"] => config.storage.state_file.display().to_string(),
        _ => bail!("Unknown config key: {}", key),
    };
    Ok(value)
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["storefront", "default_language"] => {
            config.storefront.default_language = value.parse()?
        }
        ["storefront", "deal_threshold"] => config.storefront.deal_threshold = value.parse()?,
        ["latency", "enabled"] => config.latency.enabled = value.parse()?,
        ["latency", "categories"] => config.latency.categories = value.parse()?,
        ["latency", "products"] => config.latency.products = value.parse()?,
        ["latency", "orders"] => config.latency.orders = value.parse()?,
        ["latency", "users"] => config.latency.users = value.parse()?,
        ["pricing", "free_shipping_threshold"] => {
            config.pricing.free_shipping_threshold = Money::new(value.parse()?)
        }
        ["pricing", "flat_shipping"] => config.pricing.flat_shipping = Money::new(value.parse()?),
        ["pricing", "tax_percent"] => config.pricing.tax_percent = value.parse()?,
        ["storage", "state_file"] => config.storage.state_file = PathBuf::from(value),
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}
