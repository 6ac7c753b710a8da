//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dukaan_commerce::cart::PricingPolicy;
use dukaan_commerce::search::DEFAULT_DEAL_THRESHOLD;
use dukaan_data::LatencyConfig;
use dukaan_i18n::Language;
use dukaan_store::StorefrontSettings;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["dukaan.toml", ".dukaan.toml", "dukaan.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront behaviour.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Simulated service latency.
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Checkout shipping and tax rules.
    #[serde(default)]
    pub pricing: PricingPolicy,

    /// Where session state is kept.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Settings handed to the storefront.
    pub fn settings(&self) -> StorefrontSettings {
        StorefrontSettings {
            default_language: self.storefront.default_language,
            deal_threshold: self.storefront.deal_threshold,
            pricing: self.pricing,
        }
    }

    /// Problems that make the config unusable, and ones worth a warning.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.storefront.deal_threshold >= 100 {
            errors.push("storefront.deal_threshold must be below 100".to_string());
        }
        if self.pricing.tax_percent > 100 {
            errors.push("pricing.tax_percent must be 0-100".to_string());
        }
        if self.pricing.flat_shipping.rupees() < 0 {
            errors.push("pricing.flat_shipping must not be negative".to_string());
        }
        if self.storage.state_file.as_os_str().is_empty() {
            errors.push("storage.state_file is required".to_string());
        }
        if self.latency.enabled
            && [
                self.latency.categories,
                self.latency.products,
                self.latency.orders,
                self.latency.users,
            ]
            .iter()
            .any(|ms| *ms > 10_000)
        {
            warnings.push("latency above 10s will make every command slow".to_string());
        }

        (errors, warnings)
    }
}

/// Storefront section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Language used until one is chosen with `dukaan lang`.
    #[serde(default)]
    pub default_language: Language,

    /// Discount percentage a product must exceed to count as a deal.
    #[serde(default = "default_deal_threshold")]
    pub deal_threshold: u8,
}

fn default_deal_threshold() -> u8 {
    DEFAULT_DEAL_THRESHOLD
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            deal_threshold: default_deal_threshold(),
        }
    }
}

/// Storage section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the cart, language cookie and mock backend data.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
}

fn default_state_file() -> PathBuf {
    PathBuf::from(".dukaan").join("state.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Generate a default dukaan.toml config file.
pub fn generate_default_config() -> String {
    r#"# Dukaan storefront configuration

[storefront]
default_language = "en"
deal_threshold = 20

[latency]
enabled = true
categories = 250
products = 300
orders = 300
users = 200

[pricing]
free_shipping_threshold = 2000
flat_shipping = 200
tax_percent = 5

[storage]
state_file = ".dukaan/state.json"
"#
    .to_string()
}
