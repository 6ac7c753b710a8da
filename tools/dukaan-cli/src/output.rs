//! Output formatting for the CLI.

use console::style;
use dukaan_commerce::checkout::OrderStatus;
use dukaan_commerce::catalog::Product;
use dukaan_i18n::{t, Language, TextKey};
use indicatif::{ProgressBar, ProgressStyle};

/// Column widths for product tables.
pub const PRODUCT_COLUMNS: [usize; 5] = [4, 28, 12, 6, 12];

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a step in a process.
    pub fn step(&self, num: usize, total: usize, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style(format!("[{}/{}]", num, total)).dim(), msg);
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(err) => tracing::error!(error = %err, "failed to serialize output"),
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a table of products.
    pub fn products(&self, products: &[Product], language: Language) {
        if self.json {
            self.json(&products);
            return;
        }
        self.table_row(
            &[
                "ID",
                t(TextKey::Shop, language),
                t(TextKey::Price, language),
                "%",
                t(TextKey::InStock, language),
            ],
            &PRODUCT_COLUMNS,
        );
        for product in products {
            let id = product.id.to_string();
            let price = product.price.display(language);
            let discount = if product.is_on_sale() {
                format!("-{}", product.discount_percentage)
            } else {
                String::new()
            };
            let stock = stock_badge(product, language);
            self.table_row(
                &[&id, product.title_in(language), &price, &discount, &stock],
                &PRODUCT_COLUMNS,
            );
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        let template = ProgressStyle::default_spinner().template("{spinner:.green} {msg}");
        pb.set_style(template.unwrap_or_else(|_| ProgressStyle::default_spinner()));
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Status badge for order states.
pub fn status_badge(status: OrderStatus, language: Language) -> String {
    let label = status.label(language);
    match status {
        OrderStatus::Delivered => style(label).green().to_string(),
        OrderStatus::Received | OrderStatus::Processing | OrderStatus::Shipped => {
            style(label).yellow().to_string()
        }
        OrderStatus::Cancelled => style(label).dim().to_string(),
    }
}

/// Stock badge for a product.
pub fn stock_badge(product: &Product, language: Language) -> String {
    if product.is_in_stock() {
        format!("{} ({})", t(TextKey::InStock, language), product.stock)
    } else {
        style(t(TextKey::OutOfStock, language)).red().to_string()
    }
}
