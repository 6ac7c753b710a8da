//! Seed datasets embedded in the binary.

use crate::DataResult;
use chrono::{NaiveDate, TimeZone, Utc};
use dukaan_commerce::account::UserProfile;
use dukaan_commerce::catalog::{Category, Product};
use dukaan_commerce::checkout::{OrderStatus, OrderSummary};
use dukaan_commerce::Money;

const CATEGORIES_JSON: &str = include_str!("../../data/categories.json");
const PRODUCTS_JSON: &str = include_str!("../../data/products.json");
const USER_JSON: &str = include_str!("../../data/user.json");

pub fn categories() -> DataResult<Vec<Category>> {
    Ok(serde_json::from_str(CATEGORIES_JSON)?)
}

pub fn products() -> DataResult<Vec<Product>> {
    Ok(serde_json::from_str(PRODUCTS_JSON)?)
}

pub fn user() -> DataResult<UserProfile> {
    Ok(serde_json::from_str(USER_JSON)?)
}

/// The fixed order history shown on the account page.
pub fn order_history() -> Vec<OrderSummary> {
    let entry = |code: &str, (y, m, d): (i32, u32, u32), status, total, items| {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
            .unwrap_or_default();
        OrderSummary {
            code: code.to_string(),
            date,
            status,
            total: Money::new(total),
            items,
        }
    };
    vec![
        entry("ORD-001", (2024, 1, 15), OrderStatus::Delivered, 2500, 3),
        entry("ORD-002", (2024, 1, 10), OrderStatus::Shipped, 1800, 2),
    ]
}
