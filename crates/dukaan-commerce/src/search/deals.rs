//! Deal listings, tiers and the deal countdown.

use crate::catalog::Product;
use dukaan_i18n::{Language, TextKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Products discounted strictly above this percentage count as deals.
pub const DEFAULT_DEAL_THRESHOLD: u8 = 20;

/// Check if a product qualifies as a deal.
pub fn is_deal(product: &Product, threshold: u8) -> bool {
    product.discount_percentage > threshold
}

/// Every deal in a product list, in catalog order.
pub fn deals(products: &[Product], threshold: u8) -> Vec<Product> {
    products
        .iter()
        .filter(|p| is_deal(p, threshold))
        .cloned()
        .collect()
}

/// A deal listing tab. Tiers overlap: a clearance item is also a mega deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealTier {
    /// 50% off or more.
    Mega,
    /// 30% up to 49% off.
    Flash,
    /// 70% off or more.
    Clearance,
}

impl DealTier {
    pub const ALL: [DealTier; 3] = [DealTier::Mega, DealTier::Flash, DealTier::Clearance];

    pub fn matches(&self, product: &Product) -> bool {
        let discount = product.discount_percentage;
        match self {
            DealTier::Mega => discount >= 50,
            DealTier::Flash => (30..50).contains(&discount),
            DealTier::Clearance => discount >= 70,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DealTier::Mega => "mega",
            DealTier::Flash => "flash",
            DealTier::Clearance => "clearance",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        let key = match self {
            DealTier::Mega => TextKey::MegaDeals,
            DealTier::Flash => TextKey::FlashSale,
            DealTier::Clearance => TextKey::Clearance,
        };
        key.get(language)
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Products in this tier.
    pub fn filter(&self, deals: &[Product]) -> Vec<Product> {
        deals.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// Number of deals in each tier, in [`DealTier::ALL`] order.
pub fn tier_counts(deals: &[Product]) -> Vec<(DealTier, usize)> {
    DealTier::ALL
        .into_iter()
        .map(|tier| (tier, deals.iter().filter(|p| tier.matches(p)).count()))
        .collect()
}

/// An HH:MM:SS countdown that restarts at 23:59:59 after reaching zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealCountdown {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Default for DealCountdown {
    fn default() -> Self {
        Self::FULL
    }
}

impl DealCountdown {
    pub const FULL: DealCountdown = DealCountdown {
        hours: 23,
        minutes: 59,
        seconds: 59,
    };

    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours: hours.min(23),
            minutes: minutes.min(59),
            seconds: seconds.min(59),
        }
    }

    /// Advance by one second.
    pub fn tick(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        } else {
            *self = Self::FULL;
        }
    }

    pub fn total_seconds(&self) -> u32 {
        u32::from(self.hours) * 3600 + u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }
}

impl fmt::Display for DealCountdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
