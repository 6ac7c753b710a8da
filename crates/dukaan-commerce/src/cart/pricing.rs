//! Cart pricing calculations.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Shipping and tax rules applied at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    /// Subtotals strictly above this ship free.
    pub free_shipping_threshold: Money,
    /// Shipping charged below the threshold.
    pub flat_shipping: Money,
    /// Tax rate as a whole percentage of the subtotal.
    pub tax_percent: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Money::new(2000),
            flat_shipping: Money::new(200),
            tax_percent: 5,
        }
    }
}

impl PricingPolicy {
    /// Shipping charge for a subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_shipping_threshold {
            Money::zero()
        } else {
            self.flat_shipping
        }
    }

    /// Tax for a subtotal, rounded to the nearest rupee.
    pub fn tax_for(&self, subtotal: Money) -> Money {
        subtotal.percentage(self.tax_percent)
    }

    /// Price a subtotal.
    ///
    /// An empty cart (zero subtotal) prices to zero across the board.
    pub fn price(&self, subtotal: Money) -> CartPricing {
        if subtotal.is_zero() {
            return CartPricing::default();
        }
        let shipping_total = self.shipping_for(subtotal);
        let tax_total = self.tax_for(subtotal);
        CartPricing {
            subtotal,
            shipping_total,
            tax_total,
            grand_total: subtotal + shipping_total + tax_total,
        }
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping_total: Money,
    /// Tax amount.
    pub tax_total: Money,
    /// Final total (subtotal + shipping + tax).
    pub grand_total: Money,
}

impl CartPricing {
    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping_total.is_zero()
    }
}
