//! Money type for representing rupee amounts.
//!
//! Storefront prices are whole Pakistani rupees, so amounts are stored as an
//! integer count of rupees. Integer storage keeps totals exact across any
//! sequence of cart mutations.

use dukaan_i18n::{format_currency, Language};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A rupee amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a new Money value from whole rupees.
    pub const fn new(rupees: i64) -> Self {
        Self(rupees)
    }

    /// Zero rupees.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in whole rupees.
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    /// A whole-number percentage of this amount, rounded half up to the nearest rupee.
    ///
    /// ```
    /// use dukaan_commerce::Money;
    /// assert_eq!(Money::new(2010).percentage(5), Money::new(101));
    /// ```
    pub fn percentage(&self, percent: u32) -> Money {
        let scaled = self.0.saturating_mul(i64::from(percent));
        let rounded = if scaled >= 0 {
            scaled.saturating_add(50) / 100
        } else {
            scaled.saturating_sub(50) / 100
        };
        Money(rounded)
    }

    /// Format for display in a language (e.g., "Rs 2,500").
    pub fn display(&self, language: Language) -> String {
        format_currency(self.0, language)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl From<i64> for Money {
    fn from(rupees: i64) -> Self {
        Money(rupees)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(Language::En))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(4999);
        assert_eq!(m.rupees(), 4999);
        assert!(m.is_positive());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(2500).to_string(), "Rs 2,500");
        assert_eq!(Money::new(150000).display(Language::Ur), "Rs 150,000");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(300);
        assert_eq!(a + b, Money::new(1300));
        assert_eq!(a - b, Money::new(700));
        assert_eq!(a * 3, Money::new(3000));
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::new(100), Money::new(250), Money::new(50)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::new(400));
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(Money::new(1000).percentage(5), Money::new(50));
        assert_eq!(Money::new(1990).percentage(5), Money::new(100)); // 99.5
        assert_eq!(Money::new(1989).percentage(5), Money::new(99)); // 99.45
    }

    #[test]
    fn test_times_saturates() {
        assert_eq!(Money::new(i64::MAX).times(2), Money::new(i64::MAX));
    }

    #[test]
    fn test_percentage_saturates() {
        assert_eq!(
            Money::new(i64::MAX / 4).percentage(5),
            Money::new(i64::MAX / 100)
        );
        assert_eq!(
            Money::new(i64::MIN / 4).percentage(5),
            Money::new(i64::MIN / 100)
        );
    }
}
