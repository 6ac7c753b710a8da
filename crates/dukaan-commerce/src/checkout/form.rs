//! Checkout form and payment method.

use crate::error::CommerceError;
use dukaan_i18n::{Language, TextKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Pay the courier in cash.
    #[default]
    #[serde(rename = "cod")]
    CashOnDelivery,
    /// Credit or debit card.
    Card,
    /// Bank transfer.
    Bank,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CashOnDelivery,
        PaymentMethod::Card,
        PaymentMethod::Bank,
    ];

    /// Short code ("cod", "card", "bank").
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cod",
            PaymentMethod::Card => "card",
            PaymentMethod::Bank => "bank",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        let key = match self {
            PaymentMethod::CashOnDelivery => TextKey::CashOnDelivery,
            PaymentMethod::Card => TextKey::CardPayment,
            PaymentMethod::Bank => TextKey::BankTransfer,
        };
        key.get(language)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CommerceError::ValidationError(format!("unknown payment method '{}'", s.trim()))
            })
    }
}

/// Shipping details collected at checkout. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl CheckoutForm {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Format the delivery address as a single line.
    pub fn one_line(&self) -> String {
        [&self.address, &self.city, &self.state, &self.zip_code]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn fields(&self) -> [(TextKey, &str); 8] {
        [
            (TextKey::FirstName, &self.first_name),
            (TextKey::LastName, &self.last_name),
            (TextKey::Email, &self.email),
            (TextKey::Phone, &self.phone),
            (TextKey::Address, &self.address),
            (TextKey::City, &self.city),
            (TextKey::State, &self.state),
            (TextKey::ZipCode, &self.zip_code),
        ]
    }

    /// Fields left blank, as translation keys.
    pub fn missing_fields(&self) -> Vec<TextKey> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| key)
            .collect()
    }

    /// Check that every field is filled in and the email looks like one.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|key| key.key()).collect();
            return Err(CommerceError::CheckoutIncomplete(names.join(", ")));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(CommerceError::ValidationError(format!(
                "'{email}' is not a valid email address"
            ))),
        }
    }
}
