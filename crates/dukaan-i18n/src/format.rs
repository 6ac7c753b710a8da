//! Locale-aware display formatting.
//!
//! Both languages use Latin digits with three-digit grouping, matching how
//! Pakistani storefronts render prices. Only month names differ by language.

use crate::Language;
use chrono::Datelike;

const CURRENCY_PREFIX: &str = "Rs";

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_UR: [&str; 12] = [
    "جنوری",
    "فروری",
    "مارچ",
    "اپریل",
    "مئی",
    "جون",
    "جولائی",
    "اگست",
    "ستمبر",
    "اکتوبر",
    "نومبر",
    "دسمبر",
];

/// Format an integer with thousands separators (e.g., "1,234,567").
pub fn format_number(number: i64, _language: Language) -> String {
    let digits = number.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if number < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a rupee amount (e.g., "Rs 2,500").
pub fn format_currency(amount: i64, language: Language) -> String {
    format!("{} {}", CURRENCY_PREFIX, format_number(amount, language))
}

/// Month name for a 1-based month number.
///
/// Out-of-range months yield an empty string.
pub fn month_name(month: u32, language: Language) -> &'static str {
    let names = match language {
        Language::En => &MONTHS_EN,
        Language::Ur => &MONTHS_UR,
    };
    month
        .checked_sub(1)
        .and_then(|i| names.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Format a date as "day month year" (e.g., "15 January 2024").
pub fn format_date(date: &impl Datelike, language: Language) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_name(date.month(), language),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0, Language::En), "0");
        assert_eq!(format_number(999, Language::En), "999");
        assert_eq!(format_number(1000, Language::En), "1,000");
        assert_eq!(format_number(1234567, Language::Ur), "1,234,567");
        assert_eq!(format_number(-45000, Language::En), "-45,000");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2500, Language::En), "Rs 2,500");
        assert_eq!(format_currency(200, Language::Ur), "Rs 200");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_date(&date, Language::En), "15 January 2024");
        assert_eq!(format_date(&date, Language::Ur), "15 جنوری 2024");
    }

    #[test]
    fn test_format_datetime() {
        let ts = Utc.with_ymd_and_hms(2023, 12, 3, 10, 30, 0).unwrap();
        assert_eq!(format_date(&ts, Language::En), "3 December 2023");
    }

    #[test]
    fn test_month_out_of_range() {
        assert_eq!(month_name(0, Language::En), "");
        assert_eq!(month_name(13, Language::Ur), "");
    }
}
