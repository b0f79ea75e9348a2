//! Locale-aware amount formatting
//!
//! Renders [`Money`] with thousands grouping, a locale decimal separator and
//! a currency suffix: `5 000 kr`, `10,5 kr`, `−1 250 kr` for nb-NO.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LeftoverError;
use crate::models::Money;

/// Supported number-formatting locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "nb-NO")]
    NbNo,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "de-DE")]
    DeDe,
}

impl Locale {
    /// BCP 47 tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NbNo => "nb-NO",
            Self::EnUs => "en-US",
            Self::DeDe => "de-DE",
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Self::NbNo => '\u{a0}',
            Self::EnUs => ',',
            Self::DeDe => '.',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Self::NbNo | Self::DeDe => ',',
            Self::EnUs => '.',
        }
    }

    fn minus_sign(&self) -> char {
        match self {
            Self::NbNo => '\u{2212}',
            Self::EnUs | Self::DeDe => '-',
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = LeftoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "nb-no" | "nb" | "no" => Ok(Self::NbNo),
            "en-us" | "en" => Ok(Self::EnUs),
            "de-de" | "de" => Ok(Self::DeDe),
            _ => Err(LeftoverError::UnsupportedLocale(s.to_string())),
        }
    }
}

/// Formats amounts for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormat {
    pub locale: Locale,
    pub currency_suffix: String,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self::new(Locale::default(), "kr")
    }
}

impl AmountFormat {
    pub fn new(locale: Locale, currency_suffix: impl Into<String>) -> Self {
        Self {
            locale,
            currency_suffix: currency_suffix.into(),
        }
    }

    /// Number plus currency suffix
    pub fn format(&self, amount: Money) -> String {
        let number = self.format_number(amount);
        if self.currency_suffix.is_empty() {
            number
        } else {
            format!("{} {}", number, self.currency_suffix)
        }
    }

    /// Grouped number without the currency suffix
    ///
    /// Fraction digits are only shown when non-zero, with trailing zeros
    /// dropped.
    pub fn format_number(&self, amount: Money) -> String {
        let mut out = String::new();
        if amount.is_negative() {
            out.push(self.locale.minus_sign());
        }

        out.push_str(&group_digits(
            amount.whole().unsigned_abs(),
            self.locale.group_separator(),
        ));

        let cents = amount.cents_part();
        if cents != 0 {
            out.push(self.locale.decimal_separator());
            if cents % 10 == 0 {
                out.push_str(&(cents / 10).to_string());
            } else {
                out.push_str(&format!("{:02}", cents));
            }
        }

        out
    }
}

/// Insert `sep` between every group of three digits
fn group_digits(value: u64, sep: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nb() -> AmountFormat {
        AmountFormat::default()
    }

    #[test]
    fn test_nb_no_grouping_and_suffix() {
        assert_eq!(nb().format(Money::from_whole(5000)), "5\u{a0}000 kr");
        assert_eq!(nb().format(Money::from_whole(1500)), "1\u{a0}500 kr");
        assert_eq!(nb().format(Money::from_whole(999)), "999 kr");
        assert_eq!(
            nb().format(Money::from_whole(1234567)),
            "1\u{a0}234\u{a0}567 kr"
        );
        assert_eq!(nb().format(Money::zero()), "0 kr");
    }

    #[test]
    fn test_fraction_digits_trimmed() {
        assert_eq!(nb().format(Money::from_cents(1050)), "10,5 kr");
        assert_eq!(nb().format(Money::from_cents(1005)), "10,05 kr");
        assert_eq!(nb().format(Money::from_cents(1000)), "10 kr");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(
            nb().format(Money::from_whole(-2000)),
            "\u{2212}2\u{a0}000 kr"
        );
        let us = AmountFormat::new(Locale::EnUs, "kr");
        assert_eq!(us.format(Money::from_cents(-5)), "-0.05 kr");
    }

    #[test]
    fn test_other_locales() {
        let us = AmountFormat::new(Locale::EnUs, "kr");
        assert_eq!(us.format(Money::from_cents(500050)), "5,000.5 kr");

        let de = AmountFormat::new(Locale::DeDe, "EUR");
        assert_eq!(de.format(Money::from_cents(123456789)), "1.234.567,89 EUR");
    }

    #[test]
    fn test_empty_suffix() {
        let plain = AmountFormat::new(Locale::EnUs, "");
        assert_eq!(plain.format(Money::from_whole(1000)), "1,000");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("nb-NO".parse::<Locale>().unwrap(), Locale::NbNo);
        assert_eq!("en_us".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("de".parse::<Locale>().unwrap(), Locale::DeDe);
        assert!("xx-YY".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_serde_uses_tag() {
        let json = serde_json::to_string(&Locale::EnUs).unwrap();
        assert_eq!(json, "\"en-US\"");
        let parsed: Locale = serde_json::from_str("\"nb-NO\"").unwrap();
        assert_eq!(parsed, Locale::NbNo);
    }
}
