use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation. Informational only: the ledger performs
/// no cross-currency arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "CAD" => "CAD".into(),
        "AUD" => "A$".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders an amount with the currency's symbol and minor-unit precision.
/// Display only; the rounded value is never written back to the ledger.
pub fn format_amount(amount: Decimal, code: &CurrencyCode) -> String {
    let precision = minor_units_for(code.as_str()) as usize;
    let symbol = symbol_for(code.as_str());
    let body = format!("{:.*}", precision, amount.abs());
    if amount < Decimal::ZERO {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}
