// Currency Table - fixed exchange rates relative to the base currency
//
// The table is a process-wide constant; no currency is ever added or removed
// at runtime. Direct cross-rate tables are not maintained: every conversion
// routes through the base currency (source -> base -> target).

use std::collections::BTreeMap;

use crate::error::ExpenseError;

/// Supported currency codes and their rate relative to [`BASE_CURRENCY`].
pub const SUPPORTED_CURRENCIES: [(&str, f64); 5] = [
    ("USD", 1.0),   // US Dollar
    ("EUR", 0.92),  // Euro
    ("GBP", 0.81),  // British Pound
    ("JPY", 140.0), // Japanese Yen
    ("AUD", 1.5),   // Australian Dollar
];

/// Pivot currency through which all conversions route.
pub const BASE_CURRENCY: &str = "USD";

/// Sorted, comma-separated listing of supported codes, for error messages.
pub const SUPPORTED_LIST: &str = "AUD, EUR, GBP, JPY, USD";

/// A conversion rate relative to the base currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRate {
    pub currency: &'static str,
    pub rate: f64,
}

fn lookup(currency: &str) -> Option<(&'static str, f64)> {
    SUPPORTED_CURRENCIES
        .iter()
        .copied()
        .find(|(code, _)| *code == currency)
}

/// Ensure the currency code is supported.
pub fn validate_currency(currency: &str) -> Result<(), ExpenseError> {
    if lookup(currency).is_none() {
        return Err(ExpenseError::CurrencyNotSupported(currency.to_string()));
    }
    Ok(())
}

/// Return the conversion rate for the given currency relative to the base currency.
pub fn get_rate(currency: &str) -> Result<ConversionRate, ExpenseError> {
    let (code, rate) = lookup(currency)
        .ok_or_else(|| ExpenseError::CurrencyNotSupported(currency.to_string()))?;
    Ok(ConversionRate { currency: code, rate })
}

/// Convert an amount between two supported currencies.
///
/// Same-currency conversions return the amount unchanged, avoiding
/// floating-point noise from a pointless rate round-trip.
pub fn convert(amount: f64, from_currency: &str, to_currency: &str) -> Result<f64, ExpenseError> {
    let from = get_rate(from_currency)?;
    let to = get_rate(to_currency)?;
    if from_currency == to_currency {
        return Ok(amount);
    }

    // Convert from the source currency to the base currency first.
    let amount_in_base = amount / from.rate;

    // Then from the base currency to the target currency.
    Ok(amount_in_base * to.rate)
}

/// Return a copy of the supported currency table.
///
/// Callers receive an owned map; the canonical table cannot be mutated
/// through it.
pub fn list_supported_currencies() -> BTreeMap<String, f64> {
    SUPPORTED_CURRENCIES
        .iter()
        .map(|(code, rate)| (code.to_string(), *rate))
        .collect()
}
