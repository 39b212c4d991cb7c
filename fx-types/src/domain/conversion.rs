//! Result of a conversion between two currencies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::CurrencyCode;

/// A completed currency conversion.
///
/// `rate` is the effective exchange rate the engine applied and `value` is
/// always `amount * rate`. For indirect conversions the rate has already
/// been rounded to four fractional digits, so `value` is consistent with
/// the displayed rate rather than with the raw two-hop product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub source: CurrencyCode,
    pub target: CurrencyCode,
    pub amount: Decimal,
    pub rate: Decimal,
    pub value: Decimal,
    pub date: NaiveDate,
    /// True when a single observation sufficed; false when the conversion
    /// was routed through the provider's base currency.
    pub direct: bool,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}={} {} using Exchange Rate 1 {}={} {} on date '{}'.",
            self.source,
            self.amount,
            self.target,
            self.value.round_dp(4).normalize(),
            self.source,
            self.rate,
            self.target,
            self.date.format("%Y-%m-%d"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_summary() {
        let conversion = Conversion {
            source: CurrencyCode::new("USD"),
            target: CurrencyCode::new("EUR"),
            amount: dec!(100),
            rate: dec!(0.9180),
            value: dec!(91.80),
            date: NaiveDate::from_ymd_opt(2023, 1, 3).unwrap(),
            direct: false,
        };
        assert_eq!(
            conversion.to_string(),
            "USD 100=EUR 91.8 using Exchange Rate 1 USD=0.9180 EUR on date '2023-01-03'."
        );
    }
}
