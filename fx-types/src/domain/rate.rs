//! Dated exchange-rate observation for a currency pair.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::CurrencyCode;

/// The exchange rate observed for a currency pair on a particular date.
///
/// At most one observation exists per (pair, date). The rate is the number
/// of target units one source unit bought on that date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateObservation {
    pub source: CurrencyCode,
    pub target: CurrencyCode,
    pub rate: Decimal,
    pub date: NaiveDate,
}

impl RateObservation {
    /// Creates a new observation.
    pub fn new(
        source: impl Into<CurrencyCode>,
        target: impl Into<CurrencyCode>,
        rate: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            rate,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_codes_normalized_through_ctor() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
        let obs = RateObservation::new("usd", "cad", dec!(1.35), date);
        assert_eq!(obs.source, CurrencyCode::new("USD"));
        assert_eq!(obs.target, CurrencyCode::new("CAD"));
        assert_eq!(obs.rate, dec!(1.35));
        assert_eq!(obs.date, date);
    }
}
