//! Rate provider port.
//!
//! This trait defines the interface for daily exchange-rate sources.
//! Implementations can be HTTP clients, fixtures for tests, etc.

use chrono::NaiveDate;

use crate::domain::{CurrencyCode, RateObservation};
use crate::error::ProviderError;

/// Port trait for exchange-rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// The provider's base currency, used as the pivot when a requested
    /// pair has no direct observation.
    fn base_currency(&self) -> &CurrencyCode;

    /// The currencies this provider publishes rates for, in the order the
    /// provider declares them. Always includes the base currency.
    fn supported_currencies(&self) -> &[CurrencyCode];

    /// Whether the provider supports the given currency. Case handling is
    /// taken care of by [`CurrencyCode`] normalization.
    fn supports(&self, code: &CurrencyCode) -> bool {
        self.supported_currencies().contains(code)
    }

    /// Returns the observation for the pair on the given date, or
    /// `Ok(None)` when no observation exists for that date.
    ///
    /// `Err` is reserved for infrastructure problems (network, upstream
    /// rejection, undecodable payload); a missing date is not an error.
    async fn get_rate(
        &self,
        source: &CurrencyCode,
        target: &CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<RateObservation>, ProviderError>;
}
