//! FX Conversion Service
//!
//! Orchestrates conversions through the rate provider port.
//! Contains NO infrastructure logic - validation, routing and rate
//! arithmetic only.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use fx_types::{Conversion, CurrencyCode, FxErrorCode, RateProvider, ServiceResponse};

/// The fixed date format used by the service.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How the format is rendered in user-facing messages.
const DATE_FORMAT_HUMAN: &str = "YYYY-MM-DD";

/// Parses a date string strictly against [`DATE_FORMAT`].
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// Whether the given date string is valid for use with this service.
pub fn validate_date(date: &str) -> bool {
    parse_date(date).is_some()
}

/// Conversion engine for currency amounts.
///
/// Generic over `P: RateProvider` - the rate source is injected at compile
/// time. A pair involving the provider's base currency converts with a
/// single observation; any other pair is routed through the base currency
/// with two observations. Every failure comes back through the response
/// envelope as a typed [`ServiceError`](fx_types::ServiceError); nothing
/// panics or escapes across this API.
pub struct FxService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> FxService<P> {
    /// Creates a new service over the given rate provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The currencies available for conversion, in provider order.
    pub fn supported_currencies(&self) -> Vec<CurrencyCode> {
        self.provider.supported_currencies().to_vec()
    }

    /// Whether the given date string is valid for use with this service.
    pub fn validate_date(&self, date: &str) -> bool {
        validate_date(date)
    }

    /// Converts `amount` from `source` to `target` for the given date.
    ///
    /// A missing or blank `date` means today. Validation short-circuits in
    /// a fixed order: date, source support, target support, distinctness;
    /// no provider call is made before all checks pass.
    pub async fn convert(
        &self,
        source: &str,
        target: &str,
        amount: Decimal,
        date: Option<&str>,
    ) -> ServiceResponse<Conversion> {
        let date = match date.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => Local::now().date_naive(),
            Some(raw) => match parse_date(raw) {
                Some(parsed) => parsed,
                None => {
                    return ServiceResponse::fail(
                        FxErrorCode::InvalidDate,
                        format!(
                            "The date '{raw}' is not valid. Specify a valid date in the format '{DATE_FORMAT_HUMAN}'."
                        ),
                    );
                }
            },
        };

        let source = CurrencyCode::new(source);
        let target = CurrencyCode::new(target);

        if !self.provider.supports(&source) {
            return ServiceResponse::fail(
                FxErrorCode::SourceCurrencyNotSupported,
                format!("Source currency '{source}' is not supported."),
            );
        }

        if !self.provider.supports(&target) {
            return ServiceResponse::fail(
                FxErrorCode::TargetCurrencyNotSupported,
                format!("Target currency '{target}' is not supported."),
            );
        }

        if source == target {
            return ServiceResponse::fail(
                FxErrorCode::InvalidCurrencyPair,
                "Source currency and target currency must be different.",
            );
        }

        // If neither endpoint is the base currency the pair has no direct
        // observation; route source -> base -> target instead.
        let base = self.provider.base_currency();
        let outcome = if source != *base && target != *base {
            tracing::debug!(%source, %target, %base, "converting indirectly through base currency");
            self.convert_indirect(&source, &target, amount, date).await
        } else {
            self.convert_direct(&source, &target, amount, date).await
        };

        match outcome {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(%source, %target, error = %err, "error while retrieving exchange rate data for currency pair");
                ServiceResponse::fail(FxErrorCode::UnexpectedError, err.to_string())
            }
        }
    }

    /// Single-observation conversion: one endpoint is the base currency.
    async fn convert_direct(
        &self,
        source: &CurrencyCode,
        target: &CurrencyCode,
        amount: Decimal,
        date: NaiveDate,
    ) -> anyhow::Result<ServiceResponse<Conversion>> {
        let Some(observation) = self.provider.get_rate(source, target, date).await? else {
            return Ok(record_not_found(source, target, date));
        };

        let value = amount
            .checked_mul(observation.rate)
            .context("conversion value overflowed")?;

        Ok(ServiceResponse::succeed(Conversion {
            source: observation.source,
            target: observation.target,
            amount,
            rate: observation.rate,
            value,
            date: observation.date,
            direct: true,
        }))
    }

    /// Two-observation conversion routed through the base currency.
    async fn convert_indirect(
        &self,
        source: &CurrencyCode,
        target: &CurrencyCode,
        amount: Decimal,
        date: NaiveDate,
    ) -> anyhow::Result<ServiceResponse<Conversion>> {
        let base = self.provider.base_currency().clone();

        let Some(source_to_base) = self.provider.get_rate(source, &base, date).await? else {
            return Ok(record_not_found(source, &base, date));
        };

        // Convert from source to base
        let base_value = amount
            .checked_mul(source_to_base.rate)
            .context("intermediate value overflowed")?;

        let Some(base_to_target) = self.provider.get_rate(&base, target, date).await? else {
            return Ok(record_not_found(&base, target, date));
        };

        // Convert from base to target
        let target_value = base_value
            .checked_mul(base_to_target.rate)
            .context("conversion value overflowed")?;

        // Derive the effective rate, rounded to four fractional digits. The
        // value is recomputed from the rounded rate rather than taken from
        // the raw two-hop product, so the reported rate and value agree.
        let rate = target_value
            .checked_div(amount)
            .context("cannot derive an effective rate for a zero amount")?
            .round_dp(4);

        let value = amount
            .checked_mul(rate)
            .context("conversion value overflowed")?;

        Ok(ServiceResponse::succeed(Conversion {
            source: source_to_base.source,
            target: base_to_target.target,
            amount,
            rate,
            value,
            date: base_to_target.date,
            direct: false,
        }))
    }
}

fn record_not_found(
    source: &CurrencyCode,
    target: &CurrencyCode,
    date: NaiveDate,
) -> ServiceResponse<Conversion> {
    ServiceResponse::fail(
        FxErrorCode::RecordNotFoundForDate,
        format!(
            "No exchange rate was found for source currency '{source}' and target currency '{target}' on date '{}'.",
            date.format(DATE_FORMAT)
        ),
    )
}
