//! Bank of Canada Valet API backend.
//!
//! Fetches daily noon-rate series from the Valet observations endpoint and
//! exposes them through the `RateProvider` port. All wire-format concerns
//! live here; the engine only ever sees `RateObservation`s.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode, header};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use fx_types::{CurrencyCode, ProviderError, RateObservation, RateProvider};

/// Public base URL of the Valet API.
pub const VALET_BASE_URL: &str = "https://www.bankofcanada.ca/valet";

/// Currencies the Valet FX series cover, in listing order.
const SUPPORTED_CURRENCIES: [&str; 11] = [
    "CAD", "USD", "EUR", "JPY", "GBP", "AUD", "CHF", "CNY", "HKD", "MXN", "INR",
];

/// Rate provider backed by the Bank of Canada Valet API.
///
/// The base currency is CAD: Valet publishes `FXABCCAD`-style series, so any
/// pair not involving CAD has no direct series and the engine routes it
/// through CAD.
pub struct BankOfCanadaProvider {
    base_url: String,
    http: Client,
    base: CurrencyCode,
    currencies: Vec<CurrencyCode>,
}

impl BankOfCanadaProvider {
    /// Creates a provider against the public Valet API.
    pub fn new() -> Self {
        Self::with_valet_url(VALET_BASE_URL)
    }

    /// Creates a provider against a custom Valet base URL.
    pub fn with_valet_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
            base: CurrencyCode::new("CAD"),
            currencies: SUPPORTED_CURRENCIES
                .into_iter()
                .map(CurrencyCode::new)
                .collect(),
        }
    }

    /// Fetches every observation of the pair's FX series.
    async fn fetch_series(
        &self,
        source: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<Vec<RateObservation>, ProviderError> {
        let series = format!("FX{source}{target}");
        let url = format!("{}/observations/{}/json", self.base_url, series);

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        if status.is_success() {
            decode_observations(&series, source, target, &body)
        } else if status == StatusCode::BAD_REQUEST {
            // Valet reports series problems as a 400 with a message body.
            let error: ErrorResponse = serde_json::from_str(&body)
                .map_err(|err| ProviderError::Decode(err.to_string()))?;
            Err(ProviderError::Upstream(error.message))
        } else {
            Err(ProviderError::Upstream(format!(
                "An unexpected error has occured while retrieving data for '{series}' (status {status})."
            )))
        }
    }
}

impl Default for BankOfCanadaProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for BankOfCanadaProvider {
    fn base_currency(&self) -> &CurrencyCode {
        &self.base
    }

    fn supported_currencies(&self) -> &[CurrencyCode] {
        &self.currencies
    }

    async fn get_rate(
        &self,
        source: &CurrencyCode,
        target: &CurrencyCode,
        date: NaiveDate,
    ) -> Result<Option<RateObservation>, ProviderError> {
        // Valet has no per-date lookup; fetch the series and pick the
        // requested date out of it. A date with no entry is simply None.
        let observations = self.fetch_series(source, target).await?;
        Ok(observations.into_iter().find(|obs| obs.date == date))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire models
// ─────────────────────────────────────────────────────────────────────────────

/// Shape of a Valet observations payload. Each observation is a loose map
/// like `{"d": "2023-01-03", "FXUSDCAD": {"v": "1.3523"}}`.
#[derive(Debug, Deserialize)]
struct SeriesData {
    #[serde(default)]
    observations: Vec<HashMap<String, Value>>,
}

/// Shape of a Valet error body.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Decodes a Valet observations payload into dated observations.
///
/// Entries missing a date or a rate value are skipped with a warning; that
/// only happens if the upstream format drifts.
fn decode_observations(
    series: &str,
    source: &CurrencyCode,
    target: &CurrencyCode,
    body: &str,
) -> Result<Vec<RateObservation>, ProviderError> {
    let data: SeriesData =
        serde_json::from_str(body).map_err(|err| ProviderError::Decode(err.to_string()))?;

    let mut observations = Vec::with_capacity(data.observations.len());
    for entry in &data.observations {
        let Some(date) = entry
            .get("d")
            .and_then(Value::as_str)
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        else {
            tracing::warn!(series, "skipping observation without a usable date");
            continue;
        };

        let Some(rate) = entry
            .get(series)
            .and_then(|value| value.get("v"))
            .and_then(decode_rate)
        else {
            tracing::warn!(series, %date, "skipping observation without a usable rate");
            continue;
        };

        observations.push(RateObservation::new(
            source.clone(),
            target.clone(),
            rate,
            date,
        ));
    }

    Ok(observations)
}

/// Valet serves rate values as strings; tolerate bare numbers too.
fn decode_rate(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(raw) => raw.trim().parse().ok(),
        Value::Number(num) => num.to_string().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn codes() -> (CurrencyCode, CurrencyCode) {
        (CurrencyCode::new("USD"), CurrencyCode::new("CAD"))
    }

    #[test]
    fn test_decode_series_payload() {
        let body = r#"{
            "observations": [
                {"d": "2023-01-03", "FXUSDCAD": {"v": "1.3523"}},
                {"d": "2023-01-04", "FXUSDCAD": {"v": "1.3482"}}
            ]
        }"#;

        let (source, target) = codes();
        let observations = decode_observations("FXUSDCAD", &source, &target, body).unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].rate, dec!(1.3523));
        assert_eq!(
            observations[1].date,
            NaiveDate::from_ymd_opt(2023, 1, 4).unwrap()
        );
        assert_eq!(observations[0].source, source);
        assert_eq!(observations[0].target, target);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let body = r#"{
            "observations": [
                {"d": "2023-01-03"},
                {"FXUSDCAD": {"v": "1.35"}},
                {"d": "2023-01-04", "FXUSDCAD": {"v": "not a number"}},
                {"d": "2023-01-05", "FXUSDCAD": {"v": "1.3482"}}
            ]
        }"#;

        let (source, target) = codes();
        let observations = decode_observations("FXUSDCAD", &source, &target, body).unwrap();

        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].rate, dec!(1.3482));
    }

    #[test]
    fn test_numeric_rate_values_are_accepted() {
        let body = r#"{"observations": [{"d": "2023-01-03", "FXUSDCAD": {"v": 1.3523}}]}"#;

        let (source, target) = codes();
        let observations = decode_observations("FXUSDCAD", &source, &target, body).unwrap();

        assert_eq!(observations[0].rate, dec!(1.3523));
    }

    #[test]
    fn test_undecodable_body_is_a_decode_error() {
        let (source, target) = codes();
        let result = decode_observations("FXUSDCAD", &source, &target, "<html>nope</html>");

        assert!(matches!(result, Err(ProviderError::Decode(_))));
    }

    #[test]
    fn test_supported_set_and_base() {
        let provider = BankOfCanadaProvider::new();

        assert_eq!(provider.base_currency(), &CurrencyCode::new("CAD"));
        assert_eq!(provider.supported_currencies().len(), 11);
        assert!(provider.supports(&CurrencyCode::new("usd")));
        assert!(!provider.supports(&CurrencyCode::new("ZAR")));
        assert!(provider.supports(provider.base_currency()));
    }

    #[test]
    fn test_valet_url_is_trimmed() {
        let provider = BankOfCanadaProvider::with_valet_url("http://localhost:9000/valet/");
        assert_eq!(provider.base_url, "http://localhost:9000/valet");
    }
}
