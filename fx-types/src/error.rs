//! Error types for the FX conversion service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of failure codes the conversion engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FxErrorCode {
    InvalidDate,
    SourceCurrencyNotSupported,
    TargetCurrencyNotSupported,
    InvalidCurrencyPair,
    RecordNotFoundForDate,
    UnexpectedError,
}

impl FxErrorCode {
    /// Stable wire identifier for the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            FxErrorCode::InvalidDate => "invalid_date",
            FxErrorCode::SourceCurrencyNotSupported => "source_currency_not_supported",
            FxErrorCode::TargetCurrencyNotSupported => "target_currency_not_supported",
            FxErrorCode::InvalidCurrencyPair => "invalid_currency_pair",
            FxErrorCode::RecordNotFoundForDate => "record_not_found_for_date",
            FxErrorCode::UnexpectedError => "unexpected_error",
        }
    }
}

impl fmt::Display for FxErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed engine failure: one code from the closed taxonomy plus a
/// human-readable message.
///
/// This is the sole failure channel of the engine API; it is returned
/// through the response envelope, never raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ServiceError {
    pub code: FxErrorCode,
    pub message: String,
}

impl ServiceError {
    /// Creates a new service error.
    pub fn new(code: FxErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Hard failures on the provider boundary (infrastructure problems).
///
/// A simply-missing observation is `Ok(None)` from
/// [`RateProvider::get_rate`](crate::ports::RateProvider::get_rate), never
/// an error; these variants cover network faults, upstream rejections and
/// undecodable payloads. The engine translates all of them to
/// [`FxErrorCode::UnexpectedError`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("{0}")]
    Upstream(String),

    #[error("malformed rate data: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_wire_names() {
        assert_eq!(
            serde_json::to_string(&FxErrorCode::RecordNotFoundForDate).unwrap(),
            "\"record_not_found_for_date\""
        );
        assert_eq!(FxErrorCode::InvalidDate.to_string(), "invalid_date");
    }

    #[test]
    fn test_service_error_displays_message() {
        let err = ServiceError::new(FxErrorCode::InvalidCurrencyPair, "same currency");
        assert_eq!(err.to_string(), "same currency");
        assert_eq!(err.code, FxErrorCode::InvalidCurrencyPair);
    }
}
