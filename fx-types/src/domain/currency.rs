//! Currency code identifier, normalized at construction.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A short alphabetic currency identifier such as `"USD"`.
///
/// The code is trimmed and uppercased when constructed, so two codes that
/// differ only in case compare equal. Which codes are actually usable is a
/// provider concern (`RateProvider::supports`); this type imposes no ISO or
/// length validation of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

// Deserialization goes through `new` so codes coming off the wire are
// normalized the same way as codes built in process.
impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

impl CurrencyCode {
    /// Creates a normalized currency code.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    /// Returns the normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(CurrencyCode::new(" usd "), CurrencyCode::new("USD"));
        assert_eq!(CurrencyCode::new("eur").as_str(), "EUR");
    }

    #[test]
    fn test_distinct_codes_are_unequal() {
        assert_ne!(CurrencyCode::new("USD"), CurrencyCode::new("CAD"));
    }

    #[test]
    fn test_display() {
        assert_eq!(CurrencyCode::new("cad").to_string(), "CAD");
    }

    #[test]
    fn test_serde_transparent() {
        let code: CurrencyCode = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(code, CurrencyCode::new("usd"));
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"USD\"");
    }
}
