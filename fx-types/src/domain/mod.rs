//! Domain models for the FX conversion service.

pub mod conversion;
pub mod currency;
pub mod rate;

pub use conversion::Conversion;
pub use currency::CurrencyCode;
pub use rate::RateObservation;
