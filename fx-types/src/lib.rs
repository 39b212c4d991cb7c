//! # FX Types
//!
//! Domain types and port traits for the FX conversion service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, RateObservation, Conversion)
//! - `ports/` - Trait definitions that rate backends must implement
//! - `response/` - The uniform success/error envelope returned by the engine
//! - `error/` - Service and provider error types

pub mod domain;
pub mod error;
pub mod ports;
pub mod response;

// Re-export commonly used types
pub use domain::{Conversion, CurrencyCode, RateObservation};
pub use error::{FxErrorCode, ProviderError, ServiceError};
pub use ports::RateProvider;
pub use response::ServiceResponse;
