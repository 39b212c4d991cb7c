//! # FX Engine
//!
//! The conversion engine for the FX conversion service.
//!
//! [`FxService`] is generic over `P: RateProvider`, so any rate source
//! implementing the port can be injected at compile time - the Bank of
//! Canada backend in production, a fixture provider in tests.

pub mod service;


pub use service::{DATE_FORMAT, FxService, parse_date, validate_date};
