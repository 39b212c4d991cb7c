//! # FX Backends
//!
//! Concrete rate provider implementations (adapters) for the FX conversion
//! service. This crate provides upstream adapters that implement the
//! `RateProvider` port.

pub mod bank_of_canada;

pub use bank_of_canada::BankOfCanadaProvider;
