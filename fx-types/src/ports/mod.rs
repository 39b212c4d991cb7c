//! Port traits (interfaces for adapters).
//!
//! These are the contracts that rate backends must implement.
//! The engine depends on these traits, not concrete implementations.

mod provider;

pub use provider::RateProvider;
