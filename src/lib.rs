//! sbform_e2e — round-trip persistence checks for the SAMI background form.
//!
//! This library crate re-exports modules so the integration suites
//! (under `tests/`) can access them.

pub mod config;
pub mod fields;
pub mod logs;
pub mod preflight;
pub mod random;
pub mod session;
