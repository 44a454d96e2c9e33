//! Domain rules for the portfolio contact service.
//!
//! Pure functions and types only; no I/O lives here.

pub mod contact;
pub mod error;
pub mod types;
