//! The `utils` module provides a collection of shared definitions used across
//! the `pushover` library.
//!
//! It centralizes the error types and the logging setup so every module reports
//! failures and diagnostics the same way.

pub mod error;
pub mod logging;
