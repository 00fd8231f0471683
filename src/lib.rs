//! Core library for the investment property marketplace.
//!
//! The interesting pieces live in [`marketplace`]: a deterministic
//! featured-listing rubric and the session-local property catalog that the
//! HTTP layer and CLI expose. Configuration, telemetry, and the binary-level
//! error type follow the conventions of our other services.

pub mod config;
pub mod error;
pub mod marketplace;
pub mod telemetry;
