//! Tabemap Core - Domain models, validation, and error types
//!
//! This crate contains the domain logic shared by every tabemap crate:
//! the restaurant and building models, search-input validation, and the
//! distance units used by the two search families.

pub mod error;
pub mod models;
pub mod units;
pub mod validation;

pub use error::{Result, TabemapError};
