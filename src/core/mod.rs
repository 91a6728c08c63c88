//! Core types and utilities for RaptorTA.

pub mod error;
pub mod series;
pub mod types;

pub use error::{RaptorError, Result};
pub use series::{check_period, true_range, Hlc, Price, PriceInput, MAX_PERIOD};
pub use types::*;
