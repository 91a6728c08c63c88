// Suppress warning from PyO3 macro expansion (fixed in newer PyO3 versions)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

//! RaptorTA - technical analysis indicators with exact warm-up accounting.
//!
//! This crate provides:
//! - Moving averages (SMA, WMA, EMA, DEMA, TEMA, TRIMA)
//! - Momentum oscillators (RSI, ROC, MACD, Stochastic)
//! - Volatility and trend strength (ATR, Bollinger Bands, +DI/-DI, DX, ADX)
//! - Lookback functions for every indicator
//! - Trimmed or `NaN`-padded output from the same computed run

pub mod core;
pub mod indicators;
#[cfg(feature = "python")]
pub mod python;

pub use crate::core::{MaType, OutputMode, RaptorError, Result};
pub use crate::indicators::{Indicator, Output};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn _raptorta(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    use python::bindings;

    // Register indicator functions
    m.add_function(wrap_pyfunction!(bindings::sma, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::wma, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::ema, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::dema, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::tema, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::trima, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::ma, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::rsi, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::roc, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::rolling_min, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::rolling_max, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::stddev, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::true_range, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::atr, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::plus_di, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::minus_di, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::dx, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::adx, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::directional_movement, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::macd, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::bollinger_bands, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::stochastic, m)?)?;

    // Register lookback functions
    m.add_function(wrap_pyfunction!(bindings::period_lookback, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::macd_lookback, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::stochastic_lookback, m)?)?;

    Ok(())
}
