//! Trend indicators: SMA, WMA, EMA, DEMA, TEMA, TRIMA.
//!
//! The `*_values` kernels work on any slice and return the trimmed run, so
//! composite indicators can feed one stage's output into the next.

use super::lookback::{
    dema_lookback, ema_lookback, ma_lookback, sma_lookback, tema_lookback, trima_lookback,
    wma_lookback,
};
use super::output::{run, Output};
use crate::core::series::check_period;
use crate::core::types::MaType;
use crate::core::Result;

/// Simple Moving Average.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period (>= 1)
///
/// # Returns
/// Output with lookback `period - 1`
pub fn sma(data: &[f64], period: usize) -> Result<Output> {
    check_period("SMA period", period, 1)?;
    Ok(run("SMA", sma_lookback(period), data.len(), || sma_values(data, period)))
}

/// Weighted Moving Average with linear weights `1..=period`, oldest to newest.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period (>= 1)
///
/// # Returns
/// Output with lookback `period - 1`
pub fn wma(data: &[f64], period: usize) -> Result<Output> {
    check_period("WMA period", period, 1)?;
    Ok(run("WMA", wma_lookback(period), data.len(), || wma_values(data, period)))
}

/// Exponential Moving Average.
///
/// Seeded with the SMA of the first `period` points, then smoothed with
/// `k = 2 / (period + 1)`.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period (used to calculate smoothing factor)
///
/// # Returns
/// Output with lookback `period - 1`
pub fn ema(data: &[f64], period: usize) -> Result<Output> {
    check_period("EMA period", period, 1)?;
    Ok(run("EMA", ema_lookback(period), data.len(), || ema_values(data, period)))
}

/// Double Exponential Moving Average: `2 * EMA - EMA(EMA)`.
pub fn dema(data: &[f64], period: usize) -> Result<Output> {
    check_period("DEMA period", period, 1)?;
    Ok(run("DEMA", dema_lookback(period), data.len(), || dema_values(data, period)))
}

/// Triple Exponential Moving Average: `3 * EMA1 - 3 * EMA2 + EMA3`.
pub fn tema(data: &[f64], period: usize) -> Result<Output> {
    check_period("TEMA period", period, 1)?;
    Ok(run("TEMA", tema_lookback(period), data.len(), || tema_values(data, period)))
}

/// Triangular Moving Average (SMA of SMA).
pub fn trima(data: &[f64], period: usize) -> Result<Output> {
    check_period("TRIMA period", period, 1)?;
    Ok(run("TRIMA", trima_lookback(period), data.len(), || trima_values(data, period)))
}

/// Moving average of the selected kind.
pub fn moving_average(data: &[f64], period: usize, ma_type: MaType) -> Result<Output> {
    check_period("MA period", period, 1)?;
    Ok(run(ma_type.name(), ma_lookback(ma_type, period), data.len(), || {
        ma_values(data, period, ma_type)
    }))
}

pub(crate) fn ma_values(data: &[f64], period: usize, ma_type: MaType) -> Vec<f64> {
    match ma_type {
        MaType::Sma => sma_values(data, period),
        MaType::Ema => ema_values(data, period),
        MaType::Wma => wma_values(data, period),
        MaType::Dema => dema_values(data, period),
        MaType::Tema => tema_values(data, period),
        MaType::Trima => trima_values(data, period),
    }
}

pub(crate) fn sma_values(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    if n < period {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(n - period + 1);

    // Calculate first SMA
    let mut sum: f64 = data[..period].iter().sum();
    result.push(sum / period as f64);

    // Sliding window for remaining values
    for i in period..n {
        sum = sum - data[i - period] + data[i];
        result.push(sum / period as f64);
    }

    result
}

pub(crate) fn wma_values(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    if n < period {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(n - period + 1);
    let divisor = (period * (period + 1) / 2) as f64;

    let mut weighted = 0.0;
    let mut simple = 0.0;
    for (k, &x) in data[..period].iter().enumerate() {
        weighted += (k + 1) as f64 * x;
        simple += x;
    }
    result.push(weighted / divisor);

    // Shifting the window lowers every weight by one and adds the new point at
    // full weight.
    for i in period..n {
        weighted = weighted - simple + period as f64 * data[i];
        simple = simple - data[i - period] + data[i];
        result.push(weighted / divisor);
    }

    result
}

pub(crate) fn ema_values(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    if n < period {
        return Vec::new();
    }
    let mut result = Vec::with_capacity(n - period + 1);

    // Smoothing factor
    let alpha = 2.0 / (period as f64 + 1.0);

    // Initialize with SMA of first 'period' values
    let mut prev = data[..period].iter().sum::<f64>() / period as f64;
    result.push(prev);

    for &x in &data[period..] {
        prev = alpha * x + (1.0 - alpha) * prev;
        result.push(prev);
    }

    result
}

fn dema_values(data: &[f64], period: usize) -> Vec<f64> {
    let ema1 = ema_values(data, period);
    let ema2 = ema_values(&ema1, period);
    let offset = ema_lookback(period);
    ema2.iter()
        .enumerate()
        .map(|(j, &e2)| 2.0 * ema1[j + offset] - e2)
        .collect()
}

fn tema_values(data: &[f64], period: usize) -> Vec<f64> {
    let ema1 = ema_values(data, period);
    let ema2 = ema_values(&ema1, period);
    let ema3 = ema_values(&ema2, period);
    let offset = ema_lookback(period);
    ema3.iter()
        .enumerate()
        .map(|(j, &e3)| 3.0 * ema1[j + 2 * offset] - 3.0 * ema2[j + offset] + e3)
        .collect()
}

fn trima_values(data: &[f64], period: usize) -> Vec<f64> {
    let (first, second) = if period % 2 == 1 {
        ((period + 1) / 2, (period + 1) / 2)
    } else {
        (period / 2, period / 2 + 1)
    };
    sma_values(&sma_values(data, first), second)
}
