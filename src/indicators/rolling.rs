//! Rolling min/max indicators (Lowest Low Value / Highest High Value).
//!
//! NaN points inside a window are skipped; a window holding only NaN yields NaN.

use super::lookback::rolling_lookback;
use super::output::{run, Output};
use crate::core::series::check_period;
use crate::core::Result;

/// Calculate rolling minimum (Lowest Low Value) over a period.
///
/// # Arguments
/// * `data` - Input data slice
/// * `period` - Lookback period
///
/// # Returns
/// Output with lookback `period - 1`
pub fn rolling_min(data: &[f64], period: usize) -> Result<Output> {
    check_period("MIN period", period, 1)?;
    Ok(run("MIN", rolling_lookback(period), data.len(), || {
        rolling_min_values(data, period)
    }))
}

/// Calculate rolling maximum (Highest High Value) over a period.
///
/// # Arguments
/// * `data` - Input data slice
/// * `period` - Lookback period
///
/// # Returns
/// Output with lookback `period - 1`
pub fn rolling_max(data: &[f64], period: usize) -> Result<Output> {
    check_period("MAX period", period, 1)?;
    Ok(run("MAX", rolling_lookback(period), data.len(), || {
        rolling_max_values(data, period)
    }))
}

pub(crate) fn rolling_min_values(data: &[f64], period: usize) -> Vec<f64> {
    data.windows(period)
        .map(|window| {
            let min_val = window
                .iter()
                .fold(f64::INFINITY, |a, &b| if b.is_nan() { a } else { a.min(b) });
            if min_val == f64::INFINITY {
                f64::NAN
            } else {
                min_val
            }
        })
        .collect()
}

pub(crate) fn rolling_max_values(data: &[f64], period: usize) -> Vec<f64> {
    data.windows(period)
        .map(|window| {
            let max_val = window
                .iter()
                .fold(f64::NEG_INFINITY, |a, &b| if b.is_nan() { a } else { a.max(b) });
            if max_val == f64::NEG_INFINITY {
                f64::NAN
            } else {
                max_val
            }
        })
        .collect()
}
