//! Strength indicators: +DI, -DI, DX, ADX.

use super::lookback::{adx_lookback, dx_lookback, minus_di_lookback, plus_di_lookback};
use super::output::{insufficient, Output};
use crate::core::series::{check_period, Hlc};
use crate::core::Result;

/// Smoothed directional state from input index `period` onward.
struct DirectionalRun {
    plus_di: Vec<f64>,
    minus_di: Vec<f64>,
    dx: Vec<f64>,
}

/// Directional movement of bar `i` as (+DM, -DM).
#[inline]
fn directional_move(bars: &Hlc<'_>, i: usize) -> (f64, f64) {
    let up_move = bars.high[i] - bars.high[i - 1];
    let down_move = bars.low[i - 1] - bars.low[i];

    let plus = if up_move > down_move && up_move > 0.0 {
        up_move
    } else {
        0.0
    };
    let minus = if down_move > up_move && down_move > 0.0 {
        down_move
    } else {
        0.0
    };
    (plus, minus)
}

/// Requires `bars.len() > period`.
fn directional_values(bars: &Hlc<'_>, period: usize) -> DirectionalRun {
    let n = bars.len();
    let p = period as f64;
    let mut out = DirectionalRun {
        plus_di: Vec::with_capacity(n - period),
        minus_di: Vec::with_capacity(n - period),
        dx: Vec::with_capacity(n - period),
    };

    // Initial sums
    let mut smooth_plus_dm = 0.0;
    let mut smooth_minus_dm = 0.0;
    let mut smooth_tr = 0.0;
    for i in 1..=period {
        let (plus, minus) = directional_move(bars, i);
        smooth_plus_dm += plus;
        smooth_minus_dm += minus;
        smooth_tr += bars.true_range_at(i);
    }

    for i in period..n {
        if i > period {
            let (plus, minus) = directional_move(bars, i);
            smooth_plus_dm = smooth_plus_dm - (smooth_plus_dm / p) + plus;
            smooth_minus_dm = smooth_minus_dm - (smooth_minus_dm / p) + minus;
            smooth_tr = smooth_tr - (smooth_tr / p) + bars.true_range_at(i);
        }

        let (plus_di, minus_di) = if smooth_tr > 0.0 {
            (
                100.0 * smooth_plus_dm / smooth_tr,
                100.0 * smooth_minus_dm / smooth_tr,
            )
        } else {
            (0.0, 0.0)
        };

        let di_sum = plus_di + minus_di;
        let dx = if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        };

        out.plus_di.push(plus_di);
        out.minus_di.push(minus_di);
        out.dx.push(dx);
    }

    out
}

/// ADX from a DX run that starts at input index `period`.
fn adx_output(dx: &[f64], period: usize, n: usize) -> Output {
    let lookback = adx_lookback(period);
    if insufficient("ADX", lookback, n) {
        return Output::empty(lookback, n);
    }

    let p = period as f64;
    let mut result = Vec::with_capacity(n - lookback);

    // Initial ADX is average of first 'period' DX values
    let mut value = dx[..period].iter().sum::<f64>() / p;
    result.push(value);

    for &x in &dx[period..] {
        value = (value * (p - 1.0) + x) / p;
        result.push(value);
    }

    Output::new(result, lookback, n)
}

/// Positive Directional Indicator (+DI).
///
/// # Arguments
/// * `high` - High prices
/// * `low` - Low prices
/// * `close` - Close prices
/// * `period` - Lookback period (default: 14)
///
/// # Returns
/// Output of +DI values (0-100 scale) with lookback `period`
pub fn plus_di(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Output> {
    let bars = Hlc::new(high, low, close)?;
    check_period("+DI period", period, 1)?;

    let lookback = plus_di_lookback(period);
    if insufficient("PLUS_DI", lookback, bars.len()) {
        return Ok(Output::empty(lookback, bars.len()));
    }
    let run = directional_values(&bars, period);
    Ok(Output::new(run.plus_di, lookback, bars.len()))
}

/// Negative Directional Indicator (-DI).
///
/// # Returns
/// Output of -DI values (0-100 scale) with lookback `period`
pub fn minus_di(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Output> {
    let bars = Hlc::new(high, low, close)?;
    check_period("-DI period", period, 1)?;

    let lookback = minus_di_lookback(period);
    if insufficient("MINUS_DI", lookback, bars.len()) {
        return Ok(Output::empty(lookback, bars.len()));
    }
    let run = directional_values(&bars, period);
    Ok(Output::new(run.minus_di, lookback, bars.len()))
}

/// Directional Movement Index (DX).
///
/// DX is defined from index `period`; the output starts at `2 * period - 2`.
///
/// # Returns
/// Output of DX values (0-100 scale) with lookback `2 * period - 2`
pub fn dx(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Output> {
    let bars = Hlc::new(high, low, close)?;
    check_period("DX period", period, 2)?;

    let n = bars.len();
    let lookback = dx_lookback(period);
    if insufficient("DX", lookback, n) {
        return Ok(Output::empty(lookback, n));
    }
    let run = directional_values(&bars, period);
    Ok(Output::new(run.dx, plus_di_lookback(period), n).advance_to(lookback))
}

/// Average Directional Index (ADX).
///
/// # Arguments
/// * `high` - High prices
/// * `low` - Low prices
/// * `close` - Close prices
/// * `period` - Lookback period (default: 14)
///
/// # Returns
/// Output of ADX values (0-100 scale) with lookback `2 * period - 1`
pub fn adx(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Output> {
    let bars = Hlc::new(high, low, close)?;
    check_period("ADX period", period, 2)?;

    let n = bars.len();
    if insufficient("ADX", adx_lookback(period), n) {
        return Ok(Output::empty(adx_lookback(period), n));
    }
    let run = directional_values(&bars, period);
    Ok(adx_output(&run.dx, period, n))
}

/// Directional Index result including +DI, -DI, and ADX.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalIndexResult {
    /// +DI values, lookback `period`.
    pub plus_di: Output,
    /// -DI values, lookback `period`.
    pub minus_di: Output,
    /// ADX values, lookback `2 * period - 1`.
    pub adx: Output,
}

/// Full Directional Movement System (DI+, DI-, ADX) in one pass.
///
/// # Returns
/// DirectionalIndexResult; each output keeps its own lookback
pub fn directional_movement(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
) -> Result<DirectionalIndexResult> {
    let bars = Hlc::new(high, low, close)?;
    check_period("Period", period, 2)?;

    let n = bars.len();
    let di_lookback = plus_di_lookback(period);
    if insufficient("DMI", di_lookback, n) {
        return Ok(DirectionalIndexResult {
            plus_di: Output::empty(di_lookback, n),
            minus_di: Output::empty(di_lookback, n),
            adx: Output::empty(adx_lookback(period), n),
        });
    }

    let run = directional_values(&bars, period);
    let adx = adx_output(&run.dx, period, n);
    Ok(DirectionalIndexResult {
        plus_di: Output::new(run.plus_di, di_lookback, n),
        minus_di: Output::new(run.minus_di, di_lookback, n),
        adx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn trending(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let high: Vec<f64> = (0..n).map(|i| 100.0 + i as f64 + 2.0).collect();
        let low: Vec<f64> = (0..n).map(|i| 100.0 + i as f64 - 2.0).collect();
        let close: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
        (high, low, close)
    }

    fn small_sample() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let high = vec![10.0, 11.0, 10.5, 12.0, 11.0, 13.0];
        let low = vec![9.0, 10.0, 9.0, 10.5, 10.0, 11.5];
        let close = vec![9.5, 10.5, 9.5, 11.5, 10.5, 12.5];
        (high, low, close)
    }

    #[test]
    fn test_adx() {
        let (high, low, close) = trending(50);
        let result = adx(&high, &low, &close, 14).unwrap();

        // ADX should be valid from index 27 (2 * period - 1)
        assert_eq!(result.lookback(), 27);
        let padded = result.padded();
        assert!(padded[26].is_nan());
        assert!(!padded[27].is_nan());

        // A steady uptrend has no downward movement.
        for &v in result.trimmed() {
            assert_relative_eq!(v, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_di_on_steady_uptrend() {
        let (high, low, close) = trending(30);
        let plus = plus_di(&high, &low, &close, 14).unwrap();
        let minus = minus_di(&high, &low, &close, 14).unwrap();
        assert_eq!(plus.len(), 16);
        // +DM = 1 and TR = 4 on every bar.
        for &v in plus.trimmed() {
            assert_relative_eq!(v, 25.0, epsilon = 1e-9);
        }
        assert!(minus.trimmed().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_known_values_period_two() {
        let (high, low, close) = small_sample();

        let plus = plus_di(&high, &low, &close, 2).unwrap();
        let expected_plus = [100.0 / 3.0, 50.0, 200.0 / 7.0, 1000.0 / 17.0];
        for (v, e) in plus.trimmed().iter().zip(expected_plus) {
            assert_relative_eq!(*v, e, epsilon = 1e-9);
        }

        let minus = minus_di(&high, &low, &close, 2).unwrap();
        let expected_minus = [100.0 / 3.0, 12.5, 150.0 / 7.0, 150.0 / 17.0];
        for (v, e) in minus.trimmed().iter().zip(expected_minus) {
            assert_relative_eq!(*v, e, epsilon = 1e-9);
        }

        let dx_out = dx(&high, &low, &close, 2).unwrap();
        assert_eq!(dx_out.lookback(), 2);
        let expected_dx = [0.0, 60.0, 100.0 / 7.0, 1700.0 / 23.0];
        for (v, e) in dx_out.trimmed().iter().zip(expected_dx) {
            assert_relative_eq!(*v, e, epsilon = 1e-9);
        }

        let adx_out = adx(&high, &low, &close, 2).unwrap();
        assert_eq!(adx_out.lookback(), 3);
        let expected_adx = [30.0, 155.0 / 7.0, 15465.0 / 322.0];
        assert_eq!(adx_out.len(), 3);
        for (v, e) in adx_out.trimmed().iter().zip(expected_adx) {
            assert_relative_eq!(*v, e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_dx_masks_to_published_lookback() {
        let (high, low, close) = trending(40);
        let result = dx(&high, &low, &close, 14).unwrap();
        assert_eq!(result.lookback(), 26);
        assert_eq!(result.len(), 14);
    }

    #[test]
    fn test_directional_movement() {
        let (high, low, close) = trending(50);
        let result = directional_movement(&high, &low, &close, 14).unwrap();

        assert_eq!(result.plus_di.lookback(), 14);
        assert_eq!(result.adx.lookback(), 27);
        assert!(result.adx.len() < result.plus_di.len());

        // In an uptrend, +DI should be greater than -DI
        assert!(result.plus_di.at(40).unwrap() > result.minus_di.at(40).unwrap());
        assert_eq!(result.adx, adx(&high, &low, &close, 14).unwrap());
    }

    #[test]
    fn test_flat_bars_give_zero() {
        let flat = vec![5.0; 10];
        let result = directional_movement(&flat, &flat, &flat, 3).unwrap();
        assert!(result.plus_di.trimmed().iter().all(|&v| v == 0.0));
        assert!(result.minus_di.trimmed().iter().all(|&v| v == 0.0));
        assert!(result.adx.trimmed().iter().all(|&v| v == 0.0));

        let dx_out = dx(&flat, &flat, &flat, 3).unwrap();
        assert_eq!(dx_out.len(), 10 - 4);
        assert!(dx_out.trimmed().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_short_input() {
        let (high, low, close) = trending(27);
        assert!(adx(&high, &low, &close, 14).unwrap().is_empty());
        let result = directional_movement(&high, &low, &close, 14).unwrap();
        assert_eq!(result.plus_di.len(), 13);
        assert!(result.adx.is_empty());
    }
}
