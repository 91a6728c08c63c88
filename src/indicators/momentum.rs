//! Momentum indicators: RSI, ROC, MACD, Stochastic.

use super::lookback::{
    fast_k_lookback, ma_lookback, macd_lookback, roc_lookback, rsi_lookback, stochastic_lookback,
};
use super::output::{insufficient, run, Output};
use super::rolling::{rolling_max_values, rolling_min_values};
use super::trend::{ema_values, ma_values};
use crate::core::error::RaptorError;
use crate::core::series::{check_period, Hlc};
use crate::core::types::{MacdParams, StochasticParams};
use crate::core::Result;

/// Relative Strength Index (RSI).
///
/// Average gain and loss are seeded with the mean of the first `period`
/// price changes and then Wilder-smoothed. A zero average loss gives 100.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `period` - Lookback period (default: 14)
///
/// # Returns
/// Output of RSI values (0-100 scale) with lookback `period`
pub fn rsi(data: &[f64], period: usize) -> Result<Output> {
    check_period("RSI period", period, 2)?;
    Ok(run("RSI", rsi_lookback(period), data.len(), || {
        rsi_values(data, period)
    }))
}

fn rsi_values(data: &[f64], period: usize) -> Vec<f64> {
    let n = data.len();
    let p = period as f64;
    let mut result = Vec::with_capacity(n - period);

    let split = |i: usize| {
        let change = data[i] - data[i - 1];
        if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        }
    };

    // Calculate initial average gain/loss using SMA
    let (mut avg_gain, mut avg_loss) = (1..=period)
        .map(split)
        .fold((0.0, 0.0), |(g, l), (gain, loss)| (g + gain, l + loss));
    avg_gain /= p;
    avg_loss /= p;
    result.push(rsi_from_averages(avg_gain, avg_loss));

    // Wilder's smoothing for remaining values
    for i in (period + 1)..n {
        let (gain, loss) = split(i);
        avg_gain = (avg_gain * (p - 1.0) + gain) / p;
        avg_loss = (avg_loss * (p - 1.0) + loss) / p;
        result.push(rsi_from_averages(avg_gain, avg_loss));
    }

    result
}

#[inline]
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

/// Rate of Change: `(x[i] / x[i - period] - 1) * 100`.
///
/// A zero base propagates IEEE infinity or NaN.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Distance to the reference point (default: 10)
///
/// # Returns
/// Output of percentage changes with lookback `period`
pub fn roc(data: &[f64], period: usize) -> Result<Output> {
    check_period("ROC period", period, 1)?;
    Ok(run("ROC", roc_lookback(period), data.len(), || {
        data.iter()
            .zip(&data[period..])
            .map(|(&base, &x)| (x / base - 1.0) * 100.0)
            .collect()
    }))
}

/// MACD result structure. All three outputs share one lookback.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdResult {
    /// MACD line (fast EMA - slow EMA).
    pub macd_line: Output,
    /// Signal line (EMA of MACD line).
    pub signal_line: Output,
    /// Histogram (MACD line - signal line).
    pub histogram: Output,
}

/// Shared MACD lookback after validating the periods the way [`macd`] does.
pub fn macd_checked_lookback(params: MacdParams) -> Result<usize> {
    check_period("MACD fast period", params.fast_period, 2)?;
    check_period("MACD slow period", params.slow_period, 2)?;
    check_period("MACD signal period", params.signal_period, 1)?;
    if params.fast_period >= params.slow_period {
        return Err(RaptorError::invalid_parameter(
            "MACD fast period must be < slow period",
        ));
    }
    Ok(macd_lookback(params.slow_period, params.signal_period))
}

/// Moving Average Convergence Divergence (MACD).
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `params` - Fast, slow and signal periods (default: 12, 26, 9)
///
/// # Returns
/// MacdResult aligned to lookback `slow + signal - 2`
pub fn macd(data: &[f64], params: MacdParams) -> Result<MacdResult> {
    let MacdParams {
        fast_period,
        slow_period,
        signal_period,
    } = params;
    let lookback = macd_checked_lookback(params)?;

    let n = data.len();
    if insufficient("MACD", lookback, n) {
        return Ok(MacdResult {
            macd_line: Output::empty(lookback, n),
            signal_line: Output::empty(lookback, n),
            histogram: Output::empty(lookback, n),
        });
    }

    // Fast EMA starts (slow - fast) points before the slow EMA.
    let fast_ema = ema_values(data, fast_period);
    let slow_ema = ema_values(data, slow_period);
    let shift = slow_period - fast_period;
    let line: Vec<f64> = slow_ema
        .iter()
        .enumerate()
        .map(|(j, &slow)| fast_ema[j + shift] - slow)
        .collect();

    let signal = ema_values(&line, signal_period);
    let line = line[signal_period - 1..].to_vec();
    let histogram = line.iter().zip(&signal).map(|(m, s)| m - s).collect();

    Ok(MacdResult {
        macd_line: Output::new(line, lookback, n),
        signal_line: Output::new(signal, lookback, n),
        histogram: Output::new(histogram, lookback, n),
    })
}

/// Stochastic oscillator result. Both lines share one lookback.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticResult {
    /// Slow %K (smoothed raw %K).
    pub k: Output,
    /// Slow %D (smoothed slow %K).
    pub d: Output,
}

/// Stochastic Oscillator.
///
/// Raw %K compares the close with the `fast_k_period` high/low range; a flat
/// range gives 0. Slow %K and slow %D are moving averages of the selected kinds.
///
/// # Arguments
/// * `high` - High prices
/// * `low` - Low prices
/// * `close` - Close prices
/// * `params` - Periods and MA kinds (default: 5, 3 SMA, 3 SMA)
///
/// # Returns
/// StochasticResult with slow %K and slow %D (0-100 scale)
pub fn stochastic(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    params: StochasticParams,
) -> Result<StochasticResult> {
    let bars = Hlc::new(high, low, close)?;
    let StochasticParams {
        fast_k_period,
        slow_k_period,
        slow_k_ma,
        slow_d_period,
        slow_d_ma,
    } = params;
    check_period("Stochastic fast %K period", fast_k_period, 1)?;
    check_period("Stochastic slow %K period", slow_k_period, 1)?;
    check_period("Stochastic slow %D period", slow_d_period, 1)?;

    let n = bars.len();
    let lookback = stochastic_lookback(
        fast_k_period,
        slow_k_period,
        slow_k_ma,
        slow_d_period,
        slow_d_ma,
    );
    if insufficient("STOCH", lookback, n) {
        return Ok(StochasticResult {
            k: Output::empty(lookback, n),
            d: Output::empty(lookback, n),
        });
    }

    let highest = rolling_max_values(bars.high, fast_k_period);
    let lowest = rolling_min_values(bars.low, fast_k_period);
    let offset = fast_k_lookback(fast_k_period);

    let raw_k: Vec<f64> = highest
        .iter()
        .zip(&lowest)
        .enumerate()
        .map(|(j, (&hh, &ll))| {
            let range = hh - ll;
            if range > 0.0 {
                ((bars.close[j + offset] - ll) / range) * 100.0
            } else {
                0.0
            }
        })
        .collect();

    let slow_k = ma_values(&raw_k, slow_k_period, slow_k_ma);
    let slow_d = ma_values(&slow_k, slow_d_period, slow_d_ma);
    let slow_k = slow_k[ma_lookback(slow_d_ma, slow_d_period)..].to_vec();

    Ok(StochasticResult {
        k: Output::new(slow_k, lookback, n),
        d: Output::new(slow_d, lookback, n),
    })
}
