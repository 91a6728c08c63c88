//! Volatility indicators: True Range, ATR, standard deviation, Bollinger Bands.

use super::lookback::{atr_lookback, bollinger_lookback, stddev_lookback, true_range_lookback};
use super::output::{insufficient, run, Output};
use super::trend::ma_values;
use crate::core::error::RaptorError;
use crate::core::series::{check_period, Hlc};
use crate::core::types::BollingerParams;
use crate::core::Result;

/// True Range of each bar against the previous close.
///
/// # Returns
/// Output with lookback 1 (the first bar has no previous close)
pub fn true_range(high: &[f64], low: &[f64], close: &[f64]) -> Result<Output> {
    let bars = Hlc::new(high, low, close)?;
    Ok(run("TRANGE", true_range_lookback(), bars.len(), || {
        (1..bars.len()).map(|i| bars.true_range_at(i)).collect()
    }))
}

/// Average True Range (ATR).
///
/// Seeded with the mean of the first `period` true ranges, then
/// `atr[i] = (atr[i-1] * (period - 1) + tr[i]) / period`.
///
/// # Arguments
/// * `high` - High prices
/// * `low` - Low prices
/// * `close` - Close prices
/// * `period` - Lookback period (default: 14)
///
/// # Returns
/// Output of ATR values with lookback `period`
pub fn atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Output> {
    let bars = Hlc::new(high, low, close)?;
    check_period("ATR period", period, 1)?;

    Ok(run("ATR", atr_lookback(period), bars.len(), || {
        let n = bars.len();
        let p = period as f64;
        let mut result = Vec::with_capacity(n - period);

        let mut value = (1..=period).map(|i| bars.true_range_at(i)).sum::<f64>() / p;
        result.push(value);

        for i in (period + 1)..n {
            value = (value * (p - 1.0) + bars.true_range_at(i)) / p;
            result.push(value);
        }
        result
    }))
}

/// Rolling population standard deviation scaled by `nb_dev`.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Window length (>= 2)
/// * `nb_dev` - Multiplier applied to the deviation
///
/// # Returns
/// Output with lookback `period - 1`
pub fn stddev(data: &[f64], period: usize, nb_dev: f64) -> Result<Output> {
    check_period("STDDEV period", period, 2)?;
    if !nb_dev.is_finite() {
        return Err(RaptorError::invalid_parameter(
            "STDDEV deviation multiplier must be finite",
        ));
    }
    Ok(run("STDDEV", stddev_lookback(period), data.len(), || {
        stddev_values(data, period)
            .into_iter()
            .map(|std| std * nb_dev)
            .collect()
    }))
}

pub(crate) fn stddev_values(data: &[f64], period: usize) -> Vec<f64> {
    data.windows(period)
        .map(|window| {
            let mean = window.iter().sum::<f64>() / period as f64;
            let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64;
            variance.sqrt()
        })
        .collect()
}

/// Bollinger Bands result. All bands share one lookback.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBandsResult {
    /// Upper band (middle + dev_up * stddev).
    pub upper: Output,
    /// Middle band (moving average).
    pub middle: Output,
    /// Lower band (middle - dev_down * stddev).
    pub lower: Output,
}

/// Bollinger Bands.
///
/// The deviation is the population standard deviation of the trailing
/// `period` window, whatever moving-average kind drives the middle band.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `params` - Period, deviation multipliers and MA kind (default: 20, 2.0, 2.0, SMA)
///
/// # Returns
/// BollingerBandsResult with upper, middle and lower bands
pub fn bollinger_bands(data: &[f64], params: BollingerParams) -> Result<BollingerBandsResult> {
    let BollingerParams {
        period,
        dev_up,
        dev_down,
        ma_type,
    } = params;
    check_period("Bollinger Bands period", period, 2)?;
    if !(dev_up.is_finite() && dev_up > 0.0 && dev_down.is_finite() && dev_down > 0.0) {
        return Err(RaptorError::invalid_parameter(
            "Bollinger Bands deviations must be finite and > 0",
        ));
    }

    let n = data.len();
    let lookback = bollinger_lookback(period, ma_type);
    if insufficient("BBANDS", lookback, n) {
        return Ok(BollingerBandsResult {
            upper: Output::empty(lookback, n),
            middle: Output::empty(lookback, n),
            lower: Output::empty(lookback, n),
        });
    }

    let middle = ma_values(data, period, ma_type);
    let std = stddev_values(data, period);
    let std = &std[lookback - stddev_lookback(period)..];

    let (upper, lower): (Vec<f64>, Vec<f64>) = middle
        .iter()
        .zip(std)
        .map(|(&mean, &sd)| (mean + dev_up * sd, mean - dev_down * sd))
        .unzip();

    Ok(BollingerBandsResult {
        upper: Output::new(upper, lookback, n),
        middle: Output::new(middle, lookback, n),
        lower: Output::new(lower, lookback, n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::MaType;
    use crate::indicators::trend::moving_average;
    use approx::assert_relative_eq;

    fn sample_hlc() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let high = vec![50.0, 51.0, 52.0, 51.5, 50.5, 51.0, 52.0, 53.0, 52.5, 51.5];
        let low = vec![48.0, 49.0, 50.0, 49.5, 48.5, 49.0, 50.0, 51.0, 50.5, 49.5];
        let close = vec![49.0, 50.0, 51.0, 50.0, 49.0, 50.0, 51.0, 52.0, 51.0, 50.0];
        (high, low, close)
    }

    #[test]
    fn test_atr() {
        let (high, low, close) = sample_hlc();
        let result = atr(&high, &low, &close, 5).unwrap();

        // ATR should be valid from index 5
        assert_eq!(result.lookback(), 5);
        let padded = result.padded();
        assert!(padded[4].is_nan());
        // Every bar in the sample has a true range of 2.
        for &v in result.trimmed() {
            assert_relative_eq!(v, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_true_range_with_gap() {
        let high = vec![10.0, 12.0, 20.0];
        let low = vec![9.0, 11.0, 18.0];
        let close = vec![9.5, 11.5, 19.0];
        let tr = true_range(&high, &low, &close).unwrap();
        assert_eq!(tr.trimmed(), &[2.5, 8.5]);

        // Period 1 reduces ATR to the true range itself.
        let result = atr(&high, &low, &close, 1).unwrap();
        assert_eq!(result.trimmed(), &[2.5, 8.5]);
    }

    #[test]
    fn test_atr_short_input() {
        let (high, low, close) = sample_hlc();
        let result = atr(&high[..5], &low[..5], &close[..5], 5).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_stddev() {
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let result = stddev(&data, 8, 1.0).unwrap();
        assert_eq!(result.len(), 1);
        assert_relative_eq!(result.trimmed()[0], 2.0, epsilon = 1e-12);

        let doubled = stddev(&data, 8, 2.0).unwrap();
        assert_relative_eq!(doubled.trimmed()[0], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bollinger_bands() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let params = BollingerParams {
            period: 3,
            ..BollingerParams::default()
        };
        let result = bollinger_bands(&data, params).unwrap();
        let sd = (2.0f64 / 3.0).sqrt();

        assert_eq!(result.middle.trimmed(), &[2.0, 3.0, 4.0]);
        assert_relative_eq!(result.upper.trimmed()[0], 2.0 + 2.0 * sd, epsilon = 1e-12);
        assert_relative_eq!(result.lower.trimmed()[0], 2.0 - 2.0 * sd, epsilon = 1e-12);
    }

    #[test]
    fn test_bollinger_bands_ordering() {
        let data: Vec<f64> = (1..=30)
            .map(|x| x as f64 + (x as f64 * 0.1).sin())
            .collect();

        let result = bollinger_bands(&data, BollingerParams::default()).unwrap();

        // Bands should be valid from index 19
        let middle = result.middle.padded();
        assert!(middle[18].is_nan());
        assert!(!middle[19].is_nan());

        for i in 19..data.len() {
            assert!(result.upper.at(i).unwrap() > result.middle.at(i).unwrap());
            assert!(result.middle.at(i).unwrap() > result.lower.at(i).unwrap());
        }
    }

    #[test]
    fn test_bollinger_middle_uses_selected_ma() {
        let data: Vec<f64> = (0..40).map(|x| (x as f64 * 0.4).cos() * 3.0 + 20.0).collect();
        for ma_type in MaType::ALL {
            let params = BollingerParams {
                period: 5,
                ma_type,
                ..BollingerParams::default()
            };
            let result = bollinger_bands(&data, params).unwrap();
            let ma = moving_average(&data, 5, ma_type).unwrap();
            assert_eq!(result.middle, ma);
            assert_eq!(result.upper.len(), ma.len());
        }
    }

    #[test]
    fn test_bollinger_invalid_deviation() {
        let data = vec![1.0; 30];
        let params = BollingerParams {
            dev_up: 0.0,
            ..BollingerParams::default()
        };
        assert!(bollinger_bands(&data, params).is_err());
    }
}
