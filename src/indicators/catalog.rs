//! Indicator catalog for configuration-driven evaluation.
//!
//! An [`Indicator`] names one indicator with its parameters and deserializes
//! from a tagged map such as `{"kind": "rsi", "period": 14}`.

use serde::{Deserialize, Serialize};

use super::lookback::*;
use super::output::Output;
use super::{momentum, rolling, strength, trend, volatility};
use crate::core::series::PriceInput;
use crate::core::types::{BollingerParams, MaType, MacdParams, OutputMode, StochasticParams};
use crate::core::Result;

/// An indicator and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Indicator {
    Sma { period: usize },
    Wma { period: usize },
    Ema { period: usize },
    Dema { period: usize },
    Tema { period: usize },
    Trima { period: usize },
    Rsi { period: usize },
    Roc { period: usize },
    Min { period: usize },
    Max { period: usize },
    StdDev { period: usize, nb_dev: f64 },
    TrueRange,
    Atr { period: usize },
    PlusDi { period: usize },
    MinusDi { period: usize },
    Dx { period: usize },
    Adx { period: usize },
    Macd(MacdParams),
    Bollinger(BollingerParams),
    Stochastic(StochasticParams),
}

/// Named output columns of one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorOutput {
    /// Leading input points without a value.
    pub lookback: usize,
    /// Column name and values, in the requested convention.
    pub columns: Vec<(&'static str, Vec<f64>)>,
}

impl IndicatorOutput {
    /// Column by name.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(column, _)| *column == name)
            .map(|(_, values)| values.as_slice())
    }
}

impl Indicator {
    /// Short uppercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Indicator::Sma { .. } => "SMA",
            Indicator::Wma { .. } => "WMA",
            Indicator::Ema { .. } => "EMA",
            Indicator::Dema { .. } => "DEMA",
            Indicator::Tema { .. } => "TEMA",
            Indicator::Trima { .. } => "TRIMA",
            Indicator::Rsi { .. } => "RSI",
            Indicator::Roc { .. } => "ROC",
            Indicator::Min { .. } => "MIN",
            Indicator::Max { .. } => "MAX",
            Indicator::StdDev { .. } => "STDDEV",
            Indicator::TrueRange => "TRANGE",
            Indicator::Atr { .. } => "ATR",
            Indicator::PlusDi { .. } => "PLUS_DI",
            Indicator::MinusDi { .. } => "MINUS_DI",
            Indicator::Dx { .. } => "DX",
            Indicator::Adx { .. } => "ADX",
            Indicator::Macd(_) => "MACD",
            Indicator::Bollinger(_) => "BBANDS",
            Indicator::Stochastic(_) => "STOCH",
        }
    }

    /// True when the indicator reads high and low as well as close.
    pub fn needs_hlc(&self) -> bool {
        matches!(
            self,
            Indicator::TrueRange
                | Indicator::Atr { .. }
                | Indicator::PlusDi { .. }
                | Indicator::MinusDi { .. }
                | Indicator::Dx { .. }
                | Indicator::Adx { .. }
                | Indicator::Stochastic(_)
        )
    }

    /// Leading input points consumed before the first value.
    pub fn lookback(&self) -> usize {
        match *self {
            Indicator::Sma { period } => sma_lookback(period),
            Indicator::Wma { period } => wma_lookback(period),
            Indicator::Ema { period } => ema_lookback(period),
            Indicator::Dema { period } => dema_lookback(period),
            Indicator::Tema { period } => tema_lookback(period),
            Indicator::Trima { period } => trima_lookback(period),
            Indicator::Rsi { period } => rsi_lookback(period),
            Indicator::Roc { period } => roc_lookback(period),
            Indicator::Min { period } | Indicator::Max { period } => rolling_lookback(period),
            Indicator::StdDev { period, .. } => stddev_lookback(period),
            Indicator::TrueRange => true_range_lookback(),
            Indicator::Atr { period } => atr_lookback(period),
            Indicator::PlusDi { period } => plus_di_lookback(period),
            Indicator::MinusDi { period } => minus_di_lookback(period),
            Indicator::Dx { period } => dx_lookback(period),
            Indicator::Adx { period } => adx_lookback(period),
            Indicator::Macd(p) => macd_lookback(p.slow_period, p.signal_period),
            Indicator::Bollinger(p) => bollinger_lookback(p.period, p.ma_type),
            Indicator::Stochastic(p) => stochastic_lookback(
                p.fast_k_period,
                p.slow_k_period,
                p.slow_k_ma,
                p.slow_d_period,
                p.slow_d_ma,
            ),
        }
    }

    /// Smallest input length producing one value.
    pub fn min_len(&self) -> usize {
        self.lookback() + 1
    }

    /// Output column names, in order.
    pub fn output_names(&self) -> &'static [&'static str] {
        match self {
            Indicator::Macd(_) => &["macd", "signal", "histogram"],
            Indicator::Bollinger(_) => &["upper", "middle", "lower"],
            Indicator::Stochastic(_) => &["slow_k", "slow_d"],
            _ => &["value"],
        }
    }

    /// Evaluate over `input` and align every column with `mode`.
    pub fn compute(&self, input: &PriceInput<'_>, mode: OutputMode) -> Result<IndicatorOutput> {
        let _span = tracing::debug_span!(
            "indicator",
            name = self.name(),
            lookback = self.lookback(),
            len = input.close.len()
        )
        .entered();

        let data = input.close;
        let outputs: Vec<Output> = match *self {
            Indicator::Sma { period } => vec![trend::moving_average(data, period, MaType::Sma)?],
            Indicator::Wma { period } => vec![trend::moving_average(data, period, MaType::Wma)?],
            Indicator::Ema { period } => vec![trend::moving_average(data, period, MaType::Ema)?],
            Indicator::Dema { period } => vec![trend::moving_average(data, period, MaType::Dema)?],
            Indicator::Tema { period } => vec![trend::moving_average(data, period, MaType::Tema)?],
            Indicator::Trima { period } => {
                vec![trend::moving_average(data, period, MaType::Trima)?]
            }
            Indicator::Rsi { period } => vec![momentum::rsi(data, period)?],
            Indicator::Roc { period } => vec![momentum::roc(data, period)?],
            Indicator::Min { period } => vec![rolling::rolling_min(data, period)?],
            Indicator::Max { period } => vec![rolling::rolling_max(data, period)?],
            Indicator::StdDev { period, nb_dev } => vec![volatility::stddev(data, period, nb_dev)?],
            Indicator::TrueRange => {
                let bars = input.as_hlc()?;
                vec![volatility::true_range(bars.high, bars.low, bars.close)?]
            }
            Indicator::Atr { period } => {
                let bars = input.as_hlc()?;
                vec![volatility::atr(bars.high, bars.low, bars.close, period)?]
            }
            Indicator::PlusDi { period } => {
                let bars = input.as_hlc()?;
                vec![strength::plus_di(bars.high, bars.low, bars.close, period)?]
            }
            Indicator::MinusDi { period } => {
                let bars = input.as_hlc()?;
                vec![strength::minus_di(bars.high, bars.low, bars.close, period)?]
            }
            Indicator::Dx { period } => {
                let bars = input.as_hlc()?;
                vec![strength::dx(bars.high, bars.low, bars.close, period)?]
            }
            Indicator::Adx { period } => {
                let bars = input.as_hlc()?;
                vec![strength::adx(bars.high, bars.low, bars.close, period)?]
            }
            Indicator::Macd(params) => {
                let result = momentum::macd(data, params)?;
                vec![result.macd_line, result.signal_line, result.histogram]
            }
            Indicator::Bollinger(params) => {
                let result = volatility::bollinger_bands(data, params)?;
                vec![result.upper, result.middle, result.lower]
            }
            Indicator::Stochastic(params) => {
                let bars = input.as_hlc()?;
                let result = momentum::stochastic(bars.high, bars.low, bars.close, params)?;
                vec![result.k, result.d]
            }
        };

        let columns = self
            .output_names()
            .iter()
            .copied()
            .zip(outputs.into_iter().map(|out| out.into_aligned(mode)))
            .collect();

        Ok(IndicatorOutput {
            lookback: self.lookback(),
            columns,
        })
    }
}
