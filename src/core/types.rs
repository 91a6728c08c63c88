//! Core configuration types for RaptorTA.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RaptorError;

/// Moving-average kind used by composite indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum MaType {
    /// Simple moving average.
    #[default]
    Sma = 0,
    /// Exponential moving average.
    Ema = 1,
    /// Linearly weighted moving average.
    Wma = 2,
    /// Double exponential moving average.
    Dema = 3,
    /// Triple exponential moving average.
    Tema = 4,
    /// Triangular moving average.
    Trima = 5,
}

impl MaType {
    /// All supported kinds, in code order.
    pub const ALL: [MaType; 6] = [
        MaType::Sma,
        MaType::Ema,
        MaType::Wma,
        MaType::Dema,
        MaType::Tema,
        MaType::Trima,
    ];

    /// Create from integer code.
    pub fn from_int(value: i32) -> Option<Self> {
        match value {
            0 => Some(MaType::Sma),
            1 => Some(MaType::Ema),
            2 => Some(MaType::Wma),
            3 => Some(MaType::Dema),
            4 => Some(MaType::Tema),
            5 => Some(MaType::Trima),
            _ => None,
        }
    }

    /// Short uppercase name.
    pub fn name(self) -> &'static str {
        match self {
            MaType::Sma => "SMA",
            MaType::Ema => "EMA",
            MaType::Wma => "WMA",
            MaType::Dema => "DEMA",
            MaType::Tema => "TEMA",
            MaType::Trima => "TRIMA",
        }
    }
}

impl fmt::Display for MaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaType {
    type Err = RaptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RaptorError::invalid_parameter(format!("unknown MA type: {s}")))
    }
}

/// How the warm-up region is represented in returned series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Only computed values; the first value belongs to input index `lookback`.
    Trimmed,
    /// Input-length output with `NaN` in the warm-up region.
    #[default]
    Padded,
}

/// MACD periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdParams {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

/// Bollinger Bands configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerParams {
    pub period: usize,
    pub dev_up: f64,
    pub dev_down: f64,
    pub ma_type: MaType,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            dev_up: 2.0,
            dev_down: 2.0,
            ma_type: MaType::Sma,
        }
    }
}

/// Stochastic oscillator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StochasticParams {
    pub fast_k_period: usize,
    pub slow_k_period: usize,
    pub slow_k_ma: MaType,
    pub slow_d_period: usize,
    pub slow_d_ma: MaType,
}

impl Default for StochasticParams {
    fn default() -> Self {
        Self {
            fast_k_period: 5,
            slow_k_period: 3,
            slow_k_ma: MaType::Sma,
            slow_d_period: 3,
            slow_d_ma: MaType::Sma,
        }
    }
}
