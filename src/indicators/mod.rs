//! Technical indicators for RaptorTA.
//!
//! All indicators are pure functions that take slice inputs and return an
//! [`Output`] holding the computed run and its lookback. Callers choose the
//! trimmed or `NaN`-padded form from that run.

pub mod catalog;
pub mod lookback;
pub mod momentum;
pub mod output;
pub mod rolling;
pub mod strength;
pub mod trend;
pub mod volatility;

pub use catalog::{Indicator, IndicatorOutput};
pub use momentum::{
    macd, macd_checked_lookback, roc, rsi, stochastic, MacdResult, StochasticResult,
};
pub use output::{pad, Output, NOT_COMPUTED};
pub use rolling::{rolling_max, rolling_min};
pub use strength::{adx, directional_movement, dx, minus_di, plus_di, DirectionalIndexResult};
pub use trend::{dema, ema, moving_average, sma, tema, trima, wma};
pub use volatility::{atr, bollinger_bands, stddev, true_range, BollingerBandsResult};
