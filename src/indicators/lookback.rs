//! Warm-up lengths.
//!
//! Each function returns the number of leading input points an indicator
//! consumes before its first output. An input of length `n` yields
//! `valid_output_count(n, lookback)` values.

use crate::core::types::MaType;

/// Number of computed values for an input of `input_len` points.
#[inline]
pub const fn valid_output_count(input_len: usize, lookback: usize) -> usize {
    input_len.saturating_sub(lookback)
}

#[inline]
pub const fn sma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

#[inline]
pub const fn wma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

#[inline]
pub const fn ema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

#[inline]
pub const fn dema_lookback(period: usize) -> usize {
    2 * ema_lookback(period)
}

#[inline]
pub const fn tema_lookback(period: usize) -> usize {
    3 * ema_lookback(period)
}

/// TRIMA runs two SMAs whose periods sum to `period + 1`.
#[inline]
pub const fn trima_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Lookback of a moving average of the given kind.
pub const fn ma_lookback(kind: MaType, period: usize) -> usize {
    match kind {
        MaType::Sma => sma_lookback(period),
        MaType::Ema => ema_lookback(period),
        MaType::Wma => wma_lookback(period),
        MaType::Dema => dema_lookback(period),
        MaType::Tema => tema_lookback(period),
        MaType::Trima => trima_lookback(period),
    }
}

/// RSI needs `period` price changes, hence `period + 1` prices.
#[inline]
pub const fn rsi_lookback(period: usize) -> usize {
    period
}

#[inline]
pub const fn roc_lookback(period: usize) -> usize {
    period
}

/// True range needs the previous close.
#[inline]
pub const fn true_range_lookback() -> usize {
    1
}

#[inline]
pub const fn atr_lookback(period: usize) -> usize {
    period
}

#[inline]
pub const fn plus_di_lookback(period: usize) -> usize {
    period
}

#[inline]
pub const fn minus_di_lookback(period: usize) -> usize {
    period
}

#[inline]
pub const fn dx_lookback(period: usize) -> usize {
    (2 * period).saturating_sub(2)
}

/// ADX seeds its average with `period` DX values starting at index `period`.
#[inline]
pub const fn adx_lookback(period: usize) -> usize {
    (2 * period).saturating_sub(1)
}

/// Lookback of the MACD line alone.
#[inline]
pub const fn macd_line_lookback(slow_period: usize) -> usize {
    ema_lookback(slow_period)
}

/// Shared lookback of MACD line, signal and histogram.
#[inline]
pub const fn macd_lookback(slow_period: usize, signal_period: usize) -> usize {
    macd_line_lookback(slow_period) + ema_lookback(signal_period)
}

#[inline]
pub const fn stddev_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

#[inline]
pub const fn bollinger_lookback(period: usize, ma_type: MaType) -> usize {
    ma_lookback(ma_type, period)
}

#[inline]
pub const fn rolling_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Lookback of raw %K.
#[inline]
pub const fn fast_k_lookback(fast_k_period: usize) -> usize {
    rolling_lookback(fast_k_period)
}

/// Shared lookback of slow %K and slow %D.
pub const fn stochastic_lookback(
    fast_k_period: usize,
    slow_k_period: usize,
    slow_k_ma: MaType,
    slow_d_period: usize,
    slow_d_ma: MaType,
) -> usize {
    fast_k_lookback(fast_k_period)
        + ma_lookback(slow_k_ma, slow_k_period)
        + ma_lookback(slow_d_ma, slow_d_period)
}

/// Lookback of a single-period indicator by its short name, case-insensitive.
///
/// `TRANGE` ignores `period`; `BBANDS` assumes an SMA middle band.
pub fn period_lookback(name: &str, period: usize) -> Option<usize> {
    let value = match name.to_ascii_uppercase().as_str() {
        "SMA" => sma_lookback(period),
        "WMA" => wma_lookback(period),
        "EMA" => ema_lookback(period),
        "DEMA" => dema_lookback(period),
        "TEMA" => tema_lookback(period),
        "TRIMA" => trima_lookback(period),
        "RSI" => rsi_lookback(period),
        "ROC" => roc_lookback(period),
        "TRANGE" => true_range_lookback(),
        "ATR" => atr_lookback(period),
        "PLUS_DI" => plus_di_lookback(period),
        "MINUS_DI" => minus_di_lookback(period),
        "DX" => dx_lookback(period),
        "ADX" => adx_lookback(period),
        "STDDEV" => stddev_lookback(period),
        "MIN" | "MAX" => rolling_lookback(period),
        "BBANDS" => bollinger_lookback(period, MaType::Sma),
        _ => return None,
    };
    Some(value)
}
