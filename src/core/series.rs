//! Input series views and parameter checks shared by all indicators.

use super::error::{RaptorError, Result};

/// Type alias for price values.
pub type Price = f64;

/// Largest period any indicator accepts.
pub const MAX_PERIOD: usize = 100_000;

/// Validate a period against `min..=MAX_PERIOD`.
#[inline]
pub fn check_period(name: &'static str, value: usize, min: usize) -> Result<()> {
    if value < min || value > MAX_PERIOD {
        return Err(RaptorError::period_out_of_range(name, value, min, MAX_PERIOD));
    }
    Ok(())
}

/// Borrowed high/low/close series of equal length.
#[derive(Debug, Clone, Copy)]
pub struct Hlc<'a> {
    pub high: &'a [Price],
    pub low: &'a [Price],
    pub close: &'a [Price],
}

impl<'a> Hlc<'a> {
    /// Bundle three series, failing when their lengths differ.
    ///
    /// `high[i] >= low[i]` is assumed, not verified.
    pub fn new(high: &'a [Price], low: &'a [Price], close: &'a [Price]) -> Result<Self> {
        let n = close.len();
        if high.len() != n {
            return Err(RaptorError::length_mismatch(n, high.len()));
        }
        if low.len() != n {
            return Err(RaptorError::length_mismatch(n, low.len()));
        }
        Ok(Self { high, low, close })
    }

    /// Number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// True range of bar `i` against the previous close. Requires `i >= 1`.
    #[inline]
    pub fn true_range_at(&self, i: usize) -> f64 {
        true_range(self.high[i], self.low[i], self.close[i - 1])
    }
}

/// True Range calculation (single bar).
#[inline]
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// Single-series and H/L/C inputs for dynamic dispatch.
///
/// Single-series indicators read `close`.
#[derive(Debug, Clone, Copy)]
pub struct PriceInput<'a> {
    pub high: Option<&'a [Price]>,
    pub low: Option<&'a [Price]>,
    pub close: &'a [Price],
}

impl<'a> PriceInput<'a> {
    /// Input carrying only one series.
    pub fn series(close: &'a [Price]) -> Self {
        Self {
            high: None,
            low: None,
            close,
        }
    }

    /// Input carrying high, low and close.
    pub fn hlc(high: &'a [Price], low: &'a [Price], close: &'a [Price]) -> Self {
        Self {
            high: Some(high),
            low: Some(low),
            close,
        }
    }

    /// View as an H/L/C bundle.
    pub fn as_hlc(&self) -> Result<Hlc<'a>> {
        let high = self.high.ok_or(RaptorError::missing_series("high"))?;
        let low = self.low.ok_or(RaptorError::missing_series("low"))?;
        Hlc::new(high, low, self.close)
    }
}
