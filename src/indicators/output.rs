//! Output alignment.
//!
//! Every indicator produces a raw run of computed values plus the number of
//! leading input points it consumed. The caller then picks a convention:
//! trimmed (only computed values) or padded (input length, `NaN` warm-up).

use crate::core::types::OutputMode;

/// Marker stored in the warm-up region of padded output.
pub const NOT_COMPUTED: f64 = f64::NAN;

/// Computed run of one indicator output.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    values: Vec<f64>,
    lookback: usize,
    input_len: usize,
}

impl Output {
    /// Wrap a raw run.
    ///
    /// `values` must hold exactly `input_len - lookback` entries (or none when
    /// the input is too short).
    pub fn new(values: Vec<f64>, lookback: usize, input_len: usize) -> Self {
        debug_assert_eq!(values.len(), input_len.saturating_sub(lookback));
        Self {
            values,
            lookback,
            input_len,
        }
    }

    /// Run with no computed values.
    pub fn empty(lookback: usize, input_len: usize) -> Self {
        debug_assert!(input_len <= lookback);
        Self {
            values: Vec::new(),
            lookback,
            input_len,
        }
    }

    /// Leading input points without a value.
    #[inline]
    pub fn lookback(&self) -> usize {
        self.lookback
    }

    /// Length of the input series.
    #[inline]
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Number of computed values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing was computed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Computed values; index 0 corresponds to input index `lookback`.
    #[inline]
    pub fn trimmed(&self) -> &[f64] {
        &self.values
    }

    /// Consume into the trimmed run.
    pub fn into_trimmed(self) -> Vec<f64> {
        self.values
    }

    /// Input-length series with [`NOT_COMPUTED`] in the warm-up region.
    pub fn padded(&self) -> Vec<f64> {
        pad(&self.values, self.input_len)
    }

    /// Series in the requested convention.
    pub fn aligned(&self, mode: OutputMode) -> Vec<f64> {
        match mode {
            OutputMode::Trimmed => self.values.clone(),
            OutputMode::Padded => self.padded(),
        }
    }

    /// Consume into the requested convention.
    pub fn into_aligned(self, mode: OutputMode) -> Vec<f64> {
        match mode {
            OutputMode::Trimmed => self.values,
            OutputMode::Padded => self.padded(),
        }
    }

    /// Value at input index `index`, if computed.
    pub fn at(&self, index: usize) -> Option<f64> {
        index
            .checked_sub(self.lookback)
            .and_then(|i| self.values.get(i).copied())
    }

    /// Drop leading values so the run starts at input index `lookback`.
    pub(crate) fn advance_to(mut self, lookback: usize) -> Self {
        debug_assert!(lookback >= self.lookback);
        let skip = (lookback - self.lookback).min(self.values.len());
        self.values.drain(..skip);
        self.lookback = lookback;
        self
    }
}

/// Left-pad a trimmed run with [`NOT_COMPUTED`] to `len` entries.
pub fn pad(values: &[f64], len: usize) -> Vec<f64> {
    debug_assert!(values.len() <= len);
    let mut out = vec![NOT_COMPUTED; len - values.len()];
    out.extend_from_slice(values);
    out
}

/// Build a run from raw values that start at input index `lookback`, or an
/// empty run when the input is too short.
pub(crate) fn run(
    indicator: &'static str,
    lookback: usize,
    input_len: usize,
    compute: impl FnOnce() -> Vec<f64>,
) -> Output {
    if insufficient(indicator, lookback, input_len) {
        return Output::empty(lookback, input_len);
    }
    Output::new(compute(), lookback, input_len)
}

/// True when `input_len` points cannot produce a value.
pub(crate) fn insufficient(indicator: &'static str, lookback: usize, input_len: usize) -> bool {
    if input_len <= lookback {
        tracing::trace!(indicator, lookback, input_len, "insufficient data, empty run");
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_and_trimmed() {
        let out = Output::new(vec![2.0, 3.0, 4.0], 2, 5);
        assert_eq!(out.trimmed(), &[2.0, 3.0, 4.0]);
        let padded = out.padded();
        assert_eq!(padded.len(), 5);
        assert!(padded[0].is_nan());
        assert!(padded[1].is_nan());
        assert_eq!(&padded[2..], &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_at_maps_input_index() {
        let out = Output::new(vec![2.0, 3.0], 3, 5);
        assert_eq!(out.at(2), None);
        assert_eq!(out.at(3), Some(2.0));
        assert_eq!(out.at(4), Some(3.0));
        assert_eq!(out.at(5), None);
    }

    #[test]
    fn test_empty_run_pads_to_all_nan() {
        let out = run("test", 4, 3, || unreachable!());
        assert!(out.is_empty());
        assert_eq!(out.aligned(OutputMode::Trimmed).len(), 0);
        let padded = out.aligned(OutputMode::Padded);
        assert_eq!(padded.len(), 3);
        assert!(padded.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_advance_to() {
        let out = Output::new(vec![1.0, 2.0, 3.0, 4.0], 1, 5).advance_to(3);
        assert_eq!(out.lookback(), 3);
        assert_eq!(out.trimmed(), &[3.0, 4.0]);

        let short = Output::new(vec![1.0], 1, 2).advance_to(3);
        assert!(short.is_empty());
        assert_eq!(short.padded().len(), 2);
    }
}
