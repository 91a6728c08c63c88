//! Numpy array interface.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::core::types::OutputMode;
use crate::indicators::Output;

/// Borrow a contiguous numpy array as a slice.
pub fn numpy_slice<'a>(arr: &'a PyReadonlyArray1<'_, f64>) -> PyResult<&'a [f64]> {
    Ok(arr.as_slice()?)
}

/// Convert Vec<f64> to numpy array.
pub fn vec_to_numpy_f64<'py>(py: Python<'py>, vec: Vec<f64>) -> &'py PyArray1<f64> {
    PyArray1::from_vec(py, vec)
}

/// Output convention selected by the `trimmed` keyword.
#[inline]
pub fn output_mode(trimmed: bool) -> OutputMode {
    if trimmed {
        OutputMode::Trimmed
    } else {
        OutputMode::Padded
    }
}

/// Convert an indicator output to a numpy array in the selected convention.
pub fn output_to_numpy<'py>(py: Python<'py>, output: Output, trimmed: bool) -> &'py PyArray1<f64> {
    vec_to_numpy_f64(py, output.into_aligned(output_mode(trimmed)))
}
