//! PyO3 function bindings for RaptorTA.
//!
//! Every indicator returns `NaN`-padded arrays by default; pass
//! `trimmed=True` to receive only the computed values.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::types::{BollingerParams, MaType, MacdParams, StochasticParams};
use crate::indicators::{self, lookback};

use super::numpy_bridge::*;

type Array<'py> = &'py PyArray1<f64>;

fn ma_type_from_code(code: i32) -> PyResult<MaType> {
    MaType::from_int(code)
        .ok_or_else(|| PyValueError::new_err(format!("unknown MA type code: {code}")))
}

// ============================================================================
// Single-series indicators
// ============================================================================

/// Simple Moving Average.
#[pyfunction]
#[pyo3(signature = (data, period=30, trimmed=false))]
pub fn sma<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::sma(numpy_slice(&data)?, period)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Weighted Moving Average.
#[pyfunction]
#[pyo3(signature = (data, period=30, trimmed=false))]
pub fn wma<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::wma(numpy_slice(&data)?, period)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Exponential Moving Average.
#[pyfunction]
#[pyo3(signature = (data, period=30, trimmed=false))]
pub fn ema<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::ema(numpy_slice(&data)?, period)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Double Exponential Moving Average.
#[pyfunction]
#[pyo3(signature = (data, period=30, trimmed=false))]
pub fn dema<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::dema(numpy_slice(&data)?, period)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Triple Exponential Moving Average.
#[pyfunction]
#[pyo3(signature = (data, period=30, trimmed=false))]
pub fn tema<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::tema(numpy_slice(&data)?, period)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Triangular Moving Average.
#[pyfunction]
#[pyo3(signature = (data, period=30, trimmed=false))]
pub fn trima<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::trima(numpy_slice(&data)?, period)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Moving average selected by integer code (0=SMA, 1=EMA, 2=WMA, 3=DEMA, 4=TEMA, 5=TRIMA).
#[pyfunction]
#[pyo3(signature = (data, period=30, ma_type=0, trimmed=false))]
pub fn ma<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    ma_type: i32,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result =
        indicators::moving_average(numpy_slice(&data)?, period, ma_type_from_code(ma_type)?)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Relative Strength Index.
#[pyfunction]
#[pyo3(signature = (data, period=14, trimmed=false))]
pub fn rsi<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::rsi(numpy_slice(&data)?, period)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Rate of Change.
#[pyfunction]
#[pyo3(signature = (data, period=10, trimmed=false))]
pub fn roc<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::roc(numpy_slice(&data)?, period)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Lowest value over a rolling window.
#[pyfunction]
#[pyo3(signature = (data, period=30, trimmed=false))]
pub fn rolling_min<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::rolling_min(numpy_slice(&data)?, period)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Highest value over a rolling window.
#[pyfunction]
#[pyo3(signature = (data, period=30, trimmed=false))]
pub fn rolling_max<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::rolling_max(numpy_slice(&data)?, period)?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Population standard deviation scaled by `nb_dev`.
#[pyfunction]
#[pyo3(signature = (data, period=5, nb_dev=1.0, trimmed=false))]
pub fn stddev<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    nb_dev: f64,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::stddev(numpy_slice(&data)?, period, nb_dev)?;
    Ok(output_to_numpy(py, result, trimmed))
}

// ============================================================================
// H/L/C indicators
// ============================================================================

/// True Range.
#[pyfunction]
#[pyo3(signature = (high, low, close, trimmed=false))]
pub fn true_range<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<f64>,
    low: PyReadonlyArray1<f64>,
    close: PyReadonlyArray1<f64>,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::true_range(
        numpy_slice(&high)?,
        numpy_slice(&low)?,
        numpy_slice(&close)?,
    )?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Average True Range.
#[pyfunction]
#[pyo3(signature = (high, low, close, period=14, trimmed=false))]
pub fn atr<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<f64>,
    low: PyReadonlyArray1<f64>,
    close: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::atr(
        numpy_slice(&high)?,
        numpy_slice(&low)?,
        numpy_slice(&close)?,
        period,
    )?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Positive Directional Indicator.
#[pyfunction]
#[pyo3(signature = (high, low, close, period=14, trimmed=false))]
pub fn plus_di<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<f64>,
    low: PyReadonlyArray1<f64>,
    close: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::plus_di(
        numpy_slice(&high)?,
        numpy_slice(&low)?,
        numpy_slice(&close)?,
        period,
    )?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Negative Directional Indicator.
#[pyfunction]
#[pyo3(signature = (high, low, close, period=14, trimmed=false))]
pub fn minus_di<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<f64>,
    low: PyReadonlyArray1<f64>,
    close: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::minus_di(
        numpy_slice(&high)?,
        numpy_slice(&low)?,
        numpy_slice(&close)?,
        period,
    )?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Directional Movement Index.
#[pyfunction]
#[pyo3(signature = (high, low, close, period=14, trimmed=false))]
pub fn dx<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<f64>,
    low: PyReadonlyArray1<f64>,
    close: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::dx(
        numpy_slice(&high)?,
        numpy_slice(&low)?,
        numpy_slice(&close)?,
        period,
    )?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Average Directional Index.
#[pyfunction]
#[pyo3(signature = (high, low, close, period=14, trimmed=false))]
pub fn adx<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<f64>,
    low: PyReadonlyArray1<f64>,
    close: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<Array<'py>> {
    let result = indicators::adx(
        numpy_slice(&high)?,
        numpy_slice(&low)?,
        numpy_slice(&close)?,
        period,
    )?;
    Ok(output_to_numpy(py, result, trimmed))
}

/// Directional movement system in one pass. Returns (plus_di, minus_di, adx).
#[pyfunction]
#[pyo3(signature = (high, low, close, period=14, trimmed=false))]
pub fn directional_movement<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<f64>,
    low: PyReadonlyArray1<f64>,
    close: PyReadonlyArray1<f64>,
    period: usize,
    trimmed: bool,
) -> PyResult<(Array<'py>, Array<'py>, Array<'py>)> {
    let result = indicators::directional_movement(
        numpy_slice(&high)?,
        numpy_slice(&low)?,
        numpy_slice(&close)?,
        period,
    )?;
    Ok((
        output_to_numpy(py, result.plus_di, trimmed),
        output_to_numpy(py, result.minus_di, trimmed),
        output_to_numpy(py, result.adx, trimmed),
    ))
}

// ============================================================================
// Composite indicators
// ============================================================================

/// MACD indicator. Returns (macd, signal, histogram).
#[pyfunction]
#[pyo3(signature = (data, fast_period=12, slow_period=26, signal_period=9, trimmed=false))]
pub fn macd<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    trimmed: bool,
) -> PyResult<(Array<'py>, Array<'py>, Array<'py>)> {
    let params = MacdParams {
        fast_period,
        slow_period,
        signal_period,
    };
    let result = indicators::macd(numpy_slice(&data)?, params)?;
    Ok((
        output_to_numpy(py, result.macd_line, trimmed),
        output_to_numpy(py, result.signal_line, trimmed),
        output_to_numpy(py, result.histogram, trimmed),
    ))
}

/// Bollinger Bands. Returns (upper, middle, lower).
#[pyfunction]
#[pyo3(signature = (data, period=20, dev_up=2.0, dev_down=2.0, ma_type=0, trimmed=false))]
pub fn bollinger_bands<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
    dev_up: f64,
    dev_down: f64,
    ma_type: i32,
    trimmed: bool,
) -> PyResult<(Array<'py>, Array<'py>, Array<'py>)> {
    let params = BollingerParams {
        period,
        dev_up,
        dev_down,
        ma_type: ma_type_from_code(ma_type)?,
    };
    let result = indicators::bollinger_bands(numpy_slice(&data)?, params)?;
    Ok((
        output_to_numpy(py, result.upper, trimmed),
        output_to_numpy(py, result.middle, trimmed),
        output_to_numpy(py, result.lower, trimmed),
    ))
}

/// Stochastic oscillator. Returns (slow_k, slow_d).
#[pyfunction]
#[pyo3(signature = (
    high,
    low,
    close,
    fast_k_period=5,
    slow_k_period=3,
    slow_k_ma=0,
    slow_d_period=3,
    slow_d_ma=0,
    trimmed=false
))]
#[allow(clippy::too_many_arguments)]
pub fn stochastic<'py>(
    py: Python<'py>,
    high: PyReadonlyArray1<f64>,
    low: PyReadonlyArray1<f64>,
    close: PyReadonlyArray1<f64>,
    fast_k_period: usize,
    slow_k_period: usize,
    slow_k_ma: i32,
    slow_d_period: usize,
    slow_d_ma: i32,
    trimmed: bool,
) -> PyResult<(Array<'py>, Array<'py>)> {
    let params = StochasticParams {
        fast_k_period,
        slow_k_period,
        slow_k_ma: ma_type_from_code(slow_k_ma)?,
        slow_d_period,
        slow_d_ma: ma_type_from_code(slow_d_ma)?,
    };
    let result = indicators::stochastic(
        numpy_slice(&high)?,
        numpy_slice(&low)?,
        numpy_slice(&close)?,
        params,
    )?;
    Ok((
        output_to_numpy(py, result.k, trimmed),
        output_to_numpy(py, result.d, trimmed),
    ))
}

// ============================================================================
// Lookback functions
// ============================================================================

/// Lookback of a single-period indicator, by name.
#[pyfunction]
pub fn period_lookback(name: &str, period: usize) -> PyResult<usize> {
    lookback::period_lookback(name, period)
        .ok_or_else(|| PyValueError::new_err(format!("unknown indicator: {name}")))
}

/// Lookback of MACD. Raises if `fast_period >= slow_period`.
#[pyfunction]
#[pyo3(signature = (fast_period=12, slow_period=26, signal_period=9))]
pub fn macd_lookback(
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> PyResult<usize> {
    let params = MacdParams {
        fast_period,
        slow_period,
        signal_period,
    };
    Ok(indicators::macd_checked_lookback(params)?)
}

/// Lookback of the stochastic oscillator.
#[pyfunction]
#[pyo3(signature = (fast_k_period=5, slow_k_period=3, slow_k_ma=0, slow_d_period=3, slow_d_ma=0))]
pub fn stochastic_lookback(
    fast_k_period: usize,
    slow_k_period: usize,
    slow_k_ma: i32,
    slow_d_period: usize,
    slow_d_ma: i32,
) -> PyResult<usize> {
    Ok(lookback::stochastic_lookback(
        fast_k_period,
        slow_k_period,
        ma_type_from_code(slow_k_ma)?,
        slow_d_period,
        ma_type_from_code(slow_d_ma)?,
    ))
}
