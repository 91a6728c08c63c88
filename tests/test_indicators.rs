//! Integration tests for RaptorTA indicators.

use approx::assert_relative_eq;
use raptorta::core::series::PriceInput;
use raptorta::core::types::{BollingerParams, MaType, MacdParams, OutputMode, StochasticParams};
use raptorta::indicators::momentum::{macd, roc, rsi, stochastic};
use raptorta::indicators::output::pad;
use raptorta::indicators::strength::{adx, directional_movement, dx, minus_di, plus_di};
use raptorta::indicators::trend::{ema, sma, wma};
use raptorta::indicators::volatility::{atr, bollinger_bands};
use raptorta::indicators::Indicator;

fn sample_hlc() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    // Create sample H/L/C data with 50 bars
    let n = 50;
    let mut close: Vec<f64> = vec![100.0];
    let mut high: Vec<f64> = vec![101.0];
    let mut low: Vec<f64> = vec![99.0];

    // Generate trending data
    for i in 1..n {
        let prev_close = close[i - 1];
        let change = ((i as f64 * 0.2).sin() * 2.0) + 0.5; // Slight uptrend with oscillation
        let new_close = prev_close + change;
        close.push(new_close);
        high.push(new_close.max(prev_close) + 0.5);
        low.push(new_close.min(prev_close) - 0.5);
    }

    (high, low, close)
}

#[test]
fn test_sma_correctness() {
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    let result = sma(&data, 3).unwrap().padded();

    // First 2 values should be NaN
    assert!(result[0].is_nan());
    assert!(result[1].is_nan());

    // SMA(3) for [1,2,3] = 2.0
    assert!((result[2] - 2.0).abs() < 1e-10);
    // SMA(3) for [2,3,4] = 3.0
    assert!((result[3] - 3.0).abs() < 1e-10);
    // SMA(3) for [8,9,10] = 9.0
    assert!((result[9] - 9.0).abs() < 1e-10);
}

#[test]
fn test_sma_increasing_on_progression() {
    let data: Vec<f64> = (0..30).map(|x| 3.0 + 0.5 * x as f64).collect();
    let result = sma(&data, 7).unwrap();
    for pair in result.trimmed().windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_wma_third_value() {
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let result = wma(&data, 3).unwrap().padded();
    assert_relative_eq!(result[2], 14.0 / 6.0, epsilon = 1e-12);
}

#[test]
fn test_ema_first_value_is_sma() {
    let (_, _, close) = sample_hlc();
    for period in [2, 5, 12, 26] {
        let e = ema(&close, period).unwrap();
        let s = sma(&close, period).unwrap();
        assert_eq!(e.lookback(), s.lookback());
        assert_relative_eq!(e.trimmed()[0], s.trimmed()[0], epsilon = 1e-12);
    }
}

#[test]
fn test_rsi_range() {
    let (_, _, close) = sample_hlc();
    let result = rsi(&close, 14).unwrap();
    assert_eq!(result.len(), close.len() - 14);

    // Check RSI is in valid range [0, 100]
    for (i, &value) in result.trimmed().iter().enumerate() {
        assert!(
            (0.0..=100.0).contains(&value),
            "RSI at index {} is out of range: {}",
            i + result.lookback(),
            value
        );
    }
}

#[test]
fn test_roc_lookback() {
    let (_, _, close) = sample_hlc();
    let result = roc(&close, 10).unwrap();
    assert_eq!(result.lookback(), 10);
    let expected = (close[10] / close[0] - 1.0) * 100.0;
    assert_relative_eq!(result.trimmed()[0], expected, epsilon = 1e-12);
}

#[test]
fn test_macd_structure() {
    let (_, _, close) = sample_hlc();
    let result = macd(&close, MacdParams::default()).unwrap();

    let macd_line = result.macd_line.padded();
    assert_eq!(macd_line.len(), close.len());
    assert_eq!(result.signal_line.padded().len(), close.len());
    assert_eq!(result.histogram.padded().len(), close.len());

    // All outputs are valid from index 33 (slow + signal - 2)
    assert!(macd_line[32].is_nan());
    assert!(!macd_line[33].is_nan());

    for i in 33..close.len() {
        let m = result.macd_line.at(i).unwrap();
        let s = result.signal_line.at(i).unwrap();
        assert_relative_eq!(result.histogram.at(i).unwrap(), m - s, epsilon = 1e-12);
    }
}

#[test]
fn test_stochastic_range() {
    let (high, low, close) = sample_hlc();
    let params = StochasticParams {
        fast_k_period: 14,
        ..StochasticParams::default()
    };
    let result = stochastic(&high, &low, &close, params).unwrap();
    assert_eq!(result.k.lookback(), 14 + 3 + 3 - 3);

    // %K and %D should be in [0, 100]
    for (i, &k) in result.k.trimmed().iter().enumerate() {
        assert!((0.0..=100.0).contains(&k), "%K at {} is out of range: {}", i, k);
    }
    for (i, &d) in result.d.trimmed().iter().enumerate() {
        assert!((0.0..=100.0).contains(&d), "%D at {} is out of range: {}", i, d);
    }
}

#[test]
fn test_atr_positive() {
    let (high, low, close) = sample_hlc();
    let result = atr(&high, &low, &close, 14).unwrap();
    assert_eq!(result.lookback(), 14);

    // ATR should always be non-negative
    for (i, &value) in result.trimmed().iter().enumerate() {
        assert!(value >= 0.0, "ATR at {} is negative: {}", i, value);
    }
}

#[test]
fn test_bollinger_bands_ordering() {
    let (_, _, close) = sample_hlc();
    let result = bollinger_bands(&close, BollingerParams::default()).unwrap();

    // Upper > Middle > Lower
    for i in 19..close.len() {
        let upper = result.upper.at(i).unwrap();
        let middle = result.middle.at(i).unwrap();
        let lower = result.lower.at(i).unwrap();
        assert!(upper > middle, "Upper band should be > middle at index {}", i);
        assert!(middle > lower, "Middle band should be > lower at index {}", i);
    }
}

#[test]
fn test_bollinger_asymmetric_deviations() {
    let (_, _, close) = sample_hlc();
    let params = BollingerParams {
        period: 10,
        dev_up: 1.0,
        dev_down: 3.0,
        ma_type: MaType::Wma,
    };
    let result = bollinger_bands(&close, params).unwrap();
    for ((u, m), l) in result
        .upper
        .trimmed()
        .iter()
        .zip(result.middle.trimmed())
        .zip(result.lower.trimmed())
    {
        assert_relative_eq!(m - l, 3.0 * (u - m), epsilon = 1e-9);
    }
}

#[test]
fn test_directional_range() {
    let (high, low, close) = sample_hlc();
    let outputs = [
        adx(&high, &low, &close, 14).unwrap(),
        dx(&high, &low, &close, 14).unwrap(),
        plus_di(&high, &low, &close, 14).unwrap(),
        minus_di(&high, &low, &close, 14).unwrap(),
    ];

    // ADX, DX and DI should be in [0, 100]
    for output in &outputs {
        for &value in output.trimmed() {
            assert!((0.0..=100.0).contains(&value), "out of range: {}", value);
        }
    }

    // ADX compounds the DI warm-up
    assert!(outputs[0].len() < outputs[2].len());
}

#[test]
fn test_adx_lookback_regression() {
    let (high, low, close) = sample_hlc();
    let result = adx(&high, &low, &close, 14).unwrap();
    assert_eq!(result.lookback(), 2 * 14 - 1);
    assert_eq!(result.len(), close.len() - 27);

    let full = directional_movement(&high, &low, &close, 14).unwrap();
    assert_eq!(full.adx, result);
}

#[test]
fn test_invalid_period() {
    let data = vec![1.0, 2.0, 3.0];

    // Period of 0 should error
    assert!(sma(&data, 0).is_err());
    assert!(ema(&data, 0).is_err());
    assert!(rsi(&data, 0).is_err());
    assert!(roc(&data, 0).is_err());
}

#[test]
fn test_length_mismatch() {
    let (high, low, close) = sample_hlc();
    assert!(atr(&high[1..], &low, &close, 14).is_err());
    assert!(adx(&high, &low[1..], &close, 14).is_err());
}

#[test]
fn test_empty_data() {
    let empty: Vec<f64> = vec![];

    let result = sma(&empty, 10).unwrap();
    assert!(result.is_empty());
    assert!(result.padded().is_empty());

    let result = ema(&empty, 10).unwrap();
    assert!(result.is_empty());

    let result = macd(&empty, MacdParams::default()).unwrap();
    assert!(result.histogram.is_empty());
}

#[test]
fn test_padded_round_trip() {
    let (high, low, close) = sample_hlc();
    let outputs = [
        sma(&close, 5).unwrap(),
        rsi(&close, 14).unwrap(),
        atr(&high, &low, &close, 14).unwrap(),
        adx(&high, &low, &close, 10).unwrap(),
    ];
    for output in outputs {
        let padded = output.padded();
        let rebuilt = pad(output.trimmed(), close.len());
        assert_eq!(padded.len(), rebuilt.len());
        for (a, b) in padded.iter().zip(&rebuilt) {
            assert!((a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits());
        }
    }
}

#[test]
fn test_catalog_from_json() {
    let config = r#"[
        {"kind": "rsi", "period": 14},
        {"kind": "macd"},
        {"kind": "bollinger", "period": 10, "ma_type": "ema"},
        {"kind": "true_range"}
    ]"#;
    let indicators: Vec<Indicator> = serde_json::from_str(config).unwrap();
    assert_eq!(indicators[0], Indicator::Rsi { period: 14 });
    assert_eq!(indicators[1], Indicator::Macd(MacdParams::default()));
    assert_eq!(indicators[1].lookback(), 33);
    assert_eq!(
        indicators[2],
        Indicator::Bollinger(BollingerParams {
            period: 10,
            ma_type: MaType::Ema,
            ..BollingerParams::default()
        })
    );

    let (high, low, close) = sample_hlc();
    let input = PriceInput::hlc(&high, &low, &close);
    for indicator in &indicators {
        let out = indicator.compute(&input, OutputMode::Padded).unwrap();
        for (_, values) in &out.columns {
            assert_eq!(values.len(), close.len());
        }
    }
}
