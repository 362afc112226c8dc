//! Momentum oscillators and volume-driven indicators.

use signal_model::PriceSource;

use super::{FunctionSpec, ParameterSpec};

fn offset() -> ParameterSpec {
    ParameterSpec::number("N", "0").describe("Offset")
}

pub(super) fn definitions() -> Vec<FunctionSpec> {
    vec![
        FunctionSpec::new(
            "RSI",
            "Relative Strength Index: momentum oscillator between 0 and 100.",
            vec![
                ParameterSpec::source("SOURCE", PriceSource::Close),
                offset(),
                ParameterSpec::number("period", "14").describe("Period"),
            ],
        ),
        FunctionSpec::new(
            "ROC",
            "Rate of change of the source series over the period, in percent.",
            vec![
                ParameterSpec::source("SOURCE", PriceSource::Close),
                offset(),
                ParameterSpec::number("period", "12").describe("Period"),
            ],
        ),
        FunctionSpec::new(
            "CCI",
            "Commodity Channel Index over typical price.",
            vec![
                offset(),
                ParameterSpec::number("period", "20").describe("Period"),
            ],
        ),
        FunctionSpec::new(
            "MFI",
            "Money Flow Index: volume-weighted RSI between 0 and 100.",
            vec![
                offset(),
                ParameterSpec::number("period", "14").describe("Period"),
            ],
        ),
        FunctionSpec::new(
            "AWESOMEOSCILLATOR",
            "Awesome Oscillator: 5/34-period midpoint SMA difference.",
            vec![offset()],
        ),
        FunctionSpec::new(
            "STOCH",
            "Stochastic oscillator %K with a smoothed signal line.",
            vec![
                offset(),
                ParameterSpec::number("period", "14").describe("Period"),
                ParameterSpec::number("signalPeriod", "3").describe("Signal Period"),
            ],
        ),
        FunctionSpec::new(
            "STOCHRSI",
            "Stochastic oscillator applied to RSI values instead of price.",
            vec![
                ParameterSpec::source("SOURCE", PriceSource::Close),
                offset(),
                ParameterSpec::number("rsiPeriod", "14").describe("RSI Period"),
                ParameterSpec::number("stochasticPeriod", "14").describe("Stochastic Period"),
                ParameterSpec::number("kPeriod", "3").describe("K Period"),
                ParameterSpec::number("dPeriod", "3").describe("D Period"),
                ParameterSpec::select("output", &["K", "D"], "K").describe("Output (K/D)"),
            ],
        ),
        FunctionSpec::new(
            "MACD",
            "Moving Average Convergence Divergence line, signal or histogram.",
            vec![
                ParameterSpec::source("SOURCE", PriceSource::Close),
                offset(),
                ParameterSpec::number("period", "9").describe("Period"),
                ParameterSpec::number("fastPeriod", "12").describe("Fast Period"),
                ParameterSpec::number("slowPeriod", "26").describe("Slow Period"),
                ParameterSpec::number("signalPeriod", "9").describe("Signal Period"),
                ParameterSpec::select("output", &["MACD", "signal", "histogram"], "MACD")
                    .describe("Output"),
            ],
        ),
        FunctionSpec::new(
            "KST",
            "Know Sure Thing: weighted sum of four smoothed rate-of-change series.",
            vec![
                ParameterSpec::source("SOURCE", PriceSource::Close),
                offset(),
                ParameterSpec::number("A", "10").describe("ROC Period 1"),
                ParameterSpec::number("B", "15").describe("ROC Period 2"),
                ParameterSpec::number("C", "20").describe("ROC Period 3"),
                ParameterSpec::number("D", "30").describe("ROC Period 4"),
                ParameterSpec::number("E", "10").describe("SMA Period 1"),
                ParameterSpec::number("F", "10").describe("SMA Period 2"),
                ParameterSpec::number("G", "10").describe("SMA Period 3"),
                ParameterSpec::number("H", "15").describe("SMA Period 4"),
                ParameterSpec::number("period", "9").describe("Signal Period"),
                ParameterSpec::select("output", &["K", "S"], "K").describe("Output (KST/Signal)"),
            ],
        ),
        FunctionSpec::new(
            "ForceIndex",
            "Force Index: price change times volume, smoothed over the period.",
            vec![
                ParameterSpec::locked_number("N", "0").describe("Must be 0"),
                ParameterSpec::number("period", "13").describe("Period"),
            ],
        ),
        FunctionSpec::new(
            "OBV",
            "On-Balance Volume running total.",
            vec![ParameterSpec::locked_number("N", "0").describe("Must be 0")],
        ),
    ]
}
