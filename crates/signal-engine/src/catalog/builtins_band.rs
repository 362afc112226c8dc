//! Volatility bands and channels.

use signal_model::PriceSource;

use super::{FunctionSpec, ParameterSpec};

fn offset() -> ParameterSpec {
    ParameterSpec::number("N", "0").describe("Offset")
}

pub(super) fn definitions() -> Vec<FunctionSpec> {
    vec![
        FunctionSpec::new(
            "BBAND",
            "Bollinger Band value: upper, lower or middle band.",
            vec![
                ParameterSpec::source("SOURCE", PriceSource::Close),
                offset(),
                ParameterSpec::number("period", "20").describe("Period"),
                ParameterSpec::number("factor", "2").describe("Standard Deviation Factor"),
                ParameterSpec::select("band", &["U", "L", "M"], "M")
                    .describe("Band (Upper/Lower/Middle)"),
            ],
        ),
        FunctionSpec::new(
            "BBW",
            "Bollinger Band width: distance between the bands.",
            vec![
                ParameterSpec::source("SOURCE", PriceSource::Close),
                offset(),
                ParameterSpec::number("period", "20").describe("Period"),
                ParameterSpec::number("factor", "2").describe("Factor"),
            ],
        ),
        FunctionSpec::new(
            "SD",
            "Rolling standard deviation of the source series.",
            vec![
                ParameterSpec::source("SOURCE", PriceSource::Close),
                offset(),
                ParameterSpec::number("period", "20").describe("Period"),
                ParameterSpec::number("multiplier", "1").describe("Multiplier"),
            ],
        ),
        FunctionSpec::new(
            "ATR",
            "Average True Range volatility measure.",
            vec![
                offset(),
                ParameterSpec::number("period", "14").describe("Period"),
            ],
        ),
        FunctionSpec::new(
            "KeltnerChannels",
            "Keltner Channel value: middle, upper or center line.",
            vec![
                offset(),
                ParameterSpec::number("period", "20").describe("Period"),
                ParameterSpec::number("atr", "10").describe("ATR Period"),
                ParameterSpec::number("multiplier", "1").describe("Multiplier"),
                ParameterSpec::select("output", &["M", "U", "C"], "M")
                    .describe("Output (Middle/Upper/Center)"),
            ],
        ),
    ]
}
