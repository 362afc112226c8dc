//! Trend-following and directional indicators.

use signal_model::PriceSource;

use super::{FunctionSpec, ParameterSpec};

fn offset() -> ParameterSpec {
    ParameterSpec::number("N", "0").describe("Offset")
}

pub(super) fn definitions() -> Vec<FunctionSpec> {
    vec![
        FunctionSpec::new(
            "SuperTrend",
            "SuperTrend stop-and-reverse level from ATR bands.",
            vec![
                offset(),
                ParameterSpec::number("period", "10").describe("Period"),
                ParameterSpec::number("factor", "3").describe("Factor"),
            ],
        ),
        FunctionSpec::new(
            "PSAR",
            "Parabolic SAR trailing stop level.",
            vec![
                ParameterSpec::source("SOURCE1", PriceSource::High),
                ParameterSpec::source("SOURCE2", PriceSource::Low),
                offset(),
                ParameterSpec::number("step", "0.02").describe("Step"),
                ParameterSpec::number("max", "0.2").describe("Max"),
            ],
        ),
        FunctionSpec::new(
            "ADX",
            "Average Directional Index with its directional components.",
            vec![
                ParameterSpec::source("SOURCE1", PriceSource::High),
                ParameterSpec::source("SOURCE2", PriceSource::Low),
                ParameterSpec::source("SOURCE3", PriceSource::Close),
                offset(),
                ParameterSpec::number("period", "14").describe("Period"),
                ParameterSpec::select("output", &["A", "M", "P"], "A")
                    .describe("Output (ADX/MinusDI/PlusDI)"),
            ],
        ),
        FunctionSpec::new(
            "AROON",
            "Aroon up/down: bars since the highest high or lowest low.",
            vec![
                ParameterSpec::source("SOURCE1", PriceSource::High),
                ParameterSpec::source("SOURCE2", PriceSource::Low),
                offset(),
                ParameterSpec::number("period", "25").describe("Period"),
                ParameterSpec::select("output", &["U", "L"], "U").describe("Output (Up/Down)"),
            ],
        ),
        FunctionSpec::new(
            "IchimokuCloud",
            "Ichimoku Cloud line: base, conversion or one of the spans.",
            vec![
                ParameterSpec::source("SOURCE1", PriceSource::High),
                ParameterSpec::source("SOURCE2", PriceSource::Low),
                offset(),
                ParameterSpec::number("conversion", "9").describe("Conversion Period"),
                ParameterSpec::number("base", "26").describe("Base Period"),
                ParameterSpec::number("span", "52").describe("Span Period"),
                ParameterSpec::number("displacement", "26").describe("Displacement"),
                ParameterSpec::select("output", &["B", "C", "SA", "SB"], "B")
                    .describe("Output (Base/Conversion/SpanA/SpanB)"),
            ],
        ),
        FunctionSpec::new(
            "ChandlierExit",
            "Chandelier Exit trailing stop for long or short positions.",
            vec![
                ParameterSpec::source("SOURCE1", PriceSource::High),
                ParameterSpec::source("SOURCE2", PriceSource::Low),
                offset(),
                ParameterSpec::number("atrPeriod", "22").describe("ATR Period"),
                ParameterSpec::number("atrMultiplier", "3").describe("ATR Multiplier"),
                ParameterSpec::select("output", &["L", "S"], "L").describe("Output (Long/Short)"),
            ],
        ),
    ]
}
