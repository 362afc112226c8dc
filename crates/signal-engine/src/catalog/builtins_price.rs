//! Raw price series access and rolling extremes.

use signal_model::PriceSource;

use super::{FunctionSpec, ParameterSpec};

fn offset() -> ParameterSpec {
    ParameterSpec::number("N", "0").describe("Offset")
}

pub(super) fn definitions() -> Vec<FunctionSpec> {
    vec![
        FunctionSpec::new(
            "SOURCE",
            "Raw price series value at the given bar offset.",
            vec![offset()],
        ),
        FunctionSpec::new(
            "MAX",
            "Highest value of the source series over the period.",
            vec![
                ParameterSpec::source("SOURCE", PriceSource::High),
                offset(),
                ParameterSpec::number("period", "14").describe("Period"),
            ],
        ),
        FunctionSpec::new(
            "MIN",
            "Lowest value of the source series over the period.",
            vec![
                ParameterSpec::source("SOURCE", PriceSource::Low),
                offset(),
                ParameterSpec::number("period", "14").describe("Period"),
            ],
        ),
    ]
}
