//! Moving-average family.

use signal_model::PriceSource;

use super::{FunctionSpec, ParameterSpec};

fn offset() -> ParameterSpec {
    ParameterSpec::number("N", "0").describe("Offset")
}

fn averaged(name: &'static str, description: &'static str, period: &'static str) -> FunctionSpec {
    FunctionSpec::new(
        name,
        description,
        vec![
            ParameterSpec::source("SOURCE", PriceSource::Close),
            offset(),
            ParameterSpec::number("period", period).describe("Period"),
        ],
    )
}

pub(super) fn definitions() -> Vec<FunctionSpec> {
    vec![
        averaged("SMA", "Simple moving average of the source series.", "20"),
        averaged("EMA", "Exponential moving average of the source series.", "12"),
        averaged("WMA", "Weighted moving average of the source series.", "12"),
        averaged("HMA", "Hull moving average of the source series.", "14"),
        averaged("TEMA", "Triple exponential moving average.", "14"),
        averaged("DEMA", "Double exponential moving average.", "14"),
    ]
}
