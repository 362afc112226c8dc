//! Static registry of technical-indicator functions.
//!
//! The catalog is process-wide, read-only, and built once on first use from
//! the embedded definition tables in the `builtins_*` modules. Adding an
//! indicator is a catalog-data change, not a runtime operation — there is no
//! mutation API.

use std::sync::OnceLock;

use signal_model::PriceSource;

// Indicator definitions live in dedicated per-category modules to keep the
// data tables reviewable.
mod builtins_band;
mod builtins_moving_average;
mod builtins_oscillator;
mod builtins_price;
mod builtins_trend;

/// Closed set of parameter shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// Free numeric parameter. Locked parameters are present for
    /// canonical-form completeness but not user-editable; their value is
    /// fixed to the declared default.
    Number { locked: bool },
    /// One of the four price-series identifiers (`OPEN HIGH LOW CLOSE`).
    Source,
    /// One of a fixed option list.
    Select { options: &'static [&'static str] },
}

/// One positional parameter of an indicator function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    /// Default value, written exactly as it appears in canonical call text.
    pub default: &'static str,
    pub description: Option<&'static str>,
}

impl ParameterSpec {
    pub fn number(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Number { locked: false },
            default,
            description: None,
        }
    }

    pub fn locked_number(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Number { locked: true },
            default,
            description: None,
        }
    }

    pub fn source(name: &'static str, default: PriceSource) -> Self {
        Self {
            name,
            kind: ParamKind::Source,
            default: default.as_str(),
            description: None,
        }
    }

    pub fn select(
        name: &'static str,
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        debug_assert!(options.contains(&default));
        Self {
            name,
            kind: ParamKind::Select { options },
            default,
            description: None,
        }
    }

    pub fn describe(mut self, text: &'static str) -> Self {
        self.description = Some(text);
        self
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.kind, ParamKind::Number { locked: true })
    }

    /// Whether `value` is admissible for this parameter.
    ///
    /// The codec renders values exactly as supplied without re-validating
    /// them; this check is for hosts that want to reject a value before it
    /// reaches the call text.
    pub fn accepts(&self, value: &str) -> bool {
        match self.kind {
            ParamKind::Number { locked: true } => value == self.default,
            ParamKind::Number { locked: false } => {
                value.parse::<f64>().map(f64::is_finite).unwrap_or(false)
            }
            ParamKind::Source => value.parse::<PriceSource>().is_ok(),
            ParamKind::Select { options } => options.contains(&value),
        }
    }
}

/// An indicator function: canonical name plus its ordered parameter list.
///
/// Parameter order is the positional contract used by the call-text codec —
/// encoding writes values in this order, decoding reads them in this order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub params: Vec<ParameterSpec>,
    pub description: &'static str,
}

impl FunctionSpec {
    fn new(name: &'static str, description: &'static str, params: Vec<ParameterSpec>) -> Self {
        Self {
            name,
            params,
            description,
        }
    }

    /// Declared parameter count.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn param(&self, name: &str) -> Option<&ParameterSpec> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// The read-only indicator registry.
#[derive(Debug)]
pub struct Catalog {
    functions: Vec<FunctionSpec>,
}

impl Catalog {
    fn build() -> Self {
        let mut functions = Vec::new();
        functions.extend(builtins_price::definitions());
        functions.extend(builtins_moving_average::definitions());
        functions.extend(builtins_oscillator::definitions());
        functions.extend(builtins_band::definitions());
        functions.extend(builtins_trend::definitions());
        Self { functions }
    }

    /// Look up a function by name (ASCII case-insensitive).
    ///
    /// The returned spec carries the canonical declared name; callers should
    /// use it rather than the query string when producing call text.
    pub fn lookup(&self, name: &str) -> Option<&FunctionSpec> {
        self.functions
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Names whose declared name contains `needle` case-insensitively, in
    /// catalog declaration order. An empty needle matches everything.
    pub fn search(&self, needle: &str) -> Vec<&'static str> {
        let needle = needle.to_ascii_uppercase();
        self.functions
            .iter()
            .map(|f| f.name)
            .filter(|name| name.to_ascii_uppercase().contains(&needle))
            .collect()
    }

    /// All functions, in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionSpec> {
        self.functions.iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Process-wide catalog, built once on first use.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}
