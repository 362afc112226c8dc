//! Round-trip codec between an indicator name + ordered parameter values and
//! the canonical call text `NAME(v1, v2, ..., vk)`.
//!
//! Function tokens store this flattened text rather than a structured node;
//! the codec re-parses it when a call is opened for editing. Values are
//! rendered exactly as supplied — no numeric re-formatting.

use thiserror::Error;

use crate::catalog::catalog;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("{name} takes {expected} parameter(s), got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("not a function call: {0}")]
    Malformed(String),
}

/// A decoded call: canonical name plus one value per declared parameter, in
/// declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedCall {
    pub name: &'static str,
    pub values: Vec<ParamValue>,
}

/// One parameter value of a decoded call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamValue {
    pub param: &'static str,
    pub value: String,
}

impl DecodedCall {
    pub fn value_of(&self, param: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.param == param)
            .map(|v| v.value.as_str())
    }
}

/// Encode a call into canonical text.
///
/// The caller must supply exactly one value per declared parameter, in
/// declaration order — default substitution for omitted parameters is the
/// edit layer's job, not the codec's.
pub fn encode(name: &str, values: &[&str]) -> Result<String, CodecError> {
    let spec = catalog()
        .lookup(name)
        .ok_or_else(|| CodecError::UnknownFunction(name.to_string()))?;
    if values.len() != spec.arity() {
        return Err(CodecError::Arity {
            name: spec.name,
            expected: spec.arity(),
            got: values.len(),
        });
    }
    Ok(format!("{}({})", spec.name, values.join(", ")))
}

/// Decode canonical call text back into a name and per-parameter values.
///
/// When the text carries fewer arguments than the function declares, the
/// missing trailing values resolve to their declared defaults; extra
/// arguments beyond the declared count are ignored. This pad/truncate
/// asymmetry keeps previously saved call text working when the catalog gains
/// or loses parameters, and must be preserved.
pub fn decode(text: &str) -> Result<DecodedCall, CodecError> {
    let (name, inner) = split_call(text).ok_or_else(|| CodecError::Malformed(text.to_string()))?;
    let spec = catalog()
        .lookup(name)
        .ok_or_else(|| CodecError::UnknownFunction(name.to_string()))?;

    let supplied: Vec<&str> = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(str::trim).collect()
    };

    let values = spec
        .params
        .iter()
        .enumerate()
        .map(|(i, p)| ParamValue {
            param: p.name,
            value: supplied
                .get(i)
                .map_or_else(|| p.default.to_string(), |v| v.to_string()),
        })
        .collect();

    Ok(DecodedCall {
        name: spec.name,
        values,
    })
}

/// Split `IDENT(args)` into `(IDENT, args)`; `None` if the outer shape does
/// not match.
fn split_call(text: &str) -> Option<(&str, &str)> {
    let open = text.find('(')?;
    let inner = text[open + 1..].strip_suffix(')')?;
    let name = &text[..open];
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((name, inner))
}
