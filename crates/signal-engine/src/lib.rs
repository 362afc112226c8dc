#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Construction and validation engine for boolean trading-signal formulas,
//! e.g. `RSI(CLOSE, 0, 14) > 70`.
//!
//! A formula is built token by token out of a constrained vocabulary: calls
//! into a fixed catalog of technical indicators ([`catalog`]), numeric
//! literals, arithmetic operators, and exactly one comparison operator.
//! Indicator calls are kept as flattened canonical text and re-parsed on edit
//! ([`codec`]) — the grammar never nests calls, so there is no AST.
//!
//! Validation is two-level by design ([`validate`]):
//! - cheap adjacency preconditions, consulted on every edit so a host can
//!   disable invalid buttons per keystroke;
//! - the whole-sequence verdict with a diagnostic reason, which gates saving.
//!
//! All mutation goes through [`EquationEditor`]; every operation either
//! commits and reports an [`EditSummary`] to the host, or rejects and leaves
//! the stream untouched. The engine performs no I/O and assumes single-writer
//! access — one editor per open edit session.

pub mod catalog;
pub mod codec;
pub mod editor;
pub mod validate;

pub use catalog::{catalog, Catalog, FunctionSpec, ParamKind, ParameterSpec};
pub use codec::{decode, encode, CodecError, DecodedCall, ParamValue};
pub use editor::{CommitError, EditError, EditSummary, EquationEditor, TokenEdit};
pub use validate::{
    check_append, check_retype, validate, verdict, AdjacencyViolation, InvalidFormula, Verdict,
};
