#![forbid(unsafe_code)]

//! `signal-model` defines the core data structures for boolean trading-signal
//! formulas.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the construction/validation engine (`signal-engine`)
//! - the saved-formula store (`signal-store`)
//! - host/IPC boundaries via `serde` (JSON-safe schema)
//!
//! A formula is an ordered stream of [`Token`]s — indicator calls, numeric
//! literals, arithmetic operators and exactly one comparison — whose flattened
//! text form is produced by [`equation_text`].

mod equation;
mod operator;
mod price;
mod record;
mod token;

pub use equation::equation_text;
pub use operator::{
    classify_operator, is_arithmetic_symbol, is_comparison_symbol, ARITHMETIC_SYMBOLS,
    COMPARISON_SYMBOLS,
};
pub use price::{ParsePriceSourceError, PriceSource};
pub use record::{validate_formula_name, FormulaNameError, FormulaRecord};
pub use token::{Token, TokenKind};
