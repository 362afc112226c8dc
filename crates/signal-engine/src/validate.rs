//! Two-level grammar validation.
//!
//! Adjacency checks are cheap local preconditions consulted before every
//! mutation, so a host can disable invalid buttons per keystroke. The
//! whole-sequence verdict produces a diagnostic reason and gates the save
//! action. The levels are deliberately separate: adjacency rules are
//! necessary but not sufficient for validity (a lone function token passes
//! every adjacency rule yet fails the whole-sequence check).

use serde::Serialize;
use signal_model::{Token, TokenKind};
use thiserror::Error;

/// Why a whole token stream is not a valid boolean signal formula.
///
/// Checks run in declaration order; the first failure wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidFormula {
    #[error("empty formula")]
    Empty,
    #[error("missing comparison operator")]
    MissingComparison,
    #[error("missing left operand")]
    MissingLeftOperand,
    #[error("missing right operand")]
    MissingRightOperand,
    #[error("formula ends with an operator")]
    TrailingOperator,
}

/// Whole-sequence validation.
pub fn validate(tokens: &[Token]) -> Result<(), InvalidFormula> {
    if tokens.is_empty() {
        return Err(InvalidFormula::Empty);
    }
    // Edit operations guarantee at most one comparison token ever exists, so
    // the first one found is the only one.
    let comparison = tokens
        .iter()
        .position(|t| t.kind == TokenKind::Comparison)
        .ok_or(InvalidFormula::MissingComparison)?;
    if !tokens[..comparison].iter().any(Token::is_operand) {
        return Err(InvalidFormula::MissingLeftOperand);
    }
    if !tokens[comparison + 1..].iter().any(Token::is_operand) {
        return Err(InvalidFormula::MissingRightOperand);
    }
    if tokens.last().is_some_and(Token::is_operator_like) {
        return Err(InvalidFormula::TrailingOperator);
    }
    Ok(())
}

/// Host-facing validity report: never an error, always computable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub valid: bool,
    /// Message of the first failing check; empty when valid.
    pub reason: String,
}

pub fn verdict(tokens: &[Token]) -> Verdict {
    match validate(tokens) {
        Ok(()) => Verdict {
            valid: true,
            reason: String::new(),
        },
        Err(err) => Verdict {
            valid: false,
            reason: err.to_string(),
        },
    }
}

/// A single-edit move the grammar forbids outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AdjacencyViolation {
    #[error("operator cannot start a formula")]
    OperatorAtStart,
    #[error("operator cannot follow another operator")]
    OperatorAfterOperator,
    #[error("operands must be separated by an operator")]
    OperandAfterOperand,
    #[error("formula already contains a comparison operator")]
    SecondComparison,
}

pub fn has_comparison(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| t.kind == TokenKind::Comparison)
}

/// Precondition for appending a token of `kind`.
///
/// Function appends are unrestricted at this level; the whole-sequence check
/// still decides overall validity.
pub fn check_append(tokens: &[Token], kind: TokenKind) -> Result<(), AdjacencyViolation> {
    match kind {
        TokenKind::Operator | TokenKind::Comparison => {
            let last = tokens.last().ok_or(AdjacencyViolation::OperatorAtStart)?;
            if last.is_operator_like() {
                return Err(AdjacencyViolation::OperatorAfterOperator);
            }
            if kind == TokenKind::Comparison && has_comparison(tokens) {
                return Err(AdjacencyViolation::SecondComparison);
            }
        }
        TokenKind::Number => {
            if tokens.last().is_some_and(Token::is_operand) {
                return Err(AdjacencyViolation::OperandAfterOperand);
            }
        }
        TokenKind::Function => {}
    }
    Ok(())
}

/// Precondition for retyping the token at `index` to `kind` in place.
///
/// Only the comparison-uniqueness rule applies: a token may not become a
/// `Comparison` while another comparison exists elsewhere in the stream.
pub fn check_retype(
    tokens: &[Token],
    index: usize,
    kind: TokenKind,
) -> Result<(), AdjacencyViolation> {
    if kind == TokenKind::Comparison
        && tokens
            .iter()
            .enumerate()
            .any(|(i, t)| i != index && t.kind == TokenKind::Comparison)
    {
        return Err(AdjacencyViolation::SecondComparison);
    }
    Ok(())
}
