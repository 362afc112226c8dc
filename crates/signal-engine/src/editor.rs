//! The only sanctioned mutators of a token stream.
//!
//! [`EquationEditor`] owns the stream for one edit session. Every operation
//! is total: it either commits and returns the fresh [`EditSummary`] for the
//! host, or returns an [`EditError`] and leaves the stream exactly as it was
//! (no partial mutation). Nothing here touches external storage.

use serde::Serialize;
use signal_model::{
    classify_operator, equation_text, validate_formula_name, FormulaNameError, FormulaRecord,
    Token, TokenKind,
};
use thiserror::Error;

use crate::catalog::catalog;
use crate::codec::{self, CodecError, DecodedCall};
use crate::validate::{self, AdjacencyViolation, InvalidFormula, Verdict};

/// Why a single edit was rejected. The stream is unchanged in every case;
/// hosts may ignore the error silently or surface it as a hint.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EditError {
    #[error(transparent)]
    Adjacency(#[from] AdjacencyViolation),
    #[error("not an operator symbol: {0}")]
    UnknownOperator(String),
    #[error("not a finite number: {0}")]
    InvalidNumber(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("no token at index {index} (stream has {len})")]
    OutOfBounds { index: usize, len: usize },
    #[error("token at index {index} is not a {expected:?} token")]
    KindMismatch { index: usize, expected: TokenKind },
}

/// Payload reported to the host after every successful mutation.
///
/// Serialized in the host's callback shape (`camelCase` keys). The host is
/// solely responsible for persistence, display, and turning this into a
/// [`FormulaRecord`] when the user commits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSummary {
    pub tokens: Vec<Token>,
    pub equation: String,
    pub is_valid: bool,
    /// First failing whole-sequence check; empty when valid.
    pub reason: String,
}

/// Editable view of one token, handed to the host when the user opens it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenEdit {
    /// A catalog-known call with its current parameter values, pre-populated
    /// with declared defaults for anything the text did not carry.
    Call(DecodedCall),
    /// Raw operator/comparison symbol, for direct replacement.
    Operator(String),
    /// Raw numeric literal, for direct replacement.
    Number(String),
    /// Function text the codec could not decode. The text stays on screen
    /// verbatim; structured parameter editing is unavailable.
    Opaque(String),
}

/// Why a commit (save) was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error(transparent)]
    Name(#[from] FormulaNameError),
    #[error(transparent)]
    Invalid(#[from] InvalidFormula),
}

/// State machine over a token stream; one instance per open edit session.
///
/// Single-threaded and synchronous: every operation completes in time
/// bounded by the current token count. Concurrent mutation of one editor
/// must be prevented by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquationEditor {
    tokens: Vec<Token>,
}

impl EquationEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume an edit session over previously saved tokens.
    pub fn with_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn equation(&self) -> String {
        equation_text(&self.tokens)
    }

    pub fn verdict(&self) -> Verdict {
        validate::verdict(&self.tokens)
    }

    /// Whether appending a token of `kind` would pass the adjacency rules.
    /// Hosts use this to enable/disable input buttons per keystroke.
    pub fn can_append(&self, kind: TokenKind) -> bool {
        validate::check_append(&self.tokens, kind).is_ok()
    }

    pub fn summary(&self) -> EditSummary {
        let verdict = self.verdict();
        EditSummary {
            tokens: self.tokens.clone(),
            equation: self.equation(),
            is_valid: verdict.valid,
            reason: verdict.reason,
        }
    }

    /// Append an arithmetic or comparison operator. The symbol's kind is
    /// decided by membership in the fixed symbol tables.
    pub fn append_operator(&mut self, symbol: &str) -> Result<EditSummary, EditError> {
        let kind = classify_operator(symbol)
            .ok_or_else(|| EditError::UnknownOperator(symbol.to_string()))?;
        validate::check_append(&self.tokens, kind)?;
        self.tokens.push(Token {
            kind,
            text: symbol.to_string(),
        });
        Ok(self.summary())
    }

    /// Append a numeric literal, preserved verbatim. The literal must parse
    /// as a finite decimal.
    pub fn append_number(&mut self, literal: &str) -> Result<EditSummary, EditError> {
        check_numeric(literal)?;
        validate::check_append(&self.tokens, TokenKind::Number)?;
        self.tokens.push(Token::number(literal));
        Ok(self.summary())
    }

    /// Append an indicator call, or overwrite the `Function` token at `at`
    /// in place (index-preserving; used for "edit existing call").
    ///
    /// `values` are `(parameter name, value)` pairs; parameters not listed
    /// take their declared defaults. Value texts are rendered exactly as
    /// supplied.
    pub fn insert_call(
        &mut self,
        name: &str,
        values: &[(&str, &str)],
        at: Option<usize>,
    ) -> Result<EditSummary, EditError> {
        let spec = catalog()
            .lookup(name)
            .ok_or_else(|| CodecError::UnknownFunction(name.to_string()))?;
        let ordered: Vec<&str> = spec
            .params
            .iter()
            .map(|p| {
                values
                    .iter()
                    .find(|(param, _)| *param == p.name)
                    .map_or(p.default, |(_, value)| *value)
            })
            .collect();
        let text = codec::encode(spec.name, &ordered)?;

        match at {
            Some(index) => {
                let len = self.tokens.len();
                let token = self
                    .tokens
                    .get_mut(index)
                    .ok_or(EditError::OutOfBounds { index, len })?;
                if token.kind != TokenKind::Function {
                    return Err(EditError::KindMismatch {
                        index,
                        expected: TokenKind::Function,
                    });
                }
                token.text = text;
            }
            None => {
                validate::check_append(&self.tokens, TokenKind::Function)?;
                self.tokens.push(Token::function(text));
            }
        }
        Ok(self.summary())
    }

    /// Open the token at `index` for editing.
    pub fn begin_edit(&self, index: usize) -> Result<TokenEdit, EditError> {
        let token = self.tokens.get(index).ok_or(EditError::OutOfBounds {
            index,
            len: self.tokens.len(),
        })?;
        Ok(match token.kind {
            TokenKind::Function => match codec::decode(&token.text) {
                Ok(call) => TokenEdit::Call(call),
                Err(_) => TokenEdit::Opaque(token.text.clone()),
            },
            TokenKind::Operator | TokenKind::Comparison => TokenEdit::Operator(token.text.clone()),
            TokenKind::Number => TokenEdit::Number(token.text.clone()),
        })
    }

    /// Replace the operator token at `index` with another symbol, possibly
    /// retyping it between `Operator` and `Comparison`.
    pub fn update_operator(&mut self, index: usize, symbol: &str) -> Result<EditSummary, EditError> {
        let kind = classify_operator(symbol)
            .ok_or_else(|| EditError::UnknownOperator(symbol.to_string()))?;
        let len = self.tokens.len();
        let current = self
            .tokens
            .get(index)
            .ok_or(EditError::OutOfBounds { index, len })?;
        if !current.is_operator_like() {
            return Err(EditError::KindMismatch {
                index,
                expected: TokenKind::Operator,
            });
        }
        validate::check_retype(&self.tokens, index, kind)?;
        self.tokens[index] = Token {
            kind,
            text: symbol.to_string(),
        };
        Ok(self.summary())
    }

    /// Replace the number token at `index` with another finite literal.
    pub fn update_number(&mut self, index: usize, literal: &str) -> Result<EditSummary, EditError> {
        check_numeric(literal)?;
        let len = self.tokens.len();
        let token = self
            .tokens
            .get_mut(index)
            .ok_or(EditError::OutOfBounds { index, len })?;
        if token.kind != TokenKind::Number {
            return Err(EditError::KindMismatch {
                index,
                expected: TokenKind::Number,
            });
        }
        token.text = literal.to_string();
        Ok(self.summary())
    }

    /// Remove the token at `index`, shifting subsequent indices down.
    ///
    /// The resulting gap is not adjacency-checked — two operands may end up
    /// adjacent. The whole-sequence verdict is the surfacing mechanism.
    pub fn delete(&mut self, index: usize) -> Result<EditSummary, EditError> {
        if index >= self.tokens.len() {
            return Err(EditError::OutOfBounds {
                index,
                len: self.tokens.len(),
            });
        }
        self.tokens.remove(index);
        Ok(self.summary())
    }

    /// Remove the final token; no-op on an empty stream.
    pub fn truncate_last(&mut self) -> EditSummary {
        self.tokens.pop();
        self.summary()
    }

    pub fn clear(&mut self) -> EditSummary {
        self.tokens.clear();
        self.summary()
    }

    /// Gate for the save action: the trimmed name must be non-empty and the
    /// stream must pass whole-sequence validation. On success the stream is
    /// flattened into the record's cached equation text.
    pub fn commit(&self, name: &str, description: &str) -> Result<FormulaRecord, CommitError> {
        validate_formula_name(name)?;
        validate::validate(&self.tokens)?;
        Ok(FormulaRecord {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            tokens: self.tokens.clone(),
            equation: self.equation(),
        })
    }
}

fn check_numeric(literal: &str) -> Result<(), EditError> {
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(()),
        _ => Err(EditError::InvalidNumber(literal.to_string())),
    }
}
