use serde::{Deserialize, Serialize};

/// Kind of a single token in a signal formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// An encoded indicator call, e.g. `RSI(CLOSE, 0, 14)`.
    Function,
    /// An arithmetic operator: `+ - * /`.
    Operator,
    /// A comparison operator: `> < >= <= == !=`.
    Comparison,
    /// A decimal literal, preserved verbatim.
    Number,
}

/// One token of a signal formula. Token order is left-to-right expression
/// order.
///
/// `text` is the canonical encoded call for [`TokenKind::Function`], a decimal
/// literal for [`TokenKind::Number`], and a raw ASCII symbol for
/// [`TokenKind::Operator`] / [`TokenKind::Comparison`]. Display glyphs (`≥`,
/// `×`, ...) are a renderer concern and never stored here.
///
/// Serialized field names (`type` / `value`) match the host's persisted token
/// format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(rename = "value")]
    pub text: String,
}

impl Token {
    pub fn function(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Function,
            text: text.into(),
        }
    }

    pub fn operator(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Operator,
            text: text.into(),
        }
    }

    pub fn comparison(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Comparison,
            text: text.into(),
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Number,
            text: text.into(),
        }
    }

    /// Whether this token can stand as an operand (indicator call or number).
    pub fn is_operand(&self) -> bool {
        matches!(self.kind, TokenKind::Function | TokenKind::Number)
    }

    /// Whether this token is an arithmetic or comparison operator.
    pub fn is_operator_like(&self) -> bool {
        matches!(self.kind, TokenKind::Operator | TokenKind::Comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serde_uses_host_field_names() {
        let token = Token::function("RSI(CLOSE, 0, 14)");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"type":"function","value":"RSI(CLOSE, 0, 14)"}"#);

        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }

    #[test]
    fn kind_round_trips_lowercase() {
        for (kind, tag) in [
            (TokenKind::Function, "\"function\""),
            (TokenKind::Operator, "\"operator\""),
            (TokenKind::Comparison, "\"comparison\""),
            (TokenKind::Number, "\"number\""),
        ] {
            assert_eq!(serde_json::to_string(&kind).unwrap(), tag);
        }
    }

    #[test]
    fn operand_classification() {
        assert!(Token::function("EMA(CLOSE, 0, 12)").is_operand());
        assert!(Token::number("70").is_operand());
        assert!(!Token::operator("+").is_operand());
        assert!(Token::operator("+").is_operator_like());
        assert!(Token::comparison(">").is_operator_like());
        assert!(!Token::number("70").is_operator_like());
    }
}
