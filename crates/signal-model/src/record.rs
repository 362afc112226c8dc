use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Token;

/// A saved, named formula — the persisted unit handed to the host.
///
/// `equation` is always derivable from `tokens` (see
/// [`crate::equation_text`]); it is stored alongside as a cached projection
/// for list display and audit, never as a second source of truth.
///
/// The engine never persists or deletes records itself; the host assembles
/// one (via the engine's commit gate) when the user saves an edit session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub tokens: Vec<Token>,
    pub equation: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FormulaNameError {
    #[error("formula name is required")]
    Empty,
}

/// Validate a user-supplied formula name.
///
/// Leading/trailing whitespace is ignored; the trimmed name must be
/// non-empty. No length or character restrictions beyond that.
pub fn validate_formula_name(name: &str) -> Result<(), FormulaNameError> {
    if name.trim().is_empty() {
        return Err(FormulaNameError::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;
    use pretty_assertions::assert_eq;

    #[test]
    fn name_must_be_non_blank() {
        assert_eq!(validate_formula_name(""), Err(FormulaNameError::Empty));
        assert_eq!(validate_formula_name("   "), Err(FormulaNameError::Empty));
        assert_eq!(validate_formula_name(" RSI Overbought "), Ok(()));
    }

    #[test]
    fn record_serde_round_trip() {
        let record = FormulaRecord {
            name: "RSI Overbought Signal".to_string(),
            description: "Triggers when RSI crosses above 70".to_string(),
            tokens: vec![
                Token::function("RSI(CLOSE, 0, 14)"),
                Token::comparison(">"),
                Token::number("70"),
            ],
            equation: "RSI(CLOSE, 0, 14) > 70".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: FormulaRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn description_defaults_to_empty() {
        let json = r#"{"name":"x","tokens":[],"equation":""}"#;
        let record: FormulaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.description, "");
    }
}
