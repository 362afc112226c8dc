//! Fixed operator symbol tables.
//!
//! The engine's operator identity is always the raw ASCII symbol; how a
//! renderer displays it (e.g. `>=` as `≥`) is owned by the UI collaborator.

use crate::TokenKind;

/// Arithmetic operators accepted between operands.
pub const ARITHMETIC_SYMBOLS: [&str; 4] = ["+", "-", "*", "/"];

/// Comparison operators. A valid formula contains exactly one.
pub const COMPARISON_SYMBOLS: [&str; 6] = [">", "<", ">=", "<=", "==", "!="];

pub fn is_arithmetic_symbol(symbol: &str) -> bool {
    ARITHMETIC_SYMBOLS.contains(&symbol)
}

pub fn is_comparison_symbol(symbol: &str) -> bool {
    COMPARISON_SYMBOLS.contains(&symbol)
}

/// Classify an operator symbol into its token kind.
///
/// Returns `None` for anything outside the two fixed tables.
pub fn classify_operator(symbol: &str) -> Option<TokenKind> {
    if is_comparison_symbol(symbol) {
        Some(TokenKind::Comparison)
    } else if is_arithmetic_symbol(symbol) {
        Some(TokenKind::Operator)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_both_tables() {
        for symbol in ARITHMETIC_SYMBOLS {
            assert_eq!(classify_operator(symbol), Some(TokenKind::Operator));
        }
        for symbol in COMPARISON_SYMBOLS {
            assert_eq!(classify_operator(symbol), Some(TokenKind::Comparison));
        }
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert_eq!(classify_operator("%"), None);
        assert_eq!(classify_operator("=>"), None);
        assert_eq!(classify_operator("≥"), None);
        assert_eq!(classify_operator(""), None);
    }
}
