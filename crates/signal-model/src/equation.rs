use crate::Token;

/// Flatten a token stream into its equation text: token texts joined by a
/// single space, in stream order.
///
/// The result is a cached projection of the tokens. Consumers (list display,
/// audit) must treat it as derived, never authoritative over the stream.
pub fn equation_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_token_texts_in_order() {
        let tokens = vec![
            Token::function("RSI(CLOSE, 0, 14)"),
            Token::comparison(">"),
            Token::number("70"),
        ];
        assert_eq!(equation_text(&tokens), "RSI(CLOSE, 0, 14) > 70");
    }

    #[test]
    fn empty_stream_flattens_to_empty_string() {
        assert_eq!(equation_text(&[]), "");
    }
}
