//! Property tests over arbitrary edit sequences.

use proptest::prelude::*;
use signal_engine::EquationEditor;
use signal_model::TokenKind;

#[derive(Clone, Debug)]
enum Op {
    Operator(&'static str),
    Number(String),
    Call(&'static str),
    Delete(usize),
    Truncate,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::sample::select(vec![
            "+", "-", "*", "/", ">", "<", ">=", "<=", "==", "!="
        ])
        .prop_map(Op::Operator),
        (0u32..1000).prop_map(|n| Op::Number(n.to_string())),
        prop::sample::select(vec!["RSI", "EMA", "MACD", "OBV", "BBAND"]).prop_map(Op::Call),
        (0usize..8).prop_map(Op::Delete),
        Just(Op::Truncate),
        Just(Op::Clear),
    ]
}

proptest! {
    /// No sequence of edit operations can ever produce a stream with more
    /// than one comparison token, and a rejected operation never mutates
    /// the stream.
    #[test]
    fn edit_reachable_streams_hold_their_invariants(
        ops in prop::collection::vec(op_strategy(), 0..40)
    ) {
        let mut editor = EquationEditor::new();
        // Deletions may open gaps (e.g. `1 + 2 * 3` minus the `2`), so the
        // adjacency invariant is only asserted while the stream is gap-free.
        let mut gap_possible = false;
        for op in &ops {
            let before = editor.tokens().to_vec();
            let rejected = match op {
                Op::Operator(symbol) => editor.append_operator(symbol).is_err(),
                Op::Number(literal) => editor.append_number(literal).is_err(),
                Op::Call(name) => editor.insert_call(name, &[], None).is_err(),
                Op::Delete(index) => {
                    let ok = editor.delete(*index).is_ok();
                    gap_possible |= ok;
                    !ok
                }
                Op::Truncate => {
                    editor.truncate_last();
                    false
                }
                Op::Clear => {
                    editor.clear();
                    gap_possible = false;
                    false
                }
            };
            if rejected {
                prop_assert_eq!(editor.tokens(), before.as_slice());
            }

            let comparisons = editor
                .tokens()
                .iter()
                .filter(|t| t.kind == TokenKind::Comparison)
                .count();
            prop_assert!(comparisons <= 1);

            if !gap_possible {
                let stacked = editor
                    .tokens()
                    .windows(2)
                    .any(|w| w[0].is_operator_like() && w[1].is_operator_like());
                prop_assert!(!stacked);
            }
        }
    }

    /// An operator append directly after an operator-like token is always a
    /// no-op, whichever symbols are involved.
    #[test]
    fn operator_after_operator_never_commits(
        first in prop::sample::select(vec!["+", "-", "*", "/", ">"]),
        second in prop::sample::select(vec![
            "+", "-", "*", "/", ">", "<", ">=", "<=", "==", "!="
        ]),
    ) {
        let mut editor = EquationEditor::new();
        editor.append_number("1").unwrap();
        editor.append_operator(first).unwrap();
        let before = editor.tokens().to_vec();

        prop_assert!(editor.append_operator(second).is_err());
        prop_assert_eq!(editor.tokens(), before.as_slice());
    }
}
