//! Property-based tests with proptest.
//!
//! Every line must split losslessly into non-empty pieces, and highlighting
//! must be a pure function of its input.

use proptest::prelude::*;
use sql_highlight::lexer::split_line;
use sql_highlight::{Category, highlight, highlight_line};

/// SQL-ish line: keywords, quotes, digits, dashes and braces mixed with
/// arbitrary text so every unit and its malformed variants show up.
fn sql_line() -> impl Strategy<Value = String> {
    let marker = prop::sample::select(vec![
        "SELECT ", "group by", "ORDER BY ", "SUM(", "'", "--", "{{", "}}",
    ])
    .prop_map(str::to_string);
    let fragment = prop_oneof![
        marker,
        "[0-9]{1,3}(\\.[0-9]{0,2})?",
        "[a-zA-Z_ ,().*=<>-]{1,8}",
        "[^\\n\\r]{1,4}",
    ];
    prop::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn split_is_lossless(line in sql_line()) {
        let pieces = split_line(&line);
        prop_assert_eq!(pieces.concat(), line.as_str());
        prop_assert!(pieces.iter().all(|piece| !piece.is_empty()));
    }

    #[test]
    fn split_is_lossless_for_any_text(line in "[^\\n\\r]{0,80}") {
        prop_assert_eq!(split_line(&line).concat(), line.as_str());
    }

    #[test]
    fn highlight_line_is_idempotent(line in sql_line()) {
        prop_assert_eq!(highlight_line(&line), highlight_line(&line));
    }

    #[test]
    fn comment_is_always_last(line in sql_line()) {
        let tokens = highlight_line(&line);
        if let Some(pos) = tokens.iter().position(|t| t.category == Category::Comment) {
            prop_assert_eq!(pos, tokens.len() - 1);
        }
    }

    #[test]
    fn highlight_preserves_trimmed_lines(lines in prop::collection::vec(sql_line(), 0..6)) {
        let sql = lines.join("\n");
        let expected: Vec<&str> = sql.trim().lines().collect();
        let highlighted = highlight(&sql);
        prop_assert_eq!(highlighted.len(), expected.len());
        for (line, original) in highlighted.iter().zip(expected) {
            let rebuilt: String = line.tokens.iter().map(|t| t.text).collect();
            prop_assert_eq!(rebuilt, original);
        }
    }
}
