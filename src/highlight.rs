use crate::classifier::classify;
use crate::lexer::split_line;
use crate::token::Token;

/// One display line: its 1-based number and its classified tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLine<'a> {
    pub number: usize,
    pub tokens: Vec<Token<'a>>,
}

pub fn highlight_line(line: &str) -> Vec<Token<'_>> {
    split_line(line)
        .into_iter()
        .map(|piece| Token::new(piece, classify(piece)))
        .collect()
}

/// Trim the source, then tokenize and classify it line by line.
pub fn highlight(sql: &str) -> Vec<HighlightedLine<'_>> {
    let lines: Vec<_> = sql
        .trim()
        .lines()
        .enumerate()
        .map(|(index, line)| HighlightedLine {
            number: index + 1,
            tokens: highlight_line(line),
        })
        .collect();
    tracing::trace!(lines = lines.len(), "highlighted sql");
    lines
}
