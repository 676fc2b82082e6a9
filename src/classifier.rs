use crate::token::{Category, lookup_function, lookup_keyword};

/// Assign a category to one piece of a line. Checks run in a fixed order and
/// the first match wins, so a name that is both a keyword and a function
/// (`SUM`, `COUNT`, ...) is a keyword.
pub fn classify(piece: &str) -> Category {
    if lookup_keyword(piece).is_some() {
        Category::Keyword
    } else if lookup_function(piece).is_some() {
        Category::Function
    } else if is_string_literal(piece) {
        Category::StringLiteral
    } else if is_number_literal(piece) {
        Category::NumberLiteral
    } else if piece.starts_with("--") {
        Category::Comment
    } else if is_template_variable(piece) {
        Category::TemplateVariable
    } else {
        Category::Plain
    }
}

fn is_string_literal(piece: &str) -> bool {
    piece.len() >= 2
        && piece.starts_with('\'')
        && piece.ends_with('\'')
        && !piece[1..piece.len() - 1].contains('\'')
}

fn is_number_literal(piece: &str) -> bool {
    let (int_part, frac_part) = match piece.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (piece, ""),
    };
    !int_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}

fn is_template_variable(piece: &str) -> bool {
    piece
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
        .is_some_and(|inner| !inner.is_empty() && !inner.contains('}'))
}
