mod ansi;
mod html;
mod tokens;

use crate::config::{RenderOptions, RenderStyle};
use crate::highlight::HighlightedLine;

/// Width of the line-number gutter: digits in the largest line number.
pub(crate) fn gutter_width(lines: &[HighlightedLine<'_>]) -> usize {
    lines
        .last()
        .map_or(1, |line| line.number.to_string().len())
}

pub fn render(lines: &[HighlightedLine<'_>], options: &RenderOptions) -> String {
    if lines.is_empty() {
        return String::new();
    }

    match options.style {
        RenderStyle::Ansi => ansi::render(lines, options),
        RenderStyle::Html => html::render(lines, options),
        RenderStyle::Tokens => tokens::render(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;

    #[test]
    fn test_empty_lines() {
        let result = render(&[], &RenderOptions::default());
        assert_eq!(result, "");
    }

    #[test]
    fn test_gutter_width() {
        let sql = (1..=12).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        assert_eq!(gutter_width(&highlight(&sql)), 2);
        assert_eq!(gutter_width(&highlight("SELECT 1")), 1);
        assert_eq!(gutter_width(&[]), 1);
    }
}
