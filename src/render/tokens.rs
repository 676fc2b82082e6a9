use crate::highlight::HighlightedLine;

/// One row per token: `line<TAB>category<TAB>"text"`.
pub(super) fn render(lines: &[HighlightedLine<'_>]) -> String {
    lines
        .iter()
        .flat_map(|line| {
            line.tokens
                .iter()
                .map(move |token| format!("{}\t{}\t{:?}", line.number, token.category, token.text))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
