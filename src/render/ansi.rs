use crate::config::RenderOptions;
use crate::highlight::HighlightedLine;
use crate::token::Category;

use super::gutter_width;

const RESET: &str = "\x1b[0m";
const GUTTER: &str = "\x1b[2;34m";

fn sgr(category: Category) -> Option<&'static str> {
    match category {
        Category::Keyword => Some("\x1b[1;34m"),
        Category::Function => Some("\x1b[35m"),
        Category::StringLiteral => Some("\x1b[31m"),
        Category::NumberLiteral => Some("\x1b[32m"),
        Category::Comment => Some("\x1b[2;3m"),
        Category::TemplateVariable => Some("\x1b[4;35m"),
        Category::Plain => None,
    }
}

pub(super) fn render(lines: &[HighlightedLine<'_>], options: &RenderOptions) -> String {
    let width = gutter_width(lines);
    let mut output = String::new();

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        if options.line_numbers {
            output.push_str(&format!("{GUTTER}{:>width$}{RESET} ", line.number));
        }
        for token in &line.tokens {
            match sgr(token.category) {
                Some(code) => {
                    output.push_str(code);
                    output.push_str(token.text);
                    output.push_str(RESET);
                }
                None => output.push_str(token.text),
            }
        }
    }

    output
}
