pub mod classifier;
pub mod config;
pub mod error;
pub mod highlight;
pub mod lexer;
pub mod render;
pub mod templates;
pub mod token;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{HighlightOptions, RenderOptions, RenderStyle};
pub use highlight::{HighlightedLine, highlight, highlight_line};
pub use token::{Category, Token};

pub fn highlight_with<'a>(options: &HighlightOptions<'a>) -> Vec<HighlightedLine<'a>> {
    highlight(options.sql)
}

pub fn highlight_sql(input: &str, options: &RenderOptions) -> String {
    let lines = highlight(input);
    render::render(&lines, options)
}
