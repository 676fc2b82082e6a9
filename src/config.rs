use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderStyle {
    #[default]
    Ansi,
    Html,
    Tokens,
}

impl RenderStyle {
    /// Parse a style name, falling back to the default for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "html" => RenderStyle::Html,
            "tokens" => RenderStyle::Tokens,
            _ => RenderStyle::Ansi,
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Ansi => write!(f, "ansi"),
            RenderStyle::Html => write!(f, "html"),
            RenderStyle::Tokens => write!(f, "tokens"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub style: RenderStyle,
    pub line_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: RenderStyle::Ansi,
            line_numbers: true,
        }
    }
}

/// Input accepted by [`crate::highlight_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightOptions<'a> {
    pub sql: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_options() {
        let opts = RenderOptions::default();
        assert!(opts.line_numbers);
        assert_eq!(opts.style, RenderStyle::Ansi);
    }

    #[test]
    fn test_render_options_equality() {
        let a = RenderOptions::default();
        let b = RenderOptions::default();
        assert_eq!(a, b);

        let c = RenderOptions {
            style: RenderStyle::Html,
            ..RenderOptions::default()
        };
        assert_ne!(a, c);
    }

    #[test]
    fn test_render_style_display() {
        assert_eq!(RenderStyle::Ansi.to_string(), "ansi");
        assert_eq!(RenderStyle::Html.to_string(), "html");
        assert_eq!(RenderStyle::Tokens.to_string(), "tokens");
    }

    #[test]
    fn test_render_style_from_name() {
        assert_eq!(RenderStyle::from_name("html"), RenderStyle::Html);
        assert_eq!(RenderStyle::from_name("TOKENS"), RenderStyle::Tokens);
        assert_eq!(RenderStyle::from_name("ansi"), RenderStyle::Ansi);
        assert_eq!(RenderStyle::from_name("unknown"), RenderStyle::Ansi);
    }
}
