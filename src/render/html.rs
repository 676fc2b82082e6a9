use crate::config::RenderOptions;
use crate::highlight::HighlightedLine;

fn escape_into(output: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
}

pub(super) fn render(lines: &[HighlightedLine<'_>], options: &RenderOptions) -> String {
    let mut output = String::from("<pre class=\"sql\">");

    for line in lines {
        output.push_str("\n<div class=\"sql-line\">");
        if options.line_numbers {
            output.push_str(&format!(
                "<span class=\"sql-line-number\">{}</span>",
                line.number
            ));
        }
        for token in &line.tokens {
            output.push_str("<span class=\"sql-");
            output.push_str(token.category.as_str());
            output.push_str("\">");
            escape_into(&mut output, token.text);
            output.push_str("</span>");
        }
        output.push_str("</div>");
    }

    output.push_str("\n</pre>");
    output
}
