use crate::token::LEXED_KEYWORDS;

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Splits a single line into recognized units and the plain text between
/// them. Works on bytes: every unit starts and ends on an ASCII byte, so
/// slice boundaries always fall on char boundaries.
struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek_at(&self, at: usize) -> Option<u8> {
        self.bytes.get(at).copied()
    }

    fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    fn next_piece(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if start >= self.bytes.len() {
            return None;
        }

        if let Some(end) = self.match_at(start) {
            self.pos = end;
            return Some(self.slice(start, end));
        }

        // Unrecognized run: extend until the next position where a unit starts
        self.pos += 1;
        while self.pos < self.bytes.len() && self.match_at(self.pos).is_none() {
            self.pos += 1;
        }
        Some(self.slice(start, self.pos))
    }

    /// End offset of the unit starting at `at`, if any.
    fn match_at(&self, at: usize) -> Option<usize> {
        let b = self.peek_at(at)?;

        match b {
            // String literal: up to the next quote, no escapes
            b'\'' => self.match_string_literal(at),

            // Number literal: digits, optional '.', optional digits
            b'0'..=b'9' => Some(self.match_number(at)),

            // Line comment: runs to the end of the line
            b'-' if self.peek_at(at + 1) == Some(b'-') => Some(self.bytes.len()),

            // Template variable: {{...}}
            b'{' if self.peek_at(at + 1) == Some(b'{') => self.match_template_variable(at),

            b if b.is_ascii_alphabetic() => self.match_keyword(at),

            _ => None,
        }
    }

    fn match_string_literal(&self, at: usize) -> Option<usize> {
        self.bytes[at + 1..]
            .iter()
            .position(|&b| b == b'\'')
            .map(|offset| at + 1 + offset + 1)
    }

    fn match_number(&self, at: usize) -> usize {
        let mut end = at;
        while let Some(b'0'..=b'9') = self.peek_at(end) {
            end += 1;
        }
        if self.peek_at(end) == Some(b'.') {
            end += 1;
            while let Some(b'0'..=b'9') = self.peek_at(end) {
                end += 1;
            }
        }
        end
    }

    fn match_template_variable(&self, at: usize) -> Option<usize> {
        let content_start = at + 2;
        let close = content_start
            + self.bytes[content_start..]
                .iter()
                .position(|&b| b == b'}')?;
        // At least one character inside, and the first '}' must open "}}"
        if close == content_start || self.peek_at(close + 1) != Some(b'}') {
            return None;
        }
        Some(close + 2)
    }

    fn match_keyword(&self, at: usize) -> Option<usize> {
        if at > 0 && is_word_byte(self.bytes[at - 1]) {
            return None;
        }
        let remaining = &self.bytes[at..];
        LEXED_KEYWORDS.iter().find_map(|kw| {
            let text = kw.as_str().as_bytes();
            let candidate = remaining.get(..text.len())?;
            let at_boundary = !self.peek_at(at + text.len()).is_some_and(is_word_byte);
            (candidate.eq_ignore_ascii_case(text) && at_boundary).then_some(at + text.len())
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_piece()
    }
}

/// Split one line into non-empty pieces whose concatenation is the line.
pub fn split_line(line: &str) -> Vec<&str> {
    Lexer::new(line).collect()
}
