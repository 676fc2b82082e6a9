use std::fmt;

macro_rules! define_keywords {
    (
        single {
            $( $single_variant:ident => $single_str:expr ),* $(,)?
        }
        multi {
            $( $multi_variant:ident => $multi_str:expr ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum KeywordKind {
            $( $single_variant, )*
            $( $multi_variant, )*
        }

        impl KeywordKind {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( KeywordKind::$single_variant => $single_str, )*
                    $( KeywordKind::$multi_variant => $multi_str, )*
                }
            }

            pub fn is_composite(&self) -> bool {
                matches!(self, $( KeywordKind::$multi_variant )|*)
            }
        }

        impl fmt::Display for KeywordKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for KeywordKind {
            type Err = ();
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Composite forms match only with the single space the lexer captures
                $( if s.eq_ignore_ascii_case($single_str) { return Ok(KeywordKind::$single_variant); } )*
                $( if s.eq_ignore_ascii_case($multi_str) { return Ok(KeywordKind::$multi_variant); } )*
                Err(())
            }
        }

        /// Lookup a keyword (case-insensitive), including the composite
        /// `GROUP BY` / `ORDER BY` forms.
        pub fn lookup_keyword(word: &str) -> Option<KeywordKind> {
            word.parse().ok()
        }
    };
}

define_keywords! {
    single {
        // Statements and clauses
        Select => "SELECT",
        From => "FROM",
        Where => "WHERE",
        Having => "HAVING",
        Insert => "INSERT",
        Into => "INTO",
        Values => "VALUES",
        Update => "UPDATE",
        Delete => "DELETE",
        Create => "CREATE",
        Alter => "ALTER",
        Drop => "DROP",
        With => "WITH",
        As => "AS",

        // Predicates and expressions
        And => "AND",
        Or => "OR",
        Not => "NOT",
        In => "IN",
        Exists => "EXISTS",
        Case => "CASE",
        When => "WHEN",
        Then => "THEN",
        Else => "ELSE",
        End => "END",
        Between => "BETWEEN",

        // Joins and set operations
        Join => "JOIN",
        Left => "LEFT",
        Right => "RIGHT",
        Inner => "INNER",
        Outer => "OUTER",
        On => "ON",
        Union => "UNION",
        Distinct => "DISTINCT",

        // Aggregates and date functions
        Count => "COUNT",
        Sum => "SUM",
        Avg => "AVG",
        Max => "MAX",
        Min => "MIN",
        DateAdd => "DATEADD",
        DateTrunc => "DATE_TRUNC",
        CurrentTimestamp => "CURRENT_TIMESTAMP",

        // Window frames
        Over => "OVER",
        Rows => "ROWS",
        Preceding => "PRECEDING",
        Following => "FOLLOWING",

        // Halves of the composite keywords; never produced by the lexer on
        // their own but still highlighted when they stand alone
        Group => "GROUP",
        Order => "ORDER",
        By => "BY",
    }
    multi {
        GroupBy => "GROUP BY",
        OrderBy => "ORDER BY",
    }
}

/// Keywords the lexer splits out of a line, in the order they are tried.
pub const LEXED_KEYWORDS: &[KeywordKind] = &[
    KeywordKind::Select,
    KeywordKind::From,
    KeywordKind::Where,
    KeywordKind::GroupBy,
    KeywordKind::Having,
    KeywordKind::OrderBy,
    KeywordKind::Insert,
    KeywordKind::Into,
    KeywordKind::Values,
    KeywordKind::Update,
    KeywordKind::Delete,
    KeywordKind::Create,
    KeywordKind::Alter,
    KeywordKind::Drop,
    KeywordKind::With,
    KeywordKind::As,
    KeywordKind::And,
    KeywordKind::Or,
    KeywordKind::Not,
    KeywordKind::In,
    KeywordKind::Exists,
    KeywordKind::Case,
    KeywordKind::When,
    KeywordKind::Then,
    KeywordKind::Else,
    KeywordKind::End,
    KeywordKind::Join,
    KeywordKind::Left,
    KeywordKind::Right,
    KeywordKind::Inner,
    KeywordKind::Outer,
    KeywordKind::On,
    KeywordKind::Union,
    KeywordKind::Distinct,
    KeywordKind::Count,
    KeywordKind::Sum,
    KeywordKind::Avg,
    KeywordKind::Max,
    KeywordKind::Min,
    KeywordKind::DateAdd,
    KeywordKind::DateTrunc,
    KeywordKind::CurrentTimestamp,
    KeywordKind::Over,
    KeywordKind::Rows,
    KeywordKind::Between,
    KeywordKind::Preceding,
    KeywordKind::Following,
];

/// Names styled as functions. Every entry is also a keyword, and keywords
/// are checked first, so none of these currently reach `Category::Function`.
pub const FUNCTION_NAMES: &[&str] = &[
    "SUM",
    "AVG",
    "COUNT",
    "MAX",
    "MIN",
    "DATE_TRUNC",
    "DATEADD",
    "CURRENT_TIMESTAMP",
];

pub fn lookup_function(word: &str) -> Option<&'static str> {
    FUNCTION_NAMES
        .iter()
        .copied()
        .find(|name| word.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Function,
    StringLiteral,
    NumberLiteral,
    Comment,
    TemplateVariable,
    Plain,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Function => "function",
            Category::StringLiteral => "string",
            Category::NumberLiteral => "number",
            Category::Comment => "comment",
            Category::TemplateVariable => "template-variable",
            Category::Plain => "plain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub category: Category,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, category: Category) -> Self {
        Self { text, category }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keyword_uppercase() {
        assert_eq!(lookup_keyword("SELECT"), Some(KeywordKind::Select));
        assert_eq!(lookup_keyword("FROM"), Some(KeywordKind::From));
        assert_eq!(lookup_keyword("WHERE"), Some(KeywordKind::Where));
        assert_eq!(lookup_keyword("PRECEDING"), Some(KeywordKind::Preceding));
    }

    #[test]
    fn test_lookup_keyword_mixed_case() {
        assert_eq!(lookup_keyword("select"), Some(KeywordKind::Select));
        assert_eq!(lookup_keyword("Select"), Some(KeywordKind::Select));
        assert_eq!(lookup_keyword("date_trunc"), Some(KeywordKind::DateTrunc));
        assert_eq!(lookup_keyword("Current_Timestamp"), Some(KeywordKind::CurrentTimestamp));
    }

    #[test]
    fn test_lookup_keyword_composite() {
        assert_eq!(lookup_keyword("GROUP BY"), Some(KeywordKind::GroupBy));
        assert_eq!(lookup_keyword("order by"), Some(KeywordKind::OrderBy));
        assert_eq!(lookup_keyword("GROUP  BY"), None);
        assert_eq!(lookup_keyword("GROUP\tBY"), None);
    }

    #[test]
    fn test_lookup_keyword_halves() {
        assert_eq!(lookup_keyword("group"), Some(KeywordKind::Group));
        assert_eq!(lookup_keyword("ORDER"), Some(KeywordKind::Order));
        assert_eq!(lookup_keyword("By"), Some(KeywordKind::By));
    }

    #[test]
    fn test_lookup_keyword_not_found() {
        assert_eq!(lookup_keyword("foobar"), None);
        assert_eq!(lookup_keyword(""), None);
        assert_eq!(lookup_keyword("SELECTX"), None);
        assert_eq!(lookup_keyword("LIMIT"), None);
        assert_eq!(lookup_keyword(" SELECT"), None);
    }

    #[test]
    fn test_lexed_keywords_exclude_halves() {
        assert!(!LEXED_KEYWORDS.contains(&KeywordKind::Group));
        assert!(!LEXED_KEYWORDS.contains(&KeywordKind::Order));
        assert!(!LEXED_KEYWORDS.contains(&KeywordKind::By));
        assert!(LEXED_KEYWORDS.contains(&KeywordKind::GroupBy));
        assert!(LEXED_KEYWORDS.contains(&KeywordKind::OrderBy));
        assert_eq!(LEXED_KEYWORDS.len(), 47);
    }

    #[test]
    fn test_is_composite() {
        assert!(KeywordKind::GroupBy.is_composite());
        assert!(KeywordKind::OrderBy.is_composite());
        assert!(!KeywordKind::Group.is_composite());
        assert!(!KeywordKind::Select.is_composite());
    }

    #[test]
    fn test_every_function_name_is_also_a_keyword() {
        for name in FUNCTION_NAMES {
            assert!(lookup_keyword(name).is_some(), "{name} should be a keyword");
        }
    }

    #[test]
    fn test_lookup_function() {
        assert_eq!(lookup_function("sum"), Some("SUM"));
        assert_eq!(lookup_function("DateAdd"), Some("DATEADD"));
        assert_eq!(lookup_function("SELECT"), None);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(KeywordKind::Select.as_str(), "SELECT");
        assert_eq!(KeywordKind::DateTrunc.as_str(), "DATE_TRUNC");
        assert_eq!(KeywordKind::GroupBy.as_str(), "GROUP BY");
        assert_eq!(KeywordKind::OrderBy.to_string(), "ORDER BY");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Keyword.to_string(), "keyword");
        assert_eq!(Category::StringLiteral.to_string(), "string");
        assert_eq!(Category::TemplateVariable.to_string(), "template-variable");
        assert_eq!(Category::Plain.to_string(), "plain");
    }
}
