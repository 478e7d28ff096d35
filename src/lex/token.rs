use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

/// Token categories, declared in disambiguation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    FloatNumber,
    Number,
    Assignment,
    Operator,
    Separator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword => f.write_str("KEYWORD"),
            TokenKind::Identifier => f.write_str("IDENTIFIER"),
            TokenKind::FloatNumber => f.write_str("FLOAT_NUMBER"),
            TokenKind::Number => f.write_str("NUMBER"),
            TokenKind::Assignment => f.write_str("ASSIGNMENT"),
            TokenKind::Operator => f.write_str("OPERATOR"),
            TokenKind::Separator => f.write_str("SEPARATOR"),
        }
    }
}

pub const KEYWORDS: [&str; 3] = ["int", "float", "print"];
