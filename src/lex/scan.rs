use crate::lex::{
    token::KEYWORDS,
    Token,
    TokenKind::{self, *},
};

type Matcher = fn(&[u8]) -> usize;

/// Tried in order at every position; the first matcher with a non-empty
/// match decides the token kind.
const MATCHERS: [(TokenKind, Matcher); 7] = [
    (Keyword, keyword),
    (Identifier, ident),
    (FloatNumber, float_number),
    (Number, number),
    (Assignment, assignment),
    (Operator, operator),
    (Separator, separator),
];

pub struct Lexer<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    start_pos: usize,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str, line: usize) -> Self {
        Self {
            src,
            tokens: vec![],
            start_pos: 0,
            pos: 0,
            line,
        }
    }

    /// Splits `src` into tokens. Characters outside every token category are
    /// dropped; this never fails.
    pub fn tokenize(src: &str) -> Vec<Token> {
        let mut tokens = vec![];
        for (i, line) in src.lines().enumerate() {
            let lexer = Lexer::new(line, i + 1);
            tokens.extend(lexer.scan_tokens());
        }
        log::debug!("lexed {} tokens", tokens.len());
        tokens
    }

    fn scan_tokens(mut self) -> Vec<Token> {
        while !self.eof() {
            self.start_pos = self.pos;
            self.scan_token();
        }
        self.tokens
    }

    fn scan_token(&mut self) {
        let src = self.src;
        let rest = &src.as_bytes()[self.pos..];
        for (kind, matcher) in MATCHERS.iter() {
            let len = matcher(rest);
            if len > 0 {
                self.pos += len;
                self.add_token(*kind);
                return;
            }
        }
        self.skip();
    }

    fn add_token(&mut self, kind: TokenKind) {
        let t = Token::new(kind, &self.src[self.start_pos..self.pos], self.line);
        log::trace!("line {}: {}", self.line, t);
        self.tokens.push(t);
    }

    fn skip(&mut self) {
        let c = self.src[self.pos..].chars().next().unwrap_or_default();
        if !c.is_whitespace() {
            log::trace!("line {}: skipping {:?}", self.line, c);
        }
        self.pos += c.len_utf8().max(1);
    }

    fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }
}

fn is_ident_start(c: u8) -> bool {
    matches!(c, b'a'..=b'z' | b'A'..=b'Z' | b'_')
}

fn is_ident_continue(c: u8) -> bool {
    matches!(c, b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'0'..=b'9')
}

fn word(s: &[u8]) -> usize {
    match s.first() {
        Some(&c) if is_ident_start(c) => {
            1 + s[1..].iter().take_while(|&&c| is_ident_continue(c)).count()
        }
        _ => 0,
    }
}

fn digits(s: &[u8]) -> usize {
    s.iter().take_while(|c| c.is_ascii_digit()).count()
}

fn keyword(s: &[u8]) -> usize {
    let len = word(s);
    if KEYWORDS.iter().any(|kw| kw.as_bytes() == &s[..len]) {
        len
    } else {
        0
    }
}

fn ident(s: &[u8]) -> usize {
    word(s)
}

fn float_number(s: &[u8]) -> usize {
    let int = digits(s);
    if int == 0 || s.get(int) != Some(&b'.') {
        return 0;
    }
    match digits(&s[int + 1..]) {
        0 => 0,
        frac => int + 1 + frac,
    }
}

fn number(s: &[u8]) -> usize {
    digits(s)
}

fn assignment(s: &[u8]) -> usize {
    one_of(s, b"=")
}

fn operator(s: &[u8]) -> usize {
    one_of(s, b"+-*/")
}

fn separator(s: &[u8]) -> usize {
    one_of(s, b";()")
}

fn one_of(s: &[u8], set: &[u8]) -> usize {
    match s.first() {
        Some(c) if set.contains(c) => 1,
        _ => 0,
    }
}
