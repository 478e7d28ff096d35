pub mod ast;

use crate::{
    err::SyntaxError,
    lex::{Token, TokenKind, TokenKind::*},
    symbol::Ty,
};
use ast::{BinOp, Expr, Program, Stmt};

type PResult<T> = std::result::Result<T, SyntaxError>;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses the whole token stream. The first error aborts the parse.
    pub fn parse(&mut self) -> PResult<Program> {
        let mut stmts = vec![];
        while !self.eof() {
            stmts.push(self.stmt()?);
        }
        log::debug!("parsed {} statements", stmts.len());
        Ok(Program { stmts })
    }

    fn stmt(&mut self) -> PResult<Stmt> {
        let t = self.peek().cloned();
        match t {
            Some(t) if t.kind == Keyword => {
                self.advance();
                // `print` is the only keyword that is not a type.
                match t.text.parse::<Ty>() {
                    Ok(ty) => self.declaration(ty),
                    Err(()) => self.print_stmt(),
                }
            }
            Some(t) if t.kind == Identifier && self.check_next(Assignment) => {
                self.advance();
                self.advance();
                self.assignment(t.text)
            }
            _ => self.error("Expect statement."),
        }
    }

    fn declaration(&mut self, ty: Ty) -> PResult<Stmt> {
        let name = self.consume(Identifier, "Expect variable name.")?.text;

        let init = if self.eat(Assignment) {
            Some(self.expr()?)
        } else {
            None
        };

        self.consume_separator(";", "Expect ';' after variable declaration.")?;
        Ok(Stmt::Declaration { ty, name, init })
    }

    fn assignment(&mut self, name: String) -> PResult<Stmt> {
        let value = self.expr()?;
        self.consume_separator(";", "Expect ';' after assignment.")?;
        Ok(Stmt::Assignment { name, value })
    }

    fn print_stmt(&mut self) -> PResult<Stmt> {
        let name = self.consume(Identifier, "Expect variable name after 'print'.")?.text;
        self.consume_separator(";", "Expect ';' after print statement.")?;
        Ok(Stmt::Print { name })
    }

    fn expr(&mut self) -> PResult<Expr> {
        let mut left = self.term()?;

        while let Some(op) = self.eat_op(&[BinOp::Add, BinOp::Sub]) {
            let right = self.term()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    fn term(&mut self) -> PResult<Expr> {
        let mut left = self.factor()?;

        while let Some(op) = self.eat_op(&[BinOp::Mul, BinOp::Div]) {
            let right = self.factor()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    fn factor(&mut self) -> PResult<Expr> {
        if self.eat(Number) || self.eat(FloatNumber) {
            Ok(Expr::Number(self.prev().text.clone()))
        } else if self.eat(Identifier) {
            Ok(Expr::Identifier(self.prev().text.clone()))
        } else {
            self.error("Expect expression.")
        }
    }

    fn eat_op(&mut self, ops: &[BinOp]) -> Option<BinOp> {
        let op = self
            .peek()
            .filter(|t| t.kind == Operator)
            .and_then(|t| BinOp::from_symbol(&t.text))
            .filter(|op| ops.contains(op))?;
        self.advance();
        Some(op)
    }

    fn consume(&mut self, kind: TokenKind, msg: &'static str) -> PResult<Token> {
        if self.check(kind) {
            self.advance();
            return Ok(self.prev().clone());
        }
        self.error(msg)
    }

    fn consume_separator(&mut self, sep: &str, msg: &'static str) -> PResult<()> {
        match self.peek() {
            Some(t) if t.is(Separator, sep) => {
                self.advance();
                Ok(())
            }
            _ => self.error(msg),
        }
    }

    fn error<T>(&self, msg: &'static str) -> PResult<T> {
        Err(SyntaxError {
            pos: self.pos,
            found: self.peek().cloned(),
            msg,
        })
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().map_or(false, |t| t.kind == kind)
    }

    fn check_next(&self, kind: TokenKind) -> bool {
        self.tokens.get(self.pos + 1).map_or(false, |t| t.kind == kind)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn prev(&self) -> &Token {
        &self.tokens[self.pos - 1]
    }

    fn advance(&mut self) {
        if !self.eof() {
            self.pos += 1;
        }
    }

    fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
