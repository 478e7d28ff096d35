use crate::lex::Token;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompileError>;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{msg} Found {} at token {pos}.", found_text(.found))]
pub struct SyntaxError {
    /// Index of the offending token in the token stream.
    pub pos: usize,
    /// `None` when input ended early.
    pub found: Option<Token>,
    pub msg: &'static str,
}

fn found_text(found: &Option<Token>) -> String {
    match found {
        Some(t) => t.to_string(),
        None => "end of input".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SemanticError {
    #[error("Variable '{0}' is already declared.")]
    AlreadyDeclared(String),
    #[error("Variable '{0}' is not declared.")]
    Undeclared(String),
    #[error("Operand '{operand}' of '{op}' is not initialized.")]
    UninitializedOperand { operand: String, op: String },
}

impl SemanticError {
    /// The identifier the error is about.
    pub fn name(&self) -> &str {
        match self {
            SemanticError::AlreadyDeclared(n) | SemanticError::Undeclared(n) => n,
            SemanticError::UninitializedOperand { operand, .. } => operand,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    AlreadyDeclared,
    Undeclared,
    UninitializedOperand,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => f.write_str("SyntaxError"),
            ErrorKind::AlreadyDeclared => f.write_str("AlreadyDeclaredError"),
            ErrorKind::Undeclared => f.write_str("UndeclaredVariableError"),
            ErrorKind::UninitializedOperand => f.write_str("UninitializedOperandError"),
        }
    }
}

/// A failed compilation run. The stage error is kept as the source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Semantic error: {0}")]
    Semantic(#[from] SemanticError),
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Syntax(_) => ErrorKind::Syntax,
            CompileError::Semantic(SemanticError::AlreadyDeclared(_)) => ErrorKind::AlreadyDeclared,
            CompileError::Semantic(SemanticError::Undeclared(_)) => ErrorKind::Undeclared,
            CompileError::Semantic(SemanticError::UninitializedOperand { .. }) => {
                ErrorKind::UninitializedOperand
            }
        }
    }

    /// Source line of the offending token, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            CompileError::Syntax(e) => e.found.as_ref().map(|t| t.line),
            CompileError::Semantic(_) => None,
        }
    }
}

/// Renders compile errors against the source they came from.
pub struct Handler<'a> {
    src: &'a str,
}

impl<'a> Handler<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src }
    }

    pub fn render(&self, err: &CompileError) -> String {
        let mut out = format!("{}: {}", err.kind(), err);
        if let Some(line) = err.line() {
            if let Some(text) = self.src.lines().nth(line - 1) {
                out.push_str(&format!("\n{:>4} | {}", line, text.trim_end()));
            }
        }
        out
    }

    pub fn report(&self, err: &CompileError) {
        eprintln!("{}", self.render(err));
    }
}
