use self::{ir::Generator, lex::Lexer, parse::Parser, sema::Analyzer};

pub use self::{
    err::{CompileError, ErrorKind, Handler, Result, SemanticError, SyntaxError},
    ir::{Instr, Operand},
    lex::{Token, TokenKind},
    parse::ast::{BinOp, Expr, Program, Stmt},
    symbol::{SymbolTable, Ty, Value},
    util::args::Args,
};

pub mod err;
pub mod ir;
pub mod lex;
pub mod parse;
pub mod sema;
pub mod symbol;
mod util;

/// Everything a successful run produces.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub program: Program,
    pub code: Vec<Instr>,
    pub symbols: SymbolTable,
}

impl Compilation {
    pub fn code_lines(&self) -> Vec<String> {
        self.code.iter().map(|i| i.to_string()).collect()
    }
}

#[derive(Default)]
pub struct Compiler {}

impl Compiler {
    pub fn new() -> Self {
        Self {}
    }

    /// Runs lexer, parser, analyzer and code generator in order. Each run
    /// starts from an empty symbol table and `t0`.
    pub fn run(&mut self, src: String) -> Result<Compilation> {
        let tokens = Lexer::tokenize(&src);

        let mut parser = Parser::new(tokens.clone());
        let program = parser.parse()?;

        let mut symbols = SymbolTable::new();
        Analyzer::new(&mut symbols).analyze(&program)?;
        log::debug!("analysis ok, {} symbols", symbols.len());

        let code = Generator::new().generate(&program)?;

        Ok(Compilation {
            tokens,
            program,
            code,
            symbols,
        })
    }
}
