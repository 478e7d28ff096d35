use crate::{
    err::SemanticError,
    parse::ast::{Expr, Program, Stmt},
    symbol::{SymbolTable, Value},
};

type SResult<T> = std::result::Result<T, SemanticError>;

/// Checks declare-before-use and no-redeclaration over the top-level
/// statements, recording every variable in the symbol table.
pub struct Analyzer<'a> {
    symbols: &'a mut SymbolTable,
}

impl<'a> Analyzer<'a> {
    pub fn new(symbols: &'a mut SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn analyze(&mut self, program: &Program) -> SResult<()> {
        for stmt in &program.stmts {
            self.analyze_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn analyze_stmt(&mut self, stmt: &Stmt) -> SResult<()> {
        match stmt {
            Stmt::Declaration { ty, name, init } => {
                if self.symbols.is_defined(name) {
                    return Err(SemanticError::AlreadyDeclared(name.clone()));
                }
                let value = match init {
                    Some(init) => self.evaluate(init)?,
                    None => Value::Uninitialized,
                };
                log::debug!("declare {}: {} = {}", name, ty, value);
                self.symbols.declare(name, *ty, value);
            }
            Stmt::Assignment { name, value } => {
                if !self.symbols.is_defined(name) {
                    return Err(SemanticError::Undeclared(name.clone()));
                }
                let value = self.evaluate(value)?;
                log::debug!("assign {} = {}", name, value);
                self.symbols.assign(name, value);
            }
            Stmt::Print { name } => {
                if !self.symbols.is_defined(name) {
                    return Err(SemanticError::Undeclared(name.clone()));
                }
            }
        }
        Ok(())
    }

    /// Rebuilds the expression as text, substituting each identifier with
    /// its currently stored value. No arithmetic is performed.
    pub fn evaluate(&self, expr: &Expr) -> SResult<Value> {
        match expr {
            Expr::Number(n) => Ok(Value::Literal(n.clone())),
            Expr::Identifier(name) => match self.symbols.get(name) {
                Some(entry) => Ok(entry.value.clone()),
                None => Err(SemanticError::Undeclared(name.clone())),
            },
            Expr::Binary { op, left, right } => {
                let l = self.evaluate(left)?;
                let r = self.evaluate(right)?;
                match (l.text(), r.text()) {
                    (Some(l), Some(r)) => Ok(Value::Composed(format!("{} {} {}", l, op, r))),
                    _ => {
                        let operand = if l.is_initialized() { right } else { left };
                        Err(SemanticError::UninitializedOperand {
                            operand: operand_name(operand),
                            op: op.to_string(),
                        })
                    }
                }
            }
        }
    }
}

fn operand_name(expr: &Expr) -> String {
    match expr {
        Expr::Number(n) | Expr::Identifier(n) => n.clone(),
        Expr::Binary { op, .. } => format!("<{} expression>", op),
    }
}
