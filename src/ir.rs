use crate::{
    err::Result,
    parse::ast::{BinOp, Expr, Program, Stmt},
    symbol::Ty,
};
use std::fmt;

/// Operand of a three-address instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Literal text or variable name.
    Name(String),
    Temp(usize),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Name(s) => f.write_str(s),
            Operand::Temp(n) => write!(f, "t{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
    Declare {
        name: String,
        ty: Ty,
    },
    Copy {
        dst: Operand,
        src: Operand,
    },
    Binary {
        dst: Operand,
        op: BinOp,
        left: Operand,
        right: Operand,
    },
    Print {
        name: String,
    },
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Declare { name, ty } => write!(f, "DECLARE {} as {}", name, ty),
            Instr::Copy { dst, src } => write!(f, "{} = {}", dst, src),
            Instr::Binary {
                dst,
                op,
                left,
                right,
            } => write!(f, "{} = {} {} {}", dst, left, op, right),
            Instr::Print { name } => write!(f, "PRINT {}", name),
        }
    }
}

/// Lowers a program to three-address code. Temporaries are numbered from
/// `t0` in the order they are created, so use a fresh generator per run.
#[derive(Debug, Default)]
pub struct Generator {
    next_temp: usize,
    code: Vec<Instr>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(mut self, program: &Program) -> Result<Vec<Instr>> {
        for stmt in &program.stmts {
            self.gen_stmt(stmt)?;
        }
        log::debug!(
            "generated {} instructions using {} temporaries",
            self.code.len(),
            self.next_temp
        );
        Ok(self.code)
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Declaration {
                ty,
                name,
                init: None,
            } => self.emit(Instr::Declare {
                name: name.clone(),
                ty: *ty,
            }),
            Stmt::Declaration {
                name,
                init: Some(value),
                ..
            }
            | Stmt::Assignment { name, value } => {
                let src = self.lower(value)?;
                self.emit(Instr::Copy {
                    dst: Operand::Name(name.clone()),
                    src,
                });
            }
            Stmt::Print { name } => self.emit(Instr::Print { name: name.clone() }),
        }
        Ok(())
    }

    /// Emits the instructions computing `expr` and returns the operand that
    /// holds its result. The left operand is always lowered first.
    pub fn lower(&mut self, expr: &Expr) -> Result<Operand> {
        match expr {
            Expr::Number(s) | Expr::Identifier(s) => Ok(Operand::Name(s.clone())),
            Expr::Binary { op, left, right } => {
                let left = self.lower(left)?;
                let right = self.lower(right)?;
                let dst = self.new_temp();
                self.emit(Instr::Binary {
                    dst: dst.clone(),
                    op: *op,
                    left,
                    right,
                });
                Ok(dst)
            }
        }
    }

    fn new_temp(&mut self) -> Operand {
        let t = Operand::Temp(self.next_temp);
        self.next_temp += 1;
        t
    }

    fn emit(&mut self, instr: Instr) {
        log::trace!("emit: {}", instr);
        self.code.push(instr);
    }
}
