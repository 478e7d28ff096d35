use crate::symbol::Ty;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp::Add => f.write_str("+"),
            BinOp::Sub => f.write_str("-"),
            BinOp::Mul => f.write_str("*"),
            BinOp::Div => f.write_str("/"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer or float literal, kept as written.
    Number(String),
    Identifier(String),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ident(name: &str) -> Self {
        Expr::Identifier(name.to_string())
    }

    pub fn number(text: &str) -> Self {
        Expr::Number(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration {
        ty: Ty,
        name: String,
        init: Option<Expr>,
    },
    Assignment {
        name: String,
        value: Expr,
    },
    Print {
        name: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

/// Renders the tree one node per line as `Tag: payload`, children indented
/// by two spaces.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program")?;
        for stmt in &self.stmts {
            fmt_stmt(f, stmt, 1)?;
        }
        Ok(())
    }
}

fn fmt_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    match stmt {
        Stmt::Declaration { ty, name, init } => {
            writeln!(f, "{}Declaration: {} {}", pad, ty, name)?;
            if let Some(init) = init {
                fmt_expr(f, init, depth + 1)?;
            }
        }
        Stmt::Assignment { name, value } => {
            writeln!(f, "{}Assignment: {}", pad, name)?;
            fmt_expr(f, value, depth + 1)?;
        }
        Stmt::Print { name } => writeln!(f, "{}Print: {}", pad, name)?,
    }
    Ok(())
}

fn fmt_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    match expr {
        Expr::Number(n) => writeln!(f, "{}Number: {}", pad, n),
        Expr::Identifier(name) => writeln!(f, "{}Identifier: {}", pad, name),
        Expr::Binary { op, left, right } => {
            writeln!(f, "{}BinaryOp: {}", pad, op)?;
            fmt_expr(f, left, depth + 1)?;
            fmt_expr(f, right, depth + 1)
        }
    }
}
