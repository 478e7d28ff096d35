mod table;

use std::{fmt, str::FromStr};

pub use self::table::{Entry, SymbolTable};

/// Declared type of a variable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ty {
    Int,
    Float,
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Int => f.write_str("int"),
            Ty::Float => f.write_str("float"),
        }
    }
}

impl FromStr for Ty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Ty::Int),
            "float" => Ok(Ty::Float),
            _ => Err(()),
        }
    }
}

/// What the analyzer knows about a variable's contents.
///
/// This is a textual reconstruction of the expression last stored into the
/// variable, never a computed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Uninitialized,
    Literal(String),
    Composed(String),
}

impl Value {
    pub fn is_initialized(&self) -> bool {
        !matches!(self, Value::Uninitialized)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Value::Uninitialized => None,
            Value::Literal(s) | Value::Composed(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uninitialized => f.write_str("<uninitialized>"),
            Value::Literal(s) | Value::Composed(s) => f.write_str(s),
        }
    }
}
