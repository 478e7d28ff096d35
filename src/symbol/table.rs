use crate::symbol::{Ty, Value};
use std::{collections::HashMap, fmt};

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub ty: Ty,
    pub value: Value,
}

/// Flat name -> entry map. Entries keep the order they were declared in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    map: HashMap<String, usize>,
    entries: Vec<(String, Entry)>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new variable. Returns `false` and leaves the table untouched if
    /// `name` is already defined.
    pub fn declare(&mut self, name: &str, ty: Ty, value: Value) -> bool {
        if self.is_defined(name) {
            return false;
        }
        self.map.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), Entry { ty, value }));
        true
    }

    /// Overwrites the value of a declared variable, keeping its type.
    /// Returns `false` if `name` is not defined.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        match self.map.get(name) {
            Some(&i) => {
                self.entries[i].1.value = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.map.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, type, value)` triples in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Ty, &Value)> {
        self.entries
            .iter()
            .map(|(name, e)| (name.as_str(), e.ty, &e.value))
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, ty, value) in self.entries() {
            writeln!(f, "{}: {} = {}", name, ty, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_once() {
        let mut table = SymbolTable::new();
        assert!(table.declare("x", Ty::Int, Value::Uninitialized));
        assert!(!table.declare("x", Ty::Float, Value::Literal("1.0".into())));
        assert_eq!(table.get("x").unwrap().ty, Ty::Int);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn assign_keeps_type() {
        let mut table = SymbolTable::new();
        table.declare("y", Ty::Float, Value::Uninitialized);
        assert!(table.assign("y", Value::Literal("2".into())));
        assert!(!table.assign("z", Value::Literal("2".into())));

        let e = table.get("y").unwrap();
        assert_eq!(e.ty, Ty::Float);
        assert_eq!(e.value, Value::Literal("2".into()));
    }

    #[test]
    fn display_in_declaration_order() {
        let mut table = SymbolTable::new();
        table.declare("b", Ty::Int, Value::Composed("1 + 2".into()));
        table.declare("a", Ty::Float, Value::Uninitialized);
        assert_eq!(
            table.to_string(),
            "b: int = 1 + 2\na: float = <uninitialized>\n"
        );
    }
}
