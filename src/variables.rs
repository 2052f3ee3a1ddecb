use std::fmt;

use thiserror::Error;

use crate::cursor::{Cursor, is_letter};

/// Longest variable name, in letters.
pub const MAX_NAME_LEN: usize = 31;

/// Default number of variables a table can hold.
pub const MAX_VARS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("variable name `{0}` is longer than {max} letters", max = MAX_NAME_LEN)]
    TooLong(String),
    #[error("variable name `{0}` contains a non-letter character")]
    NotAlphabetic(String),
}

/// Variable name: up to [`MAX_NAME_LEN`] ASCII letters.
///
/// The empty name is valid. A line such as `= 5` assigns to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarName(String);

impl VarName {
    pub fn new(name: &str) -> Result<Self, NameError> {
        if !name.bytes().all(is_letter) {
            return Err(NameError::NotAlphabetic(name.to_string()));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(NameError::TooLong(name.to_string()));
        }
        Ok(VarName(name.to_string()))
    }

    pub fn scan(cursor: &mut Cursor) -> Self {
        let mut name = String::new();
        while is_letter(cursor.peek()) && name.len() < MAX_NAME_LEN {
            name.push(char::from(cursor.peek()));
            cursor.advance();
        }
        VarName(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(usize);

#[derive(Debug, Clone)]
struct Variable {
    name: VarName,
    value: i32,
}

/// Append-only, bounded name-to-integer table.
#[derive(Debug, Clone)]
pub struct VariableTable {
    entries: Vec<Variable>,
    capacity: usize,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::with_capacity(MAX_VARS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        VariableTable {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Finds `name`, creating it with value 0 when it is new. Returns `None`
    /// once the table is full and `name` is not already present.
    pub fn resolve(&mut self, name: &VarName) -> Option<Slot> {
        if let Some(index) = self.entries.iter().position(|v| v.name == *name) {
            return Some(Slot(index));
        }
        if self.entries.len() >= self.capacity {
            tracing::debug!(name = %name, capacity = self.capacity, "variable table full");
            return None;
        }
        self.entries.push(Variable {
            name: name.clone(),
            value: 0,
        });
        Some(Slot(self.entries.len() - 1))
    }

    pub fn read(&self, slot: Slot) -> i32 {
        self.entries[slot.0].value
    }

    pub fn write(&mut self, slot: Slot, value: i32) {
        self.entries[slot.0].value = value;
    }

    /// Looks a name up without creating it.
    pub fn get(&self, name: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|v| v.name.as_str() == name)
            .map(|v| v.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Variables in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.entries.iter().map(|v| (v.name.as_str(), v.value))
    }
}

impl Default for VariableTable {
    fn default() -> Self {
        Self::new()
    }
}
