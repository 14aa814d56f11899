//! Symbol and define tables.
//!
//! Declared model entities (sets, parameters, variables) and user macros
//! live in owning tables. The scanner consults both to classify a plain
//! name into its table-specific token kind.

use crate::intern::StrId;
use crate::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a declared symbol stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    Numb,
    Strg,
    Var,
    Set,
}

impl SymbolClass {
    /// The token kind a name of this class scans as.
    pub fn token_kind(self) -> TokenKind {
        match self {
            SymbolClass::Numb => TokenKind::NumbSym,
            SymbolClass::Strg => TokenKind::StrgSym,
            SymbolClass::Var => TokenKind::VarSym,
            SymbolClass::Set => TokenKind::SetSym,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SymbolClass::Numb => "numb",
            SymbolClass::Strg => "strg",
            SymbolClass::Var => "var",
            SymbolClass::Set => "set",
        }
    }
}

/// Handle to a symbol owned by a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(u32);

/// A declared model entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub name: StrId,
    pub class: SymbolClass,
}

/// Owning table of declared symbols.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    index: HashMap<StrId, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a symbol. Returns `None` if the name is taken.
    pub fn declare(&mut self, name: StrId, class: SymbolClass) -> Option<SymbolId> {
        if self.index.contains_key(&name) {
            return None;
        }
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol { name, class });
        self.index.insert(name, id);
        Some(id)
    }

    pub fn lookup(&self, name: StrId) -> Option<SymbolId> {
        self.index.get(&name).copied()
    }

    /// Resolve a handle produced by this table.
    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// What a user macro expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineClass {
    Numb,
    Strg,
    Bool,
    Set,
}

impl DefineClass {
    /// The token kind a name of this class scans as.
    pub fn token_kind(self) -> TokenKind {
        match self {
            DefineClass::Numb => TokenKind::NumbDef,
            DefineClass::Strg => TokenKind::StrgDef,
            DefineClass::Bool => TokenKind::BoolDef,
            DefineClass::Set => TokenKind::SetDef,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DefineClass::Numb => "numb",
            DefineClass::Strg => "strg",
            DefineClass::Bool => "bool",
            DefineClass::Set => "set",
        }
    }
}

/// Handle to a define owned by a [`DefineTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefineId(u32);

/// A user macro definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Define {
    pub name: StrId,
    pub class: DefineClass,
}

/// Owning table of user macros.
#[derive(Debug, Default)]
pub struct DefineTable {
    defines: Vec<Define>,
    index: HashMap<StrId, DefineId>,
}

impl DefineTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a define. Returns `None` if the name is taken.
    pub fn declare(&mut self, name: StrId, class: DefineClass) -> Option<DefineId> {
        if self.index.contains_key(&name) {
            return None;
        }
        let id = DefineId(self.defines.len() as u32);
        self.defines.push(Define { name, class });
        self.index.insert(name, id);
        Some(id)
    }

    pub fn lookup(&self, name: StrId) -> Option<DefineId> {
        self.index.get(&name).copied()
    }

    /// Resolve a handle produced by this table.
    pub fn get(&self, id: DefineId) -> &Define {
        &self.defines[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.defines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defines.is_empty()
    }
}
