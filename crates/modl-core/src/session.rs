//! Owning context for everything the token stream references.
//!
//! A [`Session`] is constructed once per front-end run and passed by
//! reference; there is no global mutable state. Tokens carry handles into
//! these tables and own nothing themselves.

use crate::code::CodeArena;
use crate::intern::StrPool;
use crate::numb::NumbPool;
use crate::symbol::{DefineClass, DefineId, DefineTable, SymbolClass, SymbolId, SymbolTable};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("`{0}` is already declared")]
    Redeclared(String),
}

/// The owning tables shared by scanner and parser.
#[derive(Debug, Default)]
pub struct Session {
    pub strings: StrPool,
    pub numbers: NumbPool,
    pub symbols: SymbolTable,
    pub defines: DefineTable,
    pub code: CodeArena,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a model symbol (set, parameter, variable) by name.
    pub fn declare_symbol(
        &mut self,
        name: &str,
        class: SymbolClass,
    ) -> Result<SymbolId, SessionError> {
        let id = self.strings.intern(name);
        self.symbols
            .declare(id, class)
            .ok_or_else(|| SessionError::Redeclared(name.to_string()))
    }

    /// Declare a user macro by name.
    pub fn declare_define(
        &mut self,
        name: &str,
        class: DefineClass,
    ) -> Result<DefineId, SessionError> {
        let id = self.strings.intern(name);
        self.defines
            .declare(id, class)
            .ok_or_else(|| SessionError::Redeclared(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_land_in_their_tables() {
        let mut session = Session::new();
        let sym = session.declare_symbol("x", SymbolClass::Var).unwrap();
        let def = session.declare_define("twice", DefineClass::Numb).unwrap();
        assert_eq!(session.symbols.get(sym).class, SymbolClass::Var);
        assert_eq!(session.defines.get(def).class, DefineClass::Numb);
    }

    #[test]
    fn redeclaration_reports_the_name() {
        let mut session = Session::new();
        session.declare_symbol("x", SymbolClass::Var).unwrap();
        let err = session.declare_symbol("x", SymbolClass::Set).unwrap_err();
        assert_eq!(err, SessionError::Redeclared("x".to_string()));
        assert_eq!(err.to_string(), "`x` is already declared");
    }
}
