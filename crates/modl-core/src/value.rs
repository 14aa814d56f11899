//! Semantic values attached to tokens.
//!
//! The scanner (and a downstream parser) attach exactly one typed payload
//! to a token. Which variant is valid follows from the token kind, and a
//! read of the wrong variant fails with a [`ValueError`] instead of
//! returning garbage.

use crate::code::CodeId;
use crate::intern::StrId;
use crate::numb::NumbId;
use crate::symbol::{DefineId, SymbolId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Constraint attribute bits carried by [`SemanticValue::Bits`].
///
/// Each attribute is a single bit so a constraint can combine several.
pub mod con_attr {
    pub const SCALE: u32 = 1 << 0;
    pub const SEPARATE: u32 = 1 << 1;
    pub const CHECKONLY: u32 = 1 << 2;
    pub const INDICATOR: u32 = 1 << 3;
    pub const QUBO: u32 = 1 << 4;
    pub const PENALTY1: u32 = 1 << 5;
    pub const PENALTY2: u32 = 1 << 6;
    pub const PENALTY3: u32 = 1 << 7;
    pub const PENALTY4: u32 = 1 << 8;
    pub const PENALTY5: u32 = 1 << 9;
    pub const PENALTY6: u32 = 1 << 10;
}

/// Discriminant of a [`SemanticValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Bits,
    Numb,
    Strg,
    Name,
    Symbol,
    Define,
    Code,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueKind::Bits => "bits",
            ValueKind::Numb => "numb",
            ValueKind::Strg => "strg",
            ValueKind::Name => "name",
            ValueKind::Symbol => "symbol",
            ValueKind::Define => "define",
            ValueKind::Code => "code",
        };
        f.write_str(label)
    }
}

/// A mismatched payload read.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected a {expected} value, found {found}")]
pub struct ValueError {
    pub expected: ValueKind,
    pub found: ValueKind,
}

/// The typed payload of a token.
///
/// The value is a transient carrier: every referenced entity (numeral,
/// symbol, define, code fragment, interned string) is owned by the
/// session tables and outlives the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticValue {
    /// Constraint attribute flag word
    Bits(u32),
    /// Numeric literal
    Numb(NumbId),
    /// String literal
    Strg(StrId),
    /// Unresolved name
    Name(StrId),
    /// Declared symbol
    Symbol(SymbolId),
    /// User macro
    Define(DefineId),
    /// Syntax fragment
    Code(CodeId),
}

impl SemanticValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            SemanticValue::Bits(_) => ValueKind::Bits,
            SemanticValue::Numb(_) => ValueKind::Numb,
            SemanticValue::Strg(_) => ValueKind::Strg,
            SemanticValue::Name(_) => ValueKind::Name,
            SemanticValue::Symbol(_) => ValueKind::Symbol,
            SemanticValue::Define(_) => ValueKind::Define,
            SemanticValue::Code(_) => ValueKind::Code,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> ValueError {
        ValueError {
            expected,
            found: self.kind(),
        }
    }

    pub fn as_bits(&self) -> Result<u32, ValueError> {
        match self {
            SemanticValue::Bits(bits) => Ok(*bits),
            other => Err(other.mismatch(ValueKind::Bits)),
        }
    }

    pub fn as_numb(&self) -> Result<NumbId, ValueError> {
        match self {
            SemanticValue::Numb(id) => Ok(*id),
            other => Err(other.mismatch(ValueKind::Numb)),
        }
    }

    pub fn as_strg(&self) -> Result<StrId, ValueError> {
        match self {
            SemanticValue::Strg(id) => Ok(*id),
            other => Err(other.mismatch(ValueKind::Strg)),
        }
    }

    pub fn as_name(&self) -> Result<StrId, ValueError> {
        match self {
            SemanticValue::Name(id) => Ok(*id),
            other => Err(other.mismatch(ValueKind::Name)),
        }
    }

    pub fn as_symbol(&self) -> Result<SymbolId, ValueError> {
        match self {
            SemanticValue::Symbol(id) => Ok(*id),
            other => Err(other.mismatch(ValueKind::Symbol)),
        }
    }

    pub fn as_define(&self) -> Result<DefineId, ValueError> {
        match self {
            SemanticValue::Define(id) => Ok(*id),
            other => Err(other.mismatch(ValueKind::Define)),
        }
    }

    pub fn as_code(&self) -> Result<CodeId, ValueError> {
        match self {
            SemanticValue::Code(id) => Ok(*id),
            other => Err(other.mismatch(ValueKind::Code)),
        }
    }
}
