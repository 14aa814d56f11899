//! Owning pool for numeric literals.
//!
//! A scanned numeral keeps its source spelling alongside the parsed value,
//! so diagnostics and dumps can show exactly what was written.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Handle to a numeral owned by a [`NumbPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumbId(u32);

/// A numeric literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Numb {
    text: String,
    value: f64,
}

impl Numb {
    /// The parsed value.
    pub fn as_f64(&self) -> f64 {
        self.value
    }

    /// Whether the numeral denotes an integer.
    pub fn is_integer(&self) -> bool {
        self.value.is_finite() && self.value.fract() == 0.0
    }

    /// The source spelling.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Numb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumbError {
    #[error("invalid numeral `{0}`")]
    Invalid(String),
}

/// Owning pool of numeric literals.
#[derive(Debug, Default)]
pub struct NumbPool {
    numbs: Vec<Numb>,
    index: HashMap<String, NumbId>,
}

impl NumbPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and intern a numeral; identical spellings share a handle.
    pub fn intern(&mut self, text: &str) -> Result<NumbId, NumbError> {
        if let Some(&id) = self.index.get(text) {
            return Ok(id);
        }
        let value: f64 = text
            .parse()
            .map_err(|_| NumbError::Invalid(text.to_string()))?;
        let id = NumbId(self.numbs.len() as u32);
        self.numbs.push(Numb {
            text: text.to_string(),
            value,
        });
        self.index.insert(text.to_string(), id);
        Ok(id)
    }

    /// Resolve a handle produced by this pool.
    pub fn resolve(&self, id: NumbId) -> &Numb {
        &self.numbs[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.numbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_shares_spellings() {
        let mut pool = NumbPool::new();
        let a = pool.intern("3.14").unwrap();
        let b = pool.intern("3.14").unwrap();
        let c = pool.intern("42").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn integer_test() {
        let mut pool = NumbPool::new();
        let int = pool.intern("42").unwrap();
        let frac = pool.intern("2.5").unwrap();
        let exp = pool.intern("1e3").unwrap();
        assert!(pool.resolve(int).is_integer());
        assert!(!pool.resolve(frac).is_integer());
        assert!(pool.resolve(exp).is_integer());
        assert_eq!(pool.resolve(frac).as_f64(), 2.5);
    }

    #[test]
    fn keeps_source_spelling() {
        let mut pool = NumbPool::new();
        let id = pool.intern("1.50").unwrap();
        assert_eq!(pool.resolve(id).to_string(), "1.50");
    }

    #[test]
    fn rejects_garbage() {
        let mut pool = NumbPool::new();
        assert!(pool.intern("12..5").is_err());
        assert!(pool.is_empty());
    }
}
