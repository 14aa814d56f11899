//! String interning for identifiers and string literals.
//!
//! Scanned names and strings are stored once in a [`StrPool`] and referred
//! to by copyable handles; token payloads never own text.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Handle to a string owned by a [`StrPool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrId(u32);

/// Owning pool of interned strings.
#[derive(Debug, Default)]
pub struct StrPool {
    strings: Vec<String>,
    index: HashMap<String, StrId>,
}

impl StrPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning the existing handle if it was seen before.
    pub fn intern(&mut self, s: &str) -> StrId {
        if let Some(&id) = self.index.get(s) {
            return id;
        }
        let id = StrId(self.strings.len() as u32);
        self.strings.push(s.to_string());
        self.index.insert(s.to_string(), id);
        id
    }

    /// Resolve a handle produced by this pool.
    pub fn resolve(&self, id: StrId) -> &str {
        &self.strings[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
