//! Arena for abstract syntax fragments.
//!
//! A downstream parser builds its tree out of [`CodeNode`]s allocated
//! here and refers to them through [`CodeId`] handles. At this scope the
//! fragments are opaque: a node is tagged with the token kind that
//! produced it and may carry a leaf payload and child fragments.

use crate::token::TokenKind;
use crate::value::SemanticValue;
use serde::{Deserialize, Serialize};

/// Handle to a fragment owned by a [`CodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeId(u32);

/// One syntax fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeNode {
    pub token: TokenKind,
    pub value: Option<SemanticValue>,
    children: Vec<CodeId>,
}

impl CodeNode {
    pub fn children(&self) -> &[CodeId] {
        &self.children
    }
}

/// Owning arena of syntax fragments.
#[derive(Debug, Default)]
pub struct CodeArena {
    nodes: Vec<CodeNode>,
}

impl CodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(
        &mut self,
        token: TokenKind,
        value: Option<SemanticValue>,
        children: Vec<CodeId>,
    ) -> CodeId {
        let id = CodeId(self.nodes.len() as u32);
        self.nodes.push(CodeNode {
            token,
            value,
            children,
        });
        id
    }

    /// Resolve a handle produced by this arena.
    pub fn get(&self, id: CodeId) -> &CodeNode {
        &self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numb::NumbPool;

    #[test]
    fn leaf_and_parent_fragments() {
        let mut numbs = NumbPool::new();
        let mut arena = CodeArena::new();
        let two = numbs.intern("2").unwrap();
        let leaf = arena.alloc(TokenKind::Numb, Some(SemanticValue::Numb(two)), Vec::new());
        let parent = arena.alloc(TokenKind::Plus, None, vec![leaf, leaf]);

        let node = arena.get(parent);
        assert_eq!(node.token, TokenKind::Plus);
        assert_eq!(node.children(), &[leaf, leaf]);
        assert!(node.value.is_none());

        let leaf_node = arena.get(leaf);
        assert_eq!(leaf_node.value.unwrap().as_numb(), Ok(two));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn code_values_reference_fragments() {
        let mut arena = CodeArena::new();
        let id = arena.alloc(TokenKind::Name, None, Vec::new());
        let value = SemanticValue::Code(id);
        assert_eq!(value.as_code(), Ok(id));
        assert!(value.as_name().is_err());
    }
}
