//! Positioned view over a raw tree.
//!
//! A [`SyntaxData`] pairs a raw node with the chain of ancestors it was reached
//! through. Raw nodes stay parent-free and shareable; the ancestor chain is
//! rebuilt for every navigation path instead of being stored in the tree.

use std::sync::Arc;

use crate::{RawNode, SyntaxError, SyntaxKind};

pub struct SyntaxData {
    raw: RawNode,
    parent: Option<Arc<SyntaxData>>,
    index_in_parent: usize,
}

impl SyntaxData {
    pub fn new_root(raw: RawNode) -> Arc<Self> {
        Arc::new(Self { raw, parent: None, index_in_parent: 0 })
    }

    #[inline]
    pub fn raw(&self) -> &RawNode {
        &self.raw
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.raw.kind()
    }

    #[inline]
    pub fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }

    /// Physical index of this node in its parent's layout; `None` for the root.
    #[inline]
    pub fn index_in_parent(&self) -> Option<usize> {
        self.parent.as_ref().map(|_| self.index_in_parent)
    }

    /// Materializes the child at `index` of the raw layout, tokens included.
    pub fn child(self: &Arc<Self>, index: usize) -> Result<Arc<Self>, SyntaxError> {
        let layout = self.raw.layout();
        let raw = layout
            .get(index)
            .ok_or(SyntaxError::ChildIndexOutOfRange { index, len: layout.len() })?
            .clone();
        tracing::trace!(parent = ?self.kind(), index, kind = ?raw.kind(), "materializing child");
        Ok(Self::new_child(self, raw, index))
    }

    /// Materializes every child of the raw layout, tokens included, in order.
    pub(crate) fn children(self: &Arc<Self>) -> impl Iterator<Item = Arc<Self>> + use<> {
        let parent = Arc::clone(self);
        let layout = parent.raw.layout().to_vec();
        layout
            .into_iter()
            .enumerate()
            .map(move |(index, raw)| Self::new_child(&parent, raw, index))
    }

    fn new_child(parent: &Arc<Self>, raw: RawNode, index_in_parent: usize) -> Arc<Self> {
        Arc::new(Self { raw, parent: Some(Arc::clone(parent)), index_in_parent })
    }

    /// Whether both views sit at the same position of the same tree.
    pub(crate) fn same_position(this: &Arc<Self>, other: &Arc<Self>) -> bool {
        let mut lhs = this;
        let mut rhs = other;
        loop {
            if Arc::ptr_eq(lhs, rhs) {
                return true;
            }
            if !lhs.raw.ptr_eq(&rhs.raw) || lhs.index_in_parent != rhs.index_in_parent {
                return false;
            }
            match (&lhs.parent, &rhs.parent) {
                (Some(l), Some(r)) => {
                    lhs = l;
                    rhs = r;
                }
                _ => return false,
            }
        }
    }

    pub fn is_decl(&self) -> bool {
        self.kind().is_decl()
    }

    pub fn is_stmt(&self) -> bool {
        self.kind().is_stmt()
    }

    pub fn is_expr(&self) -> bool {
        self.kind().is_expr()
    }

    pub fn is_type(&self) -> bool {
        self.kind().is_type()
    }

    pub fn is_pattern(&self) -> bool {
        self.kind().is_pattern()
    }

    pub fn is_unknown(&self) -> bool {
        self.kind().is_unknown()
    }
}

impl std::fmt::Debug for SyntaxData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxData")
            .field("kind", &self.kind())
            .field("index_in_parent", &self.index_in_parent())
            .finish_non_exhaustive()
    }
}
