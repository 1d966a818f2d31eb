//! Public syntax tree API: a root handle plus a positioned node.

use std::fmt;
use std::sync::Arc;

use crate::position;
use crate::{AbsolutePosition, PrintOptions, RawNode, SyntaxData, SyntaxError, SyntaxKind};

/// Read-only handle to a node of a tree.
///
/// Holds the tree's root view, which keeps the whole raw tree alive, and the
/// view of this node. Cloning is cheap; navigation allocates fresh views.
#[derive(Clone)]
pub struct Syntax {
    root: Arc<SyntaxData>,
    data: Arc<SyntaxData>,
}

impl Syntax {
    /// Wraps `raw` as the root of a tree.
    pub fn new_root(raw: RawNode) -> Self {
        let root = SyntaxData::new_root(raw);
        Self { data: Arc::clone(&root), root }
    }

    #[inline]
    pub fn raw(&self) -> &RawNode {
        self.data.raw()
    }

    #[inline]
    pub fn data(&self) -> &Arc<SyntaxData> {
        &self.data
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data.kind()
    }

    /// Returns the root of the tree this node belongs to.
    pub fn root(&self) -> Self {
        Self { root: Arc::clone(&self.root), data: Arc::clone(&self.root) }
    }

    /// Whether both handles were reached from the same root view.
    #[inline]
    pub(crate) fn same_tree(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.data.parent().is_none()
    }

    pub fn is_type(&self) -> bool {
        self.data.is_type()
    }

    pub fn is_decl(&self) -> bool {
        self.data.is_decl()
    }

    pub fn is_stmt(&self) -> bool {
        self.data.is_stmt()
    }

    pub fn is_expr(&self) -> bool {
        self.data.is_expr()
    }

    pub fn is_pattern(&self) -> bool {
        self.data.is_pattern()
    }

    pub fn is_unknown(&self) -> bool {
        self.data.is_unknown()
    }

    #[inline]
    pub fn is_token(&self) -> bool {
        self.raw().is_token()
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.raw().is_present()
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.raw().is_missing()
    }

    /// Returns the parent node, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let parent = self.data.parent()?;
        Some(Self { root: Arc::clone(&self.root), data: Arc::clone(parent) })
    }

    /// Returns an iterator of ancestors starting from this node.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> + use<> {
        std::iter::successors(Some(self.clone()), Self::parent)
    }

    /// Physical index of this node in its parent's layout, tokens counted.
    #[inline]
    pub fn index_in_parent(&self) -> Option<usize> {
        self.data.index_in_parent()
    }

    /// Number of children that are not tokens.
    ///
    /// Tokens are reachable through [`Syntax::children_with_tokens`] or the
    /// traversal APIs, never through the indexed child API.
    pub fn num_children(&self) -> usize {
        self.raw().layout().iter().filter(|child| !child.is_token()).count()
    }

    /// Returns the `n`-th child that is not a token.
    pub fn child(&self, n: usize) -> Result<Self, SyntaxError> {
        let physical = self
            .raw()
            .layout()
            .iter()
            .enumerate()
            .filter(|(_, child)| !child.is_token())
            .nth(n)
            .map(|(index, _)| index)
            .ok_or_else(|| SyntaxError::ChildIndexOutOfRange { index: n, len: self.num_children() })?;
        self.child_with_tokens(physical)
    }

    /// Returns the child at `index` of the full layout, tokens included.
    pub fn child_with_tokens(&self, index: usize) -> Result<Self, SyntaxError> {
        let data = self.data.child(index)?;
        Ok(Self { root: Arc::clone(&self.root), data })
    }

    /// Iterates the children that are not tokens.
    pub fn children(&self) -> impl Iterator<Item = Self> + use<> {
        self.children_with_tokens().filter(|child| !child.is_token())
    }

    /// Iterates every child of the layout, tokens included.
    pub fn children_with_tokens(&self) -> impl Iterator<Item = Self> + use<> {
        let root = Arc::clone(&self.root);
        self.data.children().map(move |data| Self { root: Arc::clone(&root), data })
    }

    /// Position of this node's first character, past its leading trivia.
    ///
    /// Walks `root` from the start, so the cost grows with the size of the file.
    pub fn absolute_position(&self, root: &Self) -> Result<AbsolutePosition, SyntaxError> {
        position::absolute_position(self, root)
    }

    /// Position just past this node's last character, before its trailing trivia.
    pub fn absolute_end_position(&self, root: &Self) -> Result<AbsolutePosition, SyntaxError> {
        position::absolute_end_position(self, root)
    }

    pub fn print(&self, out: &mut impl fmt::Write, opts: PrintOptions) -> fmt::Result {
        self.raw().print(out, opts)
    }

    pub fn dump(&self, out: &mut impl fmt::Write) -> fmt::Result {
        self.raw().dump(out, 0)
    }

    pub fn dump_string(&self) -> String {
        self.raw().dump_string()
    }
}

impl PartialEq for Syntax {
    fn eq(&self, other: &Self) -> bool {
        self.same_tree(other) && SyntaxData::same_position(&self.data, &other.data)
    }
}

impl Eq for Syntax {}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.raw(), f)
    }
}

impl fmt::Debug for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Syntax")
            .field("kind", &self.kind())
            .field("index_in_parent", &self.index_in_parent())
            .field("presence", &self.raw().presence())
            .finish()
    }
}
