//! Bottom-up builder for raw trees, driven by parser events.

use crate::{RawNode, SyntaxKind, Trivia, TriviaPiece};

/// Builds a [`RawNode`] tree from `start_node` / `token` / `finish_node` events.
pub struct Builder {
    opened: Vec<(SyntaxKind, Vec<RawNode>)>,
    children_pool: Vec<Vec<RawNode>>,
    root: Option<RawNode>,
}

impl Drop for Builder {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.opened.is_empty() {
            panic!("you should call `Builder::finish()`");
        }
    }
}

const DEFAULT_TREE_DEPTH: usize = 128;
const DEFAULT_CHILDREN_LEN: usize = 10;

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            opened: Vec::with_capacity(DEFAULT_TREE_DEPTH),
            children_pool: Vec::with_capacity(DEFAULT_TREE_DEPTH),
            root: None,
        }
    }

    /// Retrieves a recycled children buffer or allocates a new one.
    fn new_children_vec(&mut self) -> Vec<RawNode> {
        self.children_pool.pop().unwrap_or_else(|| Vec::with_capacity(DEFAULT_CHILDREN_LEN))
    }

    /// Returns a children buffer to the pool.
    fn recycle_children_vec(&mut self, vec: Vec<RawNode>) {
        debug_assert!(vec.is_empty());
        self.children_pool.push(vec);
    }

    /// Attaches `child` to the innermost open node, or makes it the root.
    #[track_caller]
    fn push_child(&mut self, child: RawNode) {
        match self.opened.last_mut() {
            Some((_, children)) => children.push(child),
            None => {
                assert!(self.root.is_none(), "tree already has a root");
                self.root = Some(child);
            }
        }
    }

    /// Starts a new node of the given kind.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        let children = self.new_children_vec();
        self.opened.push((kind, children));
    }

    /// Finishes the most recently started node.
    #[track_caller]
    pub fn finish_node(&mut self) {
        let (kind, mut children) = self.opened.pop().expect("no opened nodes?");
        let node = RawNode::node(kind, children.drain(..));
        self.recycle_children_vec(children);
        self.push_child(node);
    }

    /// Adds a token with its leading and trailing trivia.
    #[track_caller]
    pub fn token(
        &mut self,
        leading_trivia: impl IntoIterator<Item = TriviaPiece>,
        kind: SyntaxKind,
        text: &str,
        trailing_trivia: impl IntoIterator<Item = TriviaPiece>,
    ) {
        let token =
            RawNode::token(Trivia::new(leading_trivia), kind, text, Trivia::new(trailing_trivia));
        self.push_child(token);
    }

    /// Adds a placeholder for a token the parser expected but did not find.
    #[track_caller]
    pub fn missing_token(&mut self, kind: SyntaxKind) {
        self.push_child(RawNode::missing_token(kind));
    }

    /// Adds a placeholder for a node the parser expected but did not find.
    #[track_caller]
    pub fn missing_node(&mut self, kind: SyntaxKind) {
        self.push_child(RawNode::missing_node(kind));
    }

    /// Adds an already built subtree, sharing it with whoever else holds it.
    #[track_caller]
    pub fn subtree(&mut self, node: RawNode) {
        self.push_child(node);
    }

    /// Finishes building and returns the root node.
    #[track_caller]
    pub fn finish(mut self) -> RawNode {
        assert!(self.opened.is_empty(), "unfinished nodes: {}", self.opened.len());
        self.root.take().expect("builder produced no root")
    }
}
