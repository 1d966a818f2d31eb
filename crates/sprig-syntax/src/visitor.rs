//! Pre-order traversal over positioned nodes.

use crate::Syntax;

/// Hooks invoked by [`Syntax::accept`]. Every hook defaults to a no-op.
///
/// Traversal visits every node of the layout, tokens and missing nodes
/// included. It cannot be interrupted; a visitor that is done should latch a
/// flag and ignore the remaining calls.
pub trait SyntaxVisitor {
    /// Called on every node before its children.
    fn visit_pre(&mut self, _node: &Syntax) {}

    /// Called on every token, after `visit_pre`.
    fn visit_token(&mut self, _token: &Syntax) {}

    /// Called on every node after its children.
    fn visit_post(&mut self, _node: &Syntax) {}
}

/// Preorder walk event.
#[derive(Clone, Debug)]
pub enum WalkEvent {
    Enter(Syntax),
    Token(Syntax),
    Leave(Syntax),
}

/// Preorder traversal over nodes and tokens.
///
/// Keeps its own stack, so depth is bounded by memory rather than the call stack.
#[derive(Clone)]
pub struct Preorder {
    stack: Vec<(Syntax, usize)>,
    root: Option<Syntax>,
}

impl Preorder {
    pub(crate) fn new(start: Syntax) -> Self {
        Self { stack: Vec::with_capacity(64), root: Some(start) }
    }

    /// Skips the rest of the node entered last; no `Leave` is emitted for it.
    pub fn skip_subtree(&mut self) {
        assert!(self.stack.pop().is_some(), "must have a subtree to skip");
    }
}

impl Iterator for Preorder {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let Some((node, next_child)) = self.stack.last_mut() else {
            let root = self.root.take()?;
            if root.is_token() {
                return Some(WalkEvent::Token(root));
            }
            self.stack.push((root.clone(), 0));
            return Some(WalkEvent::Enter(root));
        };
        match node.child_with_tokens(*next_child) {
            Ok(child) => {
                *next_child += 1;
                if child.is_token() {
                    return Some(WalkEvent::Token(child));
                }
                self.stack.push((child.clone(), 0));
                Some(WalkEvent::Enter(child))
            }
            Err(_) => {
                let (exited, _) = self.stack.pop()?;
                Some(WalkEvent::Leave(exited))
            }
        }
    }
}

impl Syntax {
    /// Walks this subtree, dispatching to `visitor`'s hooks in source order.
    pub fn accept<V: SyntaxVisitor + ?Sized>(&self, visitor: &mut V) {
        for event in self.preorder() {
            match event {
                WalkEvent::Enter(node) => visitor.visit_pre(&node),
                WalkEvent::Token(token) => {
                    visitor.visit_pre(&token);
                    visitor.visit_token(&token);
                    visitor.visit_post(&token);
                }
                WalkEvent::Leave(node) => visitor.visit_post(&node),
            }
        }
    }

    /// Returns a preorder iterator over this subtree, tokens included.
    pub fn preorder(&self) -> Preorder {
        Preorder::new(self.clone())
    }
}
