use crate::SyntaxKind;

/// Precondition violations reported by navigation, editing and position queries.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error("child index {index} is out of range for a node with {len} children")]
    ChildIndexOutOfRange { index: usize, len: usize },
    #[error("{kind:?} node is not part of the tree it was resolved against")]
    NodeNotInRoot { kind: SyntaxKind },
}
