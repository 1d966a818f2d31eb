//! Immutable, structurally shared syntax trees with positioned views.
//!
//! [`RawNode`]s carry no parent pointers and can be shared between any number
//! of trees. A [`Syntax`] handle adds the path from the root, rebuilt lazily on
//! navigation, and answers parent, child and absolute position queries.

mod builder;
mod classify;
mod data;
mod error;
mod position;
mod raw;
mod syntax;
mod syntax_kind;
mod syntax_set;
mod trivia;
mod visitor;
#[cfg(test)]
mod tests;

/// Parser-facing builder for raw trees.
pub use builder::Builder;
/// Classification buckets for node kinds.
pub use classify::SyntaxCategory;
/// Positioned view of a single node.
pub use data::SyntaxData;
pub use error::SyntaxError;
/// Absolute offset, line and column accumulator.
pub use position::AbsolutePosition;
/// Shared raw tree nodes and their rendering options.
pub use raw::{PrintOptions, RawNode, SourcePresence};
/// Public façade over positioned nodes.
pub use syntax::Syntax;
/// Token and node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
/// Trivia pieces attached to tokens.
pub use trivia::{Trivia, TriviaPiece, TriviaPieceKind};
/// Traversal protocol over positioned nodes.
pub use visitor::{Preorder, SyntaxVisitor, WalkEvent};
