//! Immutable, reference-counted syntax nodes.
//!
//! A [`RawNode`] knows its kind, its presence and its children, but never its
//! parent: the same node may sit under many ancestors in many versions of a tree.

use std::fmt;

use text_size::TextSize;
use triomphe::Arc;

use crate::{AbsolutePosition, SyntaxError, SyntaxKind, Trivia};

/// Whether a node carries source text or was synthesized by error recovery.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SourcePresence {
    Present,
    Missing,
}

/// Knobs for [`RawNode::print`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrintOptions {
    /// Wrap every nonterminal in `<KIND>` / `</KIND>` markers.
    pub print_syntax_kind: bool,
    /// Also wrap trivial kinds (bare lists) when `print_syntax_kind` is set.
    pub print_trivial_node_kind: bool,
}

#[derive(Clone)]
pub struct RawNode(Arc<RawNodeData>);

struct RawNodeData {
    kind: SyntaxKind,
    presence: SourcePresence,
    text_len: TextSize,
    repr: Repr,
}

enum Repr {
    Token { leading: Trivia, text: Box<str>, trailing: Trivia },
    Node { layout: Box<[RawNode]> },
}

impl RawNode {
    pub fn token(
        leading: Trivia,
        kind: SyntaxKind,
        text: impl Into<Box<str>>,
        trailing: Trivia,
    ) -> Self {
        let text = text.into();
        let text_len = leading.len() + TextSize::of(&*text) + trailing.len();
        Self::alloc(kind, SourcePresence::Present, text_len, Repr::Token { leading, text, trailing })
    }

    /// A placeholder token the parser expected but did not find.
    pub fn missing_token(kind: SyntaxKind) -> Self {
        Self::alloc(
            kind,
            SourcePresence::Missing,
            TextSize::new(0),
            Repr::Token { leading: Trivia::empty(), text: "".into(), trailing: Trivia::empty() },
        )
    }

    pub fn node(kind: SyntaxKind, layout: impl IntoIterator<Item = RawNode>) -> Self {
        let layout = layout.into_iter().collect::<Box<[_]>>();
        let text_len = layout.iter().map(Self::text_len).sum();
        Self::alloc(kind, SourcePresence::Present, text_len, Repr::Node { layout })
    }

    /// A placeholder nonterminal with an empty layout.
    pub fn missing_node(kind: SyntaxKind) -> Self {
        Self::alloc(
            kind,
            SourcePresence::Missing,
            TextSize::new(0),
            Repr::Node { layout: Box::default() },
        )
    }

    fn alloc(kind: SyntaxKind, presence: SourcePresence, text_len: TextSize, repr: Repr) -> Self {
        Self(Arc::new(RawNodeData { kind, presence, text_len, repr }))
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    #[inline]
    pub fn presence(&self) -> SourcePresence {
        self.0.presence
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.presence() == SourcePresence::Present
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.presence() == SourcePresence::Missing
    }

    #[inline]
    pub fn is_token(&self) -> bool {
        matches!(self.0.repr, Repr::Token { .. })
    }

    /// Children of a nonterminal in source order; empty for tokens.
    #[inline]
    pub fn layout(&self) -> &[RawNode] {
        match &self.0.repr {
            Repr::Node { layout } => layout,
            Repr::Token { .. } => &[],
        }
    }

    /// Token text without trivia; empty for nonterminals and missing tokens.
    #[inline]
    pub fn token_text(&self) -> &str {
        match &self.0.repr {
            Repr::Token { text, .. } => text,
            Repr::Node { .. } => "",
        }
    }

    pub fn leading_trivia(&self) -> &Trivia {
        const EMPTY: &Trivia = &Trivia::empty();
        match &self.0.repr {
            Repr::Token { leading, .. } => leading,
            Repr::Node { .. } => EMPTY,
        }
    }

    pub fn trailing_trivia(&self) -> &Trivia {
        const EMPTY: &Trivia = &Trivia::empty();
        match &self.0.repr {
            Repr::Token { trailing, .. } => trailing,
            Repr::Node { .. } => EMPTY,
        }
    }

    /// Length of the source text spanned by this node, trivia included.
    #[inline]
    pub fn text_len(&self) -> TextSize {
        self.0.text_len
    }

    /// Identity comparison; structurally equal but separately built nodes differ.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Folds every present token of this subtree into `pos`, in source order.
    pub fn accumulate_absolute_position(&self, pos: &mut AbsolutePosition) {
        if self.is_missing() {
            return;
        }
        match &self.0.repr {
            Repr::Token { leading, text, trailing } => {
                leading.accumulate_absolute_position(pos);
                pos.add_text(text);
                trailing.accumulate_absolute_position(pos);
            }
            Repr::Node { layout } => {
                for child in layout {
                    child.accumulate_absolute_position(pos);
                }
            }
        }
    }

    /// Returns a new node with the child at `index` replaced.
    ///
    /// Every other child is shared with `self`, which is left untouched.
    pub fn replace_child(&self, index: usize, new_child: RawNode) -> Result<RawNode, SyntaxError> {
        let layout = self.layout();
        if index >= layout.len() {
            return Err(SyntaxError::ChildIndexOutOfRange { index, len: layout.len() });
        }
        tracing::trace!(kind = ?self.kind(), index, "replacing child");

        let mut new_layout = layout.to_vec();
        new_layout[index] = new_child;
        let text_len = new_layout.iter().map(Self::text_len).sum();
        Ok(Self::alloc(
            self.kind(),
            self.presence(),
            text_len,
            Repr::Node { layout: new_layout.into_boxed_slice() },
        ))
    }

    /// Writes the source text of this subtree. Missing nodes print nothing.
    pub fn print(&self, out: &mut impl fmt::Write, opts: PrintOptions) -> fmt::Result {
        if self.is_missing() {
            return Ok(());
        }
        match &self.0.repr {
            Repr::Token { leading, text, trailing } => {
                write!(out, "{leading}")?;
                out.write_str(text)?;
                write!(out, "{trailing}")
            }
            Repr::Node { layout } => {
                let kind = self.kind();
                let print_kind = opts.print_syntax_kind
                    && (opts.print_trivial_node_kind || !kind.is_trivial());
                if print_kind {
                    write!(out, "<{kind:?}>")?;
                }
                for child in layout {
                    child.print(out, opts)?;
                }
                if print_kind {
                    write!(out, "</{kind:?}>")?;
                }
                Ok(())
            }
        }
    }

    /// Writes an indented, one-node-per-line rendering of this subtree.
    pub fn dump(&self, out: &mut impl fmt::Write, indent: usize) -> fmt::Result {
        write!(out, "{:indent$}{:?}", "", self.kind())?;
        if let Repr::Token { leading, text, trailing } = &self.0.repr {
            write!(out, " {text:?}")?;
            dump_trivia(out, "leading", leading)?;
            dump_trivia(out, "trailing", trailing)?;
        }
        if self.is_missing() {
            out.write_str(" (missing)")?;
        }
        out.write_char('\n')?;
        for child in self.layout() {
            child.dump(out, indent + 2)?;
        }
        Ok(())
    }

    pub fn dump_string(&self) -> String {
        let mut buf = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.dump(&mut buf, 0);
        buf
    }
}

fn dump_trivia(out: &mut impl fmt::Write, label: &str, trivia: &Trivia) -> fmt::Result {
    if trivia.is_empty() {
        return Ok(());
    }
    write!(out, " {label}: [")?;
    for (i, piece) in trivia.pieces().iter().enumerate() {
        if i != 0 {
            out.write_str(", ")?;
        }
        write!(out, "{:?}({:?})", piece.kind, piece.text)?;
    }
    out.write_char(']')
}

impl fmt::Display for RawNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, PrintOptions::default())
    }
}

impl fmt::Debug for RawNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("RawNode");
        s.field("kind", &self.kind()).field("presence", &self.presence());
        if self.is_token() {
            s.field("text", &self.token_text());
        } else {
            s.field("children", &self.layout().len());
        }
        s.field("text_len", &self.text_len()).finish()
    }
}
