//! Trivia pieces attached to tokens.

use std::fmt;

use text_size::TextSize;
use triomphe::ThinArc;

use crate::AbsolutePosition;

/// Kinds of trivia stored alongside tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TriviaPieceKind {
    Space,
    Tab,
    Newline,
    CarriageReturn,
    CarriageReturnLineFeed,
    LineComment,
    BlockComment,
    DocComment,
}

/// A trivia fragment with its kind and source text.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TriviaPiece {
    pub kind: TriviaPieceKind,
    pub text: Box<str>,
}

impl TriviaPiece {
    /// Creates a new trivia piece with the given kind and text.
    pub fn new(kind: TriviaPieceKind, text: impl Into<Box<str>>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn spaces(count: usize) -> Self {
        Self::new(TriviaPieceKind::Space, " ".repeat(count))
    }

    pub fn tabs(count: usize) -> Self {
        Self::new(TriviaPieceKind::Tab, "\t".repeat(count))
    }

    pub fn newlines(count: usize) -> Self {
        Self::new(TriviaPieceKind::Newline, "\n".repeat(count))
    }

    pub fn line_comment(text: impl Into<Box<str>>) -> Self {
        Self::new(TriviaPieceKind::LineComment, text)
    }

    pub fn block_comment(text: impl Into<Box<str>>) -> Self {
        Self::new(TriviaPieceKind::BlockComment, text)
    }

    pub fn len(&self) -> TextSize {
        TextSize::of(&*self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Advances `pos` past this piece.
    ///
    /// Line breaks are read from the text, so a piece whose kind disagrees with
    /// its text still lands on the right line.
    pub fn accumulate_absolute_position(&self, pos: &mut AbsolutePosition) {
        pos.add_text(&self.text);
    }
}

/// Immutable run of trivia pieces, shared between every tree that holds the
/// owning token.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Trivia {
    ptr: Option<ThinArc<TextSize, TriviaPiece>>,
}

impl fmt::Debug for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trivia")
            .field("pieces", &self.pieces())
            .field("total_len", &self.len())
            .finish()
    }
}

impl fmt::Display for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pieces().iter().try_for_each(|piece| f.write_str(&piece.text))
    }
}

impl Default for Trivia {
    fn default() -> Self {
        Self::empty()
    }
}

impl Trivia {
    pub fn new(pieces: impl IntoIterator<Item = TriviaPiece>) -> Self {
        let pieces = pieces.into_iter().collect::<Vec<_>>();
        if pieces.is_empty() {
            return Self::empty();
        }
        let total_len = pieces.iter().map(TriviaPiece::len).sum();
        Self { ptr: Some(ThinArc::from_header_and_iter(total_len, pieces.into_iter())) }
    }

    pub const fn empty() -> Self {
        Self { ptr: None }
    }

    pub fn len(&self) -> TextSize {
        match self.ptr {
            None => TextSize::new(0),
            Some(ref ptr) => ptr.header.header,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().is_empty()
    }

    pub fn pieces(&self) -> &[TriviaPiece] {
        match &self.ptr {
            None => &[],
            Some(ptr) => &ptr.slice,
        }
    }

    pub fn accumulate_absolute_position(&self, pos: &mut AbsolutePosition) {
        for piece in self.pieces() {
            piece.accumulate_absolute_position(pos);
        }
    }
}

impl FromIterator<TriviaPiece> for Trivia {
    fn from_iter<I: IntoIterator<Item = TriviaPiece>>(iter: I) -> Self {
        Self::new(iter)
    }
}
