//! Absolute source positions, derived on demand by walking token text.
//!
//! Nothing here is cached on the tree: every query folds the file's tokens from
//! the start, so a lookup costs time proportional to the size of the file.
//! Callers issuing many queries against one tree should build their own table.

use std::fmt;

use text_size::TextSize;

use crate::{RawNode, Syntax, SyntaxData, SyntaxError, SyntaxVisitor};

/// Running byte offset, line and column; all zero-based.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct AbsolutePosition {
    offset: TextSize,
    line: u32,
    column: u32,
}

impl AbsolutePosition {
    pub const fn new(offset: TextSize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }

    #[inline]
    pub fn offset(self) -> TextSize {
        self.offset
    }

    #[inline]
    pub fn line(self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(self) -> u32 {
        self.column
    }

    /// Advances over `len` bytes that do not break the line.
    pub fn add_columns(&mut self, len: u32) {
        self.offset += TextSize::new(len);
        self.column += len;
    }

    /// Advances over `count` line breaks of `bytes_per_newline` bytes each.
    pub fn add_newlines(&mut self, count: u32, bytes_per_newline: u32) {
        if count == 0 {
            return;
        }
        self.offset += TextSize::new(count * bytes_per_newline);
        self.line += count;
        self.column = 0;
    }

    /// Advances over arbitrary text. `\n`, `\r\n` and a lone `\r` each end a line.
    pub fn add_text(&mut self, text: &str) {
        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    self.add_newlines(1, 2);
                    i += 2;
                }
                b'\r' | b'\n' => {
                    self.add_newlines(1, 1);
                    i += 1;
                }
                _ => {
                    self.add_columns(1);
                    i += 1;
                }
            }
        }
    }
}

impl fmt::Display for AbsolutePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Folds every present token that precedes `target` in document order.
///
/// Within one tree the target is matched by path, so a raw node shared at two
/// places resolves to the right one. A target from another version of the tree
/// is matched by raw identity alone.
struct PrefixAccumulator<'a> {
    pos: &'a mut AbsolutePosition,
    target: &'a Syntax,
    same_tree: bool,
    found: bool,
}

impl PrefixAccumulator<'_> {
    fn is_target(&self, node: &Syntax) -> bool {
        node.raw().ptr_eq(self.target.raw())
            && (!self.same_tree || SyntaxData::same_position(node.data(), self.target.data()))
    }
}

impl SyntaxVisitor for PrefixAccumulator<'_> {
    fn visit_pre(&mut self, node: &Syntax) {
        if !self.found && self.is_target(node) {
            self.found = true;
        }
    }

    fn visit_token(&mut self, token: &Syntax) {
        if self.found || token.is_missing() {
            return;
        }
        token.raw().accumulate_absolute_position(self.pos);
    }
}

/// Folds the leading trivia of the first present token, then goes quiet.
struct FirstTokenFinder<'a> {
    pos: &'a mut AbsolutePosition,
    found: bool,
}

impl SyntaxVisitor for FirstTokenFinder<'_> {
    fn visit_token(&mut self, token: &Syntax) {
        if self.found || token.is_missing() {
            return;
        }
        self.found = true;
        token.raw().leading_trivia().accumulate_absolute_position(self.pos);
    }
}

/// Adds the text of every present token of `node`, stopping before the trailing
/// trivia of the last one.
struct TrimmedTextAccumulator<'a> {
    pos: &'a mut AbsolutePosition,
    pending_trailing: Option<RawNode>,
    seen_first: bool,
}

impl SyntaxVisitor for TrimmedTextAccumulator<'_> {
    fn visit_token(&mut self, token: &Syntax) {
        if token.is_missing() {
            return;
        }
        if let Some(prev) = self.pending_trailing.take() {
            prev.trailing_trivia().accumulate_absolute_position(self.pos);
        }
        let raw = token.raw();
        if self.seen_first {
            raw.leading_trivia().accumulate_absolute_position(self.pos);
        }
        self.seen_first = true;
        self.pos.add_text(raw.token_text());
        self.pending_trailing = Some(raw.clone());
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(kind = ?node.kind()))]
pub(crate) fn absolute_position(
    node: &Syntax,
    root: &Syntax,
) -> Result<AbsolutePosition, SyntaxError> {
    let mut pos = AbsolutePosition::default();

    let mut calculator = PrefixAccumulator {
        pos: &mut pos,
        target: node,
        same_tree: node.same_tree(root),
        found: false,
    };
    root.accept(&mut calculator);
    if !calculator.found {
        tracing::debug!(kind = ?node.kind(), "node not found while scanning root");
        return Err(SyntaxError::NodeNotInRoot { kind: node.kind() });
    }

    let mut finder = FirstTokenFinder { pos: &mut pos, found: false };
    node.accept(&mut finder);

    tracing::trace!(%pos, offset = u32::from(pos.offset()), "resolved");
    Ok(pos)
}

pub(crate) fn absolute_end_position(
    node: &Syntax,
    root: &Syntax,
) -> Result<AbsolutePosition, SyntaxError> {
    let mut pos = absolute_position(node, root)?;
    let mut accumulator =
        TrimmedTextAccumulator { pos: &mut pos, pending_trailing: None, seen_first: false };
    node.accept(&mut accumulator);
    Ok(pos)
}
