//! Host editor abstraction
//!
//! The waypoint engine never owns text, cursors or syntax trees. Everything it
//! needs from the editor is read through [`BufferHost`], decoupling the engine
//! from the buffer representation.
//!
//! ## Indexing model
//!
//! Rows are zero-based logical lines. Columns are **byte** offsets within the
//! row text (without the trailing newline), matching the positions reported by
//! tree-sitter.
//!
//! ## Change version semantics
//!
//! `change_version` must increase on every text mutation. Cursor movement does
//! not change it. Every cache in the engine is keyed on this value.

use crate::error::Result;
use crate::position::{Direction, RowRange, Waypoint};
use crate::syntax::SyntaxNode;
use std::borrow::Cow;

/// Read access to one buffer plus the cursor-move request.
pub trait BufferHost {
    /// Borrowed syntax node handed out by [`BufferHost::syntax_root`].
    /// Hosts without a syntax tree use [`crate::syntax::NoSyntax`].
    type Node<'a>: SyntaxNode
    where
        Self: 'a;

    /// Visible row range of the viewport, inclusive
    fn visible_range(&self) -> RowRange;

    /// Number of logical lines
    fn line_count(&self) -> usize;

    /// Text of `row` without the trailing newline
    fn line(&self, row: usize) -> Option<Cow<'_, str>>;

    /// Monotonic counter, incremented on every edit
    fn change_version(&self) -> u64;

    fn cursor(&self) -> Waypoint;

    /// Request a cursor move. Hosts may reject invalid positions.
    fn set_cursor(&mut self, target: Waypoint) -> Result<()>;

    /// Root of the buffer's syntax tree, if one is available
    fn syntax_root(&self) -> Option<Self::Node<'_>> {
        None
    }

    /// Whether an external snippet navigator has a placeholder to jump to
    fn snippet_jumpable(&self, _direction: Direction) -> bool {
        false
    }

    /// Ask the snippet navigator to jump. Returns `true` if it moved.
    fn snippet_jump(&mut self, _direction: Direction) -> bool {
        false
    }
}
