//! Test utilities
//! Shared testing helpers and mocks

use crate::constants::errors;
use crate::error::{ErrorType, Result, WaypointError};
use crate::position::{Direction, RowRange, Waypoint};
use crate::host::BufferHost;
use crate::syntax::SyntaxNode;
use std::borrow::Cow;
use std::cell::Cell;

/// Hand-built syntax node for tests and benchmarks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockNode {
    pub kind: String,
    pub start: Waypoint,
    pub end: Waypoint,
    pub children: Vec<MockNode>,
}

impl MockNode {
    pub fn new(kind: &str, start: (usize, usize), end: (usize, usize)) -> Self {
        MockNode {
            kind: kind.to_string(),
            start: start.into(),
            end: end.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<MockNode>) -> Self {
        self.children = children;
        self
    }
}

impl<'a> SyntaxNode for &'a MockNode {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn start(&self) -> Waypoint {
        self.start
    }

    fn end(&self) -> Waypoint {
        self.end
    }

    fn named_children(&self) -> Vec<Self> {
        self.children.iter().collect()
    }
}

/// Mock buffer host for testing
/// Records all cursor moves and snippet jumps for verification
pub struct MockHost {
    pub lines: Vec<String>,
    pub visible: RowRange,
    pub version: Cell<u64>,
    pub cursor: Waypoint,
    pub cursor_moves: Vec<Waypoint>,
    /// Reject every cursor move
    pub reject_moves: bool,
    pub tree: Option<MockNode>,
    /// Snippet navigator reports an active placeholder
    pub snippet_active: bool,
    pub snippet_jumps: Vec<Direction>,
    /// Simulate an edit landing while a row is being read
    pub bump_version_on_read: bool,
    pub line_reads: Cell<usize>,
}

impl MockHost {
    /// Create a host over `text` with every row visible
    pub fn new(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let bot = lines.len().saturating_sub(1);
        MockHost {
            lines,
            visible: RowRange::new(0, bot),
            version: Cell::new(0),
            cursor: Waypoint::default(),
            cursor_moves: Vec::new(),
            reject_moves: false,
            tree: None,
            snippet_active: false,
            snippet_jumps: Vec::new(),
            bump_version_on_read: false,
            line_reads: Cell::new(0),
        }
    }

    pub fn with_cursor(mut self, row: usize, col: usize) -> Self {
        self.cursor = Waypoint::new(row, col);
        self
    }

    pub fn with_visible(mut self, top: usize, bot: usize) -> Self {
        self.visible = RowRange::new(top, bot);
        self
    }

    pub fn with_tree(mut self, tree: MockNode) -> Self {
        self.tree = Some(tree);
        self
    }

    /// Replace a row and bump the change version
    pub fn edit_line(&mut self, row: usize, text: &str) {
        self.lines[row] = text.to_string();
        self.version.set(self.version.get() + 1);
    }
}

impl BufferHost for MockHost {
    type Node<'a> = &'a MockNode;

    fn visible_range(&self) -> RowRange {
        self.visible
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        self.line_reads.set(self.line_reads.get() + 1);
        if self.bump_version_on_read {
            self.version.set(self.version.get() + 1);
        }
        self.lines.get(row).map(|l| Cow::Borrowed(l.as_str()))
    }

    fn change_version(&self) -> u64 {
        self.version.get()
    }

    fn cursor(&self) -> Waypoint {
        self.cursor
    }

    fn set_cursor(&mut self, target: Waypoint) -> Result<()> {
        let valid = self
            .lines
            .get(target.row)
            .is_some_and(|line| target.col <= line.len());
        if self.reject_moves || !valid {
            return Err(WaypointError::new(
                ErrorType::Host,
                errors::INVALID_POSITION,
                format!("Cannot move cursor to {target}"),
            ));
        }
        self.cursor = target;
        self.cursor_moves.push(target);
        Ok(())
    }

    fn syntax_root(&self) -> Option<Self::Node<'_>> {
        self.tree.as_ref()
    }

    fn snippet_jumpable(&self, _direction: Direction) -> bool {
        self.snippet_active
    }

    fn snippet_jump(&mut self, direction: Direction) -> bool {
        if !self.snippet_active {
            return false;
        }
        self.snippet_jumps.push(direction);
        true
    }
}
