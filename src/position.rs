//! Waypoint positions and navigation direction

use std::fmt;

/// A navigable `(row, column)` target.
///
/// Rows and columns are zero-based; the column is a byte offset within the
/// row. Ordering is canonical: row first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Waypoint {
    pub row: usize,
    pub col: usize,
}

impl Waypoint {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Waypoint {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Inclusive row range `[top, bot]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub top: usize,
    pub bot: usize,
}

impl RowRange {
    pub const fn new(top: usize, bot: usize) -> Self {
        Self { top, bot }
    }

    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.top && row <= self.bot
    }

    /// True if `other` lies entirely within this range
    pub fn covers(&self, other: &RowRange) -> bool {
        self.top <= other.top && self.bot >= other.bot
    }

    /// True if the span `[start_row, end_row]` shares at least one row with this range
    pub fn intersects(&self, start_row: usize, end_row: usize) -> bool {
        end_row >= self.top && start_row <= self.bot
    }
}

/// Direction of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}
