//! Rift waypoints - jump-to-next-target navigation for text buffers
//!
//! Waypoints are `(row, column)` cursor targets computed from a lexical scan
//! of the visible rows (quotes, brackets, operators, word operators, line
//! ends) merged with optional syntax-tree targets (names, literals,
//! containers, statement ends). A [`WaypointSession`] caches them per buffer
//! and moves the host cursor to the next or previous one.

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod merge;
pub mod navigation;
pub mod position;
pub mod scanner;
pub mod syntax;
pub mod test_utils;
pub mod viewport;

pub use config::{Placement, RuleOverrides, RuleSet, UserConfig, WaypointConfig, WaypointOptions};
pub use error::{Result, WaypointError};
pub use host::BufferHost;
pub use merge::collect_waypoints;
pub use navigation::{NavOutcome, WaypointSession};
pub use position::{Direction, RowRange, Waypoint};
pub use syntax::{NoSyntax, SyntaxNode};

#[cfg(test)]
mod tests;
