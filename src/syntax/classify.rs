//! Node kind classification for the tree walker

use crate::constants::syntax::{
    BOUNDARY_SUBSTRINGS, DECLARATION_SUBSTRINGS, GROUPING_SUBSTRINGS, MODIFIER_KINDS,
    MODIFIER_SUBSTRINGS,
};

/// Predicate over a syntax node kind
pub type NodePredicate = fn(&str) -> bool;

fn contains_any(kind: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| kind.contains(n))
}

/// Default modifier-like classifier
///
/// A kind is modifier-like if it names a specifier, qualifier, modifier or
/// keyword, or is one of the well-known bare modifier kinds.
pub fn is_modifier_like(kind: &str) -> bool {
    contains_any(kind, MODIFIER_SUBSTRINGS) || MODIFIER_KINDS.contains(&kind)
}

pub fn is_declaration(kind: &str) -> bool {
    contains_any(kind, DECLARATION_SUBSTRINGS)
}

/// Parenthesized groups and conditions: after-open and at-close waypoints
pub fn is_grouping(kind: &str) -> bool {
    contains_any(kind, GROUPING_SUBSTRINGS)
}

/// Statements and expressions: at-end waypoint
pub fn is_boundary(kind: &str) -> bool {
    contains_any(kind, BOUNDARY_SUBSTRINGS)
}
