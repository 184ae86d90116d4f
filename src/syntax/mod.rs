//! Syntax-aware waypoints
//!
//! The tree walker visits an externally owned syntax tree over a row range and
//! emits semantic waypoints: identifiers and literals, declaration names,
//! modifiers, container open/close points and statement/expression ends.
//!
//! Nodes are borrowed through [`SyntaxNode`]; the walker never builds or
//! owns a tree. A missing tree simply yields no waypoints.

pub mod classify;
mod treesitter;

use crate::config::RuleSet;
use crate::position::{RowRange, Waypoint};
use classify::{is_boundary, is_declaration, is_grouping};

/// A borrowed, named syntax node
pub trait SyntaxNode: Sized {
    /// Node type name (e.g., "identifier", "let_declaration")
    fn kind(&self) -> &str;

    fn start(&self) -> Waypoint;

    /// Exclusive end position
    fn end(&self) -> Waypoint;

    /// Named children in source order
    fn named_children(&self) -> Vec<Self>;
}

/// Node type for hosts that never provide a syntax tree
#[derive(Debug, Clone, Copy)]
pub enum NoSyntax {}

impl SyntaxNode for NoSyntax {
    fn kind(&self) -> &str {
        match *self {}
    }

    fn start(&self) -> Waypoint {
        match *self {}
    }

    fn end(&self) -> Waypoint {
        match *self {}
    }

    fn named_children(&self) -> Vec<Self> {
        match *self {}
    }
}

fn after_start<N: SyntaxNode>(node: &N) -> Waypoint {
    let start = node.start();
    Waypoint::new(start.row, start.col + 1)
}

/// Emit the waypoints a single node contributes
fn visit<N: SyntaxNode>(node: &N, children: &[N], rules: &RuleSet, out: &mut Vec<Waypoint>) {
    let kind = node.kind();
    let modifier_like = rules.modifier_like;

    if is_declaration(kind) {
        if let Some(name) = children
            .iter()
            .find(|c| rules.target_types.contains(c.kind()) || modifier_like(c.kind()))
        {
            out.push(name.end());
        }
    }

    if rules.target_types.contains(kind) {
        out.push(node.end());
    }

    if modifier_like(kind) {
        out.push(node.end());
    }

    if rules.container_types.contains(kind) || is_grouping(kind) {
        out.push(after_start(node));
        out.push(node.end());
    }

    if is_boundary(kind) {
        out.push(node.end());
    }
}

/// Walk the tree under `root` and collect semantic waypoints for `range`
///
/// Pre-order, children in source order, with an explicit stack. A node whose
/// span lies entirely outside `range` is skipped with its subtree. Nodes deeper
/// than `max_depth` are not descended into. Output is unsorted.
pub fn walk<N: SyntaxNode>(
    root: Option<N>,
    range: RowRange,
    rules: &RuleSet,
    max_depth: usize,
) -> Vec<Waypoint> {
    let mut out = Vec::new();
    let Some(root) = root else {
        return out;
    };

    let mut stack = vec![(root, 0usize)];
    let mut truncated = false;

    while let Some((node, depth)) = stack.pop() {
        if !range.intersects(node.start().row, node.end().row) {
            continue;
        }

        let children = node.named_children();
        visit(&node, &children, rules, &mut out);

        if depth >= max_depth {
            truncated |= !children.is_empty();
            continue;
        }
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }

    if truncated {
        tracing::debug!(max_depth, "syntax walk hit depth limit");
    }
    tracing::trace!(
        top = range.top,
        bot = range.bot,
        waypoints = out.len(),
        "syntax walk done"
    );
    out
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
