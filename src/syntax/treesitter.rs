//! `SyntaxNode` for tree-sitter nodes

use super::SyntaxNode;
use crate::position::Waypoint;
use tree_sitter::{Node, Point};

fn to_waypoint(point: Point) -> Waypoint {
    Waypoint::new(point.row, point.column)
}

impl<'tree> SyntaxNode for Node<'tree> {
    fn kind(&self) -> &str {
        Node::kind(self)
    }

    fn start(&self) -> Waypoint {
        to_waypoint(self.start_position())
    }

    fn end(&self) -> Waypoint {
        to_waypoint(self.end_position())
    }

    fn named_children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        Node::named_children(self, &mut cursor).collect()
    }
}
