//! Tests for the syntax tree walker

use super::classify::*;
use super::*;
use crate::test_utils::MockNode;

fn wp(row: usize, col: usize) -> Waypoint {
    Waypoint::new(row, col)
}

fn sorted(mut waypoints: Vec<Waypoint>) -> Vec<Waypoint> {
    waypoints.sort();
    waypoints.dedup();
    waypoints
}

#[test]
fn test_modifier_like_classifier() {
    assert!(is_modifier_like("storage_class_specifier"));
    assert!(is_modifier_like("type_qualifier"));
    assert!(is_modifier_like("visibility_modifier"));
    assert!(is_modifier_like("keyword_argument"));
    assert!(is_modifier_like("async"));
    assert!(is_modifier_like("mut"));
    assert!(!is_modifier_like("identifier"));
    assert!(!is_modifier_like("mutable"));
}

#[test]
fn test_kind_classifiers() {
    assert!(is_declaration("let_declaration"));
    assert!(is_declaration("function_definition"));
    assert!(!is_declaration("function_item"));
    assert!(is_grouping("parenthesized_expression"));
    assert!(is_grouping("condition_clause"));
    assert!(is_boundary("return_statement"));
    assert!(is_boundary("binary_expression"));
    assert!(!is_boundary("identifier"));
}

#[test]
fn test_no_tree_yields_nothing() {
    let rules = RuleSet::default();
    let out = walk::<&MockNode>(None, RowRange::new(0, 10), &rules, 16);
    assert!(out.is_empty());
}

#[test]
fn test_no_syntax_host_type() {
    let rules = RuleSet::default();
    let out = walk::<NoSyntax>(None, RowRange::new(0, 10), &rules, 16);
    assert!(out.is_empty());
}

#[test]
fn test_target_type_emits_end() {
    // foo
    let tree = MockNode::new("source_file", (0, 0), (0, 3))
        .with_children(vec![MockNode::new("identifier", (0, 0), (0, 3))]);
    let out = walk(Some(&tree), RowRange::new(0, 0), &RuleSet::default(), 16);
    assert_eq!(out, vec![wp(0, 3)]);
}

#[test]
fn test_declaration_first_name() {
    // let x = 1;
    let tree = MockNode::new("let_declaration", (0, 0), (0, 10)).with_children(vec![
        MockNode::new("identifier", (0, 4), (0, 5)),
        MockNode::new("integer_literal", (0, 8), (0, 9)),
    ]);
    let out = walk(Some(&tree), RowRange::new(0, 0), &RuleSet::default(), 16);
    // First rule hits the name, then the children emit their own ends
    assert_eq!(out, vec![wp(0, 5), wp(0, 5), wp(0, 9)]);
}

#[test]
fn test_declaration_prefers_modifier_child() {
    // static int x;
    let tree = MockNode::new("declaration", (0, 0), (0, 13)).with_children(vec![
        MockNode::new("storage_class_specifier", (0, 0), (0, 6)),
        MockNode::new("primitive_type", (0, 7), (0, 10)),
        MockNode::new("identifier", (0, 11), (0, 12)),
    ]);
    let out = sorted(walk(Some(&tree), RowRange::new(0, 0), &RuleSet::default(), 16));
    assert_eq!(out, vec![wp(0, 6), wp(0, 10), wp(0, 12)]);
}

#[test]
fn test_container_and_grouping() {
    // f(a)
    let tree = MockNode::new("call_expression", (0, 0), (0, 4)).with_children(vec![
        MockNode::new("identifier", (0, 0), (0, 1)),
        MockNode::new("arguments", (0, 1), (0, 4))
            .with_children(vec![MockNode::new("identifier", (0, 2), (0, 3))]),
    ]);
    let out = sorted(walk(Some(&tree), RowRange::new(0, 0), &RuleSet::default(), 16));
    assert_eq!(out, vec![wp(0, 1), wp(0, 2), wp(0, 3), wp(0, 4)]);

    let cond = MockNode::new("parenthesized_expression", (2, 3), (2, 9));
    let out = walk(Some(&cond), RowRange::new(0, 5), &RuleSet::default(), 16);
    assert_eq!(out, vec![wp(2, 4), wp(2, 9), wp(2, 9)]);
}

#[test]
fn test_statement_end() {
    let stmt = MockNode::new("return_statement", (4, 4), (4, 13));
    let out = walk(Some(&stmt), RowRange::new(4, 4), &RuleSet::default(), 16);
    assert_eq!(out, vec![wp(4, 13)]);
}

#[test]
fn test_nodes_outside_range_skipped_with_subtree() {
    let tree = MockNode::new("source_file", (0, 0), (20, 0)).with_children(vec![
        MockNode::new("expression_statement", (1, 0), (1, 4))
            .with_children(vec![MockNode::new("identifier", (1, 0), (1, 3))]),
        MockNode::new("expression_statement", (10, 0), (10, 4))
            .with_children(vec![MockNode::new("identifier", (10, 0), (10, 3))]),
    ]);
    let out = sorted(walk(Some(&tree), RowRange::new(8, 12), &RuleSet::default(), 16));
    assert_eq!(out, vec![wp(10, 3), wp(10, 4)]);
}

#[test]
fn test_partially_visible_node_is_visited() {
    let block = MockNode::new("block", (3, 10), (9, 1));
    let out = walk(Some(&block), RowRange::new(8, 12), &RuleSet::default(), 16);
    assert_eq!(out, vec![wp(3, 11), wp(9, 1)]);
}

#[test]
fn test_depth_limit_stops_descent() {
    let mut node = MockNode::new("identifier", (0, 0), (0, 1));
    for _ in 0..10 {
        node = MockNode::new("wrapper", (0, 0), (0, 1)).with_children(vec![node]);
    }
    let out = walk(Some(&node), RowRange::new(0, 0), &RuleSet::default(), 4);
    assert!(out.is_empty());

    let out = walk(Some(&node), RowRange::new(0, 0), &RuleSet::default(), 10);
    assert_eq!(out, vec![wp(0, 1)]);
}

#[test]
fn test_deep_tree_does_not_overflow() {
    let mut node = MockNode::new("identifier", (0, 0), (0, 1));
    for _ in 0..50_000 {
        node = MockNode::new("wrapper", (0, 0), (0, 1)).with_children(vec![node]);
    }
    let out = walk(Some(&node), RowRange::new(0, 0), &RuleSet::default(), usize::MAX);
    assert_eq!(out, vec![wp(0, 1)]);
    // Iterative drop; the derived recursive drop would blow the stack
    let mut stack = vec![node];
    while let Some(mut n) = stack.pop() {
        stack.append(&mut n.children);
    }
}

#[test]
fn test_empty_rules_still_use_kind_substrings() {
    let stmt = MockNode::new("expression_statement", (0, 0), (0, 6))
        .with_children(vec![MockNode::new("identifier", (0, 0), (0, 5))]);
    let out = walk(Some(&stmt), RowRange::new(0, 0), &RuleSet::empty(), 16);
    assert_eq!(out, vec![wp(0, 6)]);
}

#[cfg(feature = "treesitter")]
mod treesitter {
    use super::*;
    use tree_sitter::{Language, Parser, Tree};

    fn parse(language: Language, source: &str) -> Tree {
        let mut parser = Parser::new();
        parser.set_language(&language).unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn test_rust_function_parameters() {
        let source = "fn add(a: i32, b: i32) -> i32 { a + b }";
        let tree = parse(tree_sitter_rust::LANGUAGE.into(), source);
        let out = walk(
            Some(tree.root_node()),
            RowRange::new(0, 0),
            &RuleSet::default(),
            256,
        );
        // name end, after "(", at ")" end
        assert!(out.contains(&wp(0, 6)));
        assert!(out.contains(&wp(0, 7)));
        assert!(out.contains(&wp(0, 22)));
    }

    #[test]
    fn test_rust_let_declaration() {
        let source = "fn main() {\n    let x = 1;\n}";
        let tree = parse(tree_sitter_rust::LANGUAGE.into(), source);
        let out = walk(
            Some(tree.root_node()),
            RowRange::new(1, 1),
            &RuleSet::default(),
            256,
        );
        assert!(out.contains(&wp(1, 9)));
    }

    #[test]
    fn test_python_function_definition() {
        let source = "def f(a):\n    return a\n";
        let tree = parse(tree_sitter_python::LANGUAGE.into(), source);
        let out = walk(
            Some(tree.root_node()),
            RowRange::new(0, 1),
            &RuleSet::default(),
            256,
        );
        assert!(out.contains(&wp(0, 5)));
        assert!(out.contains(&wp(0, 6)));
        assert!(out.contains(&wp(0, 8)));
        assert!(out.contains(&wp(1, 12)));
    }
}
