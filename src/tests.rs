//! End-to-end tests over hosts written the way an editor would write them

use crate::error::Result;
use crate::{
    BufferHost, Direction, NavOutcome, NoSyntax, RowRange, UserConfig, Waypoint, WaypointConfig,
    WaypointSession,
};
use std::borrow::Cow;

/// Host without any syntax tree
struct PlainHost {
    text: String,
    cursor: Waypoint,
    version: u64,
}

impl BufferHost for PlainHost {
    type Node<'a> = NoSyntax;

    fn visible_range(&self) -> RowRange {
        RowRange::new(0, self.line_count().saturating_sub(1))
    }

    fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        self.text.lines().nth(row).map(Cow::Borrowed)
    }

    fn change_version(&self) -> u64 {
        self.version
    }

    fn cursor(&self) -> Waypoint {
        self.cursor
    }

    fn set_cursor(&mut self, target: Waypoint) -> Result<()> {
        self.cursor = target;
        Ok(())
    }
}

fn session_from(settings: &[(&str, &str)]) -> WaypointSession {
    let user = UserConfig {
        settings: settings
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        ..Default::default()
    };
    WaypointSession::new(WaypointConfig::from_user(&user).unwrap())
}

#[test]
fn test_plain_host_round_trip_navigation() {
    let mut host = PlainHost {
        text: "x = \"abc\"\ny = a >> b".to_string(),
        cursor: Waypoint::new(0, 0),
        version: 0,
    };
    let mut session = session_from(&[("throttle", "0")]);

    let mut visited = Vec::new();
    for _ in 0..6 {
        match session.advance(&mut host, Direction::Forward) {
            NavOutcome::Moved(target) => visited.push(target),
            other => panic!("Unexpected outcome: {other:?}"),
        }
        session.acknowledge_move();
    }
    assert_eq!(
        visited,
        vec![
            Waypoint::new(0, 3),
            Waypoint::new(0, 8),
            Waypoint::new(0, 9),
            Waypoint::new(1, 3),
            Waypoint::new(1, 8),
            Waypoint::new(1, 10),
        ]
    );

    // Wrap forward, then back again
    assert_eq!(
        session.advance(&mut host, Direction::Forward),
        NavOutcome::Moved(Waypoint::new(0, 3))
    );
    session.acknowledge_move();
    assert_eq!(
        session.advance(&mut host, Direction::Backward),
        NavOutcome::Moved(Waypoint::new(1, 10))
    );
}

#[test]
fn test_plain_host_edit_cycle() {
    let mut host = PlainHost {
        text: "a, b".to_string(),
        cursor: Waypoint::new(0, 0),
        version: 0,
    };
    let mut session = session_from(&[("throttle", "0"), ("debounce", "0")]);
    assert_eq!(session.waypoints(&host).len(), 2);

    host.text = "a, b, c".to_string();
    host.version += 1;
    session.on_edit();
    assert!(session.tick(&host));
    assert_eq!(
        session.waypoints(&host).as_ref(),
        &[Waypoint::new(0, 2), Waypoint::new(0, 5), Waypoint::new(0, 7)]
    );
}

#[cfg(feature = "treesitter")]
mod treesitter {
    use super::*;
    use tree_sitter::{Node, Parser, Tree};

    struct TreeHost {
        lines: Vec<String>,
        tree: Tree,
        cursor: Waypoint,
    }

    impl TreeHost {
        fn rust(source: &str) -> Self {
            let mut parser = Parser::new();
            parser
                .set_language(&tree_sitter_rust::LANGUAGE.into())
                .unwrap();
            let tree = parser.parse(source, None).unwrap();
            TreeHost {
                lines: source.split('\n').map(str::to_string).collect(),
                tree,
                cursor: Waypoint::new(0, 0),
            }
        }
    }

    impl BufferHost for TreeHost {
        type Node<'a> = Node<'a>;

        fn visible_range(&self) -> RowRange {
            RowRange::new(0, self.lines.len() - 1)
        }

        fn line_count(&self) -> usize {
            self.lines.len()
        }

        fn line(&self, row: usize) -> Option<Cow<'_, str>> {
            self.lines.get(row).map(|l| Cow::Borrowed(l.as_str()))
        }

        fn change_version(&self) -> u64 {
            0
        }

        fn cursor(&self) -> Waypoint {
            self.cursor
        }

        fn set_cursor(&mut self, target: Waypoint) -> Result<()> {
            self.cursor = target;
            Ok(())
        }

        fn syntax_root(&self) -> Option<Node<'_>> {
            Some(self.tree.root_node())
        }
    }

    #[test]
    fn test_tree_sitter_host_navigation() {
        let mut host = TreeHost::rust("fn add(a: i32) -> i32 {\n    a + 1\n}");
        let mut session = session_from(&[("throttle", "0")]);

        let waypoints = session.waypoints(&host).into_owned();
        assert!(waypoints.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(
            session.advance(&mut host, Direction::Forward),
            NavOutcome::Moved(Waypoint::new(0, 6))
        );
        session.acknowledge_move();
        assert_eq!(
            session.advance(&mut host, Direction::Forward),
            NavOutcome::Moved(Waypoint::new(0, 7))
        );
    }

    #[test]
    fn test_tree_sitter_disabled_by_setting() {
        let host = TreeHost::rust("fn add() {}");
        let mut session = session_from(&[("use_syntax", "false")]);
        assert!(!session.waypoints(&host).contains(&Waypoint::new(0, 6)));
    }
}
