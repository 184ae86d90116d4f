//! Waypoint configuration
//!
//! A [`WaypointConfig`] is the immutable input to every scan: the
//! [`RuleSet`] deciding which characters, words and syntax node kinds
//! produce waypoints, and the [`WaypointOptions`] tunables.
//!
//! User configuration never mutates the built-in defaults. Instead a
//! [`UserConfig`] carries ordered override pairs that are applied on top of a
//! fresh default rule set at construction time:
//! - `(key, None)` / `(key, false)` removes a default key
//! - `(key, Some(value))` / `(key, true)` overrides or adds a key
//! - omitting a key preserves the default

pub mod settings;

use crate::constants::defaults;
use crate::error::Result;
use crate::syntax::classify::{is_modifier_like, NodePredicate};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Where a bracket rule places its waypoints relative to the bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// At the bracket column
    Before,
    /// Immediately after the bracket
    After,
    Both,
    /// Rule disabled
    Neither,
}

impl Placement {
    pub fn before(self) -> bool {
        matches!(self, Placement::Before | Placement::Both)
    }

    pub fn after(self) -> bool {
        matches!(self, Placement::After | Placement::Both)
    }
}

/// Rules deciding which text and syntax nodes produce waypoints
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub opening_brackets: BTreeMap<char, Placement>,
    pub closing_brackets: BTreeMap<char, Placement>,
    pub quotes: BTreeSet<char>,
    pub operators: BTreeSet<char>,
    pub word_operators: BTreeSet<String>,
    /// Syntax node kinds that get a waypoint at their end
    pub target_types: BTreeSet<String>,
    /// Syntax node kinds that get an after-open and an at-close waypoint
    pub container_types: BTreeSet<String>,
    /// Classifier for modifier-like node kinds
    pub modifier_like: NodePredicate,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            opening_brackets: defaults::OPENING_BRACKETS
                .iter()
                .map(|&c| (c, Placement::After))
                .collect(),
            closing_brackets: defaults::CLOSING_BRACKETS
                .iter()
                .map(|&c| (c, Placement::Both))
                .collect(),
            quotes: defaults::QUOTES.iter().copied().collect(),
            operators: defaults::OPERATORS.iter().copied().collect(),
            word_operators: defaults::WORD_OPERATORS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            target_types: defaults::TARGET_TYPES.iter().map(|t| t.to_string()).collect(),
            container_types: defaults::CONTAINER_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            modifier_like: is_modifier_like,
        }
    }
}

impl RuleSet {
    /// A rule set with no rules at all
    pub fn empty() -> Self {
        RuleSet {
            opening_brackets: BTreeMap::new(),
            closing_brackets: BTreeMap::new(),
            quotes: BTreeSet::new(),
            operators: BTreeSet::new(),
            word_operators: BTreeSet::new(),
            target_types: BTreeSet::new(),
            container_types: BTreeSet::new(),
            modifier_like: is_modifier_like,
        }
    }

    /// Placement for `c` if it is an enabled bracket
    pub fn bracket(&self, c: char) -> Option<Placement> {
        self.opening_brackets
            .get(&c)
            .or_else(|| self.closing_brackets.get(&c))
            .copied()
            .filter(|p| *p != Placement::Neither)
    }

    /// Apply override pairs in order
    pub fn apply(&mut self, overrides: &RuleOverrides) {
        merge_map(&mut self.opening_brackets, &overrides.opening_brackets);
        merge_map(&mut self.closing_brackets, &overrides.closing_brackets);
        merge_set(&mut self.quotes, &overrides.quotes);
        merge_set(&mut self.operators, &overrides.operators);
        merge_set(&mut self.word_operators, &overrides.word_operators);
        merge_set(&mut self.target_types, &overrides.target_types);
        merge_set(&mut self.container_types, &overrides.container_types);
        if let Some(predicate) = overrides.modifier_like {
            self.modifier_like = predicate;
        }
    }
}

fn merge_map<K: Ord + Clone, V: Copy>(map: &mut BTreeMap<K, V>, pairs: &[(K, Option<V>)]) {
    for (key, value) in pairs {
        match value {
            Some(v) => {
                map.insert(key.clone(), *v);
            }
            None => {
                map.remove(key);
            }
        }
    }
}

fn merge_set<K: Ord + Clone>(set: &mut BTreeSet<K>, pairs: &[(K, bool)]) {
    for (key, enabled) in pairs {
        if *enabled {
            set.insert(key.clone());
        } else {
            set.remove(key);
        }
    }
}

/// Ordered override pairs applied over [`RuleSet::default`]
#[derive(Debug, Clone, Default)]
pub struct RuleOverrides {
    pub opening_brackets: Vec<(char, Option<Placement>)>,
    pub closing_brackets: Vec<(char, Option<Placement>)>,
    pub quotes: Vec<(char, bool)>,
    pub operators: Vec<(char, bool)>,
    pub word_operators: Vec<(String, bool)>,
    pub target_types: Vec<(String, bool)>,
    pub container_types: Vec<(String, bool)>,
    pub modifier_like: Option<NodePredicate>,
}

/// Tunables for scanning and navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaypointOptions {
    /// Minimum interval between two accepted navigation calls
    pub throttle: Duration,
    /// Quiet period after the last edit before a proactive rebuild
    pub debounce: Duration,
    /// Rows are truncated to this many bytes for scanning
    pub max_scan_cols: usize,
    /// Extra rows scanned above and below the viewport
    pub viewport_padding: usize,
    /// Deepest syntax node descended into
    pub max_tree_depth: usize,
    /// Run the tree walker when the host provides a tree
    pub use_syntax: bool,
    /// Let an active snippet placeholder take the jump first
    pub snippet_integration: bool,
}

impl Default for WaypointOptions {
    fn default() -> Self {
        WaypointOptions {
            throttle: defaults::THROTTLE,
            debounce: defaults::DEBOUNCE,
            max_scan_cols: defaults::MAX_SCAN_COLS,
            viewport_padding: defaults::VIEWPORT_PADDING,
            max_tree_depth: defaults::MAX_TREE_DEPTH,
            use_syntax: true,
            snippet_integration: true,
        }
    }
}

/// User supplied configuration, merged over the defaults
#[derive(Debug, Clone, Default)]
pub struct UserConfig {
    pub rules: RuleOverrides,
    /// `(name, value)` pairs resolved through the options registry
    pub settings: Vec<(String, String)>,
}

/// Complete configuration for a waypoint session
#[derive(Debug, Clone, Default)]
pub struct WaypointConfig {
    pub rules: RuleSet,
    pub options: WaypointOptions,
}

impl WaypointConfig {
    /// Merge `user` over the built-in defaults
    pub fn from_user(user: &UserConfig) -> Result<Self> {
        let mut rules = RuleSet::default();
        rules.apply(&user.rules);

        let registry = settings::create_options_registry();
        let mut options = WaypointOptions::default();
        for (name, value) in &user.settings {
            registry.apply(name, Some(value.as_str()), &mut options)?;
        }

        tracing::debug!(
            settings = user.settings.len(),
            operators = rules.operators.len(),
            word_operators = rules.word_operators.len(),
            "waypoint config merged"
        );
        Ok(WaypointConfig { rules, options })
    }
}
