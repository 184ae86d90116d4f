//! Merging lexical and semantic waypoints into one canonical sequence

use crate::config::WaypointConfig;
use crate::host::BufferHost;
use crate::position::{RowRange, Waypoint};
use crate::scanner::ScanCache;
use crate::syntax;

/// Concatenate, sort by row then column, and drop duplicates
pub fn merge(mut lexical: Vec<Waypoint>, semantic: Vec<Waypoint>) -> Vec<Waypoint> {
    lexical.extend(semantic);
    lexical.sort_unstable();
    lexical.dedup();
    lexical
}

/// Run both collectors over `range` and merge their output
///
/// The scanner goes through `scan_cache`; the tree walker runs only if
/// syntax is enabled and the host has a tree.
pub fn collect_waypoints<H: BufferHost>(
    host: &H,
    range: RowRange,
    config: &WaypointConfig,
    scan_cache: &mut ScanCache,
) -> Vec<Waypoint> {
    let options = &config.options;
    let lexical = scan_cache.get_or_scan(host, range, &config.rules, options.max_scan_cols);
    let semantic = if options.use_syntax {
        syntax::walk(host.syntax_root(), range, &config.rules, options.max_tree_depth)
    } else {
        Vec::new()
    };
    merge(lexical, semantic)
}
