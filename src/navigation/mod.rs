//! Waypoint navigation
//!
//! [`WaypointSession`] owns all per-buffer state: configuration, the scan and
//! waypoint caches, and the navigation state used for throttling, reentrancy
//! and debounced rebuilds.
//!
//! ## Scheduling
//!
//! Everything runs on the host's thread. Deferred work is expressed as state
//! the host pumps through [`WaypointSession::tick`]:
//! - after [`WaypointSession::on_edit`], a rebuild runs once edits have been
//!   quiet for the debounce interval; every new edit restarts the interval
//! - the in-jump flag set by a cursor move is released on the next tick, or
//!   earlier by [`WaypointSession::acknowledge_move`]
//!
//! Time-dependent entry points have an `_at` variant taking the current
//! instant, so tests can drive time deterministically without sleeps.

use crate::cache::WaypointCache;
use crate::config::WaypointConfig;
use crate::host::BufferHost;
use crate::merge::collect_waypoints;
use crate::position::{Direction, RowRange, Waypoint};
use crate::scanner::ScanCache;
use crate::viewport::scan_window;
use std::borrow::Cow;
use std::time::Instant;

/// What a navigation request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Cursor moved to the waypoint
    Moved(Waypoint),
    /// The snippet navigator took the jump
    Snippet,
    /// Too soon after the previous accepted call
    Throttled,
    /// A previous move has not been released yet
    Busy,
    /// No waypoints in range
    Empty,
    /// The host refused the move
    Rejected(Waypoint),
}

/// Target for a jump from `cursor`, wrapping around at either end
///
/// `waypoints` must be in canonical order.
pub fn find_target(waypoints: &[Waypoint], cursor: Waypoint, direction: Direction) -> Option<Waypoint> {
    match direction {
        Direction::Forward => {
            let idx = waypoints.partition_point(|w| *w <= cursor);
            waypoints.get(idx).or_else(|| waypoints.first()).copied()
        }
        Direction::Backward => {
            let idx = waypoints.partition_point(|w| *w < cursor);
            idx.checked_sub(1)
                .and_then(|i| waypoints.get(i))
                .or_else(|| waypoints.last())
                .copied()
        }
    }
}

#[derive(Debug, Default)]
struct NavigationState {
    /// Instant of the last accepted call
    last_call: Option<Instant>,
    in_jump: bool,
    /// Last edit not yet followed by a debounced rebuild
    last_edit: Option<Instant>,
}

/// Per-buffer waypoint navigation session
#[derive(Debug)]
pub struct WaypointSession {
    config: WaypointConfig,
    scan_cache: ScanCache,
    waypoint_cache: WaypointCache,
    state: NavigationState,
}

impl WaypointSession {
    pub fn new(config: WaypointConfig) -> Self {
        WaypointSession {
            config,
            scan_cache: ScanCache::new(),
            waypoint_cache: WaypointCache::new(),
            state: NavigationState::default(),
        }
    }

    pub fn config(&self) -> &WaypointConfig {
        &self.config
    }

    /// Number of full lexical scans performed so far
    pub fn scan_count(&self) -> usize {
        self.scan_cache.scan_count()
    }

    /// True while a cursor move is in flight
    pub fn is_jumping(&self) -> bool {
        self.state.in_jump
    }

    /// True while a debounced rebuild is pending
    pub fn rebuild_pending(&self) -> bool {
        self.state.last_edit.is_some()
    }

    fn window<H: BufferHost>(&self, host: &H) -> Option<RowRange> {
        scan_window(
            host.visible_range(),
            host.line_count(),
            self.config.options.viewport_padding,
        )
    }

    /// Current merged waypoints for the scanned window, rebuilding if stale
    ///
    /// A rebuild whose change version was superseded while it ran is returned
    /// to the caller but not cached.
    pub fn waypoints<H: BufferHost>(&mut self, host: &H) -> Cow<'_, [Waypoint]> {
        let Some(range) = self.window(host) else {
            self.waypoint_cache.invalidate();
            return Cow::Borrowed(&[]);
        };

        let version = host.change_version();
        if !self.waypoint_cache.is_fresh(version, range) {
            let built = collect_waypoints(host, range, &self.config, &mut self.scan_cache);
            let current = host.change_version();
            if current != version {
                tracing::debug!(version, current, "discarding stale waypoint rebuild");
                self.waypoint_cache.invalidate();
                return Cow::Owned(built);
            }
            tracing::trace!(
                version,
                top = range.top,
                bot = range.bot,
                waypoints = built.len(),
                "waypoint cache rebuilt"
            );
            self.waypoint_cache.store(version, range, built);
        }
        Cow::Borrowed(self.waypoint_cache.waypoints())
    }

    /// Force a rebuild of the waypoint cache, returning the waypoint count
    pub fn refresh<H: BufferHost>(&mut self, host: &H) -> usize {
        self.waypoint_cache.invalidate();
        self.waypoints(host).len()
    }

    /// Edit notification: drop cached results and restart the debounce interval
    pub fn on_edit(&mut self) {
        self.on_edit_at(Instant::now());
    }

    pub fn on_edit_at(&mut self, now: Instant) {
        self.waypoint_cache.invalidate();
        self.scan_cache.invalidate();
        self.state.last_edit = Some(now);
    }

    /// Release the in-jump flag once the host has applied the move
    pub fn acknowledge_move(&mut self) {
        self.state.in_jump = false;
    }

    /// Run deferred work. Returns `true` if a debounced rebuild ran.
    pub fn tick<H: BufferHost>(&mut self, host: &H) -> bool {
        self.tick_at(Instant::now(), host)
    }

    pub fn tick_at<H: BufferHost>(&mut self, now: Instant, host: &H) -> bool {
        self.state.in_jump = false;

        let Some(last_edit) = self.state.last_edit else {
            return false;
        };
        if now.duration_since(last_edit) < self.config.options.debounce {
            return false;
        }
        self.state.last_edit = None;
        let count = self.refresh(host);
        tracing::debug!(waypoints = count, "debounced waypoint rebuild");
        true
    }

    /// Jump to the next or previous waypoint
    pub fn advance<H: BufferHost>(&mut self, host: &mut H, direction: Direction) -> NavOutcome {
        self.advance_at(Instant::now(), host, direction)
    }

    pub fn advance_at<H: BufferHost>(
        &mut self,
        now: Instant,
        host: &mut H,
        direction: Direction,
    ) -> NavOutcome {
        if let Some(last) = self.state.last_call {
            if now.duration_since(last) < self.config.options.throttle {
                tracing::trace!(?direction, "navigation throttled");
                return NavOutcome::Throttled;
            }
        }
        if self.state.in_jump {
            tracing::trace!(?direction, "navigation already in progress");
            return NavOutcome::Busy;
        }
        self.state.last_call = Some(now);

        if self.config.options.snippet_integration
            && host.snippet_jumpable(direction)
            && host.snippet_jump(direction)
        {
            tracing::debug!(?direction, "snippet navigator took the jump");
            return NavOutcome::Snippet;
        }

        let cursor = host.cursor();
        let target = find_target(&self.waypoints(host), cursor, direction);
        let Some(target) = target else {
            return NavOutcome::Empty;
        };

        self.state.in_jump = true;
        match host.set_cursor(target) {
            Ok(()) => NavOutcome::Moved(target),
            Err(err) => {
                tracing::debug!(%err, %target, "cursor move rejected");
                self.state.in_jump = false;
                NavOutcome::Rejected(target)
            }
        }
    }
}

impl Default for WaypointSession {
    fn default() -> Self {
        Self::new(WaypointConfig::default())
    }
}
