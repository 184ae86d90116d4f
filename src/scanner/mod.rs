//! Lexical waypoint scanner
//!
//! Scans raw row text for quotes, brackets, operators, word operators and
//! line ends. Works on any text, parsed or not: an unterminated quote simply
//! produces no closing waypoints and over-long rows are truncated.
//!
//! ## Quote state
//!
//! A row is scanned left to right with one piece of state, the active quote
//! character. While inside a quoted region no bracket or operator rule fires.
//! A quote of a different kind inside the region is plain text.

use crate::config::RuleSet;
use crate::host::BufferHost;
use crate::position::{RowRange, Waypoint};

/// Characters that continue a word for word-operator boundary checks
fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Largest char boundary of `text` not past `max_cols` bytes
fn truncate(text: &str, max_cols: usize) -> &str {
    let mut end = max_cols.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Scan a single row, appending its waypoints to `out`
pub fn scan_line(text: &str, row: usize, rules: &RuleSet, max_cols: usize, out: &mut Vec<Waypoint>) {
    let line = truncate(text, max_cols);
    let row_start = out.len();
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut quote: Option<char> = None;

    for (i, &(col, c)) in chars.iter().enumerate() {
        let width = c.len_utf8();

        if rules.quotes.contains(&c) {
            match quote {
                None => quote = Some(c),
                Some(active) if active == c => {
                    out.push(Waypoint::new(row, col));
                    out.push(Waypoint::new(row, col + width));
                    quote = None;
                }
                Some(_) => {}
            }
            continue;
        }

        if quote.is_some() {
            continue;
        }

        if let Some(placement) = rules.bracket(c) {
            if placement.before() {
                out.push(Waypoint::new(row, col));
            }
            if placement.after() {
                out.push(Waypoint::new(row, col + width));
            }
            continue;
        }

        if rules.operators.contains(&c) {
            // Second half of a doubled operator
            if i > 0 && chars[i - 1].1 == c {
                continue;
            }
            let doubled = chars.get(i + 1).is_some_and(|&(_, next)| next == c);
            let end = if doubled { col + 2 * width } else { col + width };
            out.push(Waypoint::new(row, end));
        }
    }

    for word in &rules.word_operators {
        if word.is_empty() {
            continue;
        }
        for (start, _) in line.match_indices(word.as_str()) {
            let end = start + word.len();
            let before_ok = line[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
            let after_ok = line[end..].chars().next().map_or(true, |c| !is_word_char(c));
            if before_ok && after_ok {
                out.push(Waypoint::new(row, end));
            }
        }
    }

    if !line.is_empty() {
        let eol = Waypoint::new(row, line.len());
        if out[row_start..].last() != Some(&eol) {
            out.push(eol);
        }
    }
}

/// Scan every row of `range` that exists in the host buffer
pub fn scan_range<H: BufferHost + ?Sized>(
    host: &H,
    range: RowRange,
    rules: &RuleSet,
    max_cols: usize,
) -> Vec<Waypoint> {
    let mut out = Vec::new();
    let last = range.bot.min(host.line_count().saturating_sub(1));
    if host.line_count() == 0 || range.top > last {
        return out;
    }
    for row in range.top..=last {
        if let Some(text) = host.line(row) {
            scan_line(&text, row, rules, max_cols, &mut out);
        }
    }
    out
}

#[derive(Debug)]
struct ScanEntry {
    version: u64,
    range: RowRange,
    waypoints: Vec<Waypoint>,
}

/// Memoized scanner output for one buffer
///
/// Valid only while the buffer's change version matches. A cached range
/// serves any narrower request by filtering rows, without rescanning.
#[derive(Debug, Default)]
pub struct ScanCache {
    entry: Option<ScanEntry>,
    scans: usize,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached waypoints for `range`, rescanning if the entry is stale or too narrow
    pub fn get_or_scan<H: BufferHost + ?Sized>(
        &mut self,
        host: &H,
        range: RowRange,
        rules: &RuleSet,
        max_cols: usize,
    ) -> Vec<Waypoint> {
        let version = host.change_version();
        if let Some(entry) = &self.entry {
            if entry.version == version && entry.range.covers(&range) {
                tracing::trace!(version, top = range.top, bot = range.bot, "scan cache hit");
                return entry
                    .waypoints
                    .iter()
                    .filter(|w| range.contains_row(w.row))
                    .copied()
                    .collect();
            }
        }

        let waypoints = scan_range(host, range, rules, max_cols);
        self.scans += 1;
        tracing::trace!(
            version,
            top = range.top,
            bot = range.bot,
            waypoints = waypoints.len(),
            "scanned rows"
        );
        self.entry = Some(ScanEntry {
            version,
            range,
            waypoints: waypoints.clone(),
        });
        waypoints
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of full scans performed
    pub fn scan_count(&self) -> usize {
        self.scans
    }
}
