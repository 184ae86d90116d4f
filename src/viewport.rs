//! Viewport handling
//! Turns the host's visible rows into the row range that gets scanned

use crate::position::RowRange;

/// Rows to scan for a visible range, padded and clamped to the buffer
///
/// Returns `None` for an empty buffer.
pub fn scan_window(visible: RowRange, line_count: usize, padding: usize) -> Option<RowRange> {
    if line_count == 0 {
        return None;
    }
    let last = line_count - 1;
    let bot = visible.bot.saturating_add(padding).min(last);
    let top = visible.top.saturating_sub(padding).min(bot);
    Some(RowRange::new(top, bot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_window_unpadded() {
        let window = scan_window(RowRange::new(10, 40), 100, 0);
        assert_eq!(window, Some(RowRange::new(10, 40)));
    }

    #[test]
    fn test_scan_window_padding_clamped() {
        let window = scan_window(RowRange::new(2, 20), 25, 5);
        assert_eq!(window, Some(RowRange::new(0, 24)));
    }

    #[test]
    fn test_scan_window_past_end() {
        // Host reports rows beyond the buffer after a large delete
        let window = scan_window(RowRange::new(50, 80), 10, 0);
        assert_eq!(window, Some(RowRange::new(9, 9)));
    }

    #[test]
    fn test_scan_window_empty_buffer() {
        assert_eq!(scan_window(RowRange::new(0, 0), 0, 3), None);
    }
}
