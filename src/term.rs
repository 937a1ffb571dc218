//! Terminal width query with configured fallback.

use tracing::debug;

/// Current terminal column count, or `fallback` when the query fails or
/// reports zero columns (e.g. output redirected to a pipe).
pub fn terminal_width(fallback: usize) -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _rows)) if cols > 0 => cols as usize,
        Ok(_) => fallback,
        Err(e) => {
            debug!("Terminal size query failed: {}, using fallback {}", e, fallback);
            fallback
        }
    }
}
