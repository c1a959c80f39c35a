//! Scoring module - classic line-clear points, leveling and gravity speed
//!
//! - Clearing 1/2/3/4 lines awards 100/300/500/800 points times the level.
//! - The level is `lines / 10 + 1`.
//! - Gravity starts at 500ms per row and speeds up 50ms per level, down to 50ms.

use crate::types::{
    BASE_FALL_MS, FALL_FLOOR_MS, FALL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, START_LEVEL,
};

/// Calculate line clear score
/// lines: number of lines cleared (0-4)
/// level: level the clear happened at (1-based)
///
/// # Panics
///
/// More than 4 lines in one lock cannot happen with tetrominoes; it means the
/// board or piece geometry is corrupt.
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    assert!(
        lines < LINE_SCORES.len(),
        "cleared {lines} lines in one lock; at most 4 are possible"
    );
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level for a total line count
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval for a level, in milliseconds
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(START_LEVEL).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(speedup).max(FALL_FLOOR_MS)
}

/// Gravity interval for a level, in seconds
pub fn fall_interval_secs(level: u32) -> f64 {
    fall_interval_ms(level) as f64 / 1000.0
}
