// rust/engine/src/engine/constants.rs
#![forbid(unsafe_code)]

use std::time::Duration;

/// Column height of an empty stack: one row below row 0.
pub const EMPTY_COLUMN: i32 = -1;

/// Pause after every add/move so the surface redraws one step at a time.
pub const MICRO_PAUSE: Duration = Duration::from_millis(1);

/// Pause between cleanup steps (axis hiding, title clearing).
pub const CLEAN_PAUSE: Duration = Duration::from_millis(200);

/// Edge stripping pauses for `CLEAN_PAUSE / EDGE_STRIP_DIVISOR` per block.
pub const EDGE_STRIP_DIVISOR: u32 = 100;

/**
 * Built-in scenario, run when the binary is started with no arguments:
 * 57 units over 10 columns (rows derived), fill and clean enabled.
 */
pub const SCENARIO_BLOCKS: usize = 57;
pub const SCENARIO_X_BLOCKS: usize = 10;

/// Constructor default when no block count is given.
pub const DEFAULT_BLOCKS: usize = 25;
