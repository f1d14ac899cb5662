// rust/engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod color;
mod column_rule;
mod columns;
mod config;
mod constants;
mod event;
mod filler;
mod geometry;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use color::Rgb;
pub use column_rule::{initialise_positions, ColumnRule, ColumnRuleKind};
pub use columns::ColumnHeights;
pub use config::{ConfigError, FillConfig};
pub use constants::{
    CLEAN_PAUSE, DEFAULT_BLOCKS, EDGE_STRIP_DIVISOR, EMPTY_COLUMN, MICRO_PAUSE, SCENARIO_BLOCKS,
    SCENARIO_X_BLOCKS,
};
pub use event::{Event, Placement};
pub use filler::{simulate, GridFiller, Simulation};
pub use geometry::{Cell, Geometry, UnitId};
