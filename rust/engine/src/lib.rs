// rust/engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;
pub mod render;

// Re-export the bits the CLI and tests need:
pub use engine::{
    simulate, Cell, ColumnHeights, ColumnRule, ColumnRuleKind, ConfigError, Event, FillConfig,
    Geometry, GridFiller, Placement, Rgb, Simulation, UnitId, EMPTY_COLUMN,
};
pub use render::{
    Animator, AsciiSurface, BlockState, Pacing, RecordingSurface, Surface, SurfaceError, SurfaceOp,
};
