// rust/engine/src/render/surface.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use thiserror::Error;

use crate::engine::{Cell, Geometry, Rgb, UnitId};

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface i/o failed")]
    Io(#[from] std::io::Error),
    #[error("no block registered for unit {0}")]
    UnknownBlock(UnitId),
    #[error("surface used before layout")]
    NoLayout,
}

/// Drawn state of one block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockState {
    pub at: Cell,
    pub face: Rgb,
    /// `None` once the edge has been stripped.
    pub edge: Option<Rgb>,
}

/// Drawing target the animator drives.
///
/// Object-safe so it can be used as `&mut dyn Surface`. Any error is fatal to the run.
pub trait Surface {
    /// Equal-aspect axes over `[0, x_blocks] x [0, y_blocks + 1]`, integer ticks, and a
    /// dashed boundary line at `y_blocks`.
    fn layout(&mut self, geometry: &Geometry) -> Result<(), SurfaceError>;

    fn set_title(&mut self, title: &str) -> Result<(), SurfaceError>;

    /// Unit-sized block with a black edge and `face` fill, origin at `at`.
    fn add_block(&mut self, unit: UnitId, at: Cell, face: Rgb) -> Result<(), SurfaceError>;

    fn move_block(&mut self, unit: UnitId, at: Cell) -> Result<(), SurfaceError>;

    fn remove_boundary(&mut self) -> Result<(), SurfaceError>;

    fn hide_x_axis(&mut self) -> Result<(), SurfaceError>;

    fn hide_y_axis(&mut self) -> Result<(), SurfaceError>;

    /// Remove remaining axis decoration (frame, ticks).
    fn axis_off(&mut self) -> Result<(), SurfaceError>;

    fn set_y_range(&mut self, lo: i32, hi: i32) -> Result<(), SurfaceError>;

    fn set_edge_color(&mut self, unit: UnitId, edge: Option<Rgb>) -> Result<(), SurfaceError>;

    /// Service the surface (redraw) and block for `d`.
    fn pause(&mut self, d: Duration) -> Result<(), SurfaceError>;
}
