// rust/engine/src/render/recording.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::engine::{Cell, Geometry, Rgb, UnitId};

use super::surface::{BlockState, Surface, SurfaceError};

/// One call made on a surface.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    Layout(Geometry),
    Title(String),
    Add { unit: UnitId, at: Cell, face: Rgb },
    Move { unit: UnitId, at: Cell },
    RemoveBoundary,
    HideXAxis,
    HideYAxis,
    AxisOff,
    YRange(i32, i32),
    EdgeColor { unit: UnitId, edge: Option<Rgb> },
    Pause(Duration),
}

/// Headless surface: records every call and keeps the resulting drawing state.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,

    blocks: FxHashMap<UnitId, BlockState>,
    order: Vec<UnitId>,

    geometry: Option<Geometry>,
    boundary: bool,
    x_axis_visible: bool,
    y_axis_visible: bool,
    axis_on: bool,
    title: String,
    x_range: (i32, i32),
    y_range: (i32, i32),
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn block(&self, unit: UnitId) -> Option<&BlockState> {
        self.blocks.get(&unit)
    }

    /// Blocks in the order they were added.
    pub fn blocks(&self) -> impl Iterator<Item = (UnitId, &BlockState)> + '_ {
        self.order
            .iter()
            .filter_map(|u| self.blocks.get(u).map(|b| (*u, b)))
    }

    pub fn block_count(&self) -> usize {
        self.order.len()
    }

    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    pub fn has_boundary(&self) -> bool {
        self.boundary
    }

    pub fn x_axis_visible(&self) -> bool {
        self.x_axis_visible
    }

    pub fn y_axis_visible(&self) -> bool {
        self.y_axis_visible
    }

    pub fn axis_on(&self) -> bool {
        self.axis_on
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_range(&self) -> (i32, i32) {
        self.x_range
    }

    pub fn y_range(&self) -> (i32, i32) {
        self.y_range
    }

    /// Sum of all requested pauses.
    pub fn total_pause(&self) -> Duration {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Pause(d) => Some(*d),
                _ => None,
            })
            .sum()
    }

    fn block_mut(&mut self, unit: UnitId) -> Result<&mut BlockState, SurfaceError> {
        self.blocks
            .get_mut(&unit)
            .ok_or(SurfaceError::UnknownBlock(unit))
    }
}

impl Surface for RecordingSurface {
    fn layout(&mut self, geometry: &Geometry) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::Layout(*geometry));
        self.geometry = Some(*geometry);
        self.boundary = true;
        self.x_axis_visible = true;
        self.y_axis_visible = true;
        self.axis_on = true;
        self.x_range = geometry.x_range();
        self.y_range = geometry.y_range();
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::Title(title.to_string()));
        self.title = title.to_string();
        Ok(())
    }

    fn add_block(&mut self, unit: UnitId, at: Cell, face: Rgb) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::Add { unit, at, face });
        let state = BlockState {
            at,
            face,
            edge: Some(Rgb::BLACK),
        };
        if self.blocks.insert(unit, state).is_none() {
            self.order.push(unit);
        }
        Ok(())
    }

    fn move_block(&mut self, unit: UnitId, at: Cell) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::Move { unit, at });
        self.block_mut(unit)?.at = at;
        Ok(())
    }

    fn remove_boundary(&mut self) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::RemoveBoundary);
        self.boundary = false;
        Ok(())
    }

    fn hide_x_axis(&mut self) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::HideXAxis);
        self.x_axis_visible = false;
        Ok(())
    }

    fn hide_y_axis(&mut self) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::HideYAxis);
        self.y_axis_visible = false;
        Ok(())
    }

    fn axis_off(&mut self) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::AxisOff);
        self.axis_on = false;
        Ok(())
    }

    fn set_y_range(&mut self, lo: i32, hi: i32) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::YRange(lo, hi));
        self.y_range = (lo, hi);
        Ok(())
    }

    fn set_edge_color(&mut self, unit: UnitId, edge: Option<Rgb>) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::EdgeColor { unit, edge });
        self.block_mut(unit)?.edge = edge;
        Ok(())
    }

    fn pause(&mut self, d: Duration) -> Result<(), SurfaceError> {
        self.ops.push(SurfaceOp::Pause(d));
        Ok(())
    }
}
