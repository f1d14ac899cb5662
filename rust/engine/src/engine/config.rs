// rust/engine/src/engine/config.rs
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::engine::constants::{DEFAULT_BLOCKS, SCENARIO_BLOCKS, SCENARIO_X_BLOCKS};
use crate::engine::geometry::Geometry;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("grid has zero columns (set x_blocks, or use at least one block)")]
    ZeroColumns,
    #[error(
        "grid with {x_blocks} columns has zero rows (set y_blocks, or use at least one block)"
    )]
    ZeroRows { x_blocks: usize },
    #[error("grid of {x_blocks}x{y_blocks} cells is too large")]
    GridTooLarge { x_blocks: usize, y_blocks: usize },
    #[error("fixed column sequence is empty")]
    EmptyColumnSequence,
}

/// Construction parameters of one run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FillConfig {
    /// Number of units to drop.
    pub blocks: usize,
    /// Back-fill empty cells with filler units after placement.
    pub fill_empties: bool,
    /// Strip axes, boundary and edge colors at the end.
    pub clean_figure: bool,
    /// Column count; `floor(sqrt(blocks))` when unset.
    pub x_blocks: Option<usize>,
    /// Row count; `ceil(blocks / x_blocks)` when unset.
    pub y_blocks: Option<usize>,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKS)
    }
}

impl FillConfig {
    pub fn new(blocks: usize) -> Self {
        Self {
            blocks,
            fill_empties: false,
            clean_figure: false,
            x_blocks: None,
            y_blocks: None,
        }
    }

    /// The built-in demo: 57 units, 10 columns, fill and clean enabled.
    pub fn scenario() -> Self {
        Self::new(SCENARIO_BLOCKS)
            .x_blocks(SCENARIO_X_BLOCKS)
            .fill_empties(true)
            .clean_figure(true)
    }

    pub fn fill_empties(mut self, on: bool) -> Self {
        self.fill_empties = on;
        self
    }

    pub fn clean_figure(mut self, on: bool) -> Self {
        self.clean_figure = on;
        self
    }

    pub fn x_blocks(mut self, x_blocks: usize) -> Self {
        self.x_blocks = Some(x_blocks);
        self
    }

    pub fn y_blocks(mut self, y_blocks: usize) -> Self {
        self.y_blocks = Some(y_blocks);
        self
    }

    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        Geometry::derive(self.blocks, self.x_blocks, self.y_blocks)
    }
}
