// rust/engine/src/engine/columns.rs
#![forbid(unsafe_code)]

use crate::engine::constants::EMPTY_COLUMN;
use crate::engine::geometry::Geometry;

/// Per-column stack tops.
///
/// Each entry is the row index of the topmost filled cell, `EMPTY_COLUMN` for an
/// empty column. Heights only ever grow during a run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnHeights {
    heights: Vec<i32>,
    full_height: i32,
}

impl ColumnHeights {
    pub fn new(geometry: &Geometry) -> Self {
        Self {
            heights: vec![EMPTY_COLUMN; geometry.x_blocks],
            full_height: geometry.full_height(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    #[inline]
    pub fn get(&self, col: usize) -> i32 {
        self.heights[col]
    }

    /// A column is full once its top reaches `y_blocks - 1`.
    #[inline]
    pub fn is_full(&self, col: usize) -> bool {
        self.heights[col] >= self.full_height
    }

    /// No column can take another unit.
    pub fn all_full(&self) -> bool {
        (0..self.heights.len()).all(|c| self.is_full(c))
    }

    /// Column to the right of `col`, wrapping from the last column back to 0.
    #[inline]
    pub fn next_column(&self, col: usize) -> usize {
        if col + 1 >= self.heights.len() {
            0
        } else {
            col + 1
        }
    }

    /// Record a unit resting at `row` on top of column `col`.
    pub fn settle(&mut self, col: usize, row: i32) {
        debug_assert!(
            row > self.heights[col] && row <= self.full_height,
            "settle out of range: col={} row={} top={} full={}",
            col,
            row,
            self.heights[col],
            self.full_height
        );
        self.heights[col] = row;
    }

    /// Grow column `col` by one cell and return the new top row.
    pub fn raise(&mut self, col: usize) -> i32 {
        self.heights[col] += 1;
        self.heights[col]
    }

    /// Tallest stack, `EMPTY_COLUMN` when nothing has settled.
    pub fn max_height(&self) -> i32 {
        self.heights.iter().copied().max().unwrap_or(EMPTY_COLUMN)
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.heights.clone()
    }
}
