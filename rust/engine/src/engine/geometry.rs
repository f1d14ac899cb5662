// rust/engine/src/engine/geometry.rs
#![forbid(unsafe_code)]

use std::fmt;

use crate::engine::config::ConfigError;

/// Index of a placed unit. Real units use `0..blocks`; filler units start at `blocks + 1`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct UnitId(pub usize);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lower-left origin of a unit-sized block, in grid units.
///
/// `row` is signed: the drop position sits above the grid and the empty-stack
/// sentinel sits one below row 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Cell {
    pub col: usize,
    pub row: i32,
}

impl Cell {
    #[inline]
    pub fn new(col: usize, row: i32) -> Self {
        Self { col, row }
    }
}

/// Grid dimensions for one run. Immutable once computed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Geometry {
    pub x_blocks: usize,
    pub y_blocks: usize,
}

impl Geometry {
    pub fn new(x_blocks: usize, y_blocks: usize) -> Result<Self, ConfigError> {
        if x_blocks == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if y_blocks == 0 {
            return Err(ConfigError::ZeroRows { x_blocks });
        }
        // Heights and drop rows are i32; y_blocks + 1 must stay representable.
        let rows_fit = i32::try_from(y_blocks)
            .ok()
            .and_then(|y| y.checked_add(1))
            .is_some();
        if !rows_fit || x_blocks.checked_mul(y_blocks).is_none() {
            return Err(ConfigError::GridTooLarge { x_blocks, y_blocks });
        }
        Ok(Self { x_blocks, y_blocks })
    }

    /// Dimensions from a block budget:
    /// - columns default to `floor(sqrt(blocks))`
    /// - rows default to `ceil(blocks / x_blocks)`
    pub fn derive(
        blocks: usize,
        x_blocks: Option<usize>,
        y_blocks: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let x = x_blocks.unwrap_or_else(|| isqrt(blocks));
        if x == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        let y = y_blocks.unwrap_or_else(|| blocks.div_ceil(x));
        Self::new(x, y)
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.x_blocks * self.y_blocks
    }

    /// Height at which a column counts as full.
    #[inline]
    pub fn full_height(&self) -> i32 {
        self.y_blocks as i32 - 1
    }

    /// Boundary line between the drop zone and the grid top.
    #[inline]
    pub fn boundary_height(&self) -> i32 {
        self.y_blocks as i32
    }

    /// Row each unit is added at, one above the boundary.
    #[inline]
    pub fn start_height(&self) -> i32 {
        self.y_blocks as i32 + 1
    }

    /// Axis extents as drawn on a surface; the y-range leaves room for the drop row.
    #[inline]
    pub fn x_range(&self) -> (i32, i32) {
        (0, self.x_blocks as i32)
    }

    #[inline]
    pub fn y_range(&self) -> (i32, i32) {
        (0, self.y_blocks as i32 + 1)
    }

    /// Ordered column indices `[0, x_blocks)`.
    pub fn columns(&self) -> impl Iterator<Item = usize> {
        0..self.x_blocks
    }
}

/// floor(sqrt(n)) without float rounding surprises near perfect squares.
fn isqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r > 0 && r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_floors() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(57), 7);
        assert_eq!(isqrt(99), 9);
        assert_eq!(isqrt(100), 10);
    }

    #[test]
    fn derived_rows_round_up() {
        let g = Geometry::derive(57, Some(10), None).unwrap();
        assert_eq!((g.x_blocks, g.y_blocks), (10, 6));

        let g = Geometry::derive(25, None, None).unwrap();
        assert_eq!((g.x_blocks, g.y_blocks), (5, 5));
        assert_eq!(g.capacity(), 25);
        assert_eq!(g.full_height(), 4);
        assert_eq!(g.start_height(), 6);
        assert_eq!(g.y_range(), (0, 6));
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        assert_eq!(
            Geometry::derive(0, None, None),
            Err(ConfigError::ZeroColumns)
        );
        assert_eq!(
            Geometry::derive(0, Some(3), None),
            Err(ConfigError::ZeroRows { x_blocks: 3 })
        );
        assert!(matches!(
            Geometry::new(usize::MAX, 2),
            Err(ConfigError::GridTooLarge { .. })
        ));
    }
}
