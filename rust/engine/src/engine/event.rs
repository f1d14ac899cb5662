// rust/engine/src/engine/event.rs
#![forbid(unsafe_code)]

use crate::engine::color::Rgb;
use crate::engine::geometry::{Cell, Geometry, UnitId};

/// One discrete step of a run, in the order it happened.
///
/// The simulation only emits these; a renderer replays them onto a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Surface set up: axis ranges and the boundary line at `y_blocks`.
    Layout { geometry: Geometry },
    /// Progress title, `placed` of `total`.
    Title { placed: usize, total: usize },
    /// A unit-sized block appears at `at` with a black edge.
    Add {
        unit: UnitId,
        at: Cell,
        color: Rgb,
        filler: bool,
    },
    /// Block moved down one row.
    Down { unit: UnitId, to: Cell },
    /// Block moved one column right (wrapping).
    Right { unit: UnitId, to: Cell },
    /// Every column was full during the rightward sweep; the block stays where it is.
    Abandon { unit: UnitId, at: Cell },
    /// Block came to rest on top of its column.
    Settle { unit: UnitId, at: Cell },
    RemoveBoundary,
    HideXAxis,
    HideYAxis,
    AxisOff,
    ClearTitle,
    /// Y-range tightened to `[0, max_height + 1]`.
    SetYRange { max_height: i32 },
    /// Edge color removed from a registered block.
    StripEdge { unit: UnitId },
}

impl Event {
    pub fn unit(&self) -> Option<UnitId> {
        match *self {
            Event::Add { unit, .. }
            | Event::Down { unit, .. }
            | Event::Right { unit, .. }
            | Event::Abandon { unit, .. }
            | Event::Settle { unit, .. }
            | Event::StripEdge { unit } => Some(unit),
            _ => None,
        }
    }

    /// Events that move or create a block on the surface.
    pub fn is_motion(&self) -> bool {
        matches!(self, Event::Add { .. } | Event::Down { .. } | Event::Right { .. })
    }
}

/// Outcome of placing one unit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Placement {
    Settled {
        unit: UnitId,
        target: usize,
        at: Cell,
        lateral_moves: usize,
    },
    Abandoned {
        unit: UnitId,
        target: usize,
        at: Cell,
    },
}

impl Placement {
    pub fn unit(&self) -> UnitId {
        match *self {
            Placement::Settled { unit, .. } | Placement::Abandoned { unit, .. } => unit,
        }
    }

    pub fn cell(&self) -> Cell {
        match *self {
            Placement::Settled { at, .. } | Placement::Abandoned { at, .. } => at,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Placement::Settled { .. })
    }
}
