// rust/engine/src/render/pacing.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use crate::engine::{CLEAN_PAUSE, EDGE_STRIP_DIVISOR, MICRO_PAUSE};

/// Pause lengths used during playback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pacing {
    /// After every add/move.
    pub micro: Duration,
    /// After each cleanup step. Edge stripping uses `clean / 100` per block.
    pub clean: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            micro: MICRO_PAUSE,
            clean: CLEAN_PAUSE,
        }
    }
}

impl Pacing {
    pub const MAX_SCALE: f64 = 1_000.0;

    /// Zero-length pauses (headless runs, tests).
    pub fn instant() -> Self {
        Self {
            micro: Duration::ZERO,
            clean: Duration::ZERO,
        }
    }

    /// Default pacing stretched by `factor`, clamped to `[0, MAX_SCALE]`.
    pub fn scaled(factor: f64) -> Self {
        let f = if factor.is_finite() {
            factor.clamp(0.0, Self::MAX_SCALE)
        } else {
            0.0
        };
        let d = Self::default();
        Self {
            micro: d.micro.mul_f64(f),
            clean: d.clean.mul_f64(f),
        }
    }

    #[inline]
    pub fn edge_strip(&self) -> Duration {
        self.clean / EDGE_STRIP_DIVISOR
    }
}
