// rust/engine/src/engine/column_rule.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::config::ConfigError;
use crate::engine::geometry::Geometry;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnRuleKind {
    /// Independent uniform draws over all columns, with replacement.
    Uniform,
    /// A caller-supplied sequence, cycled when shorter than the block count.
    Fixed,
}

/// Source of target columns, one per unit.
#[derive(Clone, Debug)]
pub struct ColumnRule {
    kind: ColumnRuleKind,

    // RNG lives here (target stream responsibility)
    rng: StdRng,

    // Fixed-sequence state (only used if kind == Fixed)
    sequence: Vec<usize>,
    seq_idx: usize,
}

impl ColumnRule {
    pub fn uniform(seed: u64) -> Self {
        Self {
            kind: ColumnRuleKind::Uniform,
            rng: StdRng::seed_from_u64(seed),
            sequence: Vec::new(),
            seq_idx: 0,
        }
    }

    /// Uniform rule seeded from an injected RNG.
    pub fn from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::uniform(rng.next_u64())
    }

    pub fn fixed(sequence: Vec<usize>) -> Result<Self, ConfigError> {
        if sequence.is_empty() {
            return Err(ConfigError::EmptyColumnSequence);
        }
        Ok(Self {
            kind: ColumnRuleKind::Fixed,
            rng: StdRng::seed_from_u64(0),
            sequence,
            seq_idx: 0,
        })
    }

    pub fn kind(&self) -> ColumnRuleKind {
        self.kind
    }

    /// Next target column value. Fixed sequences are returned verbatim, so a value
    /// outside `[0, x_blocks)` is possible; placement resolves it to column 0.
    pub fn draw(&mut self, x_blocks: usize) -> usize {
        match self.kind {
            ColumnRuleKind::Uniform => self.rng.gen_range(0..x_blocks),
            ColumnRuleKind::Fixed => {
                let c = self.sequence[self.seq_idx % self.sequence.len()];
                self.seq_idx += 1;
                c
            }
        }
    }
}

/// Draw `blocks` target columns uniformly (with replacement) from `[0, x_blocks)`.
pub fn initialise_positions<R: Rng + ?Sized>(
    geometry: &Geometry,
    blocks: usize,
    rng: &mut R,
) -> Vec<usize> {
    let x_pos: Vec<usize> = geometry.columns().collect();
    (0..blocks)
        .map(|_| x_pos[rng.gen_range(0..x_pos.len())])
        .collect()
}
