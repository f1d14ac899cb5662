// rust/fill_grid_cli/src/playback/report.rs
#![forbid(unsafe_code)]

use fill_grid_engine::{ColumnRuleKind, Simulation};

/// End-of-run summary.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub rule: ColumnRuleKind,
    pub seed: Option<u64>,

    pub blocks: usize,
    pub x_blocks: usize,
    pub y_blocks: usize,
    pub capacity: usize,

    pub placed: usize,
    pub abandoned: usize,
    pub fillers: usize,
    pub registered: usize,
    pub events: usize,

    /// Tallest column after placement, before any fill.
    pub max_height: i32,
    pub heights: Vec<i32>,
    pub boundary: bool,

    pub elapsed_s: f64,
}

impl RunReport {
    pub fn from_simulation(
        sim: &Simulation,
        rule: ColumnRuleKind,
        seed: Option<u64>,
        elapsed_s: f64,
    ) -> Self {
        Self {
            rule,
            seed,
            blocks: sim.config.blocks,
            x_blocks: sim.geometry.x_blocks,
            y_blocks: sim.geometry.y_blocks,
            capacity: sim.geometry.capacity(),
            placed: sim.settled(),
            abandoned: sim.abandoned(),
            fillers: sim.filler_adds(),
            registered: sim.registry.len(),
            events: sim.events.len(),
            max_height: sim.max_height,
            heights: sim.heights.clone(),
            boundary: sim.boundary,
            elapsed_s,
        }
    }

    /// One-line summary (useful for logs / grep).
    pub fn summary_line(&self) -> String {
        let seed = self.seed.map_or_else(|| "-".to_string(), |s| s.to_string());
        let heights = self
            .heights
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "DONE: rule={:?} seed={} grid={}x{} blocks={} placed={} abandoned={} fillers={} registered={} events={} max_h={} heights=[{}] elapsed={:.3}s",
            self.rule,
            seed,
            self.x_blocks,
            self.y_blocks,
            self.blocks,
            self.placed,
            self.abandoned,
            self.fillers,
            self.registered,
            self.events,
            self.max_height,
            heights,
            self.elapsed_s,
        )
    }
}
