// rust/fill_grid_cli/src/config.rs
#![forbid(unsafe_code)]

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use fill_grid_engine::engine::{SCENARIO_BLOCKS, SCENARIO_X_BLOCKS};
use fill_grid_engine::{ColumnRule, ConfigError, FillConfig};

/// Scenario as read from a JSON file. Missing fields fall back to the built-in scenario.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioFile {
    pub blocks: usize,
    pub fill_empties: bool,
    pub clean_figure: bool,
    /// `null` derives columns from `blocks`.
    pub x_blocks: Option<usize>,
    pub y_blocks: Option<usize>,
    pub seed: Option<u64>,
    /// Fixed target columns (cycled). Takes precedence over `seed`.
    pub columns: Option<Vec<usize>>,
    /// 1.0 = original pacing, 0.0 = no pauses.
    pub pause_scale: f64,
}

impl Default for ScenarioFile {
    fn default() -> Self {
        Self {
            blocks: SCENARIO_BLOCKS,
            fill_empties: true,
            clean_figure: true,
            x_blocks: Some(SCENARIO_X_BLOCKS),
            y_blocks: None,
            seed: None,
            columns: None,
            pause_scale: 1.0,
        }
    }
}

impl ScenarioFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON scenario in {}", path.display()))
    }

    pub fn fill_config(&self) -> FillConfig {
        FillConfig {
            blocks: self.blocks,
            fill_empties: self.fill_empties,
            clean_figure: self.clean_figure,
            x_blocks: self.x_blocks,
            y_blocks: self.y_blocks,
        }
    }

    /// Pin the seed of a uniform run, drawing one from entropy when none was given,
    /// so the summary can report it. Fixed column sequences have no seed.
    pub fn resolve_seed(&mut self) -> Option<u64> {
        if self.columns.is_some() {
            return None;
        }
        Some(*self.seed.get_or_insert_with(rand::random))
    }

    pub fn column_rule(&self) -> Result<ColumnRule, ConfigError> {
        match &self.columns {
            Some(seq) => ColumnRule::fixed(seq.clone()),
            None => Ok(ColumnRule::uniform(self.seed.unwrap_or_else(rand::random))),
        }
    }
}
