// rust/fill_grid_cli/src/main.rs
#![forbid(unsafe_code)]

mod config;
mod playback;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ScenarioFile;
use crate::playback::{Runner, RunnerConfig};
use fill_grid_engine::Pacing;

#[derive(Parser, Debug)]
#[command(
    name = "fill_grid",
    version,
    about = "Animate blocks falling into a grid, column by column"
)]
struct Args {
    // ---------------- scenario ----------------
    /// JSON scenario file. Flags below override its fields.
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,

    /// Number of units to drop (built-in scenario: 57).
    #[arg(long)]
    blocks: Option<usize>,

    /// Column count (built-in scenario: 10).
    #[arg(long)]
    x_blocks: Option<usize>,

    /// Row count. If unset anywhere, derived as ceil(blocks / x_blocks).
    #[arg(long)]
    y_blocks: Option<usize>,

    /// Derive the column count from blocks (floor(sqrt(blocks))) instead of using 10.
    #[arg(long, conflicts_with = "x_blocks")]
    derive_columns: bool,

    /// Back-fill empty cells with grey blocks after placement.
    #[arg(long, conflicts_with = "no_fill_empties")]
    fill_empties: bool,

    #[arg(long)]
    no_fill_empties: bool,

    /// Strip boundary, axes and block edges at the end.
    #[arg(long, conflicts_with = "no_clean_figure")]
    clean_figure: bool,

    #[arg(long)]
    no_clean_figure: bool,

    // ---------------- target columns ----------------
    /// RNG seed for target columns. If omitted, one is drawn at random and printed
    /// in the final summary so the run can be repeated.
    #[arg(long)]
    seed: Option<u64>,

    /**
     * Fixed target columns, comma separated; cycled when shorter than --blocks.
     * Examples:
     *   --columns 0,0,1
     *   --columns 3
     */
    #[arg(long, value_delimiter = ',')]
    columns: Option<Vec<usize>>,

    // ---------------- visualization ----------------
    /**
     * Pause scale: 1.0 = original pacing (1 ms per move, 200 ms per cleanup step),
     * 0 = as fast as possible.
     */
    #[arg(long)]
    pause_scale: Option<f64>,

    /// Plain ASCII frames without colors or screen clearing.
    #[arg(long)]
    no_color: bool,

    /// Simulate and play onto an in-memory surface; print only the summary.
    #[arg(long)]
    headless: bool,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=silent (final summary only), 1=progress bar.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Log filter used when RUST_LOG is not set (e.g. info, fill_grid_engine=debug).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Command-line values layered over the scenario file (or the built-in scenario).
    fn scenario(&self) -> Result<ScenarioFile> {
        let mut s = match &self.config {
            Some(path) => ScenarioFile::load(path)?,
            None => ScenarioFile::default(),
        };

        if let Some(b) = self.blocks {
            s.blocks = b;
        }
        if self.derive_columns {
            s.x_blocks = None;
        }
        if let Some(x) = self.x_blocks {
            s.x_blocks = Some(x);
        }
        if let Some(y) = self.y_blocks {
            s.y_blocks = Some(y);
        }
        if self.fill_empties {
            s.fill_empties = true;
        }
        if self.no_fill_empties {
            s.fill_empties = false;
        }
        if self.clean_figure {
            s.clean_figure = true;
        }
        if self.no_clean_figure {
            s.clean_figure = false;
        }
        if let Some(seed) = self.seed {
            s.seed = Some(seed);
        }
        if let Some(cols) = &self.columns {
            s.columns = Some(cols.clone());
        }
        if let Some(p) = self.pause_scale {
            s.pause_scale = p;
        }
        Ok(s)
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // Frames go to stdout; keep logs on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut scenario = args.scenario()?;
    let seed = scenario.resolve_seed();
    info!(?scenario, "scenario resolved");

    let rule = scenario
        .column_rule()
        .context("Invalid target column sequence")?;

    // Runner configuration (data only; no logic).
    let cfg = RunnerConfig {
        fill: scenario.fill_config(),
        seed,
        rule,
        pacing: Pacing::scaled(scenario.pause_scale),
        color: !args.no_color,
        headless: args.headless,
        verbosity: args.verbosity,
    };

    let mut runner = Runner::new(cfg);
    let report = runner.run()?;

    // Final one-line summary (useful for logs / grep).
    println!("{}", report.summary_line());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["fill_grid"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn no_arguments_runs_builtin_scenario() {
        let s = parse(&[]).scenario().unwrap();
        assert_eq!(s, ScenarioFile::default());
        let g = s.fill_config().geometry().unwrap();
        assert_eq!((g.x_blocks, g.y_blocks), (10, 6));
    }

    #[test]
    fn flags_override_scenario_fields() {
        let s = parse(&[
            "--blocks",
            "10",
            "--x-blocks",
            "2",
            "--y-blocks",
            "2",
            "--no-fill-empties",
            "--no-clean-figure",
            "--columns",
            "0,1,1",
            "--pause-scale",
            "0",
        ])
        .scenario()
        .unwrap();

        let cfg = s.fill_config();
        assert_eq!(cfg.blocks, 10);
        assert_eq!((cfg.x_blocks, cfg.y_blocks), (Some(2), Some(2)));
        assert!(!cfg.fill_empties && !cfg.clean_figure);
        assert_eq!(s.columns, Some(vec![0, 1, 1]));
        assert_eq!(s.pause_scale, 0.0);
    }

    #[test]
    fn derive_columns_clears_scenario_default() {
        let s = parse(&["--blocks", "25", "--derive-columns"])
            .scenario()
            .unwrap();
        let g = s.fill_config().geometry().unwrap();
        assert_eq!((g.x_blocks, g.y_blocks), (5, 5));
    }

    #[test]
    fn contradictory_flags_are_rejected() {
        assert!(
            Args::try_parse_from(["fill_grid", "--fill-empties", "--no-fill-empties"]).is_err()
        );
        assert!(
            Args::try_parse_from(["fill_grid", "--x-blocks", "3", "--derive-columns"]).is_err()
        );
    }
}
