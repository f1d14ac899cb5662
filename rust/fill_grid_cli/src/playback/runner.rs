// rust/fill_grid_cli/src/playback/runner.rs
#![forbid(unsafe_code)]

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use fill_grid_engine::{
    simulate, Animator, AsciiSurface, ColumnRule, Event, FillConfig, Pacing, RecordingSurface,
    Simulation, Surface,
};

use super::report::RunReport;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- scenario ----------------
    pub fill: FillConfig,
    pub rule: ColumnRule,
    /// Used only for the final report.
    pub seed: Option<u64>,

    // ---------------- rendering ----------------
    pub pacing: Pacing,
    /// 24-bit colored cells and full-screen repaint per frame.
    pub color: bool,
    /// Play onto a recording surface instead of the terminal.
    pub headless: bool,

    // ---------------- output ----------------
    /// 0 = final summary only
    /// 1 = progress bar
    pub verbosity: u8,
}

pub struct Runner {
    cfg: RunnerConfig,
}

impl Runner {
    pub fn new(cfg: RunnerConfig) -> Self {
        Self { cfg }
    }

    pub fn run(&mut self) -> Result<RunReport> {
        let cfg = self.cfg.clone();
        let t0 = Instant::now();

        let sim = simulate(cfg.fill.clone(), cfg.rule.clone())
            .context("Invalid grid configuration")?;
        info!(
            events = sim.events.len(),
            placed = sim.settled(),
            fillers = sim.filler_adds(),
            "simulation ready"
        );

        // Progress bar is UI only; playback does not depend on it.
        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(sim.placements.len() as u64);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>6}/{len:<6}  {percent:>3}%  {elapsed_precise}  {msg}",
                )
                .unwrap()
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let animator = Animator::new(cfg.pacing);
        if cfg.headless {
            let mut surface = RecordingSurface::new();
            play(&animator, &sim, &mut surface, pb.as_ref())?;
            debug!(ops = surface.ops().len(), "headless playback done");
        } else {
            let stdout = io::stdout();
            let mut surface = AsciiSurface::new(stdout.lock()).with_color(cfg.color);
            play(&animator, &sim, &mut surface, pb.as_ref())?;
            debug!(frames = surface.frames(), "terminal playback done");
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        Ok(RunReport::from_simulation(
            &sim,
            cfg.rule.kind(),
            cfg.seed,
            t0.elapsed().as_secs_f64(),
        ))
    }
}

fn play(
    animator: &Animator,
    sim: &Simulation,
    surface: &mut dyn Surface,
    pb: Option<&ProgressBar>,
) -> Result<()> {
    for ev in &sim.events {
        animator
            .apply(ev, surface)
            .with_context(|| format!("Playback failed at {ev:?}"))?;

        let Some(pb) = pb else { continue };
        match ev {
            Event::Settle { .. } | Event::Abandon { .. } => pb.inc(1),
            Event::Add { filler: true, .. } => pb.set_message("filling"),
            Event::RemoveBoundary | Event::HideXAxis => pb.set_message("cleaning"),
            _ => {}
        }
    }
    Ok(())
}
