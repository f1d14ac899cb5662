// rust/engine/src/render/animator.rs
#![forbid(unsafe_code)]

use tracing::trace;

use crate::engine::{Event, Simulation};

use super::pacing::Pacing;
use super::surface::{Surface, SurfaceError};

/// Replays simulation events onto a surface, pausing after each mutation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Animator {
    pacing: Pacing,
}

impl Animator {
    pub fn new(pacing: Pacing) -> Self {
        Self { pacing }
    }

    pub fn play(&self, sim: &Simulation, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        for ev in &sim.events {
            self.apply(ev, surface)?;
        }
        Ok(())
    }

    /// Apply one event. Pauses follow the add/move/strip calls and each cleanup step;
    /// boundary removal and the y-range change do not pause.
    pub fn apply(&self, ev: &Event, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        let p = &self.pacing;
        match *ev {
            Event::Layout { geometry } => surface.layout(&geometry),
            Event::Title { placed, total } => surface.set_title(&format!("N={placed}/{total}")),
            Event::Add {
                unit, at, color, ..
            } => {
                surface.add_block(unit, at, color)?;
                surface.pause(p.micro)
            }
            Event::Down { unit, to } | Event::Right { unit, to } => {
                surface.move_block(unit, to)?;
                surface.pause(p.micro)
            }
            Event::Abandon { unit, at } => {
                trace!(
                    unit = unit.0,
                    col = at.col,
                    row = at.row,
                    "abandoned block left in place"
                );
                Ok(())
            }
            Event::Settle { .. } => Ok(()),
            Event::RemoveBoundary => surface.remove_boundary(),
            Event::HideXAxis => {
                surface.hide_x_axis()?;
                surface.pause(p.clean)
            }
            Event::HideYAxis => {
                surface.hide_y_axis()?;
                surface.pause(p.clean)
            }
            Event::AxisOff => {
                surface.axis_off()?;
                surface.pause(p.clean)
            }
            Event::ClearTitle => {
                surface.set_title("")?;
                surface.pause(p.clean)
            }
            Event::SetYRange { max_height } => surface.set_y_range(0, max_height + 1),
            Event::StripEdge { unit } => {
                surface.set_edge_color(unit, None)?;
                surface.pause(p.edge_strip())
            }
        }
    }
}
