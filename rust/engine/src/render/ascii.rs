// rust/engine/src/render/ascii.rs
#![forbid(unsafe_code)]

use std::io::Write;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use rustc_hash::FxHashMap;

use crate::engine::{Cell, Geometry, Rgb, UnitId};

use super::surface::{BlockState, Surface, SurfaceError};

/// Characters per grid cell. Terminal glyphs are about twice as tall as wide, so two
/// of them keep blocks square.
const CELL_W: usize = 2;

const EDGED: &str = "[]";
const STRIPPED: &str = "██";
const EMPTY: &str = "  ";
const DASH: &str = "- ";

/// Terminal surface: draws one ASCII frame per pause.
///
/// With color on, faces are drawn in 24-bit color and every frame repaints the screen.
/// Without it, frames are appended to the writer one after another.
pub struct AsciiSurface<W: Write> {
    out: W,
    color: bool,
    sleep: bool,
    frames: u64,

    geometry: Option<Geometry>,
    blocks: FxHashMap<UnitId, BlockState>,
    boundary: bool,
    x_axis_visible: bool,
    y_axis_visible: bool,
    axis_on: bool,
    title: String,
    y_range: (i32, i32),
}

impl<W: Write> AsciiSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: false,
            sleep: true,
            frames: 0,
            geometry: None,
            blocks: FxHashMap::default(),
            boundary: false,
            x_axis_visible: false,
            y_axis_visible: false,
            axis_on: false,
            title: String::new(),
            y_range: (0, 0),
        }
    }

    pub fn with_color(mut self, on: bool) -> Self {
        self.color = on;
        self
    }

    /// Turn off sleeping in `pause` (frames are still drawn).
    pub fn with_sleep(mut self, on: bool) -> Self {
        self.sleep = on;
        self
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn glyph(&self, b: &BlockState) -> String {
        let g = if b.edge.is_some() { EDGED } else { STRIPPED };
        if self.color {
            let (r, g2, bl) = b.face.to_u8();
            format!("{}", g.with(Color::Rgb { r, g: g2, b: bl }))
        } else {
            g.to_string()
        }
    }

    fn gutter(&self, row: Option<i32>) -> String {
        match row {
            Some(r) if self.axis_on && self.y_axis_visible => format!("{r:>3} "),
            _ => "    ".to_string(),
        }
    }

    /// Current drawing as text. Rows run top (`hi - 1`) to bottom (`lo`).
    pub fn render_frame(&self) -> Result<String, SurfaceError> {
        let g = self.geometry.ok_or(SurfaceError::NoLayout)?;
        let width = g.x_blocks * CELL_W;
        let side = if self.axis_on { '|' } else { ' ' };

        let mut at: FxHashMap<Cell, &BlockState> = FxHashMap::default();
        for b in self.blocks.values() {
            at.insert(b.at, b);
        }

        let mut s = String::new();
        s.push_str(&self.title);
        s.push('\n');

        if self.axis_on {
            s.push_str(&self.gutter(None));
            s.push('+');
            s.push_str(&"-".repeat(width));
            s.push_str("+\n");
        }

        let (lo, hi) = self.y_range;
        for row in (lo..hi).rev() {
            if self.boundary && row == g.boundary_height() - 1 {
                s.push_str(&self.gutter(None));
                s.push(side);
                s.push_str(&DASH.repeat(g.x_blocks));
                s.push(side);
                s.push('\n');
            }

            s.push_str(&self.gutter(Some(row)));
            s.push(side);
            for col in 0..g.x_blocks {
                match at.get(&Cell::new(col, row)) {
                    Some(b) => s.push_str(&self.glyph(b)),
                    None => s.push_str(EMPTY),
                }
            }
            s.push(side);
            s.push('\n');
        }

        if self.axis_on {
            s.push_str(&self.gutter(None));
            s.push('+');
            s.push_str(&"-".repeat(width));
            s.push_str("+\n");
            if self.x_axis_visible {
                s.push_str(&self.gutter(None));
                s.push(' ');
                for col in 0..g.x_blocks {
                    s.push_str(&format!("{:<width$}", col % 100, width = CELL_W));
                }
                s.push('\n');
            }
        }

        Ok(s)
    }

    fn block_mut(&mut self, unit: UnitId) -> Result<&mut BlockState, SurfaceError> {
        self.blocks
            .get_mut(&unit)
            .ok_or(SurfaceError::UnknownBlock(unit))
    }
}

impl<W: Write> Surface for AsciiSurface<W> {
    fn layout(&mut self, geometry: &Geometry) -> Result<(), SurfaceError> {
        self.geometry = Some(*geometry);
        self.boundary = true;
        self.x_axis_visible = true;
        self.y_axis_visible = true;
        self.axis_on = true;
        self.y_range = geometry.y_range();
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<(), SurfaceError> {
        self.title = title.to_string();
        Ok(())
    }

    fn add_block(&mut self, unit: UnitId, at: Cell, face: Rgb) -> Result<(), SurfaceError> {
        self.blocks.insert(
            unit,
            BlockState {
                at,
                face,
                edge: Some(Rgb::BLACK),
            },
        );
        Ok(())
    }

    fn move_block(&mut self, unit: UnitId, at: Cell) -> Result<(), SurfaceError> {
        self.block_mut(unit)?.at = at;
        Ok(())
    }

    fn remove_boundary(&mut self) -> Result<(), SurfaceError> {
        self.boundary = false;
        Ok(())
    }

    fn hide_x_axis(&mut self) -> Result<(), SurfaceError> {
        self.x_axis_visible = false;
        Ok(())
    }

    fn hide_y_axis(&mut self) -> Result<(), SurfaceError> {
        self.y_axis_visible = false;
        Ok(())
    }

    fn axis_off(&mut self) -> Result<(), SurfaceError> {
        self.axis_on = false;
        Ok(())
    }

    fn set_y_range(&mut self, lo: i32, hi: i32) -> Result<(), SurfaceError> {
        self.y_range = (lo, hi);
        Ok(())
    }

    fn set_edge_color(&mut self, unit: UnitId, edge: Option<Rgb>) -> Result<(), SurfaceError> {
        self.block_mut(unit)?.edge = edge;
        Ok(())
    }

    fn pause(&mut self, d: Duration) -> Result<(), SurfaceError> {
        let frame = self.render_frame()?;
        if self.color {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.frames += 1;

        if self.sleep && !d.is_zero() {
            std::thread::sleep(d);
        }
        Ok(())
    }
}
