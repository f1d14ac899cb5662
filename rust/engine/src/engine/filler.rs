// rust/engine/src/engine/filler.rs
#![forbid(unsafe_code)]

use rand::Rng;
use tracing::{debug, info, warn};

use crate::engine::color::Rgb;
use crate::engine::column_rule::{initialise_positions, ColumnRule};
use crate::engine::columns::ColumnHeights;
use crate::engine::config::{ConfigError, FillConfig};
use crate::engine::event::{Event, Placement};
use crate::engine::geometry::{Cell, Geometry, UnitId};

/// Everything a finished run produced.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub config: FillConfig,
    pub geometry: Geometry,
    /// Target column drawn for every unit (length `blocks`).
    pub targets: Vec<usize>,
    pub events: Vec<Event>,
    /// Final column heights (after fill, if enabled).
    pub heights: Vec<i32>,
    /// Tallest column right after the placement loop, before any fill.
    pub max_height: i32,
    pub placements: Vec<Placement>,
    /// Rendered blocks in insertion order: placed units first, then fillers.
    pub registry: Vec<UnitId>,
    pub boundary: bool,
}

impl Simulation {
    /// Non-filler add operations.
    pub fn unit_adds(&self) -> usize {
        self.count_adds(false)
    }

    pub fn filler_adds(&self) -> usize {
        self.count_adds(true)
    }

    fn count_adds(&self, want_filler: bool) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Add { filler, .. } if *filler == want_filler))
            .count()
    }

    pub fn settled(&self) -> usize {
        self.placements.iter().filter(|p| p.is_settled()).count()
    }

    pub fn abandoned(&self) -> usize {
        self.placements.len() - self.settled()
    }
}

/// Drops units into a `Geometry`-sized grid one at a time and records every step.
///
/// Usual flow is `plot()`. The individual steps are public so callers can drive a
/// run piecewise (e.g. `initialise_positions` then a few `block_handler` calls).
#[derive(Clone, Debug)]
pub struct GridFiller {
    config: FillConfig,
    geometry: Geometry,

    rule: ColumnRule,
    targets: Vec<usize>,

    heights: ColumnHeights,
    placements: Vec<Placement>,
    registry: Vec<UnitId>,
    events: Vec<Event>,

    boundary: bool,
    next_filler: usize,
}

impl GridFiller {
    pub fn new(config: FillConfig, rule: ColumnRule) -> Result<Self, ConfigError> {
        let geometry = config.geometry()?;
        let next_filler = config.blocks + 1;
        Ok(Self {
            config,
            geometry,
            rule,
            targets: Vec::new(),
            heights: ColumnHeights::new(&geometry),
            placements: Vec::new(),
            registry: Vec::new(),
            events: Vec::new(),
            boundary: false,
            next_filler,
        })
    }

    /// Uniform targets seeded from an injected RNG.
    pub fn with_rng<R: Rng + ?Sized>(config: FillConfig, rng: &mut R) -> Result<Self, ConfigError> {
        let geometry = config.geometry()?;
        let targets = initialise_positions(&geometry, config.blocks, rng);
        let mut filler = Self::new(config, ColumnRule::from_rng(rng))?;
        filler.targets = targets;
        Ok(filler)
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn heights(&self) -> &ColumnHeights {
        &self.heights
    }

    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    pub fn registry(&self) -> &[UnitId] {
        &self.registry
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn has_boundary(&self) -> bool {
        self.boundary
    }

    // -------------------------------------------------------------------------
    // Layout + targets
    // -------------------------------------------------------------------------

    pub fn create_figure_window(&mut self) {
        self.boundary = true;
        self.events.push(Event::Layout {
            geometry: self.geometry,
        });
    }

    /// Draw one target column per unit from the rule.
    /// No-op if targets were already supplied (see `with_rng`).
    pub fn initialise_positions(&mut self) {
        if self.targets.len() == self.config.blocks {
            return;
        }
        let (blocks, x) = (self.config.blocks, self.geometry.x_blocks);
        self.targets = (0..blocks).map(|_| self.rule.draw(x)).collect();
    }

    /// First column index whose value equals `target`; column 0 if none does.
    #[inline]
    fn resolve_column(&self, target: usize) -> usize {
        self.geometry
            .columns()
            .position(|c| c == target)
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Block primitives
    // -------------------------------------------------------------------------

    fn add(&mut self, unit: UnitId, at: Cell, color: Rgb, filler: bool) {
        self.events.push(Event::Add {
            unit,
            at,
            color,
            filler,
        });
    }

    fn down(&mut self, unit: UnitId, at: Cell) -> Cell {
        let to = Cell::new(at.col, at.row - 1);
        self.events.push(Event::Down { unit, to });
        to
    }

    fn right(&mut self, unit: UnitId, at: Cell) -> Cell {
        let to = Cell::new(self.heights.next_column(at.col), at.row);
        self.events.push(Event::Right { unit, to });
        to
    }

    // -------------------------------------------------------------------------
    // Per-unit placement
    // -------------------------------------------------------------------------

    /// Drop unit `b`: add above the grid, fall onto the boundary, slide right past
    /// full columns, then fall onto the stack.
    ///
    /// Panics if `b >= blocks` or positions were not initialised.
    pub fn block_handler(&mut self, b: usize) -> Placement {
        let blocks = self.config.blocks;
        let x_blocks = self.geometry.x_blocks;
        let unit = UnitId(b);

        self.events.push(Event::Title {
            placed: b + 1,
            total: blocks,
        });

        let target = self.targets[b];
        let col = self.resolve_column(target);
        let mut at = Cell::new(col, self.geometry.start_height());

        self.add(unit, at, Rgb::unit_gradient(b, blocks), false);

        // Rest on top of the boundary line.
        at = self.down(unit, at);

        let mut moves = 0usize;
        while self.heights.is_full(at.col) && moves < x_blocks {
            at = self.right(unit, at);
            moves += 1;
        }

        self.registry.push(unit);

        if moves == x_blocks {
            warn!(
                unit = b,
                col = at.col,
                "every column is full; placement abandoned"
            );
            self.events.push(Event::Abandon { unit, at });
            let p = Placement::Abandoned { unit, target, at };
            self.placements.push(p);
            return p;
        }

        while at.row > self.heights.get(at.col) + 1 {
            at = self.down(unit, at);
        }
        self.heights.settle(at.col, at.row);
        self.events.push(Event::Settle { unit, at });

        debug!(
            unit = b,
            target,
            col = at.col,
            row = at.row,
            moves,
            "unit settled"
        );

        let p = Placement::Settled {
            unit,
            target,
            at,
            lateral_moves: moves,
        };
        self.placements.push(p);
        p
    }

    // -------------------------------------------------------------------------
    // Run loop
    // -------------------------------------------------------------------------

    /// Units the run loop will place: the block budget capped at grid capacity.
    pub fn placement_limit(&self) -> usize {
        self.config.blocks.min(self.geometry.capacity())
    }

    pub fn plot(mut self) -> Simulation {
        self.create_figure_window();
        self.initialise_positions();

        let limit = self.placement_limit();
        info!(
            blocks = self.config.blocks,
            x_blocks = self.geometry.x_blocks,
            y_blocks = self.geometry.y_blocks,
            limit,
            "placing units"
        );

        for b in 0..limit {
            if let Placement::Abandoned { .. } = self.block_handler(b) {
                break;
            }
        }

        let max_height = self.heights.max_height();

        if self.config.fill_empties {
            self.fill_empty();
        }

        if self.config.clean_figure {
            self.clean(max_height);
        }

        info!(
            placed = self.placements.len(),
            registered = self.registry.len(),
            max_height,
            "run finished"
        );

        self.into_simulation(max_height)
    }

    /// Back-fill every empty cell with a light grey filler unit, column by column.
    /// Filler indices continue from `blocks + 1`.
    pub fn fill_empty(&mut self) {
        let rows = self.geometry.y_blocks as i32;
        for col in self.geometry.columns() {
            while self.heights.get(col) + 1 < rows {
                let row = self.heights.raise(col);
                let unit = UnitId(self.next_filler);
                self.add(unit, Cell::new(col, row), Rgb::FILLER, true);
                self.registry.push(unit);
                debug!(unit = unit.0, col, row, "filler added");
                self.next_filler += 1;
            }
        }
    }

    /// Strip decoration: boundary, axes, title; tighten the y-range to the content;
    /// then drop the edge color of every registered block in insertion order.
    pub fn clean(&mut self, max_height: i32) {
        if self.boundary {
            self.boundary = false;
            self.events.push(Event::RemoveBoundary);
        }
        self.events.extend([
            Event::HideXAxis,
            Event::HideYAxis,
            Event::AxisOff,
            Event::ClearTitle,
            Event::SetYRange { max_height },
        ]);
        let strips: Vec<Event> = self
            .registry
            .iter()
            .map(|&unit| Event::StripEdge { unit })
            .collect();
        self.events.extend(strips);
    }

    pub fn into_simulation(self, max_height: i32) -> Simulation {
        Simulation {
            heights: self.heights.to_vec(),
            config: self.config,
            geometry: self.geometry,
            targets: self.targets,
            events: self.events,
            max_height,
            placements: self.placements,
            registry: self.registry,
            boundary: self.boundary,
        }
    }
}

/// Build a filler from `config` and run it to completion.
pub fn simulate(config: FillConfig, rule: ColumnRule) -> Result<Simulation, ConfigError> {
    Ok(GridFiller::new(config, rule)?.plot())
}
