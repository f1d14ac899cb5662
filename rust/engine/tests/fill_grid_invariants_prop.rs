// rust/engine/tests/fill_grid_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property/invariant tests for the placement loop.
 *
 * Invariants covered:
 * - No column ever rises above `y_blocks - 1`.
 * - Per column, settled rows strictly increase (heights never decrease) and no two
 *   units share a cell.
 * - Non-filler adds equal `min(blocks, x_blocks * y_blocks)`.
 * - Identical seeds or identical fixed sequences give identical runs.
 * - With fill enabled every column ends at `y_blocks - 1`.
 * - With clean enabled the boundary is gone and every registered block is stripped,
 *   in registry order.
 */
use std::collections::HashSet;

use fill_grid_engine::{simulate, ColumnRule, Event, FillConfig, Simulation, EMPTY_COLUMN};
use proptest::prelude::*;

fn config(blocks: usize, x: usize, y: usize, fill: bool, clean: bool) -> FillConfig {
    FillConfig::new(blocks)
        .x_blocks(x)
        .y_blocks(y)
        .fill_empties(fill)
        .clean_figure(clean)
}

fn assert_settle_stream_consistent(sim: &Simulation) {
    let y = sim.geometry.y_blocks as i32;
    let mut tops = vec![EMPTY_COLUMN; sim.geometry.x_blocks];
    let mut cells = HashSet::new();

    for e in &sim.events {
        let at = match e {
            Event::Settle { at, .. } => *at,
            Event::Add { at, filler, .. } if *filler => *at,
            _ => continue,
        };
        assert!(at.row < y, "row {} above grid of {} rows", at.row, y);
        assert_eq!(at.row, tops[at.col] + 1, "unit did not land on the stack");
        tops[at.col] = at.row;
        assert!(cells.insert(at), "cell {at:?} used twice");
    }
    assert_eq!(tops, sim.heights);
}

proptest! {
    #[test]
    fn placement_respects_core_invariants(
        seed in any::<u64>(),
        blocks in 0usize..80,
        x in 1usize..9,
        y in 1usize..9,
        fill in any::<bool>(),
        clean in any::<bool>(),
    ) {
        let sim = simulate(config(blocks, x, y, fill, clean), ColumnRule::uniform(seed)).unwrap();
        let capacity = x * y;

        prop_assert!(sim.heights.iter().all(|&h| h <= y as i32 - 1));
        prop_assert!(sim.max_height <= y as i32 - 1);
        prop_assert_eq!(sim.unit_adds(), blocks.min(capacity));
        prop_assert_eq!(sim.settled(), blocks.min(capacity));
        prop_assert_eq!(sim.abandoned(), 0);
        assert_settle_stream_consistent(&sim);

        if fill {
            prop_assert!(sim.heights.iter().all(|&h| h == y as i32 - 1));
            prop_assert_eq!(sim.registry.len(), capacity);
        } else {
            prop_assert_eq!(sim.filler_adds(), 0);
        }

        if clean {
            prop_assert!(!sim.boundary);
            let stripped: Vec<_> = sim
                .events
                .iter()
                .filter_map(|e| match e {
                    Event::StripEdge { unit } => Some(*unit),
                    _ => None,
                })
                .collect();
            prop_assert_eq!(&stripped, &sim.registry);
        } else {
            prop_assert!(sim.boundary);
        }
    }

    #[test]
    fn same_seed_gives_same_run(
        seed in any::<u64>(),
        blocks in 1usize..60,
        x in 1usize..8,
    ) {
        let cfg = FillConfig::new(blocks).x_blocks(x);
        let a = simulate(cfg.clone(), ColumnRule::uniform(seed)).unwrap();
        let b = simulate(cfg, ColumnRule::uniform(seed)).unwrap();
        prop_assert_eq!(a.heights, b.heights);
        prop_assert_eq!(a.events, b.events);
    }

    #[test]
    fn fixed_sequence_gives_same_heights(
        seq in prop::collection::vec(0usize..6, 1..20),
        blocks in 1usize..40,
        x in 1usize..6,
        y in 1usize..6,
    ) {
        let run = || {
            simulate(
                config(blocks, x, y, false, false),
                ColumnRule::fixed(seq.clone()).unwrap(),
            )
            .unwrap()
        };
        let a = run();
        let b = run();
        prop_assert_eq!(&a.heights, &b.heights);
        prop_assert_eq!(&a.placements, &b.placements);
    }
}
