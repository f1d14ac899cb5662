// rust/engine/tests/render_playback.rs
#![forbid(unsafe_code)]

/**
 * Playback contract tests for the render layer.
 *
 * What is tested:
 * - `Animator` turns a finished simulation into surface calls with the right pauses.
 * - Cleanup postconditions on the drawn state: no boundary, no axes, no title,
 *   tightened y-range, no edge colors.
 * - `AsciiSurface` frames for a small fixed run, before and after cleanup.
 * - Surface errors (unknown block, no layout) propagate out of playback.
 */
use std::time::Duration;

use fill_grid_engine::{
    simulate, Animator, AsciiSurface, Cell, ColumnRule, Event, FillConfig, Pacing, Placement,
    RecordingSurface, Rgb, Surface, SurfaceError, SurfaceOp, UnitId,
};

fn small_run(clean: bool) -> fill_grid_engine::Simulation {
    let cfg = FillConfig::new(4)
        .x_blocks(2)
        .y_blocks(2)
        .clean_figure(clean);
    simulate(cfg, ColumnRule::fixed(vec![0, 1, 0, 1]).unwrap()).unwrap()
}

#[test]
fn playback_leaves_blocks_where_they_settled() {
    let sim = simulate(FillConfig::scenario(), ColumnRule::uniform(42)).unwrap();
    let mut surface = RecordingSurface::new();
    Animator::new(Pacing::instant())
        .play(&sim, &mut surface)
        .unwrap();

    assert_eq!(surface.block_count(), sim.registry.len());
    assert!(sim.placements.iter().all(Placement::is_settled));
    for p in &sim.placements {
        assert_eq!(surface.block(p.unit()).unwrap().at, p.cell());
    }
    let order: Vec<UnitId> = surface.blocks().map(|(u, _)| u).collect();
    assert_eq!(order, sim.registry);
}

#[test]
fn cleanup_strips_decoration_and_edges() {
    let cfg = FillConfig::new(7)
        .x_blocks(3)
        .y_blocks(4)
        .fill_empties(true)
        .clean_figure(true);
    let sim = simulate(cfg, ColumnRule::uniform(8)).unwrap();

    let mut surface = RecordingSurface::new();
    Animator::new(Pacing::instant())
        .play(&sim, &mut surface)
        .unwrap();

    assert!(!surface.has_boundary());
    assert!(!surface.x_axis_visible());
    assert!(!surface.y_axis_visible());
    assert!(!surface.axis_on());
    assert_eq!(surface.title(), "");
    assert_eq!(surface.x_range(), (0, 3));
    assert_eq!(surface.y_range(), (0, sim.max_height + 1));
    assert_eq!(surface.block_count(), 12);
    assert!(surface.blocks().all(|(_, b)| b.edge.is_none()));
}

#[test]
fn pauses_follow_every_mutation() {
    let cfg = FillConfig::new(5)
        .x_blocks(2)
        .y_blocks(3)
        .fill_empties(true)
        .clean_figure(true);
    let sim = simulate(cfg, ColumnRule::uniform(11)).unwrap();

    let mut surface = RecordingSurface::new();
    Animator::new(Pacing::default())
        .play(&sim, &mut surface)
        .unwrap();

    let motions = sim.events.iter().filter(|e| e.is_motion()).count() as u32;
    let strips = sim.registry.len() as u32;
    let expected = Duration::from_millis(1) * motions
        + Duration::from_millis(200) * 4
        + Duration::from_millis(2) * strips;
    assert_eq!(surface.total_pause(), expected);

    // Boundary removal and y-range change are not followed by a pause.
    let ops = surface.ops();
    for (i, op) in ops.iter().enumerate() {
        if matches!(op, SurfaceOp::RemoveBoundary | SurfaceOp::YRange(..)) {
            assert!(!matches!(ops.get(i + 1), Some(SurfaceOp::Pause(_))));
        }
    }
}

#[test]
fn titles_count_placements() {
    let sim = small_run(false);
    let mut surface = RecordingSurface::new();
    Animator::new(Pacing::instant())
        .play(&sim, &mut surface)
        .unwrap();

    let titles: Vec<&str> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            SurfaceOp::Title(t) => Some(t.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(titles, vec!["N=1/4", "N=2/4", "N=3/4", "N=4/4"]);
    assert_eq!(
        surface.ops()[2],
        SurfaceOp::Add {
            unit: UnitId(0),
            at: Cell::new(0, 3),
            face: Rgb::unit_gradient(0, 4),
        }
    );
}

#[test]
fn ascii_frame_shows_grid_boundary_and_axes() {
    let sim = small_run(false);
    let mut surface = AsciiSurface::new(Vec::<u8>::new()).with_sleep(false);
    Animator::new(Pacing::instant())
        .play(&sim, &mut surface)
        .unwrap();

    let expected = "\
N=4/4
    +----+
  2 |    |
    |- - |
  1 |[][]|
  0 |[][]|
    +----+
     0 1 \n";
    assert_eq!(surface.render_frame().unwrap(), expected);

    let motions = sim.events.iter().filter(|e| e.is_motion()).count() as u64;
    assert_eq!(surface.frames(), motions);

    let written = String::from_utf8(surface.into_inner()).unwrap();
    assert!(written.ends_with(expected));
}

#[test]
fn ascii_frame_after_cleanup_is_bare() {
    let sim = small_run(true);
    let mut surface = AsciiSurface::new(Vec::<u8>::new()).with_sleep(false);
    Animator::new(Pacing::instant())
        .play(&sim, &mut surface)
        .unwrap();

    let expected = "\n     ████ \n     ████ \n";
    assert_eq!(surface.render_frame().unwrap(), expected);
}

#[test]
fn surface_errors_propagate() {
    let mut surface = RecordingSurface::new();
    let err = Animator::default()
        .apply(
            &Event::Down {
                unit: UnitId(3),
                to: Cell::new(0, 0),
            },
            &mut surface,
        )
        .unwrap_err();
    assert!(matches!(err, SurfaceError::UnknownBlock(UnitId(3))));

    let mut ascii = AsciiSurface::new(Vec::<u8>::new()).with_sleep(false);
    assert!(matches!(
        ascii.pause(Duration::ZERO),
        Err(SurfaceError::NoLayout)
    ));
}
