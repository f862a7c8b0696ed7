//! Integration test: reference maps through the solver and the walker.

use glyphwalk_core::{Direction, Position, WalkError};
use glyphwalk_engine::{solve, MoveOutcome, Solver, WalkConfig, Walker};
use glyphwalk_test_utils::{grid, maps, Event, RecordingObserver};

// ── Solver ───────────────────────────────────────────────────────────

#[test]
fn every_solvable_map_yields_expected_path() {
    for &(lines, letters, path) in maps::SOLVABLE {
        let result = solve(&grid(lines)).unwrap();
        assert_eq!(result.letters, letters, "letters for {lines:?}");
        assert_eq!(result.path, path, "path for {lines:?}");
    }
}

#[test]
fn failing_maps_report_their_reason() {
    assert_eq!(solve(&grid(maps::MISSING_START)), Err(WalkError::NoStart));
    assert_eq!(
        solve(&grid(maps::MULTIPLE_STARTS)),
        Err(WalkError::MultipleStarts { count: 2 })
    );
    assert_eq!(solve(&grid(maps::MISSING_END)), Err(WalkError::NoEnd));
    assert!(matches!(
        solve(&grid(maps::FORK)),
        Err(WalkError::InvalidPosition { .. })
    ));
    assert!(matches!(
        solve(&grid(maps::BROKEN_PATH)),
        Err(WalkError::InvalidPosition { .. })
    ));
    assert!(matches!(
        solve(&grid(maps::DEAD_END_TURN)),
        Err(WalkError::NoValidTurn { .. })
    ));
    assert!(matches!(
        solve(&grid(maps::ISOLATED_START)),
        Err(WalkError::NoValidPathFromStart { .. })
    ));
    assert!(matches!(
        solve(&grid(maps::LOWERCASE_LETTER)),
        Err(WalkError::InvalidCharacter { character: 'a', .. })
    ));
}

#[test]
fn crossing_maps_fail_on_the_axis_rule_by_default() {
    for &(lines, _, _) in maps::WITH_CROSSINGS {
        if lines == maps::CROSSING_AT_TURN {
            continue;
        }
        assert!(
            matches!(
                solve(&grid(lines)),
                Err(WalkError::InvalidPosition { .. })
            ),
            "{lines:?}"
        );
    }
}

#[test]
fn scenario_with_segments_in_the_way_stops_before_first_crossing() {
    // The walk climbs to C, comes back down and meets the '-' of the
    // B row head on.
    let err = solve(&grid(maps::STRAIGHT_THROUGH)).unwrap_err();
    assert_eq!(
        err,
        WalkError::InvalidPosition {
            position: Position::new(4, 3),
            direction: Direction::Down,
        }
    );
}

#[test]
fn crossings_only_change_maps_that_need_them() {
    let crossing = Solver::new(WalkConfig::with_crossings()).unwrap();
    for &(lines, letters, path) in maps::SOLVABLE {
        if lines == maps::CROSSING_AT_TURN {
            continue;
        }
        let result = crossing.solve(&grid(lines)).unwrap();
        assert_eq!(result.letters, letters, "letters for {lines:?}");
        assert_eq!(result.path, path, "path for {lines:?}");
    }
    for &(lines, letters, path) in maps::WITH_CROSSINGS {
        let result = crossing.solve(&grid(lines)).unwrap();
        assert_eq!(result.letters, letters, "letters for {lines:?}");
        assert_eq!(result.path, path, "path for {lines:?}");
    }
}

#[test]
fn loops_hit_the_step_limit() {
    // The walk enters a closed ring and circles it; the end is never reached.
    let ring = grid(&["x", "  +-+", "  | |", "  +-+", "  |", "  @"]);
    let solver = Solver::new(WalkConfig {
        max_steps: 100,
        ..WalkConfig::default()
    })
    .unwrap();
    assert_eq!(
        solver.solve(&ring),
        Err(WalkError::MaxStepsExceeded { limit: 100 })
    );
}

// ── Walker ───────────────────────────────────────────────────────────

#[test]
fn walker_on_basic_map() {
    let mut walker = Walker::initialize(grid(maps::BASIC), RecordingObserver::new()).unwrap();

    assert_eq!(walker.try_move(Direction::Up), MoveOutcome::Rejected);
    assert_eq!(walker.state().path(), "@");
    assert_eq!(walker.state().position(), Position::new(2, 0));

    for expected in ["@-", "@--", "@---"] {
        assert_eq!(walker.try_move(Direction::Right), MoveOutcome::Accepted);
        assert_eq!(walker.state().path(), expected);
    }

    let observer = walker.into_observer();
    assert_eq!(observer.updates(), 4);
    assert_eq!(observer.wrong_moves(), 1);
    assert_eq!(
        observer.events[1],
        Event::WrongMove {
            position: Position::new(2, 0),
            path: "@".to_owned(),
            attempted: Direction::Up,
        }
    );
    assert_eq!(observer.last_path(), Some("@---"));
}

#[test]
fn walker_following_solver_route_reaches_end() {
    for &(lines, letters, path) in maps::SOLVABLE {
        let trace = Solver::default().solve_traced(&grid(lines)).unwrap();
        let mut walker = Walker::new(grid(lines)).unwrap();
        let (last, rest) = trace.route.split_last().unwrap();
        for &d in rest {
            assert_eq!(walker.try_move(d), MoveOutcome::Accepted, "{lines:?}");
        }
        assert_eq!(walker.try_move(*last), MoveOutcome::ReachedEnd);
        assert_eq!(walker.state().letters(), letters);
        assert_eq!(walker.state().path(), path);
    }
}

#[test]
fn walker_can_leave_the_solver_path() {
    // At the first turn the caller, not the walker, picks the way on.
    let mut walker = Walker::new(grid(maps::BASIC)).unwrap();
    for _ in 0..8 {
        walker.try_move(Direction::Right);
    }
    assert_eq!(walker.state().path(), "@---A---+");
    assert_eq!(walker.try_move(Direction::Left), MoveOutcome::Accepted);
    assert_eq!(walker.state().path(), "@---A---+-");
    assert_eq!(walker.try_move(Direction::Up), MoveOutcome::Rejected);
}
