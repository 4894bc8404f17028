//! Move commit tests: scoring, column collapse and refill.

use dots_engine::core::{Color, ColorCycle, Coordinate, EngineConfig, GameMode};
use dots_engine::rules::{AddDotStatus, PathEngine};

fn layout(rows: &[&[u8]]) -> Vec<Vec<Color>> {
    rows.iter()
        .map(|row| row.iter().copied().map(Color).collect())
        .collect()
}

fn engine_with_refills(rows: &[&[u8]], refills: &[u8]) -> PathEngine<ColorCycle> {
    let config = EngineConfig::new(GameMode::Moves).with_grid_size(rows.len());
    PathEngine::from_layout(config, &layout(rows), ColorCycle::new(refills.iter().copied())).unwrap()
}

fn c(x: usize, y: usize) -> Coordinate {
    Coordinate::new(x, y)
}

fn column(engine: &PathEngine<ColorCycle>, x: usize) -> Vec<u8> {
    (0..engine.grid().size())
        .map(|y| engine.dot(x, y).unwrap().color().raw())
        .collect()
}

const SCENARIO: &[&[u8]] = &[
    &[1, 2, 3, 4, 1, 2],
    &[3, 4, 0, 1, 2, 3],
    &[1, 2, 0, 3, 4, 1],
    &[3, 4, 0, 1, 2, 3],
    &[1, 2, 4, 3, 4, 1],
    &[3, 4, 1, 1, 2, 3],
];

/// Vertical three-token move in column 2 of a 6×6 grid.
#[test]
fn test_vertical_move_end_to_end() {
    let mut engine = engine_with_refills(SCENARIO, &[1, 2, 4]);
    let before = engine.grid().colors();

    for y in 1..=3 {
        assert_eq!(engine.add_dot_to_path(c(2, y)), AddDotStatus::Added);
    }

    assert_eq!(engine.finish_move(), 3);
    assert_eq!(engine.score(), 3);

    // The old row 0 color falls to row 3; rows 0..=2 are fresh, last drawn on top
    assert_eq!(column(&engine, 2), vec![4, 2, 1, 3, 4, 1]);

    // Other columns untouched
    let after = engine.grid().colors();
    for y in 0..6 {
        for x in (0..6).filter(|&x| x != 2) {
            assert_eq!(after[y][x], before[y][x]);
        }
    }

    // Path is stale until cleared
    assert_eq!(engine.dot_path(), &[c(2, 1), c(2, 2), c(2, 3)]);
    engine.clear_dot_path();
    assert!(engine.dot_path().is_empty());
}

/// Tokens cleared from the bottom of a column let everything above fall.
#[test]
fn test_bottom_of_column_falls() {
    let mut engine = engine_with_refills(
        &[
            &[1, 0, 0],
            &[2, 0, 0],
            &[3, 0, 0],
        ],
        &[4],
    );
    engine.add_dot_to_path(c(1, 2));
    engine.add_dot_to_path(c(2, 2));
    assert_eq!(engine.finish_move(), 2);

    assert_eq!(column(&engine, 0), vec![1, 2, 3]);
    assert_eq!(column(&engine, 1), vec![4, 0, 0]);
    assert_eq!(column(&engine, 2), vec![4, 0, 0]);
}

/// Path order does not matter: rows are processed top first.
#[test]
fn test_upward_drag_same_as_downward() {
    let rows: &[&[u8]] = &[
        &[3, 1, 0],
        &[0, 1, 2],
        &[0, 1, 3],
    ];
    let mut down = engine_with_refills(rows, &[2, 4]);
    let mut up = engine_with_refills(rows, &[2, 4]);

    assert_eq!(down.add_dot_to_path(c(0, 1)), AddDotStatus::Added);
    assert_eq!(down.add_dot_to_path(c(0, 2)), AddDotStatus::Added);
    assert_eq!(up.add_dot_to_path(c(0, 2)), AddDotStatus::Added);
    assert_eq!(up.add_dot_to_path(c(0, 1)), AddDotStatus::Added);

    assert_eq!(down.finish_move(), 2);
    assert_eq!(up.finish_move(), 2);

    assert_eq!(down.grid().colors(), up.grid().colors());
    assert_eq!(column(&up, 0), vec![4, 2, 3]);
    assert_eq!(column(&up, 1), vec![1, 1, 1]);
    assert_eq!(column(&up, 2), vec![0, 2, 3]);
    // Committed path is left in row order
    assert_eq!(up.dot_path(), &[c(0, 1), c(0, 2)]);
}

/// An L-shaped path collapses each of its columns independently.
#[test]
fn test_l_shape_two_columns() {
    let mut engine = engine_with_refills(
        &[
            &[1, 2, 3],
            &[0, 4, 3],
            &[0, 0, 4],
        ],
        &[1, 2, 3],
    );
    for coordinate in [c(0, 1), c(0, 2), c(1, 2)] {
        assert_eq!(engine.add_dot_to_path(coordinate), AddDotStatus::Added);
    }

    assert_eq!(engine.finish_move(), 3);

    // Row 1 of column 0 first (fresh 1), then row 2 of column 0 (fresh 2),
    // then row 2 of column 1 (fresh 3)
    assert_eq!(column(&engine, 0), vec![2, 1, 1]);
    assert_eq!(column(&engine, 1), vec![3, 2, 4]);
    assert_eq!(column(&engine, 2), vec![3, 3, 4]);
}

/// Committing a cycle clears every token of the color and scores them all.
#[test]
fn test_cycle_move_scores_all_of_color() {
    let mut engine = engine_with_refills(
        &[
            &[2, 2, 0],
            &[2, 2, 1],
            &[1, 0, 2],
        ],
        &[3],
    );
    for coordinate in [c(0, 0), c(1, 0), c(1, 1), c(0, 1)] {
        engine.add_dot_to_path(coordinate);
    }
    assert_eq!(engine.add_dot_to_path(c(0, 0)), AddDotStatus::CompleteCycle);
    assert_eq!(engine.dot_path().len(), 5);

    assert_eq!(engine.finish_move(), 5);
    assert_eq!(engine.score(), 5);
    assert_eq!(engine.color_count(Color(2)), 0);
    assert_eq!(engine.grid().colors(), layout(&[&[3, 3, 3], &[3, 3, 0], &[1, 0, 1]]));
}

/// Single-token and empty paths are not moves.
#[test]
fn test_short_paths_do_not_score() {
    let mut engine = engine_with_refills(SCENARIO, &[0]);
    let before = engine.grid().colors();

    assert_eq!(engine.finish_move(), 0);

    engine.add_dot_to_path(c(0, 0));
    assert_eq!(engine.finish_move(), 0);

    assert_eq!(engine.score(), 0);
    assert_eq!(engine.grid().colors(), before);
    assert_eq!(engine.dot_path(), &[c(0, 0)]);
    assert!(engine.dot(0, 0).unwrap().is_selected());
}

/// Scores accumulate across moves and reset with a new game.
#[test]
fn test_score_accumulates() {
    let mut engine = engine_with_refills(SCENARIO, &[0, 1, 2, 3, 4]);

    engine.add_dot_to_path(c(2, 1));
    engine.add_dot_to_path(c(2, 2));
    assert_eq!(engine.finish_move(), 2);
    engine.clear_dot_path();

    let pair = (0..6)
        .flat_map(|y| (0..5).map(move |x| (c(x, y), c(x + 1, y))))
        .find(|(a, b)| {
            engine.dot(a.x, a.y).unwrap().color() == engine.dot(b.x, b.y).unwrap().color()
        })
        .expect("scenario has a horizontal pair");

    engine.add_dot_to_path(pair.0);
    engine.add_dot_to_path(pair.1);
    assert_eq!(engine.finish_move(), 2);
    assert_eq!(engine.score(), 4);

    engine.new_game();
    assert_eq!(engine.score(), 0);
}
