//! Validates grid storage, toroidal stepping, composition, and figure extraction

use lifegrid::{Grid, LifeError, patterns};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn test_new_grid_starts_dead() {
    let grid = Grid::new(4, 7);
    assert_eq!(grid.dim(), (4, 7));
    assert_eq!(grid.population(), 0);
    for row in 0..4 {
        for col in 0..7 {
            assert_eq!(grid.get(row, col).ok(), Some(false));
        }
    }
}

#[test]
fn test_get_set_round_trip() {
    let mut grid = Grid::new(3, 3);
    grid.set(1, 2, true).ok();
    assert_eq!(grid.get(1, 2).ok(), Some(true));
    grid.set(1, 2, false).ok();
    assert_eq!(grid.get(1, 2).ok(), Some(false));
}

#[test]
fn test_out_of_bounds_access_is_typed_failure() {
    let mut grid = Grid::new(5, 5);

    match grid.get(5, 0) {
        Err(LifeError::OutOfBounds {
            row,
            col,
            height,
            width,
        }) => {
            assert_eq!((row, col, height, width), (5, 0, 5, 5));
        }
        _ => unreachable!("Expected OutOfBounds error"),
    }

    assert!(grid.set(0, 17, true).is_err());

    // An empty grid has no valid coordinates at all
    let empty = Grid::new(0, 0);
    assert!(empty.get(0, 0).is_err());
}

#[test]
fn test_block_is_still_life() {
    let mut grid = Grid::new(6, 6);
    let block = Grid::from_text(patterns::BLOCK);
    grid.or_with_at(&block, 2, 2);

    let before = grid.clone();
    grid.step();
    assert_eq!(grid, before);
}

#[test]
fn test_blinker_oscillates_with_period_two() {
    let mut grid = Grid::new(5, 5);
    let blinker = Grid::from_text(patterns::BLINKER);
    grid.or_with_at(&blinker, 2, 1);

    let horizontal = grid.clone();
    grid.step();

    let mut vertical = Grid::new(5, 5);
    for row in 1..4 {
        vertical.set(row, 2, true).ok();
    }
    assert_eq!(grid, vertical);

    grid.step();
    assert_eq!(grid, horizontal);
}

#[test]
fn test_glider_translates_one_cell_diagonally_every_four_steps() {
    let glider = Grid::from_text(patterns::GLIDER);

    let mut grid = Grid::new(10, 10);
    grid.or_with_at(&glider, 1, 1);

    for _ in 0..4 {
        grid.step();
    }

    let mut expected = Grid::new(10, 10);
    expected.or_with_at(&glider, 2, 2);
    assert_eq!(grid, expected);
}

#[test]
fn test_glider_wraps_around_the_torus() {
    let glider = Grid::from_text(patterns::GLIDER);

    let mut grid = Grid::new(6, 6);
    grid.or_with_at(&glider, 1, 1);

    // One full loop of a 6x6 torus takes 24 generations
    for _ in 0..24 {
        grid.step();
    }

    let mut expected = Grid::new(6, 6);
    expected.or_with_at(&glider, 1, 1);
    assert_eq!(grid, expected);
}

#[test]
fn test_single_cell_torus_steps_without_crashing() {
    let mut grid = Grid::new(1, 1);
    grid.set(0, 0, true).ok();

    // The lone cell is its own neighbor through every wrapped edge,
    // giving neighbor count 8, so it dies of overpopulation
    grid.step();
    assert_eq!(grid.get(0, 0).ok(), Some(false));
}

#[test]
fn test_fully_live_two_by_two_torus_dies_out() {
    let mut grid = Grid::new(2, 2);
    for row in 0..2 {
        for col in 0..2 {
            grid.set(row, col, true).ok();
        }
    }

    grid.step();
    assert_eq!(grid.population(), 0);
}

#[test]
fn test_empty_grid_operations_are_inert() {
    let mut grid = Grid::new(0, 0);
    grid.step();
    grid.clear();
    grid.or_with_at(&Grid::from_text(patterns::BLOCK), 0, 0);
    assert_eq!(grid.dim(), (0, 0));

    let mut rowless = Grid::new(0, 8);
    rowless.step();
    assert_eq!(rowless.dim(), (0, 8));
}

#[test]
fn test_resize_preserves_overlap_and_kills_new_cells() {
    let mut grid = Grid::new(5, 5);
    for row in 0..5 {
        for col in 0..5 {
            grid.set(row, col, (row * 5 + col) % 3 == 0).ok();
        }
    }
    let original = grid.clone();

    grid.resize(3, 8);
    assert_eq!(grid.dim(), (3, 8));
    for row in 0..3 {
        for col in 0..5 {
            assert_eq!(grid.get(row, col).ok(), original.get(row, col).ok());
        }
        for col in 5..8 {
            assert_eq!(grid.get(row, col).ok(), Some(false));
        }
    }

    grid.resize(5, 5);
    for row in 0..5 {
        for col in 0..5 {
            let expected = if row < 3 {
                original.get(row, col).ok()
            } else {
                Some(false)
            };
            assert_eq!(grid.get(row, col).ok(), expected);
        }
    }
}

#[test]
fn test_clear_keeps_dimensions() {
    let mut grid = Grid::new(4, 6);
    grid.set(2, 3, true).ok();
    grid.clear();
    assert_eq!(grid.dim(), (4, 6));
    assert_eq!(grid.population(), 0);
}

#[test]
fn test_or_with_at_is_monotone_and_clips() {
    let mut target = Grid::new(4, 4);
    target.set(0, 0, true).ok();
    target.set(3, 3, true).ok();

    let mut overlay = Grid::new(3, 3);
    for col in 0..3 {
        overlay.set(0, col, true).ok();
    }

    target.or_with_at(&overlay, 2, 2);

    // Previously live cells stay live
    assert_eq!(target.get(0, 0).ok(), Some(true));
    assert_eq!(target.get(3, 3).ok(), Some(true));

    // In-range overlay cells become live, out-of-range ones are clipped
    assert_eq!(target.get(2, 2).ok(), Some(true));
    assert_eq!(target.get(2, 3).ok(), Some(true));
    assert_eq!(target.population(), 4);

    // The overlay itself is untouched
    assert_eq!(overlay.population(), 3);
}

#[test]
fn test_or_with_at_fully_outside_is_a_no_op() {
    let mut target = Grid::new(3, 3);
    let overlay = Grid::from_text(patterns::BLOCK);
    target.or_with_at(&overlay, 7, 7);
    assert_eq!(target.population(), 0);
}

#[test]
fn test_extract_figure_collects_connected_region() {
    let mut grid = Grid::new(6, 6);
    let block = Grid::from_text(patterns::BLOCK);
    grid.or_with_at(&block, 1, 1);
    grid.set(4, 4, true).ok();

    let figure = grid.extract_figure_at(1, 1).ok();
    assert_eq!(figure.as_ref().map(Grid::dim), Some((2, 2)));
    assert_eq!(figure.as_ref().map(Grid::population), Some(4));

    let lone = grid.extract_figure_at(4, 4).ok();
    assert_eq!(lone.as_ref().map(Grid::dim), Some((1, 1)));
    assert_eq!(lone.as_ref().map(Grid::population), Some(1));
}

#[test]
fn test_extract_figure_follows_diagonal_adjacency() {
    let mut grid = Grid::new(4, 4);
    grid.set(0, 0, true).ok();
    grid.set(1, 1, true).ok();

    let figure = grid.extract_figure_at(0, 0).ok();
    assert_eq!(figure.as_ref().map(Grid::dim), Some((2, 2)));
    assert_eq!(figure.as_ref().map(Grid::population), Some(2));
}

#[test]
fn test_extract_figure_does_not_cross_the_torus_seam() {
    let mut grid = Grid::new(1, 6);
    grid.set(0, 0, true).ok();
    grid.set(0, 5, true).ok();

    let figure = grid.extract_figure_at(0, 0).ok();
    assert_eq!(figure.as_ref().map(Grid::dim), Some((1, 1)));
    assert_eq!(figure.as_ref().map(Grid::population), Some(1));
}

#[test]
fn test_extract_figure_from_dead_seed_is_empty() {
    let grid = Grid::new(3, 3);
    let figure = grid.extract_figure_at(0, 0).ok();
    assert_eq!(figure.map(|f| f.dim()), Some((0, 0)));
}

#[test]
fn test_extract_figure_out_of_range_is_error() {
    let grid = Grid::new(3, 3);
    assert!(matches!(
        grid.extract_figure_at(3, 0),
        Err(LifeError::OutOfBounds { .. })
    ));
}

#[test]
fn test_randomize_is_deterministic_per_seed() {
    let mut first = Grid::new(20, 20);
    let mut second = Grid::new(20, 20);

    let mut rng = StdRng::seed_from_u64(7);
    first.randomize(&mut rng, 1.0 / 7.0);
    let mut rng = StdRng::seed_from_u64(7);
    second.randomize(&mut rng, 1.0 / 7.0);

    assert_eq!(first, second);
    assert!(first.population() > 0);
}

#[test]
fn test_randomize_probability_extremes() {
    let mut grid = Grid::new(10, 10);
    let mut rng = StdRng::seed_from_u64(1);

    grid.randomize(&mut rng, 1.0);
    assert_eq!(grid.population(), 100);

    grid.randomize(&mut rng, 0.0);
    assert_eq!(grid.population(), 0);
}
