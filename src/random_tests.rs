use crate::Grid;
use crate::solver::{BacktrackingSolver, Solver};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ITERATIONS_PER_RUN: usize = 30;

fn punch_holes(grid: &Grid, holes: usize, rng: &mut impl Rng) -> Grid {
    let mut punched = grid.clone();

    while punched.count_unassigned() < holes {
        let index = rng.gen_range(0..punched.cells().len());
        punched.clear_value(index);
    }

    punched
}

fn random_consistent_clue(grid: &mut Grid, rng: &mut impl Rng) {
    let index = rng.gen_range(0..grid.cells().len());

    if !grid.is_unassigned(index) {
        return;
    }

    let mut used = grid.row_values(index);
    used |= &grid.column_values(index);
    used |= &grid.box_values(index);

    for symbol in 1..=grid.side() {
        if !used.contains(symbol) {
            grid.set_value(index, symbol);
            return;
        }
    }
}

fn run_reconstruction_test(solution_code: &str, holes: usize, seed: u64,
        exact: bool) {
    let solution = Grid::parse(solution_code).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for _ in 0..ITERATIONS_PER_RUN {
        let riddle = punch_holes(&solution, holes, &mut rng);

        assert!(riddle.is_subset(&solution).unwrap());

        let mut grid = riddle.clone();

        assert!(BacktrackingSolver.solve(&mut grid));
        assert!(grid.is_solved());
        assert!(grid.is_superset(&riddle).unwrap());

        if exact {
            assert_eq!(solution, grid);
        }
    }
}

// The first two runs use the grid the solver produces for an empty grid.
// Removing cells from that grid keeps it the first solution in search order,
// so the solver is expected to restore it exactly.

#[test]
fn reconstructs_punched_4x4_solutions() {
    run_reconstruction_test("4;1,2,3,4,3,4,1,2,2,1,4,3,4,3,2,1", 8, 0, true);
}

#[test]
fn reconstructs_punched_9x9_solutions() {
    run_reconstruction_test("9;\
        1,2,3,4,5,6,7,8,9,\
        4,5,6,7,8,9,1,2,3,\
        7,8,9,1,2,3,4,5,6,\
        2,1,4,3,6,5,8,9,7,\
        3,6,5,8,9,7,2,1,4,\
        8,9,7,2,1,4,3,6,5,\
        5,3,1,6,4,2,9,7,8,\
        6,4,2,9,7,8,5,3,1,\
        9,7,8,5,3,1,6,4,2", 40, 1, true);
}

#[test]
fn completes_punched_classic_sudoku_solution() {
    run_reconstruction_test("9;\
        7,4,6,2,8,1,3,5,9,\
        9,1,2,5,3,7,8,4,6,\
        8,5,3,4,9,6,1,7,2,\
        3,7,4,1,2,5,6,9,8,\
        6,2,8,7,4,9,5,1,3,\
        5,9,1,3,6,8,7,2,4,\
        1,6,9,8,7,4,2,3,5,\
        2,8,5,9,1,3,4,6,7,\
        4,3,7,6,5,2,9,8,1", 30, 2, false);
}

#[test]
fn contradiction_survives_additional_clues() {
    // The last cell of the first row has no legal symbol, and placing
    // further clues that respect the puzzle rules cannot change that.
    let unsolvable = Grid::parse("4;1,2,3, , , , ,4, , , , , , , , ")
        .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..ITERATIONS_PER_RUN {
        let mut riddle = unsolvable.clone();

        for _ in 0..4 {
            random_consistent_clue(&mut riddle, &mut rng);
        }

        let before = riddle.clone();

        assert!(!BacktrackingSolver.solve(&mut riddle));
        assert_eq!(before, riddle);
    }
}
