//! Shared workloads for the pathway benchmark suites.

use rand::rngs::StdRng;
use rand::SeedableRng;

use pathway_problems::eight_puzzle::{
    load_eight_puzzle, scramble, EightPuzzleSearchProblem, EIGHT_PUZZLE_DATA,
};
use pathway_problems::grid::{Grid, Position};
use pathway_problems::maze::MazeSearchProblem;

/// Every stock eight-puzzle, labelled by index.
///
/// # Panics
///
/// Panics if a stock puzzle fails to load. Benchmark setup failures are fatal.
#[must_use]
pub fn stock_puzzles() -> Vec<(String, EightPuzzleSearchProblem)> {
    (0..EIGHT_PUZZLE_DATA.len())
        .map(|i| {
            let puzzle = load_eight_puzzle(i).expect("stock puzzle");
            (format!("stock_{i}"), EightPuzzleSearchProblem::new(puzzle))
        })
        .collect()
}

/// `count` puzzles scrambled by `depth` random moves from a fixed seed.
#[must_use]
pub fn scrambled_puzzles(seed: u64, count: usize, depth: usize) -> Vec<EightPuzzleSearchProblem> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| EightPuzzleSearchProblem::new(scramble(depth, &mut rng)))
        .collect()
}

/// A walled `width` x `height` maze whose interior is a serpentine corridor.
///
/// Every other interior column is a wall with a single gap, alternating
/// between the top and bottom row, so the only route from the bottom-left
/// cell to the bottom-right cell winds through the whole maze.
#[must_use]
pub fn serpentine_maze(width: usize, height: usize) -> MazeSearchProblem {
    let mut walls = Grid::new(width, height, false);
    for x in 0..width {
        walls[Position::new(x, 0)] = true;
        walls[Position::new(x, height - 1)] = true;
    }
    for y in 0..height {
        walls[Position::new(0, y)] = true;
        walls[Position::new(width - 1, y)] = true;
    }
    for (i, x) in (2..width - 2).step_by(2).enumerate() {
        let gap = if i % 2 == 0 { height - 2 } else { 1 };
        for y in 1..height - 1 {
            if y != gap {
                walls[Position::new(x, y)] = true;
            }
        }
    }
    MazeSearchProblem::new(walls, Position::new(1, 1), Position::new(width - 2, 1))
}
