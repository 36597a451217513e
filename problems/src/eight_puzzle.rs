//! The eight-puzzle: a 3x3 sliding-tile puzzle with one blank.
//!
//! Tiles are stored row-major; `0` is the blank. The goal configuration is
//!
//! ```text
//! -------------
//! |   | 1 | 2 |
//! -------------
//! | 3 | 4 | 5 |
//! -------------
//! | 6 | 7 | 8 |
//! -------------
//! ```
//!
//! Moves name the direction the blank travels.

use rand::seq::SliceRandom;
use rand::Rng;

use pathway_search::contract::{Cost, SearchProblemV1, Successor};

use crate::error::PuzzleError;

const SIDE: usize = 3;
const CELLS: usize = SIDE * SIDE;
const GOAL: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// The six stock puzzles.
pub const EIGHT_PUZZLE_DATA: [[u8; CELLS]; 6] = [
    [1, 0, 2, 3, 4, 5, 6, 7, 8],
    [1, 7, 8, 2, 3, 4, 5, 6, 0],
    [4, 3, 2, 7, 0, 5, 1, 6, 8],
    [5, 1, 3, 4, 0, 2, 6, 7, 8],
    [1, 2, 5, 7, 6, 8, 0, 4, 3],
    [0, 3, 1, 6, 8, 2, 7, 5, 4],
];

/// A direction to slide the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable eight-puzzle configuration.
///
/// Equality and hashing depend only on tile placement, so the same
/// configuration reached along different paths is one search state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EightPuzzleState {
    cells: [u8; CELLS],
    blank: usize,
}

impl EightPuzzleState {
    /// Build a puzzle from nine row-major tiles.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidTiles`] unless `tiles` is a permutation
    /// of `0..=8`.
    pub fn new(tiles: &[u8]) -> Result<Self, PuzzleError> {
        let invalid = || PuzzleError::InvalidTiles {
            tiles: tiles.to_vec(),
        };
        let cells: [u8; CELLS] = tiles.try_into().map_err(|_| invalid())?;
        let mut seen = [false; CELLS];
        for &tile in &cells {
            let slot = seen.get_mut(usize::from(tile)).ok_or_else(invalid)?;
            if *slot {
                return Err(invalid());
            }
            *slot = true;
        }
        let blank = cells.iter().position(|&t| t == 0).ok_or_else(invalid)?;
        Ok(Self { cells, blank })
    }

    /// The solved configuration.
    #[must_use]
    pub fn goal() -> Self {
        Self {
            cells: GOAL,
            blank: 0,
        }
    }

    /// Row-major tiles; `0` is the blank.
    #[must_use]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Row-major index of the blank.
    #[must_use]
    pub fn blank(&self) -> usize {
        self.blank
    }

    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.cells == GOAL
    }

    /// Moves that keep the blank on the board, in `up, down, left, right` order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let (row, col) = (self.blank / SIDE, self.blank % SIDE);
        let mut moves = Vec::with_capacity(4);
        if row != 0 {
            moves.push(Move::Up);
        }
        if row != SIDE - 1 {
            moves.push(Move::Down);
        }
        if col != 0 {
            moves.push(Move::Left);
        }
        if col != SIDE - 1 {
            moves.push(Move::Right);
        }
        moves
    }

    /// The configuration after sliding the blank in direction `mv`.
    ///
    /// `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::IllegalMove`] if the blank would leave the board.
    pub fn result(&self, mv: Move) -> Result<Self, PuzzleError> {
        let (row, col) = (self.blank / SIDE, self.blank % SIDE);
        let target = match mv {
            Move::Up if row > 0 => self.blank - SIDE,
            Move::Down if row < SIDE - 1 => self.blank + SIDE,
            Move::Left if col > 0 => self.blank - 1,
            Move::Right if col < SIDE - 1 => self.blank + 1,
            _ => {
                return Err(PuzzleError::IllegalMove {
                    mv: mv.as_str(),
                    blank: self.blank,
                })
            }
        };
        let mut cells = self.cells;
        cells.swap(self.blank, target);
        Ok(Self {
            cells,
            blank: target,
        })
    }

    /// Whether the goal is reachable, by inversion parity.
    ///
    /// On a board of odd width a configuration is solvable iff the number
    /// of inverted tile pairs (blank excluded) is even.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&t| t != 0).collect();
        let inversions = tiles
            .iter()
            .enumerate()
            .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| a > b).count())
            .sum::<usize>();
        inversions % 2 == 0
    }
}

impl std::fmt::Display for EightPuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "-".repeat(13);
        f.write_str(&rule)?;
        for row in self.cells.chunks(SIDE) {
            f.write_str("\n|")?;
            for &tile in row {
                if tile == 0 {
                    f.write_str("   |")?;
                } else {
                    write!(f, " {tile} |")?;
                }
            }
            write!(f, "\n{rule}")?;
        }
        Ok(())
    }
}

/// Load one of [`EIGHT_PUZZLE_DATA`] by index.
///
/// # Errors
///
/// Returns [`PuzzleError::UnknownPuzzle`] if `index` is out of range.
pub fn load_eight_puzzle(index: usize) -> Result<EightPuzzleState, PuzzleError> {
    let tiles = EIGHT_PUZZLE_DATA
        .get(index)
        .ok_or(PuzzleError::UnknownPuzzle {
            index,
            available: EIGHT_PUZZLE_DATA.len(),
        })?;
    EightPuzzleState::new(tiles)
}

/// A random puzzle made by applying `moves` random legal moves to the goal.
///
/// Always solvable.
pub fn scramble<R: Rng + ?Sized>(moves: usize, rng: &mut R) -> EightPuzzleState {
    let mut puzzle = EightPuzzleState::goal();
    for _ in 0..moves {
        let legal = puzzle.legal_moves();
        if let Some(&mv) = legal.choose(rng) {
            if let Ok(next) = puzzle.result(mv) {
                puzzle = next;
            }
        }
    }
    puzzle
}

/// The eight-puzzle as a search problem. Every move costs 1.
#[derive(Debug, Clone)]
pub struct EightPuzzleSearchProblem {
    puzzle: EightPuzzleState,
}

impl EightPuzzleSearchProblem {
    #[must_use]
    pub fn new(puzzle: EightPuzzleState) -> Self {
        Self { puzzle }
    }
}

impl SearchProblemV1 for EightPuzzleSearchProblem {
    type State = EightPuzzleState;
    type Action = Move;

    fn start_state(&self) -> EightPuzzleState {
        self.puzzle.clone()
    }

    fn is_goal(&self, state: &EightPuzzleState) -> bool {
        state.is_goal()
    }

    fn successors(&self, state: &EightPuzzleState) -> Vec<Successor<EightPuzzleState, Move>> {
        state
            .legal_moves()
            .into_iter()
            .filter_map(|mv| state.result(mv).ok().map(|next| Successor::new(next, mv, 1)))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Move]) -> Option<Cost> {
        let mut state = self.puzzle.clone();
        for &mv in actions {
            state = state.result(mv).ok()?;
        }
        Some(actions.len() as Cost)
    }
}

/// Number of tiles (blank excluded) not in their goal position. Admissible.
#[must_use]
pub fn misplaced_tiles(state: &EightPuzzleState, _problem: &EightPuzzleSearchProblem) -> Cost {
    state
        .cells
        .iter()
        .enumerate()
        .filter(|&(i, &t)| t != 0 && usize::from(t) != i)
        .count() as Cost
}

/// Sum of each tile's grid distance to its goal position. Admissible.
#[must_use]
pub fn manhattan_distance(state: &EightPuzzleState, _problem: &EightPuzzleSearchProblem) -> Cost {
    state
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t != 0)
        .map(|(i, &t)| {
            let goal = usize::from(t);
            let dr = (i / SIDE).abs_diff(goal / SIDE);
            let dc = (i % SIDE).abs_diff(goal % SIDE);
            (dr + dc) as Cost
        })
        .sum()
}
