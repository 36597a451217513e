//! Position search on a maze: walk an agent from its start cell to a goal cell.

use pathway_search::contract::{Cost, SearchProblemV1, Successor};

use crate::error::LayoutError;
use crate::grid::{Grid, Position};
use crate::layout::Layout;

/// A compass step on the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Enumeration order for successors.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The neighbouring cell in this direction, if it has non-negative coordinates.
    #[must_use]
    pub fn step(self, pos: Position) -> Option<Position> {
        match self {
            Self::North => Some(Position::new(pos.x, pos.y + 1)),
            Self::South => pos.y.checked_sub(1).map(|y| Position::new(pos.x, y)),
            Self::East => Some(Position::new(pos.x + 1, pos.y)),
            Self::West => pos.x.checked_sub(1).map(|x| Position::new(x, pos.y)),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost of stepping onto a cell.
pub type CellCost = fn(Position) -> Cost;

fn unit_cost(_: Position) -> Cost {
    1
}

/// Find a path for one agent from `start` to `goal` through open cells.
///
/// Each step costs `cost_fn(destination)`; the default is 1 per step.
#[derive(Debug, Clone)]
pub struct MazeSearchProblem {
    walls: Grid<bool>,
    start: Position,
    goal: Position,
    cost_fn: CellCost,
}

impl MazeSearchProblem {
    #[must_use]
    pub fn new(walls: Grid<bool>, start: Position, goal: Position) -> Self {
        Self {
            walls,
            start,
            goal,
            cost_fn: unit_cost,
        }
    }

    /// Build from a layout: the first agent position is the start.
    ///
    /// `goal` defaults to the first dot, or `(1, 1)` when the layout has none.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NoAgent`] if the layout has no `P`.
    pub fn from_layout(layout: &Layout, goal: Option<Position>) -> Result<Self, LayoutError> {
        let start = *layout
            .agent_positions()
            .first()
            .ok_or(LayoutError::NoAgent)?;
        let goal = goal
            .or_else(|| layout.dots().as_list().first().copied())
            .unwrap_or(Position::new(1, 1));
        Ok(Self::new(layout.walls().clone(), start, goal))
    }

    /// Replace the per-step cost function.
    #[must_use]
    pub fn with_cost_fn(mut self, cost_fn: CellCost) -> Self {
        self.cost_fn = cost_fn;
        self
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Position {
        self.goal
    }

    fn is_open(&self, pos: Position) -> bool {
        matches!(self.walls.get(pos), Some(false))
    }
}

impl SearchProblemV1 for MazeSearchProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| {
                dir.step(*state)
                    .filter(|&next| self.is_open(next))
                    .map(|next| Successor::new(next, dir, (self.cost_fn)(next)))
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Option<Cost> {
        let mut pos = self.start;
        let mut total: Cost = 0;
        for &dir in actions {
            pos = dir.step(pos).filter(|&next| self.is_open(next))?;
            total = total.saturating_add((self.cost_fn)(pos));
        }
        Some(total)
    }
}

/// Manhattan distance to the goal. Admissible for unit step costs.
#[must_use]
pub fn manhattan_heuristic(state: &Position, problem: &MazeSearchProblem) -> Cost {
    state.manhattan(problem.goal) as Cost
}
