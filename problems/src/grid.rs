//! Fixed-size 2D grid indexed by `(x, y)` with `y = 0` at the bottom.

use std::ops::{Index, IndexMut};

/// A cell coordinate. `x` grows rightward, `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Grid (Manhattan) distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A `width` x `height` grid of values, stored column-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// A grid with every cell set to `initial`.
    #[must_use]
    pub fn new(width: usize, height: usize, initial: T) -> Self {
        Self {
            width,
            height,
            data: vec![initial; width * height],
        }
    }
}

impl<T> Grid<T> {
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// The cell at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        if self.contains(pos) {
            self.data.get(pos.x * self.height + pos.y)
        } else {
            None
        }
    }
}

impl Grid<bool> {
    /// Positions of all `true` cells, ordered by `x` then `y`.
    #[must_use]
    pub fn as_list(&self) -> Vec<Position> {
        (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| Position::new(x, y)))
            .filter(|&pos| self[pos])
            .collect()
    }

    /// Number of `true` cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        assert!(
            self.contains(pos),
            "{pos} outside {}x{} grid",
            self.width,
            self.height
        );
        &self.data[pos.x * self.height + pos.y]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        assert!(
            self.contains(pos),
            "{pos} outside {}x{} grid",
            self.width,
            self.height
        );
        &mut self.data[pos.x * self.height + pos.y]
    }
}

/// Rows of `T`/`F`, top row first.
impl std::fmt::Display for Grid<bool> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                f.write_str(if self[Position::new(x, y)] { "T" } else { "F" })?;
            }
            if y > 0 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
