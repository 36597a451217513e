//! Maze layouts parsed from text.
//!
//! Layout characters:
//!
//! - `%` wall
//! - `.` dot (a goal cell for maze problems)
//! - `P` agent start
//!
//! Any other character is open floor. The first text row is the top of the
//! maze, so text row `r` becomes `y = height - 1 - r`.

use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::LayoutError;
use crate::grid::{Grid, Position};

/// A parsed maze layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<String>,
    width: usize,
    height: usize,
    walls: Grid<bool>,
    dots: Grid<bool>,
    agent_positions: Vec<Position>,
}

impl Layout {
    /// Parse a layout from text. Surrounding whitespace on each line and
    /// blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Empty`] for text with no rows and
    /// [`LayoutError::Ragged`] if rows differ in width.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if height == 0 || width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut walls = Grid::new(width, height, false);
        let mut dots = Grid::new(width, height, false);
        let mut agent_positions = Vec::new();

        for (r, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(LayoutError::Ragged {
                    row: r,
                    expected: width,
                    actual,
                });
            }
            let y = height - 1 - r;
            for (x, ch) in row.chars().enumerate() {
                let pos = Position::new(x, y);
                match ch {
                    '%' => walls[pos] = true,
                    '.' => dots[pos] = true,
                    'P' => agent_positions.push(pos),
                    _ => {}
                }
            }
        }
        agent_positions.sort();

        log::debug!(
            "parsed layout {width}x{height}: {} walls, {} dots, {} agents",
            walls.count(),
            dots.count(),
            agent_positions.len()
        );

        Ok(Self {
            rows,
            width,
            height,
            walls,
            dots,
            agent_positions,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    #[must_use]
    pub fn dots(&self) -> &Grid<bool> {
        &self.dots
    }

    /// Agent start positions, ordered by `x` then `y`.
    #[must_use]
    pub fn agent_positions(&self) -> &[Position] {
        &self.agent_positions
    }

    #[must_use]
    pub fn total_dots(&self) -> usize {
        self.dots.count()
    }

    /// Whether `pos` is a wall. Positions outside the layout count as walls.
    #[must_use]
    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.get(pos).copied().unwrap_or(true)
    }

    /// A uniformly random non-wall cell, or `None` if every cell is a wall.
    pub fn random_legal_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        let open: Vec<Position> = (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| Position::new(x, y)))
            .filter(|&pos| !self.is_wall(pos))
            .collect();
        open.choose(rng).copied()
    }

    /// One of the four cells diagonally inside the outer corners.
    pub fn random_corner<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let right = self.width.saturating_sub(2);
        let top = self.height.saturating_sub(2);
        let corners = [
            Position::new(1, 1),
            Position::new(1, top),
            Position::new(right, 1),
            Position::new(right, top),
        ];
        corners
            .choose(rng)
            .copied()
            .unwrap_or(Position::new(1, 1))
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rows.join("\n"))
    }
}

/// Read and parse the layout file at `path`.
///
/// # Errors
///
/// Returns [`LayoutError::Io`] if the file cannot be read, or any parse error.
pub fn load_layout(path: &Path) -> Result<Layout, LayoutError> {
    let text = fs::read_to_string(path).map_err(|source| LayoutError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Layout::parse(&text)
}

/// Find and load a layout by name.
///
/// Looks in `start_dir`, then its parent, then its grandparent, trying
/// `layouts/<name>` and `<name>` in each. A `.lay` extension is appended when `name` lacks one.
///
/// # Errors
///
/// Returns [`LayoutError::NotFound`] if no candidate file exists, or the
/// error from loading the first one that does.
pub fn find_layout(name: &str, start_dir: &Path) -> Result<Layout, LayoutError> {
    let file_name = if Path::new(name).extension().is_some_and(|e| e == "lay") {
        name.to_string()
    } else {
        format!("{name}.lay")
    };

    let candidates: Vec<PathBuf> = start_dir
        .ancestors()
        .take(3)
        .flat_map(|dir| [dir.join("layouts").join(&file_name), dir.join(&file_name)])
        .collect();

    match candidates.iter().find(|p| p.is_file()) {
        Some(path) => {
            log::debug!("loading layout '{name}' from {}", path.display());
            load_layout(path)
        }
        None => Err(LayoutError::NotFound {
            name: name.to_string(),
        }),
    }
}
