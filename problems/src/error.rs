//! Typed errors for problem construction and move application.

use std::path::PathBuf;

/// Failure constructing or stepping an eight-puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The tiles are not a permutation of `0..=8`.
    InvalidTiles { tiles: Vec<u8> },
    /// The move would slide the blank off the board.
    IllegalMove { mv: &'static str, blank: usize },
    /// No stock puzzle with this index.
    UnknownPuzzle { index: usize, available: usize },
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTiles { tiles } => {
                write!(f, "tiles {tiles:?} are not a permutation of 0..=8")
            }
            Self::IllegalMove { mv, blank } => {
                write!(f, "illegal move '{mv}' with blank at position {blank}")
            }
            Self::UnknownPuzzle { index, available } => {
                write!(f, "no stock puzzle {index}; {available} available")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Failure loading or parsing a maze layout.
#[derive(Debug)]
pub enum LayoutError {
    /// The layout has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// No layout file matched the requested name.
    NotFound { name: String },
    /// The layout has no agent (`P`) to start from.
    NoAgent,
    /// The layout file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("layout is empty"),
            Self::Ragged {
                row,
                expected,
                actual,
            } => write!(f, "layout row {row} has width {actual}, expected {expected}"),
            Self::NotFound { name } => write!(f, "layout '{name}' not found"),
            Self::NoAgent => f.write_str("layout has no agent position"),
            Self::Io { path, source } => {
                write!(f, "failed to read layout {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
