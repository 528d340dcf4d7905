//! Board positions and index arithmetic.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A position on the 3x3 board, row-major from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Row-major index, `3 * row + col`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position for a row-major index, or `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Zero-based row (0..3).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column (0..3).
    pub fn col(self) -> usize {
        self.index() % 3
    }
}
