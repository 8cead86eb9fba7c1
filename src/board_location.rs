//! Board coordinates and offset arithmetic.
//!
//! A [`BoardLocation`] addresses one of the 64 squares by zero-based file
//! ('a' == 0) and rank ('1' == 0). Values are only constructible inside the
//! board, so every `BoardLocation` held by the engine is valid by type —
//! malformed external coordinates are rejected at parse time with
//! [`ChessErrors::InvalidFileOrRank`] or [`ChessErrors::InvalidSquare`].

use std::fmt;

use crate::chess_errors::ChessErrors;

/// A square on the 8x8 board, addressed by zero-based file and rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardLocation {
    file: i8,
    rank: i8,
}

impl BoardLocation {
    /// Build a location from zero-based file and rank indices.
    pub fn from_file_rank(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        if !(0..=7).contains(&file) || !(0..=7).contains(&rank) {
            return Err(ChessErrors::InvalidFileOrRank(file, rank));
        }
        Ok(Self { file, rank })
    }

    #[inline]
    pub fn file(&self) -> i8 {
        self.file
    }

    #[inline]
    pub fn rank(&self) -> i8 {
        self.rank
    }

    /// Move the location by a file and rank offset, failing if the result
    /// would leave the board.
    pub fn offset(&self, d_file: i8, d_rank: i8) -> Result<Self, ChessErrors> {
        Self::from_file_rank(self.file + d_file, self.rank + d_rank)
    }

    /// Signed (d_file, d_rank) from `self` to `target`.
    #[inline]
    pub fn delta_to(&self, target: BoardLocation) -> (i8, i8) {
        (target.file - self.file, target.rank - self.rank)
    }

    /// Iterate every square of the board in file-major order.
    pub fn all_squares() -> impl Iterator<Item = BoardLocation> {
        (0..8).flat_map(|file| (0..8).map(move |rank| BoardLocation { file, rank }))
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file as u8),
            char::from(b'1' + self.rank as u8)
        )
    }
}
