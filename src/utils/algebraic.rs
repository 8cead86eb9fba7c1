//! Conversions between algebraic coordinates and board locations.
//!
//! Converts human-readable coordinates (e.g., `e4`) to and from
//! [`BoardLocation`]. Parsing is the only place malformed external input can
//! enter the engine; everything past it operates on validated locations.

use crate::{board_location::BoardLocation, chess_errors::ChessErrors};

/// Convert an algebraic coordinate (for example: "e4") to a board location.
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let mut chars = square.chars();
    let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(ChessErrors::InvalidSquare(
            square.chars().next().unwrap_or('\0'),
        ));
    };

    if !('a'..='h').contains(&file_char) {
        return Err(ChessErrors::InvalidSquare(file_char));
    }
    if !('1'..='8').contains(&rank_char) {
        return Err(ChessErrors::InvalidSquare(rank_char));
    }

    let file = file_char as i8 - 'a' as i8;
    let rank = rank_char as i8 - '1' as i8;
    BoardLocation::from_file_rank(file, rank)
}

/// Convert a board location to its algebraic coordinate (for example: "e4").
#[inline]
pub fn location_to_algebraic(location: BoardLocation) -> String {
    location.to_string()
}
