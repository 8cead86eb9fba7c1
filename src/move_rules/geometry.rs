//! Shared movement geometry for the sliding pieces.

use crate::{board_location::BoardLocation, game_state::piece_register::PieceRegister};

/// Signed (d_file, d_rank) from `from` to `to`.
#[inline]
pub fn delta(from: BoardLocation, to: BoardLocation) -> (i8, i8) {
    from.delta_to(to)
}

/// Walk unit steps from the square after `from` up to but excluding `to`,
/// reporting whether every visited square is vacant.
///
/// Callers must only pass straight or diagonal lines (|d_file| and |d_rank|
/// equal or zero); knight and king moves never consult this function.
pub fn is_path_clear(register: &PieceRegister, from: BoardLocation, to: BoardLocation) -> bool {
    let (d_file, d_rank) = delta(from, to);
    let file_step = d_file.signum();
    let rank_step = d_rank.signum();

    let mut cursor = from;
    loop {
        cursor = match cursor.offset(file_step, rank_step) {
            Ok(next) => next,
            // The walk is bounded by `to`, which is on the board.
            Err(_) => return true,
        };
        if cursor == to {
            return true;
        }
        if register.is_occupied(cursor) {
            return false;
        }
    }
}
