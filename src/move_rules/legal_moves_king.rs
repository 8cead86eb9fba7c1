//! King movement shape: one step in any direction. Castling is not modelled.

use crate::{board_location::BoardLocation, game_state::piece_record::PieceRecord};

pub fn king_move_is_legal(piece: &PieceRecord, target: BoardLocation) -> bool {
    let (d_file, d_rank) = piece.location.delta_to(target);
    d_file.abs() <= 1 && d_rank.abs() <= 1
}
