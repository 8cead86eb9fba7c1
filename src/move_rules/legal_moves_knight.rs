//! Knight movement shape: the L-jump. Knights never require a clear path.

use crate::{board_location::BoardLocation, game_state::piece_record::PieceRecord};

pub fn knight_move_is_legal(piece: &PieceRecord, target: BoardLocation) -> bool {
    let (d_file, d_rank) = piece.location.delta_to(target);
    matches!((d_file.abs(), d_rank.abs()), (1, 2) | (2, 1))
}
