//! Rook movement shape: straight slides over a clear path.

use crate::{
    board_location::BoardLocation,
    game_state::{piece_record::PieceRecord, piece_register::PieceRegister},
    move_rules::geometry::is_path_clear,
};

pub fn rook_move_is_legal(
    piece: &PieceRecord,
    target: BoardLocation,
    register: &PieceRegister,
) -> bool {
    let (d_file, d_rank) = piece.location.delta_to(target);
    (d_file == 0) != (d_rank == 0) && is_path_clear(register, piece.location, target)
}
