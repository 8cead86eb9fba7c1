//! Queen movement shape: the union of the bishop and rook shapes.

use crate::{
    board_location::BoardLocation,
    game_state::{piece_record::PieceRecord, piece_register::PieceRegister},
    move_rules::{legal_moves_bishop::bishop_move_is_legal, legal_moves_rook::rook_move_is_legal},
};

pub fn queen_move_is_legal(
    piece: &PieceRecord,
    target: BoardLocation,
    register: &PieceRegister,
) -> bool {
    bishop_move_is_legal(piece, target, register) || rook_move_is_legal(piece, target, register)
}
