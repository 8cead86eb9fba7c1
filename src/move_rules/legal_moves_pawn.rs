//! Pawn movement shape: single advance, double advance from the start rank,
//! and diagonal capture. En-passant and promotion are not modelled.

use crate::{
    board_location::BoardLocation,
    game_state::{
        chess_types::PieceTeam, piece_record::PieceRecord, piece_register::PieceRegister,
    },
};

pub fn pawn_move_is_legal(
    piece: &PieceRecord,
    target: BoardLocation,
    register: &PieceRegister,
) -> bool {
    let (direction, start_rank) = match piece.team {
        PieceTeam::Light => (1, 1),
        PieceTeam::Dark => (-1, 6),
    };
    let (d_file, d_rank) = piece.location.delta_to(target);
    let destination = register.piece_at_location(target);

    let single_advance = d_file == 0 && d_rank == direction && destination.is_none();

    let double_advance = piece.location.rank() == start_rank
        && d_file == 0
        && d_rank == 2 * direction
        && destination.is_none()
        && piece
            .location
            .offset(0, direction)
            .map(|between| !register.is_occupied(between))
            .unwrap_or(false);

    let diagonal_capture = d_file.abs() == 1
        && d_rank == direction
        && destination.is_some_and(|occupant| occupant.team != piece.team);

    single_advance || double_advance || diagonal_capture
}
