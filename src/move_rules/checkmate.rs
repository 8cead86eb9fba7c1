//! Escape search and check status derivation.
//!
//! `has_escape` is an exhaustive enumeration: every piece of the given team
//! is tried against every square with full king-safety simulation. The
//! search is bounded (at most 16 pieces by 64 squares, each simulation
//! scanning at most 16 opposing pieces) and stops at the first legal move, so
//! it runs synchronously after every applied move with no caching.

use crate::{
    board_location::BoardLocation,
    game_state::{chess_types::CheckStatus, chess_types::PieceTeam, piece_register::PieceRegister},
    move_rules::{check::is_in_check, legality::is_legal},
};

/// Whether `team` has at least one legal move in `register`.
pub fn has_escape(team: PieceTeam, register: &PieceRegister) -> bool {
    register.pieces_of(team).any(|piece| {
        BoardLocation::all_squares().any(|candidate| is_legal(piece, candidate, register, true))
    })
}

/// Classify the position for the side now to move.
pub fn derive_check_status(team: PieceTeam, register: &PieceRegister) -> CheckStatus {
    if !is_in_check(team, register) {
        CheckStatus::None
    } else if has_escape(team, register) {
        CheckStatus::Check
    } else {
        CheckStatus::Checkmate
    }
}
