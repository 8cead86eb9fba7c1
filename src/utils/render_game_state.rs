//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the piece register for
//! debugging, tests, and diagnostics in text environments.

use crate::{
    board_location::BoardLocation,
    game_state::{
        chess_types::{PieceClass, PieceTeam},
        game_state::GameState,
        piece_register::PieceRegister,
    },
};

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    render_register(&game_state.piece_register)
}

pub fn render_register(register: &PieceRegister) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            let square = BoardLocation::from_file_rank(file, rank)
                .expect("render iterates only board squares");
            match register.piece_at_location(square) {
                Some(piece) => out.push(piece_to_unicode(piece.team, piece.class)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(team: PieceTeam, class: PieceClass) -> char {
    match (team, class) {
        (PieceTeam::Light, PieceClass::Pawn) => '♙',
        (PieceTeam::Light, PieceClass::Knight) => '♘',
        (PieceTeam::Light, PieceClass::Bishop) => '♗',
        (PieceTeam::Light, PieceClass::Rook) => '♖',
        (PieceTeam::Light, PieceClass::Queen) => '♕',
        (PieceTeam::Light, PieceClass::King) => '♔',
        (PieceTeam::Dark, PieceClass::Pawn) => '♟',
        (PieceTeam::Dark, PieceClass::Knight) => '♞',
        (PieceTeam::Dark, PieceClass::Bishop) => '♝',
        (PieceTeam::Dark, PieceClass::Rook) => '♜',
        (PieceTeam::Dark, PieceClass::Queen) => '♛',
        (PieceTeam::Dark, PieceClass::King) => '♚',
    }
}
