//! Crate root module declarations for the Clover Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move rules,
//! and utility helpers) so binaries, tests, and external tooling can
//! import stable module paths. The crate is a pure, synchronous rules
//! engine: a presentation layer issues commands (`select_piece`,
//! `apply_move`, `reset`) against a [`game_state::game_state::GameState`]
//! value and reads the updated state back after each command.

pub mod board_location;
pub mod chess_errors;

pub mod game_state {
    pub mod chess_types;
    pub mod game_state;
    pub mod piece_record;
    pub mod piece_register;
}

pub mod move_rules {
    pub mod check;
    pub mod checkmate;
    pub mod geometry;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod legality;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
