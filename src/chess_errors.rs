//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by game logic and
//! parsing utilities. The enum `ChessErrors` is used as the single error type
//! across the crate to simplify propagation and matching. Each variant carries
//! contextual information where appropriate to aid diagnostics and
//! user-facing error messages.
//!
//! Every variant is recoverable: a rejected command leaves the game state
//! unchanged, and resubmitting the same command yields the same rejection.
//! `KingMissing` is the one defensive variant — it indicates a corrupted
//! position (the register invariant guarantees both kings exist in any
//! reachable state) and is logged rather than propagated by check detection.

use thiserror::Error;

use crate::{
    board_location::BoardLocation,
    game_state::chess_types::{PieceId, PieceTeam},
};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A single character used during algebraic parsing was invalid
    /// (a file outside 'a'..='h' or a rank outside '1'..='8').
    #[error("invalid algebraic character: {0:?}")]
    InvalidSquare(char),

    /// Invalid file or rank indices were provided (outside 0..=7),
    /// or an offset stepped off the board.
    #[error("file or rank index out of range: ({0}, {1})")]
    InvalidFileOrRank(i8, i8),

    /// The identifier does not reference a live piece in the register.
    #[error("no live piece with id {0}")]
    PieceNotFound(PieceId),

    /// The referenced piece belongs to the side that is not to move.
    #[error("piece {0} belongs to {1}, who is not to move")]
    NotYourTurn(PieceId, PieceTeam),

    /// Catch-all rejection for shape, path, and self-check failures.
    #[error("illegal move of piece {0} to {1}")]
    IllegalMove(PieceId, BoardLocation),

    /// The piece register does not contain a king for one side.
    ///
    /// This represents a corrupted game state; callers should treat it as a
    /// logic error in position construction rather than a normal rejection.
    #[error("no {0} king in the piece register")]
    KingMissing(PieceTeam),

    /// Attempted to place a piece on a square that is already occupied.
    #[error("square {0} is already occupied")]
    SquareOccupied(BoardLocation),
}
