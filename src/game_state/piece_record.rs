//! The per-piece record stored in the register.

use crate::{
    board_location::BoardLocation,
    game_state::chess_types::{PieceClass, PieceId, PieceTeam},
};

/// A live chess piece: identity, class, team, location, and bookkeeping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// Stable identifier, unique for the lifetime of the game.
    pub id: PieceId,
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// Piece team.
    pub team: PieceTeam,
    /// Current square.
    pub location: BoardLocation,
    /// Informational material value (pawn 1, knight/bishop 3, rook 5,
    /// queen 10, king 0). Not consulted by legality logic.
    pub value: u8,
    /// Set on every applied move. Reserved for future castling and
    /// en-passant support.
    pub has_moved: bool,
}

impl PieceRecord {
    pub fn new(id: PieceId, class: PieceClass, team: PieceTeam, location: BoardLocation) -> Self {
        Self {
            id,
            class,
            team,
            location,
            value: class.material_value(),
            has_moved: false,
        }
    }
}
