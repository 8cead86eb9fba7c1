//! Core piece and status enumerations shared across the engine.

use std::fmt;

/// Side to move / piece ownership.
///
/// Light is white, dark is black; light always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceTeam {
    Light,
    Dark,
}

impl PieceTeam {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }
}

impl fmt::Display for PieceTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceTeam::Light => write!(f, "light"),
            PieceTeam::Dark => write!(f, "dark"),
        }
    }
}

/// Piece kind (team is represented separately on the record).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceClass {
    /// Informational material value; never consulted by legality logic.
    #[inline]
    pub const fn material_value(self) -> u8 {
        match self {
            PieceClass::Pawn => 1,
            PieceClass::Knight => 3,
            PieceClass::Bishop => 3,
            PieceClass::Rook => 5,
            PieceClass::Queen => 10,
            PieceClass::King => 0,
        }
    }
}

/// Stable identifier of a piece for the lifetime of one game.
///
/// Identifiers are allocated monotonically by the piece register and are
/// never reused, even after the piece is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(pub u16);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Check classification of the side to move, recomputed after every
/// applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    None,
    Check,
    Checkmate,
}
