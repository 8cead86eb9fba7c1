//! The piece register: all live pieces of one position.
//!
//! The register is a dual index. The owned store maps `PieceId` to
//! `PieceRecord`; a derived occupancy map from `BoardLocation` to `PieceId`
//! is maintained incrementally on every write so that "piece at square"
//! lookups are O(1) instead of a scan over all pieces. Cloning the register
//! is the simulation fork used by king-safety checks and escape search: a
//! cheap structural copy that is mutated and discarded without ever touching
//! the canonical position.
//!
//! Invariants:
//! - at most one live piece per square;
//! - the occupancy map mirrors the record store exactly;
//! - identifiers are allocated monotonically and never reused, even after
//!   the piece they named was captured.

use std::collections::HashMap;

use crate::{
    board_location::BoardLocation,
    chess_errors::ChessErrors,
    game_state::chess_types::{PieceClass, PieceId, PieceTeam},
    game_state::piece_record::PieceRecord,
};

/// Back-row piece order, queen on her own color.
const BACK_ROW_ORDER: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

#[derive(Clone, Debug, Default)]
pub struct PieceRegister {
    pieces: HashMap<PieceId, PieceRecord>,
    occupancy: HashMap<BoardLocation, PieceId>,
    next_id: u16,
}

impl PieceRegister {
    /// An empty register. Useful for building test positions piece by piece.
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard 32-piece starting arrangement, light to move first.
    pub fn new_game() -> Self {
        let mut register = Self::new_empty();
        for team in [PieceTeam::Light, PieceTeam::Dark] {
            let (pawn_rank, back_rank) = match team {
                PieceTeam::Light => (1, 0),
                PieceTeam::Dark => (6, 7),
            };
            for file in 0..8 {
                let pawn_square = BoardLocation::from_file_rank(file, pawn_rank)
                    .expect("pawn rank squares are on the board");
                let back_square = BoardLocation::from_file_rank(file, back_rank)
                    .expect("back rank squares are on the board");
                register
                    .add_piece(PieceClass::Pawn, team, pawn_square)
                    .expect("starting squares are vacant");
                register
                    .add_piece(BACK_ROW_ORDER[file as usize], team, back_square)
                    .expect("starting squares are vacant");
            }
        }
        register
    }

    /// Place a new piece, allocating a fresh identifier.
    ///
    /// Fails with `SquareOccupied` rather than silently stacking two pieces
    /// on one square.
    pub fn add_piece(
        &mut self,
        class: PieceClass,
        team: PieceTeam,
        location: BoardLocation,
    ) -> Result<PieceId, ChessErrors> {
        if self.occupancy.contains_key(&location) {
            return Err(ChessErrors::SquareOccupied(location));
        }
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces
            .insert(id, PieceRecord::new(id, class, team, location));
        self.occupancy.insert(location, id);
        Ok(id)
    }

    pub fn view_piece(&self, id: PieceId) -> Result<&PieceRecord, ChessErrors> {
        self.pieces.get(&id).ok_or(ChessErrors::PieceNotFound(id))
    }

    #[inline]
    pub fn piece_at_location(&self, location: BoardLocation) -> Option<&PieceRecord> {
        self.occupancy.get(&location).map(|id| &self.pieces[id])
    }

    #[inline]
    pub fn is_occupied(&self, location: BoardLocation) -> bool {
        self.occupancy.contains_key(&location)
    }

    /// Move a piece to `target`, capturing whatever occupied it.
    ///
    /// The occupant, if any, is removed from the register permanently; its
    /// record is returned for bookkeeping. The moving piece's `has_moved`
    /// flag is set. Callers are responsible for having validated the move —
    /// the register itself only preserves the occupancy invariant.
    pub fn relocate_piece(
        &mut self,
        id: PieceId,
        target: BoardLocation,
    ) -> Result<Option<PieceRecord>, ChessErrors> {
        let origin = self.view_piece(id)?.location;
        let captured = match self.occupancy.get(&target).copied() {
            Some(occupant_id) if occupant_id != id => self.pieces.remove(&occupant_id),
            _ => None,
        };
        self.occupancy.remove(&origin);
        self.occupancy.insert(target, id);
        let piece = self
            .pieces
            .get_mut(&id)
            .ok_or(ChessErrors::PieceNotFound(id))?;
        piece.location = target;
        piece.has_moved = true;
        Ok(captured)
    }

    /// Locate the king of `team`.
    pub fn king_of(&self, team: PieceTeam) -> Result<&PieceRecord, ChessErrors> {
        self.pieces
            .values()
            .find(|piece| piece.team == team && piece.class == PieceClass::King)
            .ok_or(ChessErrors::KingMissing(team))
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &PieceRecord> {
        self.pieces.values()
    }

    pub fn pieces_of(&self, team: PieceTeam) -> impl Iterator<Item = &PieceRecord> {
        self.pieces.values().filter(move |piece| piece.team == team)
    }

    pub fn count_of(&self, team: PieceTeam) -> usize {
        self.pieces_of(team).count()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
