//! The canonical game state and its command surface.
//!
//! `GameState` owns the piece register, the turn, the current selection, the
//! move history, and the check status. It is mutated only through
//! `apply_move`, `select_piece`, and `reset`; every command runs to
//! completion synchronously, and a rejected command leaves the state
//! untouched. Each game is an independent value with no shared globals, so
//! any number of games can run side by side and tests need no setup beyond
//! constructing one.

use tracing::debug;

use crate::{
    board_location::BoardLocation,
    chess_errors::ChessErrors,
    game_state::{
        chess_types::{CheckStatus, PieceId, PieceTeam},
        piece_register::PieceRegister,
    },
    move_rules::{checkmate::derive_check_status, legality::is_legal},
};

#[derive(Debug, Clone)]
pub struct GameState {
    /// All live pieces.
    pub piece_register: PieceRegister,
    /// Side to move.
    pub turn: PieceTeam,
    /// Currently selected piece, if any. Selection is presentation state;
    /// no legality is checked until a move is applied.
    pub selected_piece: Option<PieceId>,
    /// Append-only move log, one `"a2-a4"` entry per applied move.
    pub move_history: Vec<String>,
    /// Check classification of the side to move.
    pub check_status: CheckStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// A fresh game: standard arrangement, light to move, nothing selected.
    pub fn new_game() -> Self {
        Self {
            piece_register: PieceRegister::new_game(),
            turn: PieceTeam::Light,
            selected_piece: None,
            move_history: Vec::new(),
            check_status: CheckStatus::None,
        }
    }

    /// Discard the current game and start over from the standard arrangement.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Set or clear the selected piece.
    pub fn select_piece(&mut self, piece: Option<PieceId>) {
        self.selected_piece = piece;
    }

    /// A read-only copy of the whole state for external observers.
    pub fn snapshot(&self) -> GameState {
        self.clone()
    }

    /// Validate and apply one move.
    ///
    /// On success the capture (if any) is removed, the piece is relocated
    /// with `has_moved` set, the history gains a `"from-to"` entry, the turn
    /// flips, the selection clears, and the check status is recomputed for
    /// the new side to move. All validation happens before any mutation, so
    /// a rejection is a strict no-op and resubmitting the same bad command
    /// yields the same error.
    pub fn apply_move(
        &mut self,
        piece_id: PieceId,
        target: BoardLocation,
    ) -> Result<(), ChessErrors> {
        let piece = *self.piece_register.view_piece(piece_id)?;
        if piece.team != self.turn {
            debug!(%piece_id, team = %piece.team, "move rejected: not this side's turn");
            return Err(ChessErrors::NotYourTurn(piece_id, piece.team));
        }
        if !is_legal(&piece, target, &self.piece_register, true) {
            debug!(%piece_id, %target, "move rejected: illegal");
            return Err(ChessErrors::IllegalMove(piece_id, target));
        }

        let origin = piece.location;
        self.piece_register.relocate_piece(piece_id, target)?;
        self.move_history.push(format!("{origin}-{target}"));
        self.turn = self.turn.opposite();
        self.selected_piece = None;
        self.check_status = derive_check_status(self.turn, &self.piece_register);
        Ok(())
    }

    /// Every square the referenced piece may legally move to.
    ///
    /// Used by presentation layers to highlight candidate destinations.
    pub fn legal_moves(&self, piece_id: PieceId) -> Result<Vec<BoardLocation>, ChessErrors> {
        let piece = self.piece_register.view_piece(piece_id)?;
        Ok(BoardLocation::all_squares()
            .filter(|candidate| is_legal(piece, *candidate, &self.piece_register, true))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::board_location::BoardLocation;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{CheckStatus, PieceId, PieceTeam};
    use crate::utils::algebraic::algebraic_to_location;

    fn square(name: &str) -> BoardLocation {
        algebraic_to_location(name).expect("test square should parse")
    }

    /// Look up the live piece on `from` and move it to `to`.
    fn play(game: &mut GameState, from: &str, to: &str) {
        let id = game
            .piece_register
            .piece_at_location(square(from))
            .unwrap_or_else(|| panic!("a piece should stand on {from}"))
            .id;
        game.apply_move(id, square(to))
            .unwrap_or_else(|error| panic!("{from}-{to} should be accepted: {error}"));
    }

    fn piece_id_at(game: &GameState, name: &str) -> PieceId {
        game.piece_register
            .piece_at_location(square(name))
            .unwrap_or_else(|| panic!("a piece should stand on {name}"))
            .id
    }

    #[test]
    fn double_pawn_advance_from_the_start_rank() {
        let mut game = GameState::new_game();
        let pawn = piece_id_at(&game, "a2");
        game.apply_move(pawn, square("a4"))
            .expect("a2-a4 is a legal opening move");

        let moved = game.piece_register.view_piece(pawn).expect("pawn is live");
        assert_eq!(moved.location, square("a4"));
        assert!(moved.has_moved);
        assert_eq!(game.turn, PieceTeam::Dark);
        assert_eq!(game.check_status, CheckStatus::None);
        assert_eq!(game.move_history, vec!["a2-a4".to_string()]);
    }

    #[test]
    fn moving_out_of_turn_is_rejected_without_side_effects() {
        let mut game = GameState::new_game();
        let dark_pawn = piece_id_at(&game, "e7");
        assert_eq!(
            game.apply_move(dark_pawn, square("e5")),
            Err(ChessErrors::NotYourTurn(dark_pawn, PieceTeam::Dark))
        );
        assert_eq!(game.turn, PieceTeam::Light);
        assert!(game.move_history.is_empty());
    }

    #[test]
    fn unknown_piece_ids_are_rejected() {
        let mut game = GameState::new_game();
        let ghost = PieceId(999);
        assert_eq!(
            game.apply_move(ghost, square("e4")),
            Err(ChessErrors::PieceNotFound(ghost))
        );
    }

    #[test]
    fn rejection_is_idempotent() {
        let mut game = GameState::new_game();
        let knight = piece_id_at(&game, "b1");
        let first = game.apply_move(knight, square("b5"));
        let snapshot_history = game.move_history.clone();
        let second = game.apply_move(knight, square("b5"));
        assert_eq!(first, Err(ChessErrors::IllegalMove(knight, square("b5"))));
        assert_eq!(first, second);
        assert_eq!(game.move_history, snapshot_history);
        assert_eq!(game.turn, PieceTeam::Light);
    }

    #[test]
    fn captures_shrink_only_the_opponent_by_one() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "d7", "d5");
        assert_eq!(game.piece_register.count_of(PieceTeam::Light), 16);
        assert_eq!(game.piece_register.count_of(PieceTeam::Dark), 16);

        play(&mut game, "e4", "d5");
        assert_eq!(game.piece_register.count_of(PieceTeam::Light), 16);
        assert_eq!(game.piece_register.count_of(PieceTeam::Dark), 15);
        assert!(game
            .piece_register
            .piece_at_location(square("d5"))
            .is_some_and(|piece| piece.team == PieceTeam::Light));
    }

    #[test]
    fn a_move_that_exposes_the_own_king_is_rejected() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "e7", "e5");
        play(&mut game, "d2", "d4");
        // Black pulls the queen to h4, eyeing e1 through the open diagonal.
        play(&mut game, "d8", "h4");

        // The f2 pawn is the only shield on the e1-h4 diagonal: advancing it
        // is a shape-legal move that leaves the light king attacked.
        let shield = piece_id_at(&game, "f2");
        assert_eq!(
            game.apply_move(shield, square("f3")),
            Err(ChessErrors::IllegalMove(shield, square("f3")))
        );
        let still_there = game
            .piece_register
            .view_piece(shield)
            .expect("the pawn was not moved");
        assert_eq!(still_there.location, square("f2"));
        assert_eq!(game.turn, PieceTeam::Light);
    }

    #[test]
    fn scholars_mate_is_classified_as_checkmate() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "e7", "e5");
        play(&mut game, "f1", "c4");
        play(&mut game, "b8", "c6");
        play(&mut game, "d1", "h5");
        play(&mut game, "g8", "f6");
        assert_eq!(game.check_status, CheckStatus::None);

        play(&mut game, "h5", "f7");
        assert_eq!(game.check_status, CheckStatus::Checkmate);
        assert_eq!(game.turn, PieceTeam::Dark);
        assert!(!crate::move_rules::checkmate::has_escape(
            PieceTeam::Dark,
            &game.piece_register
        ));
    }

    #[test]
    fn an_escapable_check_is_reported_as_check() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "f7", "f6");
        play(&mut game, "d1", "h5");
        assert_eq!(game.check_status, CheckStatus::Check);
        assert_eq!(game.turn, PieceTeam::Dark);
        // g7-g6 blocks the h5-e8 diagonal.
        play(&mut game, "g7", "g6");
        assert_eq!(game.check_status, CheckStatus::None);
    }

    #[test]
    fn reset_restores_the_standard_arrangement() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "d7", "d5");
        play(&mut game, "e4", "d5");
        game.select_piece(Some(piece_id_at(&game, "d5")));

        game.reset();
        assert_eq!(game.piece_register.len(), 32);
        assert_eq!(game.turn, PieceTeam::Light);
        assert_eq!(game.check_status, CheckStatus::None);
        assert!(game.move_history.is_empty());
        assert!(game.selected_piece.is_none());
        assert!(game
            .piece_register
            .piece_at_location(square("e2"))
            .is_some());
    }

    #[test]
    fn selection_is_free_form_and_cleared_by_a_successful_move() {
        let mut game = GameState::new_game();
        let knight = piece_id_at(&game, "g1");
        game.select_piece(Some(knight));
        assert_eq!(game.selected_piece, Some(knight));

        // Selecting does not validate anything, not even liveness.
        game.select_piece(Some(PieceId(999)));
        assert_eq!(game.selected_piece, Some(PieceId(999)));
        game.select_piece(None);
        assert!(game.selected_piece.is_none());

        game.select_piece(Some(knight));
        game.apply_move(knight, square("f3"))
            .expect("g1-f3 is a legal opening move");
        assert!(game.selected_piece.is_none());
    }

    #[test]
    fn legal_moves_lists_candidate_destinations() {
        let game = GameState::new_game();
        let pawn = piece_id_at(&game, "d2");
        let mut moves = game.legal_moves(pawn).expect("pawn is live");
        moves.sort_by_key(|s| (s.file(), s.rank()));
        assert_eq!(moves, vec![square("d3"), square("d4")]);

        let knight = piece_id_at(&game, "b1");
        let mut moves = game.legal_moves(knight).expect("knight is live");
        moves.sort_by_key(|s| (s.file(), s.rank()));
        assert_eq!(moves, vec![square("a3"), square("c3")]);

        let rook = piece_id_at(&game, "a1");
        assert!(game.legal_moves(rook).expect("rook is live").is_empty());
    }

    #[test]
    fn snapshots_are_detached_from_the_live_game() {
        let mut game = GameState::new_game();
        let snapshot = game.snapshot();
        play(&mut game, "e2", "e4");
        assert!(snapshot.move_history.is_empty());
        assert_eq!(game.move_history.len(), 1);
    }
}
