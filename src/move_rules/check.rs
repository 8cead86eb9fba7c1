//! Check detection.
//!
//! A side is in check when any opposing piece attacks its king's square.
//! Attack tests run the legality evaluator in attack-only mode
//! (`check_king_safety == false`); see `legality` for why the mode flag
//! exists. Detection is existential: the scan stops at the first attacker.

use tracing::warn;

use crate::{
    game_state::{chess_types::PieceTeam, piece_register::PieceRegister},
    move_rules::legality::is_legal,
};

/// Whether the king of `team` is currently attacked in `register`.
///
/// A register without a king for `team` is a corrupted position. The
/// detector reports "not in check" for it instead of failing, since every
/// reachable state contains both kings; the event is logged for diagnosis.
pub fn is_in_check(team: PieceTeam, register: &PieceRegister) -> bool {
    let king_square = match register.king_of(team) {
        Ok(king) => king.location,
        Err(error) => {
            warn!(%team, %error, "check detection on a position without a king");
            return false;
        }
    };
    register
        .pieces_of(team.opposite())
        .any(|attacker| is_legal(attacker, king_square, register, false))
}
