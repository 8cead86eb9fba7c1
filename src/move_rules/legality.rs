//! The single move legality evaluator.
//!
//! `is_legal` carries the full rule set behind one two-mode contract. In the
//! default mode (`check_king_safety == true`) a move that passes its shape
//! rule is additionally simulated on a forked register and rejected if it
//! would leave the mover's own king attacked. The attack-only mode
//! (`check_king_safety == false`) is used exclusively by check detection to
//! ask "does this enemy piece attack that square?" without re-entering
//! king-safety simulation; king safety is defined in terms of attacks, so a
//! single-mode evaluator would recurse without bound.
//!
//! Both modes share every shape rule. Keeping one function with a flag,
//! rather than two code paths, is what prevents the movement rules from
//! diverging between "my legal moves" and "squares the enemy attacks".

use crate::{
    board_location::BoardLocation,
    game_state::{
        chess_types::PieceClass, piece_record::PieceRecord, piece_register::PieceRegister,
    },
    move_rules::{
        check::is_in_check, legal_moves_bishop::bishop_move_is_legal,
        legal_moves_king::king_move_is_legal, legal_moves_knight::knight_move_is_legal,
        legal_moves_pawn::pawn_move_is_legal, legal_moves_queen::queen_move_is_legal,
        legal_moves_rook::rook_move_is_legal,
    },
};

/// Decide whether `piece` may move to `target` in `register`.
///
/// Preconditions are evaluated in order: the target must differ from the
/// piece's current square, must not hold a piece of the same team, and must
/// satisfy the piece's shape rule. Board bounds are carried by the
/// [`BoardLocation`] type itself. With `check_king_safety` enabled the move
/// is then played out on a scratch copy of the register and rejected if the
/// mover's king ends up attacked.
pub fn is_legal(
    piece: &PieceRecord,
    target: BoardLocation,
    register: &PieceRegister,
    check_king_safety: bool,
) -> bool {
    if target == piece.location {
        return false;
    }
    if register
        .piece_at_location(target)
        .is_some_and(|occupant| occupant.team == piece.team)
    {
        return false;
    }

    let shape_is_legal = match piece.class {
        PieceClass::Pawn => pawn_move_is_legal(piece, target, register),
        PieceClass::Knight => knight_move_is_legal(piece, target),
        PieceClass::Bishop => bishop_move_is_legal(piece, target, register),
        PieceClass::Rook => rook_move_is_legal(piece, target, register),
        PieceClass::Queen => queen_move_is_legal(piece, target, register),
        PieceClass::King => king_move_is_legal(piece, target),
    };
    if !shape_is_legal {
        return false;
    }
    if !check_king_safety {
        return true;
    }

    let mut hypothetical = register.clone();
    if hypothetical.relocate_piece(piece.id, target).is_err() {
        // A stale record for a captured piece cannot make a legal move.
        return false;
    }
    !is_in_check(piece.team, &hypothetical)
}
