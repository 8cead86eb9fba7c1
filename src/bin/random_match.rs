//! Random self-play diagnostic binary.
//!
//! Plays uniformly random legal moves for both sides until checkmate, move
//! exhaustion, or a ply cap, printing the final board. Doubles as a smoke
//! test of the full command surface: every ply runs selection, legality
//! enumeration, move application, and status derivation.

use clover_chess::board_location::BoardLocation;
use clover_chess::chess_errors::ChessErrors;
use clover_chess::game_state::chess_types::{CheckStatus, PieceId};
use clover_chess::game_state::game_state::GameState;
use clover_chess::utils::render_game_state::render_game_state;
use rand::prelude::IndexedRandom;
use tracing::info;
use tracing_subscriber::EnvFilter;

const PLY_CAP: usize = 300;

fn main() -> Result<(), ChessErrors> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = GameState::new_game();
    let mut rng = rand::rng();

    for ply in 0..PLY_CAP {
        let candidates = collect_candidates(&game)?;
        let Some(&(piece_id, target)) = candidates.as_slice().choose(&mut rng) else {
            // No legal move and not mate: a dead position for the mover.
            println!("no legal moves for {} after {} plies", game.turn, ply);
            break;
        };

        game.select_piece(Some(piece_id));
        game.apply_move(piece_id, target)?;
        info!(
            ply,
            mv = %game.move_history.last().map(String::as_str).unwrap_or("-"),
            status = ?game.check_status,
            "applied move"
        );

        if game.check_status == CheckStatus::Checkmate {
            println!("checkmate against {} after {} plies", game.turn, ply + 1);
            break;
        }
    }

    println!("{}", render_game_state(&game));
    println!("history: {}", game.move_history.join(" "));
    Ok(())
}

/// Every legal (piece, target) pair for the side to move.
fn collect_candidates(game: &GameState) -> Result<Vec<(PieceId, BoardLocation)>, ChessErrors> {
    let ids: Vec<PieceId> = game
        .piece_register
        .pieces_of(game.turn)
        .map(|piece| piece.id)
        .collect();

    let mut candidates = Vec::new();
    for id in ids {
        for target in game.legal_moves(id)? {
            candidates.push((id, target));
        }
    }
    Ok(candidates)
}
