//! Legal move enumeration and a uniform random mover.
//!
//! Candidates are the raw reachability set filtered through the legality
//! checks. The engine has no notion of whose turn it is, so callers name
//! the color they want moves for.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::chess_errors::IllegalMoveReason;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::{check_move, MoveKind};
use crate::move_generation::move_generator::possible_moves_from;
use crate::utils::algebraic::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

/// Destinations the piece on `from` may legally move to, in grid order.
pub fn legal_moves_from(board: &Board, from: Square) -> Result<Vec<Square>, IllegalMoveReason> {
    let reachable = possible_moves_from(board, from)?;
    Ok(reachable
        .into_iter()
        .filter(|to| check_move(board, from, *to).is_ok())
        .collect())
}

/// Every legal move for `color`, pieces in grid order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<CandidateMove> {
    let mut out = Vec::new();

    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        let Ok(reachable) = possible_moves_from(board, from) else {
            continue;
        };
        for to in reachable {
            if let Ok(kind) = check_move(board, from, to) {
                out.push(CandidateMove { from, to, kind });
            }
        }
    }

    out
}

/// Pick one legal move for `color` uniformly at random.
pub fn pick_random_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    rng: &mut R,
) -> Option<CandidateMove> {
    all_legal_moves(board, color).choose(rng).copied()
}
