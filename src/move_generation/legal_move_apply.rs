//! Apply a validated move to the board.
//!
//! All checks run against the current board before anything is touched, so
//! a rejected move leaves the board exactly as it was and an accepted move
//! is observed as one complete transition.

use tracing::debug;

use crate::chess_errors::IllegalMoveReason;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::move_generation::legal_move_checks::{check_move, MoveKind};
use crate::utils::algebraic::Square;

/// Record of a move that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it stands after the move.
    pub piece: Piece,
    /// The unfriendly piece removed from `to`, if any.
    pub captured: Option<Piece>,
}

pub fn execute(
    board: &mut Board,
    from: Square,
    to: Square,
) -> Result<AppliedMove, IllegalMoveReason> {
    let kind = match check_move(board, from, to) {
        Ok(kind) => kind,
        Err(reason) => {
            debug!(%from, %to, %reason, "rejected move");
            return Err(reason);
        }
    };

    let mut piece = board
        .remove(from)
        .ok_or(IllegalMoveReason::NoPieceToMove)?;
    if piece.kind == PieceKind::Pawn {
        piece.has_moved = true;
    }
    let captured = board.place(to, piece);

    debug_assert_eq!(
        captured,
        match kind {
            MoveKind::Capture(target) => Some(target),
            MoveKind::Quiet => None,
        }
    );

    debug!(
        %from,
        %to,
        piece = %piece.code(),
        captured = ?captured.map(|p| p.code()),
        "applied move"
    );

    Ok(AppliedMove {
        from,
        to,
        piece,
        captured,
    })
}
