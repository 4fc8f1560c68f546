//! Errors used throughout the rules engine.
//!
//! Two layers of error are defined here:
//! - `IllegalMoveReason` is the precise, stable identity of why a proposed
//!   move was rejected. The generate/validate/execute pipeline returns it
//!   directly so test suites and UIs can discriminate reasons.
//! - `ChessErrors` is the crate-wide error type returned by the label-based
//!   surface (parsing squares, FEN placements, move scripts) and wraps an
//!   `IllegalMoveReason` together with the squares involved.
//!
//! Usage guidelines:
//! - A rejected move is never retried or repaired internally; the board is
//!   left exactly as it was and the reason is handed back to the caller.
//! - Parsing variants (`InvalidSquare`, `InvalidFen`, `InvalidMoveScript`)
//!   are recoverable and suitable for presenting to end users.

use thiserror::Error;

use crate::utils::algebraic::Square;

/// Why the Legality Checker refused a move.
///
/// Checks run in a fixed order and the first failure is reported, so a move
/// that is both unreachable and onto a friendly piece reports `NotReachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    /// The source square is empty, or the destination is the source itself.
    #[error("there is no piece to move")]
    NoPieceToMove,

    /// The destination is outside the piece's raw reachability set.
    #[error("destination is not reachable by this piece")]
    NotReachable,

    /// The destination holds a piece of the mover's own color.
    #[error("destination is occupied by a friendly piece")]
    FriendlyOccupied,

    /// A square strictly between origin and destination is occupied.
    ///
    /// Payload: the first occupied square met while walking from the origin.
    #[error("path is blocked at {blocker}")]
    PathBlocked { blocker: Square },

    /// A pawn tried to move diagonally onto an empty square.
    #[error("a diagonal pawn move must capture")]
    CaptureRequired,

    /// A pawn tried to advance straight onto an unfriendly piece.
    #[error("a pawn cannot capture straight ahead")]
    ForwardCaptureForbidden,
}

/// Unified error type for the label-based surface of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// An algebraic label was not exactly a file 'a'..='h' followed by a rank
    /// '1'..='8'.
    ///
    /// Payload: the original label.
    #[error("invalid square label {0:?}")]
    InvalidSquare(String),

    /// A move between two well-formed squares was rejected.
    #[error("illegal move {from}{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalMoveReason,
    },

    /// A FEN placement field had malformed structure or an unknown token.
    #[error("invalid FEN placement: {0}")]
    InvalidFen(String),

    /// A move script could not be split into source/destination pairs.
    #[error("invalid move script: {0}")]
    InvalidMoveScript(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;

#[cfg(test)]
mod tests {
    use super::{ChessErrors, IllegalMoveReason};
    use crate::utils::algebraic::Square;

    #[test]
    fn illegal_move_message_names_both_squares_and_reason() {
        let from = Square::parse("a1").expect("a1 should parse");
        let to = Square::parse("a5").expect("a5 should parse");
        let blocker = Square::parse("a2").expect("a2 should parse");

        let err = ChessErrors::IllegalMove {
            from,
            to,
            reason: IllegalMoveReason::PathBlocked { blocker },
        };

        assert_eq!(err.to_string(), "illegal move a1a5: path is blocked at a2");
    }

    #[test]
    fn invalid_square_message_quotes_label() {
        let err = ChessErrors::InvalidSquare("z9".to_owned());
        assert_eq!(err.to_string(), "invalid square label \"z9\"");
    }
}
