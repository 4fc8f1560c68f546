//! Legality checks for a single proposed move.
//!
//! Checks run in a fixed order and the first failure short-circuits:
//! 1. a piece stands on the source, and the destination differs from it;
//! 2. the destination is in the piece's raw reachability set;
//! 3. the destination is not held by a friendly piece;
//! 4. no square strictly between origin and destination is occupied
//!    (sliding pieces, and a pawn's double advance);
//! 5. pawn capture rules: diagonals must capture, advances must not.
//!
//! A move that passes is either quiet or a capture. Capturing the king is
//! allowed; check and checkmate are not modelled.

use crate::chess_errors::IllegalMoveReason;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::move_generation::move_generator::possible_moves;
use crate::moves::move_offsets::{classify_pawn_step, is_sliding, Offset, PawnStep};
use crate::utils::algebraic::Square;

/// Outcome of a move that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture(Piece),
}

/// Validate moving the piece on `from` to `to` against the current board.
pub fn is_legal(board: &Board, from: Square, to: Square) -> Result<(), IllegalMoveReason> {
    check_move(board, from, to).map(|_| ())
}

/// Like `is_legal`, but reports whether the move would capture.
pub fn check_move(board: &Board, from: Square, to: Square) -> Result<MoveKind, IllegalMoveReason> {
    if from == to {
        return Err(IllegalMoveReason::NoPieceToMove);
    }
    let piece = board
        .piece_at(from)
        .ok_or(IllegalMoveReason::NoPieceToMove)?;

    if !possible_moves(piece, from).contains(&to) {
        return Err(IllegalMoveReason::NotReachable);
    }

    let target = board.piece_at(to);
    if target.is_some_and(|occupant| occupant.is_friendly_to(piece)) {
        return Err(IllegalMoveReason::FriendlyOccupied);
    }

    let pawn_step = match piece.kind {
        PieceKind::Pawn => classify_pawn_step(piece.color, delta(from, to)),
        _ => None,
    };

    if is_sliding(piece.kind) || pawn_step == Some(PawnStep::DoubleAdvance) {
        if let Some(blocker) = path_blocker(board, from, to) {
            return Err(IllegalMoveReason::PathBlocked { blocker });
        }
    }

    match (pawn_step, target) {
        (Some(PawnStep::Diagonal), None) => return Err(IllegalMoveReason::CaptureRequired),
        (Some(PawnStep::Advance | PawnStep::DoubleAdvance), Some(_)) => {
            return Err(IllegalMoveReason::ForwardCaptureForbidden)
        }
        _ => {}
    }

    Ok(match target {
        Some(captured) => MoveKind::Capture(*captured),
        None => MoveKind::Quiet,
    })
}

/// Unit step along the straight line from `from` to `to`.
///
/// Equal absolute deltas mean a diagonal, a zero file delta a vertical, and
/// a zero rank delta a horizontal. `None` when the squares are not aligned
/// or are the same square.
pub fn path_direction(from: Square, to: Square) -> Option<Offset> {
    let (rank_delta, file_delta) = delta(from, to);
    match (rank_delta, file_delta) {
        (0, 0) => None,
        (dr, 0) => Some((dr.signum(), 0)),
        (0, df) => Some((0, df.signum())),
        (dr, df) if dr.abs() == df.abs() => Some((dr.signum(), df.signum())),
        _ => None,
    }
}

/// First occupied square strictly between `from` and `to`, walking from
/// `from`. `None` when the path is clear or the squares are not aligned.
pub fn path_blocker(board: &Board, from: Square, to: Square) -> Option<Square> {
    let (rank_step, file_step) = path_direction(from, to)?;
    let mut current = from.offset(rank_step, file_step)?;

    while current != to {
        if board.is_occupied(current) {
            return Some(current);
        }
        current = current.offset(rank_step, file_step)?;
    }

    None
}

#[inline]
fn delta(from: Square, to: Square) -> Offset {
    let (from_rank, from_file) = from.to_grid();
    let (to_rank, to_file) = to.to_grid();
    (
        to_rank as i8 - from_rank as i8,
        to_file as i8 - from_file as i8,
    )
}

#[cfg(test)]
mod tests {
    use super::{check_move, is_legal, path_blocker, path_direction, MoveKind};
    use crate::chess_errors::IllegalMoveReason;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::utils::algebraic::Square;

    fn sq(label: &str) -> Square {
        Square::parse(label).expect("test label should parse")
    }

    #[test]
    fn pawn_double_advance_from_home_rank() {
        let board = Board::new_game();
        assert_eq!(is_legal(&board, sq("e2"), sq("e4")), Ok(()));
        assert_eq!(is_legal(&board, sq("e2"), sq("e3")), Ok(()));
        assert_eq!(
            is_legal(&board, sq("e2"), sq("e5")),
            Err(IllegalMoveReason::NotReachable)
        );
        assert_eq!(is_legal(&board, sq("d7"), sq("d5")), Ok(()));
    }

    #[test]
    fn rook_blocked_by_own_pawn_until_it_is_removed() {
        let mut board = Board::new_game();
        assert_eq!(
            is_legal(&board, sq("a1"), sq("a5")),
            Err(IllegalMoveReason::PathBlocked { blocker: sq("a2") })
        );

        board.remove(sq("a2"));
        assert_eq!(is_legal(&board, sq("a1"), sq("a5")), Ok(()));
    }

    #[test]
    fn friendly_destination_is_rejected() {
        let board = Board::new_game();
        assert_eq!(
            is_legal(&board, sq("a1"), sq("b1")),
            Err(IllegalMoveReason::FriendlyOccupied)
        );
        assert_eq!(
            is_legal(&board, sq("e1"), sq("d2")),
            Err(IllegalMoveReason::FriendlyOccupied)
        );
    }

    #[test]
    fn reachability_is_checked_before_occupancy() {
        let board = Board::new_game();
        assert_eq!(
            is_legal(&board, sq("a1"), sq("b2")),
            Err(IllegalMoveReason::NotReachable)
        );
    }

    #[test]
    fn empty_source_and_same_square_have_no_piece_to_move() {
        let board = Board::new_game();
        assert_eq!(
            is_legal(&board, sq("e4"), sq("e5")),
            Err(IllegalMoveReason::NoPieceToMove)
        );
        assert_eq!(
            is_legal(&board, sq("e2"), sq("e2")),
            Err(IllegalMoveReason::NoPieceToMove)
        );
    }

    #[test]
    fn knights_jump_over_pieces() {
        let board = Board::new_game();
        assert_eq!(check_move(&board, sq("b1"), sq("c3")), Ok(MoveKind::Quiet));
        assert_eq!(check_move(&board, sq("g8"), sq("f6")), Ok(MoveKind::Quiet));
    }

    #[test]
    fn bishop_path_blocked_on_opening_board() {
        let board = Board::new_game();
        assert_eq!(
            is_legal(&board, sq("c1"), sq("e3")),
            Err(IllegalMoveReason::PathBlocked { blocker: sq("d2") })
        );
    }

    #[test]
    fn unfriendly_destination_is_a_capture() {
        let mut board = Board::empty();
        let black_knight = Piece::new(PieceKind::Knight, Color::Black);
        board.place(sq("c1"), Piece::new(PieceKind::Bishop, Color::White));
        board.place(sq("g5"), black_knight);

        assert_eq!(
            check_move(&board, sq("c1"), sq("g5")),
            Ok(MoveKind::Capture(black_knight))
        );
    }

    #[test]
    fn capturing_the_king_is_not_forbidden() {
        let mut board = Board::empty();
        let black_king = Piece::new(PieceKind::King, Color::Black);
        board.place(sq("d1"), Piece::new(PieceKind::Queen, Color::White));
        board.place(sq("d8"), black_king);

        assert_eq!(
            check_move(&board, sq("d1"), sq("d8")),
            Ok(MoveKind::Capture(black_king))
        );
    }

    #[test]
    fn pawn_diagonal_requires_a_capture() {
        let mut board = Board::new_game();
        assert_eq!(
            is_legal(&board, sq("e2"), sq("d3")),
            Err(IllegalMoveReason::CaptureRequired)
        );

        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        board.place(sq("d3"), black_pawn);
        assert_eq!(
            check_move(&board, sq("e2"), sq("d3")),
            Ok(MoveKind::Capture(black_pawn))
        );
    }

    #[test]
    fn pawn_cannot_capture_straight_ahead() {
        let mut board = Board::new_game();
        board.place(sq("e3"), Piece::new(PieceKind::Knight, Color::Black));

        assert_eq!(
            is_legal(&board, sq("e2"), sq("e3")),
            Err(IllegalMoveReason::ForwardCaptureForbidden)
        );
        assert_eq!(
            is_legal(&board, sq("e2"), sq("e4")),
            Err(IllegalMoveReason::PathBlocked { blocker: sq("e3") })
        );
    }

    #[test]
    fn pawn_double_advance_onto_piece_is_forbidden() {
        let mut board = Board::new_game();
        board.place(sq("e4"), Piece::new(PieceKind::Pawn, Color::Black));
        assert_eq!(
            is_legal(&board, sq("e2"), sq("e4")),
            Err(IllegalMoveReason::ForwardCaptureForbidden)
        );
    }

    #[test]
    fn path_direction_classifies_lines() {
        assert_eq!(path_direction(sq("a1"), sq("a8")), Some((-1, 0)));
        assert_eq!(path_direction(sq("h4"), sq("a4")), Some((0, -1)));
        assert_eq!(path_direction(sq("c1"), sq("h6")), Some((-1, 1)));
        assert_eq!(path_direction(sq("b1"), sq("c3")), None);
        assert_eq!(path_direction(sq("d4"), sq("d4")), None);
    }

    #[test]
    fn path_blocker_excludes_destination() {
        let board = Board::new_game();
        assert_eq!(path_blocker(&board, sq("a3"), sq("a2")), None);
        assert_eq!(path_blocker(&board, sq("a3"), sq("a1")), Some(sq("a2")));
        assert_eq!(path_blocker(&board, sq("a3"), sq("h3")), None);
    }
}
