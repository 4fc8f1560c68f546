//! Raw geometric move generation.
//!
//! Walks each offset of a piece from its square: sliding pieces keep
//! stepping until they leave the board, stepping pieces stop after one
//! application. Occupancy is deliberately not consulted here; blocking and
//! capture rules belong to `legal_move_checks`. Results are recomputed on
//! every call because piece position and pawn status change after each move.

use std::collections::BTreeSet;

use tracing::trace;

use crate::chess_errors::IllegalMoveReason;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_offsets::{is_sliding, offsets_for};
use crate::utils::algebraic::Square;

/// Raw reachability set of `piece` standing on `origin`.
pub fn possible_moves(piece: &Piece, origin: Square) -> BTreeSet<Square> {
    let sliding = is_sliding(piece.kind);
    let mut reachable = BTreeSet::new();

    for (rank_delta, file_delta) in offsets_for(piece, origin) {
        let mut current = origin;
        while let Some(next) = current.offset(rank_delta, file_delta) {
            reachable.insert(next);
            if !sliding {
                break;
            }
            current = next;
        }
    }

    trace!(
        piece = %piece.code(),
        origin = %origin,
        count = reachable.len(),
        "generated raw moves"
    );

    reachable
}

/// Resolve the piece on `origin` and generate its raw reachability set.
pub fn possible_moves_from(
    board: &Board,
    origin: Square,
) -> Result<BTreeSet<Square>, IllegalMoveReason> {
    let piece = board
        .piece_at(origin)
        .ok_or(IllegalMoveReason::NoPieceToMove)?;
    Ok(possible_moves(piece, origin))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{possible_moves, possible_moves_from};
    use crate::chess_errors::IllegalMoveReason;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::moves::move_offsets::{is_sliding, offsets_for};
    use crate::utils::algebraic::Square;

    fn sq(label: &str) -> Square {
        Square::parse(label).expect("test label should parse")
    }

    fn squares(labels: &[&str]) -> BTreeSet<Square> {
        labels.iter().map(|label| sq(label)).collect()
    }

    #[test]
    fn rook_on_empty_board_reaches_fourteen_squares() {
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let moves = possible_moves(&rook, sq("d4"));
        assert_eq!(moves.len(), 14);
        assert!(moves.contains(&sq("d8")));
        assert!(moves.contains(&sq("a4")));
        assert!(!moves.contains(&sq("d4")));
    }

    #[test]
    fn knight_near_corner_has_three_targets() {
        let knight = Piece::new(PieceKind::Knight, Color::White);
        assert_eq!(possible_moves(&knight, sq("b1")), squares(&["a3", "c3", "d2"]));
    }

    #[test]
    fn queen_and_bishop_counts_from_centre_and_corner() {
        let queen = Piece::new(PieceKind::Queen, Color::Black);
        assert_eq!(possible_moves(&queen, sq("d4")).len(), 27);

        let bishop = Piece::new(PieceKind::Bishop, Color::White);
        assert_eq!(possible_moves(&bishop, sq("a1")).len(), 7);
    }

    #[test]
    fn king_in_corner_has_three_targets() {
        let king = Piece::new(PieceKind::King, Color::Black);
        assert_eq!(possible_moves(&king, sq("h8")), squares(&["g8", "g7", "h7"]));
    }

    #[test]
    fn pawn_sets_include_diagonals_and_home_double_step() {
        let white = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(
            possible_moves(&white, sq("e2")),
            squares(&["d3", "e3", "f3", "e4"])
        );
        assert_eq!(possible_moves(&white, sq("a5")), squares(&["a6", "b6"]));

        let black = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(
            possible_moves(&black, sq("h7")),
            squares(&["h6", "g6", "h5"])
        );
    }

    #[test]
    fn generation_ignores_occupancy() {
        let board = Board::new_game();
        let rook_moves = possible_moves_from(&board, sq("a1")).expect("rook on a1");
        assert_eq!(rook_moves.len(), 14);
        assert!(rook_moves.contains(&sq("a8")));
    }

    #[test]
    fn empty_origin_has_no_piece_to_move() {
        let board = Board::new_game();
        assert_eq!(
            possible_moves_from(&board, sq("e4")),
            Err(IllegalMoveReason::NoPieceToMove)
        );
    }

    #[test]
    fn stepping_pieces_never_exceed_one_offset_application() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
            if is_sliding(kind) {
                continue;
            }
            let color = if rng.random_bool(0.5) { Color::White } else { Color::Black };
            let origin = Square::from_grid(rng.random_range(0..8), rng.random_range(0..8))
                .expect("in-range grid address");
            let piece = Piece::new(kind, color);

            let single_steps: BTreeSet<Square> = offsets_for(&piece, origin)
                .into_iter()
                .filter_map(|(dr, df)| origin.offset(dr, df))
                .collect();
            assert_eq!(possible_moves(&piece, origin), single_steps);
        }
    }

    #[test]
    fn repeated_queries_are_identical() {
        let board = Board::new_game();
        for (square, _) in board.pieces() {
            let first = possible_moves_from(&board, square).expect("occupied square");
            let second = possible_moves_from(&board, square).expect("occupied square");
            assert_eq!(first, second);
        }
        assert_eq!(board, Board::new_game());
    }
}
