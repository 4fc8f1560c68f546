//! FEN-placement-to-Board parser.
//!
//! Only the piece placement field is read. A full FEN string is accepted and
//! its remaining fields (side to move, castling, en passant, clocks) are
//! ignored, since the engine does not model them. Pawns found off their home
//! rank are marked as moved so they do not receive the double advance.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_home_rank_index;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::utils::algebraic::{Square, BOARD_SIZE};

pub fn parse_fen_placement(fen: &str) -> ChessResult<Board> {
    let placement = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessErrors::InvalidFen("missing board layout".to_owned()))?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(ChessErrors::InvalidFen(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is grid rank index 0.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;

            let square = Square::from_grid(rank, file).ok_or_else(|| {
                ChessErrors::InvalidFen(format!("rank '{rank_str}' has too many files"))
            })?;

            let mut piece = Piece::new(kind, color);
            if kind == PieceKind::Pawn && rank != pawn_home_rank_index(color) {
                piece.has_moved = true;
            }
            board.place(square, piece);
            file += 1;
        }

        if file != BOARD_SIZE {
            return Err(ChessErrors::InvalidFen(format!(
                "rank '{rank_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    PieceKind::from_code(ch.to_ascii_uppercase()).map(|kind| (color, kind))
}
