//! Board-to-FEN-placement generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::utils::algebraic::{Square, BOARD_SIZE};

/// Piece placement field for `board`, rank 8 first.
pub fn generate_fen_placement(board: &Board) -> String {
    let mut out = String::new();

    for rank in 0..BOARD_SIZE {
        let mut empty = 0u8;

        for file in 0..BOARD_SIZE {
            match Square::from_grid(rank, file).and_then(|square| board.piece_at(square)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    let code = piece.kind.code();
                    out.push(match piece.color {
                        Color::White => code,
                        Color::Black => code.to_ascii_lowercase(),
                    });
                }
                None => empty += 1,
            }
        }

        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if rank < BOARD_SIZE - 1 {
            out.push('/');
        }
    }

    out
}
