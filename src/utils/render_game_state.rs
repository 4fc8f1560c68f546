//! Text renderers for the board.
//!
//! `render_board` is the stable two-character-code dump external callers and
//! tests assert on. `render_board_unicode` is a figurine view for terminals.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::utils::algebraic::{Square, BOARD_SIZE};

const EMPTY_CODE: &str = "  ";
const SEPARATOR_WIDTH: usize = 41;

/// Which renderer a driver should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    #[default]
    Codes,
    Unicode,
}

pub fn render(board: &Board, style: RenderStyle) -> String {
    match style {
        RenderStyle::Codes => render_board(board),
        RenderStyle::Unicode => render_board_unicode(board),
    }
}

/// Rank 8 to rank 1, file a to file h, one `| xx ` cell per square.
///
/// ```text
/// -----------------------------------------
/// | bR | bN | bB | bQ | bK | bB | bN | bR |
/// -----------------------------------------
/// ...
/// ```
pub fn render_board(board: &Board) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::with_capacity((SEPARATOR_WIDTH + 1) * (2 * BOARD_SIZE + 1));

    out.push_str(&separator);
    out.push('\n');

    for rank in 0..BOARD_SIZE {
        out.push('|');
        for file in 0..BOARD_SIZE {
            out.push(' ');
            match Square::from_grid(rank, file).and_then(|square| board.piece_at(square)) {
                Some(piece) => out.push_str(&piece.code()),
                None => out.push_str(EMPTY_CODE),
            }
            out.push_str(" |");
        }
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
    }

    out
}

/// Figurine board with file letters and rank digits around the edge.
pub fn render_board_unicode(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..BOARD_SIZE {
        let rank_char = char::from(b'8' - rank as u8);
        out.push(rank_char);
        out.push(' ');

        for file in 0..BOARD_SIZE {
            match Square::from_grid(rank, file).and_then(|square| board.piece_at(square)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
