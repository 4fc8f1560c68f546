//! Canonical chess-rule constants.
//!
//! Starting layout, home ranks, and pawn direction, expressed in grid
//! indices (rank index 0 is rank '8').

use crate::game_state::chess_types::{Color, PieceKind};

/// Standard starting placement in FEN (first field only).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Grid rank index of a color's back rank ('1' for White, '8' for Black).
#[inline]
pub const fn back_rank_index(color: Color) -> usize {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Grid rank index of a color's pawn home rank ('2' for White, '7' for Black).
#[inline]
pub const fn pawn_home_rank_index(color: Color) -> usize {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Rank delta of one pawn step forward. White moves toward rank index 0.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}
