//! Per-piece movement templates.
//!
//! Every offset is a `(rank_delta, file_delta)` pair in grid coordinates.
//! Sliding kinds repeat their offsets until the board edge; stepping kinds
//! apply each offset once. Pawn offsets depend on color and on whether the
//! pawn still stands unmoved on its home rank.

use crate::game_state::chess_rules::{pawn_forward, pawn_home_rank_index};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::utils::algebraic::Square;

pub type Offset = (i8, i8);

pub const ROOK_OFFSETS: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_OFFSETS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const QUEEN_OFFSETS: [Offset; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [Offset; 8] = QUEEN_OFFSETS;

/// How a pawn offset relates to the pawn's forward direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnStep {
    Advance,
    DoubleAdvance,
    Diagonal,
}

#[inline]
pub const fn is_sliding(kind: PieceKind) -> bool {
    match kind {
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => true,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
    }
}

/// Fixed offset table for every kind except the pawn, whose set is computed
/// by `pawn_offsets`.
#[inline]
pub fn base_offsets(kind: PieceKind) -> &'static [Offset] {
    match kind {
        PieceKind::Rook => &ROOK_OFFSETS,
        PieceKind::Bishop => &BISHOP_OFFSETS,
        PieceKind::Queen => &QUEEN_OFFSETS,
        PieceKind::Knight => &KNIGHT_OFFSETS,
        PieceKind::King => &KING_OFFSETS,
        PieceKind::Pawn => &[],
    }
}

/// Forward, forward-left, forward-right, plus forward-2 for an unmoved pawn
/// on its home rank.
pub fn pawn_offsets(color: Color, square: Square, has_moved: bool) -> Vec<Offset> {
    let forward = pawn_forward(color);
    let mut offsets = vec![(forward, 0), (forward, -1), (forward, 1)];

    if !has_moved && square.rank_index() == pawn_home_rank_index(color) {
        offsets.push((forward * 2, 0));
    }

    offsets
}

/// Current offset set of `piece` standing on `square`.
pub fn offsets_for(piece: &Piece, square: Square) -> Vec<Offset> {
    match piece.kind {
        PieceKind::Pawn => pawn_offsets(piece.color, square, piece.has_moved),
        kind => base_offsets(kind).to_vec(),
    }
}

/// Classify a pawn's `(rank_delta, file_delta)` move. `None` for deltas that
/// are not in any pawn offset set of `color`.
pub fn classify_pawn_step(color: Color, delta: Offset) -> Option<PawnStep> {
    let forward = pawn_forward(color);
    match delta {
        (dr, 0) if dr == forward => Some(PawnStep::Advance),
        (dr, 0) if dr == forward * 2 => Some(PawnStep::DoubleAdvance),
        (dr, df) if dr == forward && df.abs() == 1 => Some(PawnStep::Diagonal),
        _ => None,
    }
}
