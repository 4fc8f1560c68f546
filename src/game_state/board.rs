//! The 8x8 board arena.
//!
//! `Board` owns every piece placed on it. Each cell holds at most one
//! `Piece`, and a piece's position is simply the address of the cell that
//! holds it. Only the move executor relocates pieces during play; setup code
//! uses `place`/`remove` directly.

use std::collections::BTreeSet;
use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult, IllegalMoveReason};
use crate::game_state::chess_rules::{back_rank_index, pawn_home_rank_index, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::move_generation::legal_move_apply::{execute, AppliedMove};
use crate::move_generation::move_generator::possible_moves_from;
use crate::utils::algebraic::{Square, BOARD_SIZE};
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The 32-piece standard starting position.
    pub fn new_game() -> Self {
        let mut board = Self::empty();

        for color in [Color::White, Color::Black] {
            let back_rank = back_rank_index(color);
            let pawn_rank = pawn_home_rank_index(color);

            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.cells[back_rank][file] = Some(Piece::new(*kind, color));
                board.cells[pawn_rank][file] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        let (rank, file) = square.to_grid();
        self.cells[rank][file].as_ref()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Put `piece` on `square`, returning whatever was there before.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let (rank, file) = square.to_grid();
        self.cells[rank][file].replace(piece)
    }

    /// Take the piece off `square`, leaving it empty.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let (rank, file) = square.to_grid();
        self.cells[rank][file].take()
    }

    /// Occupied squares in grid order (a8 first, h1 last).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Raw reachability set of the piece on `from`, ignoring occupancy.
    pub fn possible_moves(&self, from: Square) -> Result<BTreeSet<Square>, IllegalMoveReason> {
        possible_moves_from(self, from)
    }

    /// Label-based entry point: parse both squares, validate, and execute.
    pub fn try_move(&mut self, from: &str, to: &str) -> ChessResult<AppliedMove> {
        let from = Square::parse(from)?;
        let to = Square::parse(to)?;
        execute(self, from, to).map_err(|reason| ChessErrors::IllegalMove { from, to, reason })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
