//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the board model, the coordinate system, per-piece
//! movement tables, the generate/validate/execute pipeline, and the text
//! utilities (rendering, FEN placement, scripted replay) so binaries, tests,
//! and benchmarks can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod move_offsets;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod move_generator;
    pub mod random_mover;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod logging;
    pub mod move_script;
    pub mod render_game_state;
}

pub use chess_errors::{ChessErrors, ChessResult, IllegalMoveReason};
pub use game_state::board::Board;
pub use game_state::chess_types::{Color, Piece, PieceKind};
pub use utils::algebraic::Square;
