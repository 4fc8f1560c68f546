//! Scripted move replay.
//!
//! A move script is a flat list of square labels consumed pairwise as
//! (source, destination). Replaying applies each pair to a board in order,
//! recording the outcome. Rejected moves are logged and skipped; the board
//! is never left half-updated.

use rand::Rng;
use tracing::{info, warn};

use crate::chess_errors::{ChessErrors, ChessResult, IllegalMoveReason};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::{execute, AppliedMove};
use crate::move_generation::random_mover::pick_random_move;
use crate::utils::algebraic::Square;
use crate::utils::render_game_state::{render, RenderStyle};

/// Demonstration game: an opening that turns into a queen raid on f7.
pub const DEFAULT_SCRIPT: &str = "\
e2 e4  e7 e5  b1 c3  b8 c6  f1 c4  f8 c5  d1 g4  d8 f6
c3 d5  f6 f2  e1 d1  g7 g6  g1 h3  f2 d4  d2 d3  h7 h5
g4 f3  g8 f6  c2 c3  f6 d5  c3 d4  e5 d4  e4 d5  c6 a5
h1 e1  e8 f8  e1 f1  a5 c4  f3 f7";

#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Stop at the first rejected move instead of skipping it.
    pub stop_on_error: bool,
    pub render_style: RenderStyle,
    /// Log the rendered board after every applied move.
    pub log_boards: bool,
    /// Random plies to play after the script, alternating colors.
    pub random_plies: u16,
    /// Seed for the random plies; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            stop_on_error: false,
            render_style: RenderStyle::Codes,
            log_boards: true,
            random_plies: 0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    pub result: Result<AppliedMove, IllegalMoveReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub outcomes: Vec<MoveOutcome>,
    pub applied: usize,
    pub rejected: usize,
    pub captures: usize,
}

impl ReplayReport {
    pub fn report(&self) -> String {
        format!(
            "moves={} applied={} rejected={} captures={}",
            self.outcomes.len(),
            self.applied,
            self.rejected,
            self.captures
        )
    }

    /// Side to move after the last applied move, or `None` if nothing applied.
    pub fn next_to_move(&self) -> Option<Color> {
        self.outcomes
            .iter()
            .rev()
            .find_map(|outcome| outcome.result.as_ref().ok())
            .map(|applied| applied.piece.color.opposite())
    }

    fn record(&mut self, outcome: MoveOutcome) {
        match &outcome.result {
            Ok(applied) => {
                self.applied += 1;
                if applied.captured.is_some() {
                    self.captures += 1;
                }
            }
            Err(_) => self.rejected += 1,
        }
        self.outcomes.push(outcome);
    }
}

/// Split a script into (source, destination) pairs.
pub fn parse_move_script(script: &str) -> ChessResult<Vec<(Square, Square)>> {
    let labels: Vec<&str> = script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    if labels.len() % 2 != 0 {
        return Err(ChessErrors::InvalidMoveScript(format!(
            "expected an even number of squares, found {}",
            labels.len()
        )));
    }

    labels
        .chunks_exact(2)
        .map(|pair| -> ChessResult<(Square, Square)> {
            Ok((Square::parse(pair[0])?, Square::parse(pair[1])?))
        })
        .collect()
}

/// Apply `moves` to `board` in order.
pub fn replay(
    board: &mut Board,
    moves: &[(Square, Square)],
    config: &ReplayConfig,
) -> ReplayReport {
    let mut report = ReplayReport::default();

    for (ply, &(from, to)) in moves.iter().enumerate() {
        let result = execute(board, from, to);
        let rejected = result.is_err();
        log_outcome(board, ply + 1, from, to, &result, config);
        report.record(MoveOutcome { from, to, result });

        if rejected && config.stop_on_error {
            break;
        }
    }

    report
}

/// Play `config.random_plies` random legal moves, starting with `first`.
/// Stops early when the side to move has no legal move.
pub fn play_random_plies<R: Rng + ?Sized>(
    board: &mut Board,
    first: Color,
    config: &ReplayConfig,
    rng: &mut R,
) -> ReplayReport {
    let mut report = ReplayReport::default();
    let mut color = first;

    for ply in 0..config.random_plies {
        let Some(candidate) = pick_random_move(board, color, rng) else {
            info!(?color, "no legal move left");
            break;
        };
        let result = execute(board, candidate.from, candidate.to);
        log_outcome(board, usize::from(ply) + 1, candidate.from, candidate.to, &result, config);
        report.record(MoveOutcome {
            from: candidate.from,
            to: candidate.to,
            result,
        });
        color = color.opposite();
    }

    report
}

fn log_outcome(
    board: &Board,
    ply: usize,
    from: Square,
    to: Square,
    result: &Result<AppliedMove, IllegalMoveReason>,
    config: &ReplayConfig,
) {
    match result {
        Ok(applied) => {
            match applied.captured {
                Some(captured) => info!(
                    ply,
                    "{}: {from}{to} captures {}",
                    applied.piece.code(),
                    captured.code()
                ),
                None => info!(ply, "{}: {from}{to}", applied.piece.code()),
            }
            if config.log_boards {
                info!("\n{}", render(board, config.render_style));
            }
        }
        Err(reason) => warn!(ply, "{from}{to} rejected: {reason}"),
    }
}
