//! Replay a move script against the starting position.
//!
//! Run with:
//! `cargo run --bin replay_moves`
//! `cargo run --bin replay_moves -- path/to/script.txt --stop-on-error`
//! `cargo run --bin replay_moves -- --random 40 --seed 7 --unicode`
//!
//! Set `RUST_LOG=debug` to see every validated and rejected move.

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_rules::game_state::board::Board;
use chess_rules::game_state::chess_types::Color;
use chess_rules::utils::logging::init_logging;
use chess_rules::utils::move_script::{
    parse_move_script, play_random_plies, replay, ReplayConfig, DEFAULT_SCRIPT,
};
use chess_rules::utils::render_game_state::{render, RenderStyle};

/// Script path used when none is given on the command line.
const SCRIPT_ENV_VAR: &str = "CHESS_RULES_SCRIPT";

fn main() -> Result<(), String> {
    init_logging("info");

    let (config, script_path) = parse_args(std::env::args().skip(1))?;
    let script_path = script_path.or_else(|| std::env::var(SCRIPT_ENV_VAR).ok());

    let script = match &script_path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read script {path}: {e}"))?,
        None => DEFAULT_SCRIPT.to_owned(),
    };
    let moves = parse_move_script(&script).map_err(|e| e.to_string())?;

    let mut board = Board::new_game();
    let scripted = replay(&mut board, &moves, &config);
    println!("script: {}", scripted.report());

    if scripted.rejected > 0 && config.stop_on_error {
        println!("{}", render(&board, config.render_style));
        return Err("replay stopped at a rejected move".to_owned());
    }

    if config.random_plies > 0 {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let first = scripted.next_to_move().unwrap_or(Color::White);
        let random = play_random_plies(&mut board, first, &config, &mut rng);
        println!("random: {}", random.report());
    }

    println!("{}", render(&board, config.render_style));
    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(
    mut args: I,
) -> Result<(ReplayConfig, Option<String>), String> {
    let mut config = ReplayConfig::default();
    let mut script_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--stop-on-error" => config.stop_on_error = true,
            "--unicode" => config.render_style = RenderStyle::Unicode,
            "--quiet" | "-q" => config.log_boards = false,
            "--random" => {
                let value = args.next().ok_or("--random needs a ply count")?;
                config.random_plies = value
                    .parse()
                    .map_err(|_| format!("invalid ply count: {value}"))?;
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid seed: {value}"))?,
                );
            }
            flag if flag.starts_with('-') => return Err(format!("unknown flag: {flag}")),
            path => {
                if script_path.replace(path.to_owned()).is_some() {
                    return Err("only one script path may be given".to_owned());
                }
            }
        }
    }

    Ok((config, script_path))
}
