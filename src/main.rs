use std::fs::File;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::Parser;
use env_logger::{Env, Target};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use snake_duel::clock::SessionClock;
use snake_duel::config::{DEFAULT_GRID, FRAME_INTERVAL_MS, TICK_INTERVAL_MS};
use snake_duel::error::AppError;
use snake_duel::game::GameState;
use snake_duel::input::{GameInput, InputHandler};
use snake_duel::renderer;
use snake_duel::terminal_runtime::{TerminalSession, ensure_terminal_fits, install_panic_hook};

/// Steer the green snake with the arrow keys or WASD; outlast the blue one.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement; each restart draws the next seed from it.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostics to this file. Filter with RUST_LOG (default: info).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }
    ensure_terminal_fits(DEFAULT_GRID)?;

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(&mut session, cli.seed)?;

    log::info!("session closed");
    Ok(())
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run(session: &mut TerminalSession, seed: Option<u64>) -> Result<(), AppError> {
    let mut seeds = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut input = InputHandler::new();
    let clock = SessionClock::start();

    let mut state = GameState::new_with_seed(DEFAULT_GRID, seeds.next_u64(), clock.now_ms());
    let mut last_tick = clock.now_ms();

    loop {
        let now = clock.now_ms();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, now))?;

        while let Some(game_input) = input.poll_input(Duration::ZERO)? {
            match game_input {
                GameInput::Quit => return Ok(()),
                _ if state.is_game_over() => {
                    log::info!("restarting after game over");
                    state = GameState::new_with_seed(DEFAULT_GRID, seeds.next_u64(), now);
                    last_tick = now;
                }
                other => state.apply_input(other),
            }
        }

        let now = clock.now_ms();
        if now.saturating_sub(last_tick) >= TICK_INTERVAL_MS {
            state.tick(now);
            last_tick = now;
        }

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }
}
