//! Terminal Tetris runner (default binary).
//!
//! Owns the frame pump: polls crossterm for key presses, forwards them as
//! game actions, ticks gravity with the real elapsed time and redraws.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

use classic_tetris::core::{GameConfig, GameSnapshot, GameState};
use classic_tetris::input::{handle_key_event, should_quit};
use classic_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use classic_tetris::types::TICK_MS;

/// Classic falling-block puzzle in the terminal.
///
/// Keys: arrows move/rotate/soft-drop, Space hard-drops, P pauses,
/// G toggles the ghost piece, R restarts, Q quits.
#[derive(Debug, Parser)]
#[command(name = "classic-tetris", version, about, long_about = None)]
struct Options {
    /// Seed for the piece sequence (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Start with the ghost piece hidden
    #[arg(long)]
    no_ghost: bool,

    /// Keep leftover frame time between gravity steps instead of dropping it
    #[arg(long)]
    carry_fall_remainder: bool,

    /// Log filter such as "info" or "classic_tetris_core=debug"; logging is off when unset
    #[arg(long)]
    log_level: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

impl Options {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed.unwrap_or_else(clock_seed),
            ghost_enabled: !self.no_ghost,
            carry_fall_remainder: self.carry_fall_remainder,
        }
    }
}

fn main() -> Result<()> {
    let options = Options::parse();
    let _logger = start_logger(&options)?;

    let config = options.game_config();
    log::info!("starting session with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("fatal error: {e:#}");
    }
    result
}

/// Log to a file: the terminal itself is busy with the game.
fn start_logger(options: &Options) -> Result<Option<LoggerHandle>> {
    let Some(level) = options.log_level.as_deref() else {
        return Ok(None);
    };
    let handle = Logger::try_with_env_or_str(level)?
        .log_to_file(FileSpec::default().directory(&options.log_dir))
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;
    Ok(Some(handle))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameState::with_config(config);

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit with score {}", game.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time so slow frames do not slow gravity.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }
    }
}
