//! GEAR: Wizard of the Techno Nexus
//!
//! Main entry point for the game.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{LevelFilter, info, warn};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use gear_core::world::GameOptions;
use gear_core::{GameLoop, GameLoopResult, GameRng, GameState};
use gear_save::{SaveError, data_dir, default_save_path, delete_save, load_game, save_game};
use gear_tui::{App, EventSource, MenuChoice, TerminalEvents};

/// A roguelike in the depths of the Techno Nexus
#[derive(Parser, Debug)]
#[command(name = "gear")]
#[command(author, version, about = "GEAR - Wizard of the Techno Nexus", long_about = None)]
struct Args {
    /// Seed for new games (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Game options file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save file location
    #[arg(long)]
    save: Option<PathBuf>,

    /// Log file location
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the default options as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.dump_config {
        print!("{}", GameOptions::default().to_config_string()?);
        return Ok(());
    }

    init_logging(&args)?;

    let options = match &args.config {
        Some(path) => GameOptions::load_from_file(path)
            .with_context(|| format!("reading options from {}", path.display()))?,
        None => GameOptions::default(),
    };
    let save_path = args.save.clone().unwrap_or_else(default_save_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let mut app = App::new(terminal, TerminalEvents);

    let result = run(&mut app, &options, args.seed, &save_path);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        app.terminal_mut().backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    app.terminal_mut().show_cursor()?;

    result
}

/// Install the file logger; the terminal belongs to the UI
fn init_logging(args: &Args) -> Result<()> {
    let path = args.log.clone().unwrap_or_else(|| data_dir().join("gear.log"));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file =
        File::create(&path).with_context(|| format!("creating log file {}", path.display()))?;

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Main menu loop
fn run<B: Backend, E: EventSource>(
    app: &mut App<B, E>,
    options: &GameOptions,
    seed: Option<u64>,
    save_path: &Path,
) -> Result<()> {
    let mut notice: Option<String> = None;
    loop {
        match app.main_menu(notice.take().as_deref())? {
            MenuChoice::NewGame => {
                let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
                let state = GameState::new(options.clone(), rng);
                notice = play(app, state, save_path);
            }
            MenuChoice::Continue => match load_game(save_path) {
                Ok(state) => notice = play(app, state, save_path),
                Err(SaveError::NotFound) => notice = Some(SaveError::NotFound.to_string()),
                Err(err) => {
                    warn!("could not load {}: {err}", save_path.display());
                    notice = Some(format!("Could not load the saved game: {err}"));
                }
            },
            MenuChoice::Quit => return Ok(()),
        }
    }
}

/// Play one session; returns a notice for the main menu, if any
fn play<B: Backend, E: EventSource>(
    app: &mut App<B, E>,
    state: GameState,
    save_path: &Path,
) -> Option<String> {
    let mut game = GameLoop::new(state);
    match game.run(app) {
        GameLoopResult::SaveAndQuit => match save_game(game.state(), save_path) {
            Ok(()) => None,
            Err(err) => {
                warn!("failed to save game: {err}");
                Some(format!("Failed to save the game: {err}"))
            }
        },
        GameLoopResult::Quit => {
            info!("session over, removing save");
            if let Err(err) = delete_save(save_path) {
                warn!("failed to remove save: {err}");
            }
            None
        }
        GameLoopResult::Continue | GameLoopResult::PlayerDied => None,
    }
}
