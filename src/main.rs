use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::ai::{HeuristicAgent, HeuristicConfig};
use connect_four::config::{AppConfig, DEFAULT_CONFIG_PATH};
use connect_four::game::{Player, Round};
use connect_four::session::metrics::MAX_PREALLOCATED_WINDOW;
use connect_four::session::{play_round, SessionMetrics};
use connect_four::ui::{App, GameMode};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file (config.toml is used if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override number of board rows
    #[arg(long, global = true)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long, global = true)]
    cols: Option<usize>,

    /// Override the line length needed to win
    #[arg(long, global = true)]
    win_length: Option<usize>,

    /// Seed for the computer opponent
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively (default)
    Play {
        #[arg(long, value_enum, default_value_t = GameMode::VsComputer)]
        mode: GameMode,
    },
    /// Let two computer opponents play each other and print the tally
    Simulate {
        #[arg(long, default_value_t = 100)]
        rounds: usize,
    },
    /// Print a configuration file with all default values
    DefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play {
        mode: GameMode::VsComputer,
    });

    // The TUI owns the terminal, so without a log file it stays quiet.
    let default_level = match command {
        Command::Simulate { .. } => "info",
        _ if cli.log_file.is_some() => "info",
        _ => "off",
    };
    init_logging(cli.log_file.as_deref(), default_level)?;

    if let Command::DefaultConfig = command {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let config_path = cli.config.as_deref();
    let mut config = AppConfig::resolve(config_path).with_context(|| {
        let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
        format!("loading config from {}", path.display())
    })?;

    // Apply CLI overrides
    config.board = config
        .board
        .with_overrides(cli.rows, cli.cols, cli.win_length)
        .context("applying board overrides")?;
    if let Some(seed) = cli.seed {
        config.opponent.seed = Some(seed);
    }

    info!(
        rows = config.board.rows(),
        cols = config.board.cols(),
        win_length = config.board.win_length(),
        exploration = config.opponent.exploration,
        "configuration loaded"
    );

    match command {
        Command::Play { mode } => {
            let mut app = App::new(config.board, mode, config.opponent);
            run_tui(&mut app).context("running terminal UI")
        }
        Command::Simulate { rounds } => {
            simulate(&config, rounds)?;
            Ok(())
        }
        Command::DefaultConfig => Ok(()),
    }
}

fn init_logging(log_file: Option<&Path>, default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn run_tui(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app returned an error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

fn simulate(config: &AppConfig, rounds: usize) -> Result<()> {
    // Distinct seeds so the two sides do not mirror each other.
    let side_config = |offset: u64| HeuristicConfig {
        seed: config.opponent.seed.map(|s| s.wrapping_add(offset)),
        ..config.opponent.clone()
    };
    let mut red = HeuristicAgent::new(side_config(0));
    let mut yellow = HeuristicAgent::new(side_config(1));
    let mut metrics = SessionMetrics::with_capacity(rounds.clamp(1, MAX_PREALLOCATED_WINDOW));
    let mut round = Round::new(config.board);

    info!(rounds, "starting simulation");
    for n in 1..=rounds {
        round.restart();
        let result = play_round(&mut round, &mut red, &mut yellow)
            .with_context(|| format!("playing round {n}"))?;
        metrics.record_round(result);
    }

    println!("Rounds played: {}", metrics.total_rounds());
    println!(
        "Red wins:      {} ({:.1}%)",
        metrics.wins(Player::Red),
        metrics.lifetime_win_rate(Player::Red) * 100.0
    );
    println!(
        "Yellow wins:   {} ({:.1}%)",
        metrics.wins(Player::Yellow),
        metrics.lifetime_win_rate(Player::Yellow) * 100.0
    );
    println!(
        "Draws:         {} ({:.1}%)",
        metrics.draws(),
        metrics.lifetime_draw_rate() * 100.0
    );
    println!("Average length: {:.1} moves", metrics.lifetime_average_round_length());
    Ok(())
}
