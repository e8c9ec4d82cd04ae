use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use worktimer::cli::args::{Cli, Commands};
use worktimer::cli::commands;
use worktimer::config::{Config, Paths};
use worktimer::logging::init_logging;
use worktimer::timer::{Direction, JsonFileStore, SystemClock, TimerController};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load_from_path(&paths.config_file)?,
    };
    init_logging(config.logging.resolve(&paths));

    let data_file = cli.data_file.unwrap_or(config.timer.data_file);
    log::debug!("using record {}", data_file.display());
    let mut timer = TimerController::new(SystemClock, JsonFileStore::new(data_file));
    let format = cli.output;

    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            worktimer::tui::run(&mut timer, config.timer.default_adjust_minutes.to_string())?;
            String::new()
        }
        Commands::Status => commands::status(&timer, format)?,
        Commands::Add { minutes } => {
            commands::adjust(&mut timer, minutes, Direction::Increase, format)?
        }
        Commands::Sub { minutes } => {
            commands::adjust(&mut timer, minutes, Direction::Decrease, format)?
        }
        Commands::Reset => commands::reset(&mut timer, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
