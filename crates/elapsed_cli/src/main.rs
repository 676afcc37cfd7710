//! `elapsed` terminal front-end.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the slot database.
//! - Dispatch to the interactive screens or the one-shot list printer.

mod app;

use clap::{Parser, Subcommand};
use elapsed_core::db::open_db;
use elapsed_core::{core_version, init_logging, AppConfig, DisplayUnit, SqliteRecordStore};
use log::info;
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser, Clone, Debug, PartialEq)]
#[clap(version, about = "Shows how long ago, or until, your registered dates are", long_about = None)]
#[clap(disable_help_subcommand = true)]
#[command(name = "elapsed")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    /// Open the list and form screens (default)
    Ui,
    /// Print the list once and exit
    List {
        /// seconds, minutes, hours, days, months or years; defaults to ELAPSED_UNIT
        #[clap(value_name = "UNIT")]
        unit: Option<DisplayUnit>,
    },
    /// Print the core version
    Version,
}

impl Command {
    fn name(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::List { .. } => "list",
            Self::Version => "version",
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args.command.unwrap_or(Command::Ui)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("elapsed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    if command == Command::Version {
        println!("elapsed {}", core_version());
        return Ok(());
    }

    let config = AppConfig::from_env()?;
    std::fs::create_dir_all(&config.data_dir)?;
    if let Err(err) = init_logging(&config.log_level, &config.log_dir.to_string_lossy()) {
        eprintln!("elapsed: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok command={} db_path={}",
        command.name(),
        config.db_path.display()
    );

    let conn = open_db(&config.db_path)?;
    let store = SqliteRecordStore::try_new(&conn)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match command {
        Command::Ui => {
            app::run_interactive(&store, config.default_unit, stdin.lock(), &mut stdout.lock())?;
        }
        Command::List { unit } => {
            app::print_list(&store, unit.unwrap_or(config.default_unit), &mut stdout.lock())?;
        }
        Command::Version => {}
    }

    Ok(())
}
