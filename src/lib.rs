//! rWorklog library root.
//! Exposes the CLI parser, the high-level run() function and the tracking core
//! (session tracker, CSV log store, aggregation).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Start { .. } | Commands::Stop { .. } | Commands::Toggle { .. } => {
            cli::commands::track::handle(&cli.command, cfg)
        }
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Projects => cli::commands::projects::handle(cfg),
        Commands::Shell => cli::commands::shell::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    utils::logging::enable_logging(cli.verbose);

    // 2️⃣ load config ONCE
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the data directory
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
