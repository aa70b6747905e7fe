use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::TimeLogger;
use crate::errors::AppResult;
use crate::models::Category;
use crate::ui::messages::success;
use tracing::info;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory
///  - both log files, header row only
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    println!("⚙️  Initializing rWorklog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    //
    // 2️⃣ LOG FILES (never truncated when already present)
    //
    let logger = TimeLogger::open_logs(&cfg);
    logger.initialize()?;

    for category in Category::ALL {
        println!(
            "🗂️  {:<13}: {}",
            category.label(),
            cfg.log_path(category).display()
        );
    }

    info!(data_dir = %cfg.data_path().display(), "initialized");
    success("rWorklog initialization completed!");
    Ok(())
}
