use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TimeLogger;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::models::Category;
use tracing::debug;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        category,
        days,
        force,
    } = cmd
    {
        // no --category → both logs
        let category = category
            .as_deref()
            .map(|c| Category::from_code(c).ok_or_else(|| AppError::InvalidCategory(c.into())))
            .transpose()?;

        debug!(format = format.as_str(), %file, "export requested");

        let logger = TimeLogger::open_logs(cfg);
        ExportLogic::export(&logger, *format, file, category, *days, *force)?;
    }
    Ok(())
}
