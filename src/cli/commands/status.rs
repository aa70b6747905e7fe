use crate::config::Config;
use crate::core::TimeLogger;
use crate::errors::AppResult;
use crate::ui::render;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let logger = TimeLogger::open(cfg)?;
    print!("{}", render::status(logger.active_sessions(), logger.now()));
    Ok(())
}
