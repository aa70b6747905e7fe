use crate::config::Config;
use crate::core::TimeLogger;
use crate::errors::AppResult;
use crate::ui::render;

/// Known project names, the autocomplete source for `start`.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let logger = TimeLogger::open_logs(cfg);
    print!("{}", render::project_list(&logger.known_projects()?));
    Ok(())
}
