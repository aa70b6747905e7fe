use crate::cli::parser::Commands;
use crate::cli::resolve_category;
use crate::config::Config;
use crate::core::{Started, TimeLogger, Toggled};
use crate::errors::AppResult;
use crate::models::{Category, LogRecord};
use crate::ui::messages::{success, tracking};

/// Handle `start`, `stop` and `toggle`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut logger = TimeLogger::open(cfg)?;

    match cmd {
        Commands::Start { project, category } => {
            let category = resolve_category(category, cfg)?;
            let started = logger.start(project, category)?;
            report_started(&started);
        }
        Commands::Stop { project, category } => {
            let category = resolve_category(category, cfg)?;
            let record = logger.stop(project, category)?;
            report_stopped(category, &record);
        }
        Commands::Toggle { project, category } => {
            let category = resolve_category(category, cfg)?;
            report_toggled(category, &logger.toggle(project, category)?);
        }
        _ => {}
    }

    Ok(())
}

pub(crate) fn report_started(started: &Started) {
    for s in &started.switched {
        report_stopped(s.category, &s.record);
    }
    tracking(format!(
        "Tracking started for: {} ({})",
        started.session.project,
        started.session.category.label()
    ));
}

pub(crate) fn report_stopped(category: Category, record: &LogRecord) {
    success(format!(
        "Logged {} mins for '{}' ({}).",
        record.duration_minutes,
        record.project,
        category.label()
    ));
}

pub(crate) fn report_toggled(category: Category, toggled: &Toggled) {
    match toggled {
        Toggled::Started(started) => report_started(started),
        Toggled::Stopped(record) => report_stopped(category, record),
    }
}
