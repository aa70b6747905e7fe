use crate::cli::parser::Commands;
use crate::cli::resolve_category;
use crate::config::Config;
use crate::core::TimeLogger;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        category,
        days,
        today: only_today,
    } = cmd
    {
        let category = resolve_category(category, cfg)?;
        let logger = TimeLogger::open_logs(cfg);
        let today = date::today();

        let records = if *only_today {
            header(format!("{} sessions for {}", category.label(), today));
            logger
                .records(category)?
                .into_iter()
                .filter(|r| r.date == today)
                .collect::<Vec<_>>()
        } else {
            let window = days.unwrap_or(logger.window_days());
            header(format!(
                "{} sessions, last {} day(s)",
                category.label(),
                window
            ));
            logger.recent_records(category, window, today)?
        };

        print!("{}", render::records_table(&records));
    }
    Ok(())
}
