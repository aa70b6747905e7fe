use crate::cli::parser::Commands;
use crate::cli::resolve_category;
use crate::config::Config;
use crate::core::TimeLogger;
use crate::errors::AppResult;
use crate::models::Category;
use crate::ui::messages::header;
use crate::ui::render;
use crate::utils::date;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        category,
        days,
        by_date,
    } = cmd
    {
        let category = resolve_category(category, cfg)?;
        let logger = TimeLogger::open_logs(cfg);
        let window = days.unwrap_or(logger.window_days());

        header(category.label());
        print!(
            "{}",
            summary_text(&logger, category, window, date::today(), *by_date)?
        );
    }
    Ok(())
}

/// Project totals, optional per-day breakdown and today's hours.
pub(crate) fn summary_text(
    logger: &TimeLogger,
    category: Category,
    window: u32,
    today: NaiveDate,
    by_date: bool,
) -> AppResult<String> {
    let mut out = render::project_summary(&logger.project_totals(category, window, today)?, window);

    if by_date {
        out.push('\n');
        out.push_str(&render::daily_summary(
            &logger.daily_totals(category, window, today)?,
            window,
        ));
    }

    out.push_str(&render::today_line(logger.hours_for_date(category, today)?));
    Ok(out)
}
