//! Interactive front end.
//!
//! Timers live in memory for the whole loop, like the window of a desktop
//! tracker; the active-session file is still updated after each change so the
//! one-shot commands see the same state. After every start/stop the recent
//! table and the project summary are printed again.

use crate::cli::commands::summary::summary_text;
use crate::cli::commands::track::{report_started, report_stopped, report_toggled};
use crate::config::Config;
use crate::core::{SwitchedOut, TimeLogger, Toggled};
use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::ui::messages::{error, header, info, warning};
use crate::ui::render;
use crate::utils::date;
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  start  <project> [-c category]   start a timer
  stop   <project> [-c category]   stop a timer and log it
  toggle <project> [-c category]   start or stop
  status                           running timers
  list   [-c category]             recent sessions
  summary [-c category]            project totals
  projects                         known project names
  help                             this text
  quit                             leave (running timers are kept)";

/// One parsed input line.
#[derive(Debug, PartialEq)]
pub(crate) enum ShellCommand {
    Start(String, Option<String>),
    Stop(String, Option<String>),
    Toggle(String, Option<String>),
    Status,
    List(Option<String>),
    Summary(Option<String>),
    Projects,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Split the words after the verb into (project, category).
/// `-c <category>` / `--category <category>` may appear anywhere; the other
/// words form the project name.
fn split_args(words: &[&str]) -> (String, Option<String>) {
    let mut project = Vec::new();
    let mut category = None;
    let mut it = words.iter();

    while let Some(w) = it.next() {
        if *w == "-c" || *w == "--category" {
            category = it.next().map(|c| c.to_string());
        } else {
            project.push(*w);
        }
    }
    (project.join(" "), category)
}

pub(crate) fn parse_line(line: &str) -> ShellCommand {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, rest)) = words.split_first() else {
        return ShellCommand::Empty;
    };

    let (project, category) = split_args(rest);

    match verb.to_lowercase().as_str() {
        "start" => ShellCommand::Start(project, category),
        "stop" => ShellCommand::Stop(project, category),
        "toggle" | "t" => ShellCommand::Toggle(project, category),
        "status" | "s" => ShellCommand::Status,
        "list" | "ls" => ShellCommand::List(category),
        "summary" => ShellCommand::Summary(category),
        "projects" => ShellCommand::Projects,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => ShellCommand::Unknown(other.to_string()),
    }
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut logger = TimeLogger::open(cfg)?;
    logger.initialize()?;

    info("rWorklog shell, type 'help' for commands.");
    let stdin = io::stdin();
    run(&mut logger, cfg, stdin.lock())?;

    let running = logger.active_sessions().len();
    if running > 0 {
        info(format!("{running} timer(s) still running."));
    }
    Ok(())
}

fn run<R: BufRead>(logger: &mut TimeLogger, cfg: &Config, input: R) -> AppResult<()> {
    let mut lines = input.lines();

    loop {
        print!("rworklog> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let command = parse_line(&line?);
        debug!(?command, "shell command");

        if command == ShellCommand::Quit {
            break;
        }

        if let Err(e) = execute(logger, cfg, command) {
            if e.is_validation() {
                warning(e);
            } else {
                error(e);
            }
        }
    }

    Ok(())
}

fn category_or_default(arg: Option<String>, cfg: &Config) -> AppResult<Category> {
    crate::cli::resolve_category(&arg, cfg)
}

fn execute(logger: &mut TimeLogger, cfg: &Config, command: ShellCommand) -> AppResult<()> {
    match command {
        ShellCommand::Start(project, category) => {
            let category = category_or_default(category, cfg)?;
            let started = logger.start(&project, category)?;
            report_started(&started);
            refresh(logger, &changed_categories(category, &started.switched))
        }
        ShellCommand::Stop(project, category) => {
            let category = category_or_default(category, cfg)?;
            report_stopped(category, &logger.stop(&project, category)?);
            refresh(logger, &[category])
        }
        ShellCommand::Toggle(project, category) => {
            let category = category_or_default(category, cfg)?;
            let toggled = logger.toggle(&project, category)?;
            report_toggled(category, &toggled);
            let changed = match &toggled {
                Toggled::Started(started) => changed_categories(category, &started.switched),
                Toggled::Stopped(_) => vec![category],
            };
            refresh(logger, &changed)
        }
        ShellCommand::Status => {
            print!("{}", render::status(logger.active_sessions(), logger.now()));
            Ok(())
        }
        ShellCommand::List(category) => {
            let category = category_or_default(category, cfg)?;
            let window = logger.window_days();
            let records = logger.recent_records(category, window, date::today())?;
            print!("{}", render::records_table(&records));
            Ok(())
        }
        ShellCommand::Summary(category) => {
            let category = category_or_default(category, cfg)?;
            let window = logger.window_days();
            print!(
                "{}",
                summary_text(logger, category, window, date::today(), false)?
            );
            Ok(())
        }
        ShellCommand::Projects => {
            print!("{}", render::project_list(&logger.known_projects()?));
            Ok(())
        }
        ShellCommand::Help => {
            println!("{HELP}");
            Ok(())
        }
        ShellCommand::Quit | ShellCommand::Empty => Ok(()),
        ShellCommand::Unknown(verb) => Err(AppError::Validation(format!(
            "Unknown command '{verb}', type 'help'."
        ))),
    }
}

/// Categories to redraw after a start: the started one plus every category
/// whose log gained a switched-out row, in `Category::ALL` order.
fn changed_categories(started: Category, switched: &[SwitchedOut]) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|c| *c == started || switched.iter().any(|s| s.category == *c))
        .collect()
}

/// Redraw the table and summary of each category that just changed.
fn refresh(logger: &TimeLogger, categories: &[Category]) -> AppResult<()> {
    let today = date::today();
    let window = logger.window_days();

    for &category in categories {
        header(format!("{} (last {} days)", category.label(), window));
        print!(
            "{}",
            render::records_table(&logger.recent_records(category, window, today)?)
        );
        println!();
        print!("{}", summary_text(logger, category, window, today, false)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multi_word_project_and_category() {
        assert_eq!(
            parse_line("start Client Portal -c nb"),
            ShellCommand::Start("Client Portal".into(), Some("nb".into()))
        );
        assert_eq!(
            parse_line("  stop   Alpha  "),
            ShellCommand::Stop("Alpha".into(), None)
        );
    }

    #[test]
    fn switch_redraws_both_categories() {
        let record = crate::models::LogRecord::new(
            date::today(),
            "Client",
            chrono::NaiveTime::MIN,
            chrono::NaiveTime::MIN,
            5.0,
        );
        let switched = vec![SwitchedOut {
            category: Category::Billable,
            record,
        }];

        assert_eq!(
            changed_categories(Category::NonBillable, &switched),
            [Category::Billable, Category::NonBillable]
        );
        assert_eq!(
            changed_categories(Category::Billable, &switched),
            [Category::Billable]
        );
        assert_eq!(
            changed_categories(Category::NonBillable, &[]),
            [Category::NonBillable]
        );
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_line("   "), ShellCommand::Empty);
        assert_eq!(parse_line("dance"), ShellCommand::Unknown("dance".into()));
        assert_eq!(parse_line("QUIT"), ShellCommand::Quit);
    }
}
