//! User-facing one-line messages. Everything goes to stdout except errors,
//! so a failing command leaves its diagnosis on stderr.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Kind {
    Info,
    Success,
    Warning,
    Error,
    Tracking,
}

impl Kind {
    fn color(self) -> &'static str {
        match self {
            Kind::Info => "\x1b[34m",
            Kind::Success | Kind::Tracking => "\x1b[32m",
            Kind::Warning => "\x1b[33m",
            Kind::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Kind::Info => "ℹ️",
            Kind::Success => "✅",
            Kind::Warning => "⚠️",
            Kind::Error => "❌",
            Kind::Tracking => "⏱️",
        }
    }
}

fn emit(kind: Kind, msg: impl fmt::Display) {
    let line = format!("{}{}{} {}{}", kind.color(), BOLD, kind.icon(), RESET, msg);
    match kind {
        Kind::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Kind::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Kind::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Kind::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Kind::Error, msg);
}

/// A timer was started.
pub fn tracking<T: fmt::Display>(msg: T) {
    emit(Kind::Tracking, msg);
}

/// Section title above a table or summary.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", Kind::Info.color(), BOLD, msg, RESET);
}
