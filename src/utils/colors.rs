//! ANSI color helper utilities for terminal output.

use crate::models::Category;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const MAGENTA: &str = "\x1b[35m";

/// Billable work is green, the rest magenta.
pub fn color_for_category(category: Category) -> &'static str {
    match category {
        Category::Billable => GREEN,
        Category::NonBillable => MAGENTA,
    }
}

pub fn colorize_category(category: Category) -> String {
    format!(
        "{}[{}]{}",
        color_for_category(category),
        category.label(),
        RESET
    )
}

pub fn grey(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
