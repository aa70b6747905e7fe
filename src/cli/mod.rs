pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Category;

/// Resolve the `--category` option, falling back to the configured default.
pub(crate) fn resolve_category(arg: &Option<String>, cfg: &Config) -> AppResult<Category> {
    match arg {
        Some(code) => {
            Category::from_code(code).ok_or_else(|| AppError::InvalidCategory(code.clone()))
        }
        None => Ok(cfg.default_category),
    }
}
