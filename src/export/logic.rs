// src/export/logic.rs

use crate::core::TimeLogger;
use crate::core::aggregate::recent_records;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::models::Category;
use crate::ui::messages::warning;
use crate::utils::date;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Collect the rows to export.
    ///
    /// - `category`: `None` exports both logs, billable first
    /// - `days`: `None` exports the full history, otherwise the trailing window
    pub fn collect(
        logger: &TimeLogger,
        category: Option<Category>,
        days: Option<u32>,
    ) -> AppResult<Vec<RecordExport>> {
        let categories: Vec<Category> = match category {
            Some(c) => vec![c],
            None => Category::ALL.to_vec(),
        };

        let today = date::today();
        let mut rows = Vec::new();
        for c in categories {
            let mut records = logger.records(c)?;
            if let Some(d) = days {
                records = recent_records(&records, d, today);
            }
            rows.extend(records.iter().map(|r| RecordExport::from_record(c, r)));
        }
        Ok(rows)
    }

    pub fn export(
        logger: &TimeLogger,
        format: ExportFormat,
        file: &str,
        category: Option<Category>,
        days: Option<u32>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let rows = Self::collect(logger, category, days)?;

        if rows.is_empty() {
            warning("No records found for the selected period.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
