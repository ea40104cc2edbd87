// src/export/logic.rs

use crate::core::logic::Core;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_entries, load_entries_in_range, require_schedule};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DayExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export per-day rows with their timebank.
    ///
    /// - `range`: `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or a
    ///   `start:end` pair of the same shape.
    ///
    /// Returns the number of exported days.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        let entries = if range.eq_ignore_ascii_case("all") {
            load_all_entries(&pool.conn)?
        } else {
            let (from, to) = parse_range(range)?;
            load_entries_in_range(&pool.conn, &from, &to)?
        };

        if entries.is_empty() {
            warning("No time entries found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let schedule = require_schedule(&pool.conn)?;
        let rows: Vec<DayExport> = entries
            .iter()
            .map(|e| DayExport::from(&Core::build_daily_summary(&schedule, e)))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog_soft(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} days ({range}) → {}", rows.len(), path.display()),
        );

        Ok(rows.len())
    }
}
