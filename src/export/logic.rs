// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::{load_all, load_between};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DisruptionExport;
use crate::ui::messages::warning;
use crate::utils::date::period_bounds;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export disruptions.
    ///
    /// `range` is `None`, `"all"` or a period expression:
    /// `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or two of them joined by `:`.
    ///
    /// Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(period_bounds(r)?),
        };

        let rows = match bounds {
            None => load_all(&pool.conn)?,
            Some((from, to)) => load_between(&pool.conn, from, to)?,
        };

        if rows.is_empty() {
            warning("No disruptions found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let flat: Vec<DisruptionExport> = rows.iter().map(DisruptionExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&flat, path)?,
            ExportFormat::Json => export_json(&flat, path)?,
        }

        crate::db::log::audit_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} rows to {}", flat.len(), path.display()),
        );

        Ok(flat.len())
    }
}
