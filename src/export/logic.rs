use crate::db::pool::DbPool;
use crate::db::queries::find_user_credentials;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::EntryExport;
use crate::export::{ExportFormat, notify_export_success};

use crate::export::csv::write_csv;
use crate::export::json::write_json;
use rusqlite::params;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export all recorded entries of one account.
    ///
    /// - `username`: the account whose entries are dumped
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `metric`: optional filter to a single metric name
    pub fn export(
        pool: &mut DbPool,
        username: &str,
        format: &ExportFormat,
        file: &str,
        metric: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let (user_id, _) = find_user_credentials(&pool.conn, username)?
            .ok_or_else(|| AppError::NotFound(format!("user '{}'", username)))?;

        let rows = load_entries(pool, user_id, metric.as_deref())?;

        match format {
            ExportFormat::Csv => write_csv(file, &rows)?,
            ExportFormat::Json => write_json(file, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}

fn load_entries(pool: &mut DbPool, user_id: i64, metric: Option<&str>) -> AppResult<Vec<EntryExport>> {
    let base = "SELECT c.name, m.name, e.value, e.timestamp
                FROM entries e
                JOIN metrics m ON e.metric_id = m.id
                JOIN categories c ON m.category_id = c.id
                WHERE e.user_id = ?1";

    let sql = match metric {
        Some(_) => format!("{base} AND m.name = ?2 ORDER BY e.timestamp ASC"),
        None => format!("{base} ORDER BY e.timestamp ASC"),
    };

    let mut stmt = pool.conn.prepare(&sql)?;

    let map = |row: &rusqlite::Row| -> rusqlite::Result<EntryExport> {
        Ok(EntryExport {
            category: row.get(0)?,
            metric: row.get(1)?,
            value: row.get(2)?,
            timestamp: row.get(3)?,
        })
    };

    let rows = match metric {
        Some(name) => stmt.query_map(params![user_id, name], map)?,
        None => stmt.query_map(params![user_id], map)?,
    };

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
