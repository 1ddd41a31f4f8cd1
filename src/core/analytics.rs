use crate::core::catalog::CatalogLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::user::AuthUser;
use crate::utils::date::window_start;
use chrono::NaiveDate;
use rusqlite::params;

/// Trailing-window queries over recorded entries: single-metric series and
/// date-aligned correlation between two metrics.
pub struct AnalyticsLogic;

impl AnalyticsLogic {
    /// Entries of one metric within the trailing window, oldest first.
    ///
    /// The window is `date(timestamp) >= today - window_days`, inclusive,
    /// evaluated against the current date at query time. A metric with no
    /// qualifying entries yields an empty vector; an unknown metric name
    /// is NotFound (the two cases are distinct on purpose).
    pub fn time_series(
        pool: &mut DbPool,
        user: &AuthUser,
        metric_name: &str,
        window_days: u32,
    ) -> AppResult<Vec<(NaiveDate, f64)>> {
        let metric = CatalogLogic::find_metric(pool, user, metric_name)?;
        let cutoff = window_start(window_days).format("%Y-%m-%d").to_string();

        let mut stmt = pool.conn.prepare(
            "SELECT date(timestamp), value
             FROM entries
             WHERE user_id = ?1
               AND metric_id = ?2
               AND date(timestamp) >= ?3
             ORDER BY timestamp ASC",
        )?;

        let rows = stmt.query_map(params![user.id, metric.id, cutoff], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;

        let mut out = Vec::new();
        for r in rows {
            let (day, value) = r?;
            let day = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(day.clone()))?;
            out.push((day, value));
        }
        Ok(out)
    }

    /// Date-aligned join of two metrics' entries over the trailing window.
    ///
    /// Both metrics' entries are restricted to the window and inner-joined
    /// on calendar date: only dates where BOTH have at least one entry
    /// contribute. Duplicate dates fan out — a date with 2 entries for one
    /// metric and 1 for the other yields 2 paired rows; pairs are never
    /// aggregated per date. An unknown metric name simply joins to nothing.
    pub fn paired_series(
        pool: &mut DbPool,
        user: &AuthUser,
        metric1_name: &str,
        metric2_name: &str,
        window_days: u32,
    ) -> AppResult<Vec<(f64, f64)>> {
        let cutoff = window_start(window_days).format("%Y-%m-%d").to_string();

        let mut stmt = pool.conn.prepare(
            "WITH metric_data AS (
                SELECT m.name AS name, e.value AS value, date(e.timestamp) AS day
                FROM entries e
                JOIN metrics m ON e.metric_id = m.id
                WHERE m.user_id = ?1
                  AND m.name IN (?2, ?3)
                  AND date(e.timestamp) >= ?4
             )
             SELECT m1.value, m2.value
             FROM (SELECT * FROM metric_data WHERE name = ?2) AS m1
             JOIN (SELECT * FROM metric_data WHERE name = ?3) AS m2
               ON m1.day = m2.day
             ORDER BY m1.day ASC",
        )?;

        let rows = stmt.query_map(
            params![user.id, metric1_name, metric2_name, cutoff],
            |row| Ok((row.get::<_, f64>(0)?, row.get::<_, f64>(1)?)),
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Pearson correlation between two metrics over the trailing window,
    /// computed on the date-aligned pairs from [`Self::paired_series`].
    ///
    /// Returns None when no paired rows exist and when either paired
    /// series has zero variance, where the coefficient is undefined.
    pub fn correlation(
        pool: &mut DbPool,
        user: &AuthUser,
        metric1_name: &str,
        metric2_name: &str,
        window_days: u32,
    ) -> AppResult<Option<f64>> {
        let pairs = Self::paired_series(pool, user, metric1_name, metric2_name, window_days)?;

        let xs: Vec<f64> = pairs.iter().map(|(x, _)| *x).collect();
        let ys: Vec<f64> = pairs.iter().map(|(_, y)| *y).collect();

        Ok(pearson(&xs, &ys))
    }
}

/// Pearson's r over two equally long series.
/// None for an empty series, mismatched lengths, or zero variance on
/// either side.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return None;
    }

    Some(cov / denom)
}
