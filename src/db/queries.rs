use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::metric::{Metric, MetricDraft};
use crate::models::metric_kind::MetricKind;
use chrono::NaiveDateTime;
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

/// Storage format for entry timestamps (lexicographically date-ordered).
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

const METRIC_COLUMNS: &str = "id, category_id, name, kind, min_value, max_value,
                              description, example, example_low, example_high";

pub fn map_metric_row(row: &Row) -> Result<Metric> {
    let kind_str: String = row.get("kind")?;
    let kind = MetricKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDefinition(format!(
                "Invalid kind: {}",
                kind_str
            ))),
        )
    })?;

    Ok(Metric {
        id: row.get("id")?,
        category_id: row.get("category_id")?,
        name: row.get("name")?,
        kind,
        min_value: row.get("min_value")?,
        max_value: row.get("max_value")?,
        description: row.get("description")?,
        example: row.get("example")?,
        example_low: row.get("example_low")?,
        example_high: row.get("example_high")?,
    })
}

// ---------------------------
// Users
// ---------------------------

/// Lookup by unique username. Returns (id, password_hash).
pub fn find_user_credentials(conn: &Connection, username: &str) -> AppResult<Option<(i64, String)>> {
    let mut stmt = conn.prepare("SELECT id, password_hash FROM users WHERE username = ?1")?;

    let found = stmt
        .query_row([username], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })
        .optional()?;

    Ok(found)
}

pub fn insert_user(conn: &Connection, username: &str, password_hash: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
        params![username, password_hash],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------
// Categories
// ---------------------------

pub fn find_category_id(conn: &Connection, user_id: i64, name: &str) -> AppResult<Option<i64>> {
    let mut stmt = conn.prepare("SELECT id FROM categories WHERE user_id = ?1 AND name = ?2")?;

    let id = stmt
        .query_row(params![user_id, name], |row| row.get::<_, i64>(0))
        .optional()?;

    Ok(id)
}

/// True when the category id belongs to this user. Keeps a metric from ever
/// referencing another user's category.
pub fn category_belongs_to_user(conn: &Connection, user_id: i64, category_id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM categories WHERE id = ?1 AND user_id = ?2")?;
    Ok(stmt.exists(params![category_id, user_id])?)
}

pub fn insert_category(conn: &Connection, user_id: i64, name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO categories (user_id, name) VALUES (?1, ?2)",
        params![user_id, name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_categories(conn: &Connection, user_id: i64) -> AppResult<Vec<Category>> {
    let mut stmt = conn.prepare(
        "SELECT id, name FROM categories
         WHERE user_id = ?1
         ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([user_id], |row| {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_category_by_id(conn: &Connection, category_id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM categories WHERE id = ?1", [category_id])?;
    Ok(())
}

// ---------------------------
// Metrics
// ---------------------------

pub fn find_metric_by_name(conn: &Connection, user_id: i64, name: &str) -> AppResult<Option<Metric>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {METRIC_COLUMNS} FROM metrics WHERE user_id = ?1 AND name = ?2"
    ))?;

    let metric = stmt
        .query_row(params![user_id, name], map_metric_row)
        .optional()?;

    Ok(metric)
}

pub fn insert_metric(
    conn: &Connection,
    user_id: i64,
    category_id: i64,
    draft: &MetricDraft,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO metrics (
            user_id, category_id, name, kind, min_value, max_value,
            description, example, example_low, example_high
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            user_id,
            category_id,
            draft.name,
            draft.kind.to_db_str(),
            draft.min_value,
            draft.max_value,
            draft.description,
            draft.example,
            draft.example_low,
            draft.example_high,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a metric's mutable fields (kind and name are immutable).
pub fn update_metric_fields(conn: &Connection, metric: &Metric) -> AppResult<()> {
    conn.execute(
        "UPDATE metrics
         SET min_value = ?1,
             max_value = ?2,
             description = ?3,
             example = ?4,
             example_low = ?5,
             example_high = ?6
         WHERE id = ?7",
        params![
            metric.min_value,
            metric.max_value,
            metric.description,
            metric.example,
            metric.example_low,
            metric.example_high,
            metric.id,
        ],
    )?;
    Ok(())
}

pub fn delete_metric_by_id(conn: &Connection, metric_id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM metrics WHERE id = ?1", [metric_id])?;
    Ok(())
}

/// Metric ids of one category, used by the category cascade.
pub fn metric_ids_in_category(
    conn: &Connection,
    user_id: i64,
    category_id: i64,
) -> AppResult<Vec<i64>> {
    let mut stmt =
        conn.prepare("SELECT id FROM metrics WHERE user_id = ?1 AND category_id = ?2")?;

    let rows = stmt.query_map(params![user_id, category_id], |row| row.get::<_, i64>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All metrics of a user with their category name, ordered by category
/// name then metric name (lexicographic, case as stored).
pub fn list_metrics_with_categories(
    conn: &Connection,
    user_id: i64,
) -> AppResult<Vec<(String, Metric)>> {
    let mut stmt = conn.prepare(
        "SELECT c.name, m.id, m.category_id, m.name, m.kind, m.min_value, m.max_value,
                m.description, m.example, m.example_low, m.example_high
         FROM metrics m
         JOIN categories c ON m.category_id = c.id
         WHERE m.user_id = ?1
         ORDER BY c.name, m.name",
    )?;

    let rows = stmt.query_map([user_id], |row| {
        let category: String = row.get(0)?;
        let kind_str: String = row.get(4)?;
        let kind = MetricKind::from_db_str(&kind_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDefinition(format!(
                    "Invalid kind: {}",
                    kind_str
                ))),
            )
        })?;

        Ok((
            category,
            Metric {
                id: row.get(1)?,
                category_id: row.get(2)?,
                name: row.get(3)?,
                kind,
                min_value: row.get(5)?,
                max_value: row.get(6)?,
                description: row.get(7)?,
                example: row.get(8)?,
                example_low: row.get(9)?,
                example_high: row.get(10)?,
            },
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Entries
// ---------------------------

pub fn insert_entry(
    conn: &Connection,
    user_id: i64,
    metric_id: i64,
    value: f64,
    timestamp: &NaiveDateTime,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (user_id, metric_id, value, timestamp)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            user_id,
            metric_id,
            value,
            timestamp.format(TIMESTAMP_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// Bulk delete by foreign key, used by the metric-deletion cascade.
pub fn delete_entries_for_metric(conn: &Connection, metric_id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM entries WHERE metric_id = ?1", [metric_id])?;
    Ok(n)
}

pub fn count_entries_for_metric(conn: &Connection, metric_id: i64) -> AppResult<i64> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM entries WHERE metric_id = ?1",
        [metric_id],
        |row| row.get(0),
    )?;
    Ok(n)
}
