use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the four tracker tables.
///
/// Uniqueness lives in the schema (username; (user_id, name) for categories
/// and metrics) so a constraint slip in the upper layers can never corrupt
/// the catalog. Entries carry no uniqueness: several entries for the same
/// metric on the same day are all kept as distinct data points.
fn create_tracker_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            username      TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at    TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS categories (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            name    TEXT NOT NULL,
            UNIQUE(user_id, name),
            FOREIGN KEY (user_id) REFERENCES users (id)
        );

        CREATE TABLE IF NOT EXISTS metrics (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      INTEGER NOT NULL,
            category_id  INTEGER NOT NULL,
            name         TEXT NOT NULL,
            kind         TEXT NOT NULL CHECK(kind IN ('quantitative','qualitative')),
            min_value    REAL NOT NULL,
            max_value    REAL,
            description  TEXT NOT NULL DEFAULT '',
            example      TEXT,
            example_low  TEXT,
            example_high TEXT,
            UNIQUE(user_id, name),
            FOREIGN KEY (user_id) REFERENCES users (id),
            FOREIGN KEY (category_id) REFERENCES categories (id)
        );

        CREATE TABLE IF NOT EXISTS entries (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id   INTEGER NOT NULL,
            metric_id INTEGER NOT NULL,
            value     REAL NOT NULL,
            timestamp TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY (user_id) REFERENCES users (id),
            FOREIGN KEY (metric_id) REFERENCES metrics (id)
        );

        CREATE INDEX IF NOT EXISTS idx_metrics_user_name ON metrics(user_id, name);
        CREATE INDEX IF NOT EXISTS idx_entries_metric_ts ON entries(metric_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_entries_user_ts ON entries(user_id, timestamp);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create tracker tables (first run only announces it)
    let fresh = !table_exists(conn, "users")?;

    create_tracker_tables(conn)?;

    if fresh {
        success("Created tracker schema (users, categories, metrics, entries).");
    }

    Ok(())
}
