#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rlifetracker::core::auth::AuthLogic;
use rlifetracker::db::initialize::init_db;
use rlifetracker::db::pool::DbPool;
use rlifetracker::models::metric::MetricDraft;
use rlifetracker::models::metric_kind::MetricKind;
use rlifetracker::models::user::AuthUser;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rlt() -> Command {
    cargo_bin_cmd!("rlifetracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rlifetracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Open a pool on the given path with the schema in place.
pub fn open_pool(db_path: &str) -> DbPool {
    let pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Register a throwaway account through the library API.
pub fn register_user(pool: &mut DbPool, username: &str) -> AuthUser {
    AuthLogic::register(pool, username, "hunter2").expect("register user")
}

pub fn quantitative_draft(name: &str) -> MetricDraft {
    MetricDraft {
        name: name.to_string(),
        kind: MetricKind::Quantitative,
        min_value: 0.0,
        max_value: Some(100.0),
        description: "a measured quantity".to_string(),
        example: Some("e.g. 42".to_string()),
        example_low: None,
        example_high: None,
    }
}

pub fn qualitative_draft(name: &str) -> MetricDraft {
    MetricDraft {
        name: name.to_string(),
        kind: MetricKind::Qualitative,
        min_value: 1.0,
        max_value: Some(10.0),
        description: "a subjective rating".to_string(),
        example: None,
        example_low: Some("1 = awful".to_string()),
        example_high: Some("10 = great".to_string()),
    }
}
