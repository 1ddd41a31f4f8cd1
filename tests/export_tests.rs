mod common;
use common::{open_pool, quantitative_draft, register_user, rlt, setup_test_db, temp_out};

use chrono::{Days, NaiveTime};
use predicates::str::contains;
use rlifetracker::core::catalog::CatalogLogic;
use rlifetracker::core::recorder::RecorderLogic;
use rlifetracker::utils::date::today;
use std::fs;

fn seed_entries(db_path: &str) {
    let mut pool = open_pool(db_path);
    let user = register_user(&mut pool, "ada");
    let cat = CatalogLogic::create_category(&mut pool, &user, "Health").unwrap();
    CatalogLogic::create_metric(&mut pool, &user, cat, quantitative_draft("Daily Steps")).unwrap();
    CatalogLogic::create_metric(&mut pool, &user, cat, quantitative_draft("Hours of Sleep"))
        .unwrap();

    let when = (today() - Days::new(1)).and_time(NaiveTime::MIN);
    RecorderLogic::record_entry(&mut pool, &user, "Daily Steps", 8000.0, Some(when)).unwrap();
    RecorderLogic::record_entry(&mut pool, &user, "Hours of Sleep", 7.5, Some(when)).unwrap();
}

#[test]
fn test_export_entries_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    seed_entries(&db_path);

    rlt()
        .args([
            "--db", &db_path, "export", "--user", "ada", "--format", "csv", "--file", &out, "-f",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.starts_with("category,metric,value,timestamp"));
    assert!(content.contains("Health,Daily Steps,8000"));
    assert!(content.contains("Hours of Sleep,7.5"));
}

#[test]
fn test_export_entries_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    seed_entries(&db_path);

    rlt()
        .args([
            "--db", &db_path, "export", "--user", "ada", "--format", "json", "--file", &out, "-f",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r["metric"] == "Daily Steps"));
}

#[test]
fn test_export_single_metric_filter() {
    let db_path = setup_test_db("export_filter");
    let out = temp_out("export_filter", "csv");
    seed_entries(&db_path);

    rlt()
        .args([
            "--db",
            &db_path,
            "export",
            "--user",
            "ada",
            "--format",
            "csv",
            "--file",
            &out,
            "--metric",
            "Daily Steps",
            "-f",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("Daily Steps"));
    assert!(!content.contains("Hours of Sleep"));
}

#[test]
fn test_export_unknown_user_fails() {
    let db_path = setup_test_db("export_unknown_user");
    let out = temp_out("export_unknown_user", "csv");
    seed_entries(&db_path);

    rlt()
        .args([
            "--db", &db_path, "export", "--user", "nobody", "--format", "csv", "--file", &out,
            "-f",
        ])
        .assert()
        .failure()
        .stderr(contains("Not found"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_path");
    seed_entries(&db_path);

    rlt()
        .args([
            "--db",
            &db_path,
            "export",
            "--user",
            "ada",
            "--format",
            "csv",
            "--file",
            "relative.csv",
            "-f",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}
