mod common;
use common::{open_pool, quantitative_draft, register_user, setup_test_db};

use chrono::{Days, NaiveTime};
use rlifetracker::core::analytics::{AnalyticsLogic, pearson};
use rlifetracker::core::catalog::CatalogLogic;
use rlifetracker::core::recorder::RecorderLogic;
use rlifetracker::db::pool::DbPool;
use rlifetracker::errors::AppError;
use rlifetracker::models::user::AuthUser;
use rlifetracker::utils::date::today;

/// Record a value `days_ago` days in the past (midnight of that day).
fn record_on(pool: &mut DbPool, user: &AuthUser, metric: &str, value: f64, days_ago: u64) {
    let when = (today() - Days::new(days_ago)).and_time(NaiveTime::MIN);
    RecorderLogic::record_entry(pool, user, metric, value, Some(when)).expect("record entry");
}

fn setup_metrics(pool: &mut DbPool, user: &AuthUser, names: &[&str]) {
    let cat = CatalogLogic::create_category(pool, user, "Health").expect("category");
    for name in names {
        CatalogLogic::create_metric(pool, user, cat, quantitative_draft(name)).expect("metric");
    }
}

#[test]
fn test_record_then_series_round_trip() {
    let db_path = setup_test_db("series_round_trip");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");
    setup_metrics(&mut pool, &user, &["Daily Steps"]);

    record_on(&mut pool, &user, "Daily Steps", 8000.0, 2);

    let series = AnalyticsLogic::time_series(&mut pool, &user, "Daily Steps", 7).unwrap();
    let expected_day = today() - Days::new(2);

    assert!(series.contains(&(expected_day, 8000.0)));
}

#[test]
fn test_series_excludes_entries_outside_window() {
    let db_path = setup_test_db("series_window");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");
    setup_metrics(&mut pool, &user, &["Daily Steps"]);

    record_on(&mut pool, &user, "Daily Steps", 1000.0, 10);
    record_on(&mut pool, &user, "Daily Steps", 2000.0, 1);

    let series = AnalyticsLogic::time_series(&mut pool, &user, "Daily Steps", 7).unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].1, 2000.0);
}

#[test]
fn test_series_boundary_day_is_inside_window() {
    let db_path = setup_test_db("series_boundary");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");
    setup_metrics(&mut pool, &user, &["Daily Steps"]);

    record_on(&mut pool, &user, "Daily Steps", 3000.0, 7);

    let series = AnalyticsLogic::time_series(&mut pool, &user, "Daily Steps", 7).unwrap();
    assert_eq!(series.len(), 1);
}

#[test]
fn test_series_on_unknown_metric_is_not_found() {
    let db_path = setup_test_db("series_unknown");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");

    let err = AnalyticsLogic::time_series(&mut pool, &user, "Nope", 7).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_series_empty_when_metric_has_no_entries() {
    let db_path = setup_test_db("series_empty");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");
    setup_metrics(&mut pool, &user, &["Daily Steps"]);

    // distinct from NotFound: the metric exists, it just has no data
    let series = AnalyticsLogic::time_series(&mut pool, &user, "Daily Steps", 7).unwrap();
    assert!(series.is_empty());
}

#[test]
fn test_same_day_entries_are_all_kept() {
    let db_path = setup_test_db("same_day_entries");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");
    setup_metrics(&mut pool, &user, &["Daily Steps"]);

    record_on(&mut pool, &user, "Daily Steps", 4000.0, 1);
    record_on(&mut pool, &user, "Daily Steps", 9000.0, 1);

    let series = AnalyticsLogic::time_series(&mut pool, &user, "Daily Steps", 7).unwrap();
    assert_eq!(series.len(), 2);
}

#[test]
fn test_paired_series_fans_out_duplicate_days() {
    let db_path = setup_test_db("pair_fan_out");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");
    setup_metrics(&mut pool, &user, &["A", "B"]);

    // A: (day1, 2), (day2, 4), (day1, 6); B: (day1, 10), (day3, 1).
    record_on(&mut pool, &user, "A", 2.0, 3);
    record_on(&mut pool, &user, "A", 4.0, 2);
    record_on(&mut pool, &user, "A", 6.0, 3);
    record_on(&mut pool, &user, "B", 10.0, 3);
    record_on(&mut pool, &user, "B", 1.0, 1);

    // Only day1 overlaps, and its two A-entries each pair with the single
    // B-entry: two rows, never an averaged one.
    let mut pairs = AnalyticsLogic::paired_series(&mut pool, &user, "A", "B", 7).unwrap();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    assert_eq!(pairs, vec![(2.0, 10.0), (6.0, 10.0)]);
}

#[test]
fn test_correlation_over_fanned_out_pairs() {
    let db_path = setup_test_db("corr_fan_out");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");
    setup_metrics(&mut pool, &user, &["A", "B"]);

    // Pairs after the date join: (2,10), (6,10), (4,1).
    record_on(&mut pool, &user, "A", 2.0, 3);
    record_on(&mut pool, &user, "A", 6.0, 3);
    record_on(&mut pool, &user, "A", 4.0, 2);
    record_on(&mut pool, &user, "B", 10.0, 3);
    record_on(&mut pool, &user, "B", 1.0, 2);

    let r = AnalyticsLogic::correlation(&mut pool, &user, "A", "B", 7)
        .unwrap()
        .expect("three paired rows");

    // xs = [2, 6, 4], ys = [10, 10, 1]: the covariance cancels exactly.
    assert!(r.abs() < 1e-9);
}

#[test]
fn test_correlation_without_overlap_is_none() {
    let db_path = setup_test_db("corr_no_overlap");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");
    setup_metrics(&mut pool, &user, &["A", "B"]);

    record_on(&mut pool, &user, "A", 1.0, 2);
    record_on(&mut pool, &user, "B", 2.0, 4);

    let r = AnalyticsLogic::correlation(&mut pool, &user, "A", "B", 7).unwrap();
    assert_eq!(r, None);
}

#[test]
fn test_correlation_ignores_entries_outside_window() {
    let db_path = setup_test_db("corr_window");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");
    setup_metrics(&mut pool, &user, &["A", "B"]);

    // the only overlapping day is outside the window
    record_on(&mut pool, &user, "A", 1.0, 10);
    record_on(&mut pool, &user, "B", 2.0, 10);

    let r = AnalyticsLogic::correlation(&mut pool, &user, "A", "B", 7).unwrap();
    assert_eq!(r, None);
}

#[test]
fn test_correlation_with_unknown_metric_is_none_not_error() {
    let db_path = setup_test_db("corr_unknown_metric");
    let mut pool = open_pool(&db_path);
    let user = register_user(&mut pool, "ada");
    setup_metrics(&mut pool, &user, &["A"]);

    record_on(&mut pool, &user, "A", 1.0, 2);

    // the join naturally yields zero rows for a name that does not exist
    let r = AnalyticsLogic::correlation(&mut pool, &user, "A", "Nope", 7).unwrap();
    assert_eq!(r, None);
}

#[test]
fn test_correlation_does_not_cross_users() {
    let db_path = setup_test_db("corr_user_scope");
    let mut pool = open_pool(&db_path);

    let ada = register_user(&mut pool, "ada");
    let bob = register_user(&mut pool, "bob");
    setup_metrics(&mut pool, &ada, &["A", "B"]);
    setup_metrics(&mut pool, &bob, &["A", "B"]);

    // only bob has overlapping data
    record_on(&mut pool, &bob, "A", 1.0, 2);
    record_on(&mut pool, &bob, "B", 2.0, 2);

    let r = AnalyticsLogic::correlation(&mut pool, &ada, "A", "B", 7).unwrap();
    assert_eq!(r, None);
}

#[test]
fn test_pearson_perfect_positive_and_negative() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    let up = [10.0, 20.0, 30.0, 40.0];
    let down = [8.0, 6.0, 4.0, 2.0];

    let r_up = pearson(&xs, &up).unwrap();
    let r_down = pearson(&xs, &down).unwrap();

    assert!((r_up - 1.0).abs() < 1e-9);
    assert!((r_down + 1.0).abs() < 1e-9);
}

#[test]
fn test_pearson_undefined_cases() {
    // empty input
    assert_eq!(pearson(&[], &[]), None);
    // mismatched lengths
    assert_eq!(pearson(&[1.0], &[1.0, 2.0]), None);
    // zero variance on one side
    assert_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), None);
}
