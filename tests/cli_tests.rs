mod common;
use common::{open_pool, quantitative_draft, register_user, rlt, setup_test_db};

use chrono::{Days, NaiveTime};
use predicates::str::contains;
use rlifetracker::core::catalog::CatalogLogic;
use rlifetracker::core::recorder::RecorderLogic;
use rlifetracker::utils::date::today;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rlt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_shell_register_seed_and_track() {
    let db_path = setup_test_db("cli_shell_register");

    // register → default catalog → enter today's data (two values, five
    // skips) → logout → exit
    let script = "2\nada\nsecret\nsecret\n1\n1\n8000\n7.5\n\n\n\n\n\n6\n3\n";

    rlt()
        .args(["--db", &db_path, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Account created successfully"))
        .stdout(contains("Default metrics set up successfully"))
        .stdout(contains("DAILY TRACKING - TODAY"))
        .stdout(contains("Recorded!"))
        .stdout(contains("Daily tracking complete"))
        .stdout(contains("Logged out successfully"))
        .stdout(contains("Thanks for using Life Tracker"));
}

#[test]
fn test_shell_login_failure_is_generic() {
    let db_path = setup_test_db("cli_login_generic");
    {
        let mut pool = open_pool(&db_path);
        register_user(&mut pool, "ada");
    }

    // wrong password for a real account
    rlt()
        .args(["--db", &db_path, "shell"])
        .write_stdin("1\nada\nwrongpw\nn\n3\n")
        .assert()
        .success()
        .stderr(contains("Invalid username or password!"));

    // same message for an account that does not exist
    rlt()
        .args(["--db", &db_path, "shell"])
        .write_stdin("1\nghost\nwrongpw\nn\n3\n")
        .assert()
        .success()
        .stderr(contains("Invalid username or password!"));
}

#[test]
fn test_shell_correlation_and_visualize() {
    let db_path = setup_test_db("cli_insights");
    {
        let mut pool = open_pool(&db_path);
        let user = register_user(&mut pool, "ada");
        let cat = CatalogLogic::create_category(&mut pool, &user, "Health").unwrap();
        CatalogLogic::create_metric(&mut pool, &user, cat, quantitative_draft("A")).unwrap();
        CatalogLogic::create_metric(&mut pool, &user, cat, quantitative_draft("B")).unwrap();

        // three aligned days with a perfect linear relation
        for (days_ago, a, b) in [(1u64, 1.0, 2.0), (2, 2.0, 4.0), (3, 3.0, 6.0)] {
            let when = (today() - Days::new(days_ago)).and_time(NaiveTime::MIN);
            RecorderLogic::record_entry(&mut pool, &user, "A", a, Some(when)).unwrap();
            RecorderLogic::record_entry(&mut pool, &user, "B", b, Some(when)).unwrap();
        }
    }

    // login → correlation A/B over 7 days → visualize A → logout → exit
    let script = "1\nada\nhunter2\n2\nA\nB\n7\n4\nA\n7\n6\n3\n";

    rlt()
        .args(["--db", &db_path, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("r = 1.000"))
        .stdout(contains("A - past 7 days"))
        .stdout(contains("Date"));
}

#[test]
fn test_shell_add_and_view_metric() {
    let db_path = setup_test_db("cli_manage_metrics");
    {
        let mut pool = open_pool(&db_path);
        let user = register_user(&mut pool, "ada");
        CatalogLogic::create_category(&mut pool, &user, "Health").unwrap();
    }

    // login → manage metrics → add a qualitative metric into a brand-new
    // category → view → back → logout → exit
    let script = "1\nada\nhunter2\n5\n2\n2\nCustom\nMood\n1\n1\n10\nHow do you feel?\nbad\ngreat\n1\n6\n6\n3\n";

    rlt()
        .args(["--db", &db_path, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("New metric added successfully"))
        .stdout(contains("CUSTOM"))
        .stdout(contains("Mood (qualitative)"))
        .stdout(contains("Range: 1 to 10"));
}

#[test]
fn test_shell_delete_metric_requires_confirmation() {
    let db_path = setup_test_db("cli_delete_metric");
    {
        let mut pool = open_pool(&db_path);
        let user = register_user(&mut pool, "ada");
        let cat = CatalogLogic::create_category(&mut pool, &user, "Health").unwrap();
        CatalogLogic::create_metric(&mut pool, &user, cat, quantitative_draft("Daily Steps"))
            .unwrap();
    }

    // first refuse the confirmation, then confirm for real
    let script = "1\nada\nhunter2\n5\n4\nDaily Steps\nn\n4\nDaily Steps\ny\n6\n6\n3\n";

    rlt()
        .args(["--db", &db_path, "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Deletion cancelled"))
        .stdout(contains("Metric and associated data deleted successfully"));
}

#[test]
fn test_db_info_reports_counts() {
    let db_path = setup_test_db("cli_db_info");
    {
        let mut pool = open_pool(&db_path);
        register_user(&mut pool, "ada");
    }

    rlt()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Users"))
        .stdout(contains("Entries"));
}

#[test]
fn test_log_print_after_init() {
    let db_path = setup_test_db("cli_log_print");

    rlt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlt()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"));
}
