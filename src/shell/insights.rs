use crate::config::Config;
use crate::core::analytics::AnalyticsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::AuthUser;
use crate::shell::prompts::prompt;
use crate::ui::messages::{error, warning};
use crate::utils::numbers::parse_window_days;
use crate::utils::table::{Column, Table};

fn prompt_window(cfg: &Config) -> AppResult<u32> {
    loop {
        let raw = prompt(&format!("Window in days [{}]: ", cfg.default_window_days))?;
        if raw.is_empty() {
            return Ok(cfg.default_window_days);
        }
        match parse_window_days(&raw) {
            Ok(days) => return Ok(days),
            Err(e) => error(e),
        }
    }
}

/// Correlation check between two metrics over a trailing window.
pub fn correlation_check(pool: &mut DbPool, cfg: &Config, user: &AuthUser) -> AppResult<()> {
    println!("\n📊 Correlation Check");

    let metric1 = prompt("First metric name: ")?;
    let metric2 = prompt("Second metric name: ")?;
    let days = prompt_window(cfg)?;

    match AnalyticsLogic::correlation(pool, user, &metric1, &metric2, days)? {
        Some(r) => {
            println!(
                "\n📈 Correlation between '{}' and '{}' over the last {} days: r = {:.3}",
                metric1, metric2, days, r
            );
        }
        None => warning("Not enough overlapping data in that window."),
    }

    Ok(())
}

/// Render one metric's trailing-window series as a table with bars.
pub fn visualize_metric(pool: &mut DbPool, cfg: &Config, user: &AuthUser) -> AppResult<()> {
    println!("\n📈 Visualize Metric");

    let name = prompt("Metric name: ")?;
    let days = prompt_window(cfg)?;

    let series = AnalyticsLogic::time_series(pool, user, &name, days)?;

    if series.is_empty() {
        warning(format!(
            "No data available for '{}' in the past {} days.",
            name, days
        ));
        return Ok(());
    }

    let max_value = series.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Value", 10),
        Column::new("Trend", 30),
    ]);

    for (date, value) in &series {
        table.add_row(vec![
            date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", value),
            bar(*value, max_value, 30),
        ]);
    }

    println!("\n{} - past {} days\n", name, days);
    print!("{}", table.render());
    Ok(())
}

/// Scale a value into a bar of at most `width` blocks.
fn bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max_value) * width as f64).round() as usize;
    "▇".repeat(filled.min(width))
}
