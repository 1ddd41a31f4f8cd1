use crate::config::Config;
use crate::core::catalog::CatalogLogic;
use crate::core::recorder::RecorderLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::user::AuthUser;
use crate::shell::prompts::{prompt, prompt_value_or_skip};
use crate::ui::messages::{banner, success, warning};
use crate::utils::date::parse_date;
use chrono::{NaiveDate, NaiveTime};

/// Ask for a date, then run the tracking walk against it.
pub fn backdated_tracking(pool: &mut DbPool, cfg: &Config, user: &AuthUser) -> AppResult<()> {
    let raw = prompt("Enter date (YYYY-MM-DD): ")?;
    let date = parse_date(&raw).ok_or(AppError::InvalidDate(raw))?;
    daily_tracking(pool, cfg, user, Some(date))
}

/// Walk every metric in catalog order and record the typed values.
/// Enter skips a metric; a non-numeric value re-prompts.
pub fn daily_tracking(
    pool: &mut DbPool,
    cfg: &Config,
    user: &AuthUser,
    entry_date: Option<NaiveDate>,
) -> AppResult<()> {
    let date_label = match entry_date {
        None => "TODAY".to_string(),
        Some(d) => d.format("%Y-%m-%d").to_string(),
    };

    // Backdated entries are stamped at midnight of the chosen day; live
    // entries keep the recording time.
    let when = entry_date.map(|d| d.and_time(NaiveTime::MIN));

    let catalog = CatalogLogic::list_metrics(pool, user)?;
    if catalog.is_empty() {
        warning("No metrics defined yet. Add some under 'Manage metrics'.");
        return Ok(());
    }

    println!();
    banner(format!("🌟 DAILY TRACKING - {} 🌟", date_label));

    let sep = cfg.separator_char.repeat(25);
    let mut current_category: Option<&str> = None;

    for (category, metric) in &catalog {
        if current_category != Some(category.as_str()) {
            current_category = Some(category.as_str());
            println!("\n{}", category.to_uppercase());
            println!("{sep}");
        }

        println!("\n• {}", metric.name);
        println!("  └─ {}", metric.description);

        if metric.kind.is_qualitative() {
            if let Some(ref low) = metric.example_low {
                println!("  └─ Low: {}", low);
            }
            if let Some(ref high) = metric.example_high {
                println!("  └─ High: {}", high);
            }
        } else if let Some(ref example) = metric.example {
            println!("  └─ Example: {}", example);
        }
        println!("  └─ Range: {}", metric.range_str());

        match prompt_value_or_skip("Your response (press Enter to skip): ")? {
            None => println!("➡️  Skipping..."),
            Some(value) => {
                RecorderLogic::record_entry(pool, user, &metric.name, value, when)?;
                success("Recorded!");
            }
        }
    }

    println!();
    success("Daily tracking complete!");
    Ok(())
}
