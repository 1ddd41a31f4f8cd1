use crate::config::Config;
use crate::core::catalog::CatalogLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::metric::{MetricDraft, MetricPatch};
use crate::models::metric_kind::MetricKind;
use crate::models::user::AuthUser;
use crate::shell::prompts::{confirm, prompt, prompt_value, prompt_value_or_skip};
use crate::ui::messages::{banner, error, success, warning};
use std::io;

/// Metric management submenu.
pub fn manage_metrics(pool: &mut DbPool, cfg: &Config, user: &AuthUser) -> AppResult<()> {
    loop {
        let sep = cfg.separator_char.repeat(25);

        println!("\n🔧 Metric Management");
        println!("{sep}");
        println!("1. View current metrics");
        println!("2. Add new metric");
        println!("3. Edit existing metric");
        println!("4. Delete metric");
        println!("5. Delete category");
        println!("6. Back to main menu");
        println!("{sep}");

        let choice = prompt("\nYour choice (1-6): ")?;
        let outcome = match choice.as_str() {
            "1" => view_metrics(pool, cfg, user),
            "2" => add_metric(pool, user),
            "3" => edit_metric(pool, user),
            "4" => delete_metric(pool, user),
            "5" => delete_category(pool, user),
            "6" => return Ok(()),
            _ => {
                error("Invalid choice!");
                Ok(())
            }
        };

        // Structural errors (NotFound, DuplicateName, rejected definitions)
        // abort the action, not the submenu.
        if let Err(e) = outcome {
            match e {
                AppError::Io(ref io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(e);
                }
                other => error(other),
            }
        }
    }
}

pub fn view_metrics(pool: &mut DbPool, cfg: &Config, user: &AuthUser) -> AppResult<()> {
    let catalog = CatalogLogic::list_metrics(pool, user)?;

    println!();
    banner("📊 YOUR CURRENT METRICS 📊");

    if catalog.is_empty() {
        warning("No metrics defined yet.");
        return Ok(());
    }

    let sep = cfg.separator_char.repeat(25);
    let mut current_category: Option<&str> = None;

    for (category, metric) in &catalog {
        if current_category != Some(category.as_str()) {
            current_category = Some(category.as_str());
            println!("\n{}", category.to_uppercase());
            println!("{sep}");
        }

        println!("• {} ({})", metric.name, metric.kind.to_db_str());
        for line in textwrap::wrap(&metric.description, 60) {
            println!("  └─ {}", line);
        }
        println!("  └─ Range: {}", metric.range_str());
    }

    Ok(())
}

pub fn add_metric(pool: &mut DbPool, user: &AuthUser) -> AppResult<()> {
    println!("\n➕ Add New Metric");

    let categories = CatalogLogic::list_categories(pool, user)?;

    println!("\nExisting categories:");
    for (i, category) in categories.iter().enumerate() {
        println!("{}. {}", i + 1, category.name);
    }
    println!("{}. Create new category", categories.len() + 1);

    let category_id = loop {
        let raw = prompt("\nSelect category number: ")?;
        match raw.parse::<usize>() {
            Ok(n) if n >= 1 && n <= categories.len() => break categories[n - 1].id,
            Ok(n) if n == categories.len() + 1 => {
                let name = prompt("Enter new category name: ")?;
                break CatalogLogic::create_category(pool, user, &name)?;
            }
            _ => error("Please enter a number from the list!"),
        }
    };

    let name = prompt("Metric name: ")?;
    let draft = prompt_draft_fields(name)?;

    CatalogLogic::create_metric(pool, user, category_id, draft)?;
    success("New metric added successfully!");
    Ok(())
}

pub fn edit_metric(pool: &mut DbPool, user: &AuthUser) -> AppResult<()> {
    let name = prompt("\nEnter the name of the metric to edit: ")?;
    let metric = CatalogLogic::find_metric(pool, user, &name)?;

    println!("\nLeave blank to keep current value");

    let min_value = prompt_value_or_skip(&format!("New minimum value [{}]: ", metric.min_value))?;

    let max_label = match metric.max_value {
        Some(max) => format!("New maximum value [{}]: ", max),
        None => "New maximum value [unlimited]: ".to_string(),
    };
    let max_value = prompt_value_or_skip(&max_label)?;

    let description = prompt(&format!("New description [{}]: ", metric.description))?;

    let (example, example_low, example_high) = if metric.kind.is_qualitative() {
        let low = prompt(&format!(
            "New example for lowest value [{}]: ",
            metric.example_low.as_deref().unwrap_or("-")
        ))?;
        let high = prompt(&format!(
            "New example for highest value [{}]: ",
            metric.example_high.as_deref().unwrap_or("-")
        ))?;
        (
            None,
            Some(low).filter(|s: &String| !s.is_empty()),
            Some(high).filter(|s: &String| !s.is_empty()),
        )
    } else {
        let example = prompt(&format!(
            "New example [{}]: ",
            metric.example.as_deref().unwrap_or("-")
        ))?;
        (Some(example).filter(|s: &String| !s.is_empty()), None, None)
    };

    let patch = MetricPatch {
        min_value,
        max_value,
        description: Some(description).filter(|s| !s.is_empty()),
        example,
        example_low,
        example_high,
    };

    CatalogLogic::update_metric(pool, user, &name, &patch)?;
    success("Metric updated successfully!");
    Ok(())
}

pub fn delete_metric(pool: &mut DbPool, user: &AuthUser) -> AppResult<()> {
    let name = prompt("\nEnter the name of the metric to delete: ")?;
    let metric = CatalogLogic::find_metric(pool, user, &name)?;

    let ok = confirm(&format!(
        "\n⚠️  Are you sure you want to delete '{}'? This will delete all associated data! (y/n): ",
        metric.name
    ))?;
    if !ok {
        println!("Deletion cancelled.");
        return Ok(());
    }

    CatalogLogic::delete_metric(pool, user, &metric.name)?;
    success("Metric and associated data deleted successfully!");
    Ok(())
}

pub fn delete_category(pool: &mut DbPool, user: &AuthUser) -> AppResult<()> {
    let name = prompt("\nEnter the name of the category to delete: ")?;

    let ok = confirm(&format!(
        "\n⚠️  Are you sure you want to delete '{}' and ALL its metrics and data? (y/n): ",
        name
    ))?;
    if !ok {
        println!("Deletion cancelled.");
        return Ok(());
    }

    CatalogLogic::delete_category(pool, user, &name)?;
    success("Category and associated data deleted successfully!");
    Ok(())
}

/// Catalog builder offered right after registration.
pub fn create_custom_catalog(pool: &mut DbPool, user: &AuthUser) -> AppResult<()> {
    println!("\n📊 Let's create your custom metrics!");

    let mut created_categories = 0usize;

    loop {
        println!("\nFirst, let's create categories (e.g., Health, Work, Hobbies)");
        let category_name = prompt("Enter category name (or press Enter to finish): ")?;

        if category_name.is_empty() {
            if created_categories == 0 {
                error("You need at least one category!");
                continue;
            }
            break;
        }

        let category_id = match CatalogLogic::create_category(pool, user, &category_name) {
            Ok(id) => id,
            Err(e) => {
                error(e);
                continue;
            }
        };
        created_categories += 1;

        loop {
            println!("\nAdding metric to {}", category_name);
            let metric_name = prompt("Metric name (or press Enter to finish category): ")?;
            if metric_name.is_empty() {
                break;
            }

            let draft = prompt_draft_fields(metric_name)?;
            if let Err(e) = CatalogLogic::create_metric(pool, user, category_id, draft) {
                error(e);
            }
        }
    }

    success("Custom metrics set up successfully!");
    Ok(())
}

/// Shared prompts for every field of a metric after its name.
fn prompt_draft_fields(name: String) -> AppResult<MetricDraft> {
    let kind = loop {
        let raw = prompt("Type (1 for qualitative, 2 for quantitative): ")?;
        match MetricKind::from_choice(&raw) {
            Some(k) => break k,
            None => error("Please enter 1 or 2!"),
        }
    };

    let min_value = prompt_value("Minimum value: ")?;

    let max_value = {
        let raw = prompt_value("Maximum value (or -1 for no maximum): ")?;
        if raw == -1.0 { None } else { Some(raw) }
    };

    let description = prompt("Description: ")?;

    let (example, example_low, example_high) = if kind.is_qualitative() {
        let low = prompt(&format!("Example for lowest value ({}): ", min_value))?;
        let high = match max_value {
            Some(max) => prompt(&format!("Example for highest value ({}): ", max))?,
            None => prompt("Example for highest value: ")?,
        };
        (None, Some(low), Some(high))
    } else {
        (Some(prompt("Example: ")?), None, None)
    };

    Ok(MetricDraft {
        name,
        kind,
        min_value,
        max_value,
        description,
        example,
        example_low,
        example_high,
    })
}
