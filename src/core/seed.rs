use crate::core::catalog::CatalogLogic;
use crate::db::log::ltlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::metric::MetricDraft;
use crate::models::metric_kind::MetricKind;
use crate::models::user::AuthUser;

/// Stock catalog offered to every fresh account.
pub struct SeedLogic;

fn quantitative(
    name: &str,
    min_value: f64,
    max_value: Option<f64>,
    description: &str,
    example: &str,
) -> MetricDraft {
    MetricDraft {
        name: name.to_string(),
        kind: MetricKind::Quantitative,
        min_value,
        max_value,
        description: description.to_string(),
        example: Some(example.to_string()),
        example_low: None,
        example_high: None,
    }
}

fn qualitative(
    name: &str,
    min_value: f64,
    max_value: f64,
    description: &str,
    example_low: &str,
    example_high: &str,
) -> MetricDraft {
    MetricDraft {
        name: name.to_string(),
        kind: MetricKind::Qualitative,
        min_value,
        max_value: Some(max_value),
        description: description.to_string(),
        example: None,
        example_low: Some(example_low.to_string()),
        example_high: Some(example_high.to_string()),
    }
}

/// The fixed default set: 3 categories, 7 metrics.
/// The guidance strings are data, shown verbatim at entry prompts.
pub fn default_catalog() -> Vec<(&'static str, Vec<MetricDraft>)> {
    vec![
        (
            "Health",
            vec![
                qualitative(
                    "Sleep Quality",
                    1.0,
                    10.0,
                    "How refreshed do you feel? (1-10)",
                    "1 = Feeling like a zombie who binge-watched all seasons of everything",
                    "10 = Ready to fight a bear (not recommended)",
                ),
                quantitative(
                    "Hours of Sleep",
                    0.0,
                    Some(24.0),
                    "How many hours did you sleep? (0-24)",
                    "Round to nearest quarter hour (e.g., 7.25, 7.5, 7.75)",
                ),
                quantitative(
                    "Daily Steps",
                    0.0,
                    Some(100000.0),
                    "How many steps did you take today?",
                    "From your fitness tracker/phone",
                ),
            ],
        ),
        (
            "Wealth",
            vec![
                quantitative(
                    "Discretionary Spending",
                    0.0,
                    None,
                    "How much did you spend on non-essentials? ($)",
                    "That coffee you 'needed' counts!",
                ),
                qualitative(
                    "Financial Stress Level",
                    1.0,
                    10.0,
                    "How stressed are you about money? (1-10)",
                    "1 = Living your best budget life",
                    "10 = Considering selling your comic book collection",
                ),
            ],
        ),
        (
            "Relationships",
            vec![
                quantitative(
                    "Quality Time",
                    0.0,
                    Some(1440.0),
                    "Minutes spent in meaningful interactions",
                    "Real conversations, not just liking their Instagram posts",
                ),
                qualitative(
                    "Social Connection",
                    1.0,
                    10.0,
                    "How connected do you feel to others? (1-10)",
                    "1 = Your plant is your best friend",
                    "10 = You're the main character in everyone's story",
                ),
            ],
        ),
    ]
}

impl SeedLogic {
    /// Create the stock categories and metrics for an account.
    ///
    /// Not transactional: a failure partway leaves the earlier inserts
    /// committed, and running it twice fails with DuplicateName on the
    /// first name it meets again.
    pub fn seed_default_catalog(pool: &mut DbPool, user: &AuthUser) -> AppResult<()> {
        for (category, drafts) in default_catalog() {
            let category_id = CatalogLogic::create_category(pool, user, category)?;

            for draft in drafts {
                CatalogLogic::create_metric(pool, user, category_id, draft)?;
            }
        }

        ltlog(
            &pool.conn,
            "seed",
            &user.username,
            "Default catalog created",
        )?;

        Ok(())
    }
}
