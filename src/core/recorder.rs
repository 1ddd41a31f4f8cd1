use crate::core::catalog::CatalogLogic;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::AppResult;
use crate::models::user::AuthUser;
use chrono::{Local, NaiveDateTime};

/// Appends timestamped values against a metric.
pub struct RecorderLogic;

impl RecorderLogic {
    /// Record one value for the named metric.
    ///
    /// `when = None` stamps the entry with the current time; callers may
    /// backdate by passing an explicit timestamp. The metric's declared
    /// bounds are advisory and not enforced here; the value is stored as
    /// given. Same-day duplicates are kept as distinct data points.
    pub fn record_entry(
        pool: &mut DbPool,
        user: &AuthUser,
        metric_name: &str,
        value: f64,
        when: Option<NaiveDateTime>,
    ) -> AppResult<()> {
        let metric = CatalogLogic::find_metric(pool, user, metric_name)?;

        let timestamp = when.unwrap_or_else(|| Local::now().naive_local());

        insert_entry(&pool.conn, user.id, metric.id, value, &timestamp)
    }
}
