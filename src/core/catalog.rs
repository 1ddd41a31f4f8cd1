use crate::db::log::ltlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    category_belongs_to_user, delete_category_by_id, delete_entries_for_metric,
    delete_metric_by_id, find_category_id, find_metric_by_name, insert_category, insert_metric,
    list_categories, list_metrics_with_categories, metric_ids_in_category, update_metric_fields,
};
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::metric::{Metric, MetricDraft, MetricPatch};
use crate::models::metric_kind::MetricKind;
use crate::models::user::AuthUser;

/// High-level business logic for the metric catalog: categories, metric
/// definitions, and their explicit deletion cascades.
///
/// Every operation is scoped by the authenticated user; no query ever
/// crosses into another user's catalog.
pub struct CatalogLogic;

impl CatalogLogic {
    pub fn create_category(pool: &mut DbPool, user: &AuthUser, name: &str) -> AppResult<i64> {
        let name = name.trim();

        if name.is_empty() {
            return Err(AppError::InvalidInput("category name cannot be empty".into()));
        }
        if find_category_id(&pool.conn, user.id, name)?.is_some() {
            return Err(AppError::DuplicateName(format!("category '{}'", name)));
        }

        insert_category(&pool.conn, user.id, name)
    }

    /// Validate and store a new metric definition.
    ///
    /// Validation happens before any write; a rejected draft leaves the
    /// store untouched. The kind decides which guidance fields survive:
    /// qualitative keeps example_low/example_high, quantitative keeps
    /// example. The other side is forced to NULL.
    pub fn create_metric(
        pool: &mut DbPool,
        user: &AuthUser,
        category_id: i64,
        mut draft: MetricDraft,
    ) -> AppResult<i64> {
        validate_draft(&draft)?;

        if !category_belongs_to_user(&pool.conn, user.id, category_id)? {
            return Err(AppError::NotFound(format!("category id {}", category_id)));
        }

        draft.name = draft.name.trim().to_string();
        if find_metric_by_name(&pool.conn, user.id, &draft.name)?.is_some() {
            return Err(AppError::DuplicateName(format!("metric '{}'", draft.name)));
        }

        match draft.kind {
            MetricKind::Qualitative => draft.example = None,
            MetricKind::Quantitative => {
                draft.example_low = None;
                draft.example_high = None;
            }
        }

        insert_metric(&pool.conn, user.id, category_id, &draft)
    }

    pub fn find_metric(pool: &mut DbPool, user: &AuthUser, name: &str) -> AppResult<Metric> {
        find_metric_by_name(&pool.conn, user.id, name)?
            .ok_or_else(|| AppError::NotFound(format!("metric '{}'", name)))
    }

    /// Partial update: fields absent from the patch keep their stored
    /// value. Guidance fields only land on the side matching the metric's
    /// kind, so the kind invariant survives any patch.
    pub fn update_metric(
        pool: &mut DbPool,
        user: &AuthUser,
        name: &str,
        patch: &MetricPatch,
    ) -> AppResult<()> {
        let mut metric = Self::find_metric(pool, user, name)?;

        if patch.is_empty() {
            return Ok(()); // nothing to change
        }

        if let Some(v) = patch.min_value {
            metric.min_value = v;
        }
        if let Some(v) = patch.max_value {
            metric.max_value = Some(v);
        }
        if let Some(ref v) = patch.description {
            metric.description = v.clone();
        }

        if metric.kind.is_qualitative() {
            if let Some(ref v) = patch.example_low {
                metric.example_low = Some(v.clone());
            }
            if let Some(ref v) = patch.example_high {
                metric.example_high = Some(v.clone());
            }
        } else if let Some(ref v) = patch.example {
            metric.example = Some(v.clone());
        }

        update_metric_fields(&pool.conn, &metric)
    }

    /// Delete a metric and all its entries.
    ///
    /// The cascade is explicit and ordered: entries first, then the metric,
    /// so a failure can never leave entries pointing at a missing metric.
    /// Destructive; callers confirm before invoking.
    pub fn delete_metric(pool: &mut DbPool, user: &AuthUser, name: &str) -> AppResult<()> {
        let metric = Self::find_metric(pool, user, name)?;

        let removed = delete_entries_for_metric(&pool.conn, metric.id)?;
        delete_metric_by_id(&pool.conn, metric.id)?;

        ltlog(
            &pool.conn,
            "delete_metric",
            &metric.name,
            &format!("Deleted metric '{}' and {} entries", metric.name, removed),
        )?;

        Ok(())
    }

    /// Delete a category, its metrics, and their entries.
    ///
    /// Same cascade invariant as metric deletion, one level up.
    pub fn delete_category(pool: &mut DbPool, user: &AuthUser, name: &str) -> AppResult<()> {
        let name = name.trim();

        let category_id = find_category_id(&pool.conn, user.id, name)?
            .ok_or_else(|| AppError::NotFound(format!("category '{}'", name)))?;

        let mut removed_entries = 0usize;
        let metric_ids = metric_ids_in_category(&pool.conn, user.id, category_id)?;
        let removed_metrics = metric_ids.len();

        for metric_id in metric_ids {
            removed_entries += delete_entries_for_metric(&pool.conn, metric_id)?;
            delete_metric_by_id(&pool.conn, metric_id)?;
        }

        delete_category_by_id(&pool.conn, category_id)?;

        ltlog(
            &pool.conn,
            "delete_category",
            name,
            &format!(
                "Deleted category '{}' with {} metrics and {} entries",
                name, removed_metrics, removed_entries
            ),
        )?;

        Ok(())
    }

    pub fn list_categories(pool: &mut DbPool, user: &AuthUser) -> AppResult<Vec<Category>> {
        list_categories(&pool.conn, user.id)
    }

    /// (category name, metric) pairs ordered by category name then metric
    /// name.
    pub fn list_metrics(pool: &mut DbPool, user: &AuthUser) -> AppResult<Vec<(String, Metric)>> {
        list_metrics_with_categories(&pool.conn, user.id)
    }
}

fn validate_draft(draft: &MetricDraft) -> AppResult<()> {
    if draft.name.trim().is_empty() {
        return Err(AppError::InvalidDefinition("metric name cannot be empty".into()));
    }

    if let Some(max) = draft.max_value
        && draft.min_value > max
    {
        return Err(AppError::InvalidDefinition(format!(
            "minimum {} exceeds maximum {}",
            draft.min_value, max
        )));
    }

    if draft.kind.is_qualitative() && (draft.example_low.is_none() || draft.example_high.is_none())
    {
        return Err(AppError::InvalidDefinition(
            "qualitative metrics need an example for both the lowest and highest value".into(),
        ));
    }

    Ok(())
}
