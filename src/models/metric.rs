use super::metric_kind::MetricKind;
use serde::Serialize;

/// A named, bounded, typed quantity or rating tracked daily.
///
/// Qualitative metrics describe their endpoints through `example_low` /
/// `example_high` and leave `example` empty; quantitative metrics carry a
/// single illustrative `example` and leave the other two empty. The bounds
/// are advisory: they are shown at the prompt, never enforced on entry.
#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub kind: MetricKind,
    pub min_value: f64,
    pub max_value: Option<f64>, // None = unbounded above
    pub description: String,
    pub example: Option<String>,
    pub example_low: Option<String>,
    pub example_high: Option<String>,
}

impl Metric {
    pub fn range_str(&self) -> String {
        match self.max_value {
            Some(max) => format!("{} to {}", self.min_value, max),
            None => format!("{} to unlimited", self.min_value),
        }
    }
}

/// Field set for a metric being created.
#[derive(Debug, Clone)]
pub struct MetricDraft {
    pub name: String,
    pub kind: MetricKind,
    pub min_value: f64,
    pub max_value: Option<f64>,
    pub description: String,
    pub example: Option<String>,
    pub example_low: Option<String>,
    pub example_high: Option<String>,
}

/// Partial update for an existing metric.
/// `None` keeps the stored value ("blank means unchanged", not cleared).
#[derive(Debug, Clone, Default)]
pub struct MetricPatch {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub description: Option<String>,
    pub example: Option<String>,
    pub example_low: Option<String>,
    pub example_high: Option<String>,
}

impl MetricPatch {
    pub fn is_empty(&self) -> bool {
        self.min_value.is_none()
            && self.max_value.is_none()
            && self.description.is_none()
            && self.example.is_none()
            && self.example_low.is_none()
            && self.example_high.is_none()
    }
}
