use serde::Serialize;

/// A user-defined grouping label for related metrics.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
