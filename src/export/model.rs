use serde::Serialize;

/// One exported entry row, flattened across the category/metric join.
#[derive(Debug, Clone, Serialize)]
pub struct EntryExport {
    pub category: String,
    pub metric: String,
    pub value: f64,
    pub timestamp: String,
}
