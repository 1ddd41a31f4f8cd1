use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum MetricKind {
    Quantitative,
    Qualitative,
}

impl MetricKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            MetricKind::Quantitative => "quantitative",
            MetricKind::Qualitative => "qualitative",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "quantitative" => Some(MetricKind::Quantitative),
            "qualitative" => Some(MetricKind::Qualitative),
            _ => None,
        }
    }

    /// Helper: convert input from an interactive prompt ("1" or "2",
    /// or the full word in either case).
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "qualitative" => Some(MetricKind::Qualitative),
            "2" | "quantitative" => Some(MetricKind::Quantitative),
            _ => None,
        }
    }

    pub fn is_qualitative(&self) -> bool {
        matches!(self, MetricKind::Qualitative)
    }

    pub fn is_quantitative(&self) -> bool {
        matches!(self, MetricKind::Quantitative)
    }
}
