use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// Per-status email counters.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCounts {
    pub total: Option<u64>,
    pub sent: Option<u64>,
    pub delivered: Option<u64>,
    pub opened: Option<u64>,
    pub clicked: Option<u64>,
    pub failed: Option<u64>,
    pub complained: Option<u64>,
    pub bounced: Option<u64>,
}

/// Account-wide totals from `GET /analytics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    #[serde(flatten)]
    pub counts: EmailCounts,
}

/// One day of `GET /analytics/time-series`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    #[serde(flatten)]
    pub counts: EmailCounts,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    pub domain: Option<String>,
    pub reputation: Option<f64>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSeriesParams {
    pub days: Option<u32>,
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReputationParams {
    pub domain: Option<String>,
}
