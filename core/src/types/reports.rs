//! Metrics and statistics reports. Their bodies are open-ended key/value
//! objects, so only the envelope is typed.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricsPeriod {
    Day,
    Week,
    Month,
}

impl MetricsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricsPeriod::Day => "day",
            MetricsPeriod::Week => "week",
            MetricsPeriod::Month => "month",
        }
    }
}

impl fmt::Display for MetricsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsParams {
    pub period: Option<MetricsPeriod>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub period: Option<String>,
    pub metrics: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Metrics {
    /// Numeric value of a named metric, e.g. `"deliveryRate"`.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.metrics.as_ref()?.get(name)?.as_f64()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsParams {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub stats: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Stats {
    pub fn count(&self, name: &str) -> Option<u64> {
        self.stats.as_ref()?.get(name)?.as_u64()
    }
}
