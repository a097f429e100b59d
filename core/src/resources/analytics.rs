use crate::client::Unsent;
use crate::error::Result;
use crate::query::Query;
use crate::types::{self, List, ReputationParams, TimeSeriesParams, TimeSeriesPoint};

/// `/analytics` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Analytics<'a> {
    client: &'a Unsent,
}

impl<'a> Analytics<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    /// Account-wide email counters.
    pub fn get(&self) -> Result<types::Analytics> {
        self.client.get(&["analytics"], &Query::new())
    }

    /// Daily counters, optionally restricted to one sending domain.
    pub fn time_series(&self, params: &TimeSeriesParams) -> Result<List<TimeSeriesPoint>> {
        let mut query = Query::new();
        query
            .push_opt("days", params.days)
            .push_opt("domain", params.domain.as_deref());
        self.client.get(&["analytics", "time-series"], &query)
    }

    pub fn reputation(&self, params: &ReputationParams) -> Result<types::Reputation> {
        let mut query = Query::new();
        query.push_opt("domain", params.domain.as_deref());
        self.client.get(&["analytics", "reputation"], &query)
    }
}
