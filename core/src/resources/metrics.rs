use crate::client::Unsent;
use crate::error::Result;
use crate::query::Query;
use crate::types::{self, MetricsParams};

/// `/metrics` endpoint: sending metrics for a period.
#[derive(Debug, Clone, Copy)]
pub struct Metrics<'a> {
    client: &'a Unsent,
}

impl<'a> Metrics<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn get(&self, params: &MetricsParams) -> Result<types::Metrics> {
        let mut query = Query::new();
        query.push_opt("period", params.period);
        self.client.get(&["metrics"], &query)
    }
}
