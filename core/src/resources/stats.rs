use crate::client::Unsent;
use crate::error::Result;
use crate::query::Query;
use crate::types::{self, StatsParams};

/// `/stats` endpoint: totals between two dates.
#[derive(Debug, Clone, Copy)]
pub struct Stats<'a> {
    client: &'a Unsent,
}

impl<'a> Stats<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn get(&self, params: &StatsParams) -> Result<types::Stats> {
        let mut query = Query::new();
        query
            .push_time("startDate", params.start_date)
            .push_time("endDate", params.end_date);
        self.client.get(&["stats"], &query)
    }
}
