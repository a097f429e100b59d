use crate::client::Unsent;
use crate::error::Result;
use crate::types::{EventRecord, EventsParams, List};

use super::emails::events_query;

/// Account-wide event feed.
#[derive(Debug, Clone, Copy)]
pub struct Events<'a> {
    client: &'a Unsent,
}

impl<'a> Events<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &EventsParams) -> Result<List<EventRecord>> {
        self.client.get(&["events"], &events_query(params))
    }
}
