use crate::client::Unsent;
use crate::error::Result;
use crate::types::{EventRecord, List, PageParams};

use super::emails::page_query;

/// Recent account activity. The feed arrives under an `activity` key and is
/// exposed as a regular [`List`].
#[derive(Debug, Clone, Copy)]
pub struct Activity<'a> {
    client: &'a Unsent,
}

impl<'a> Activity<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn get(&self, params: &PageParams) -> Result<List<EventRecord>> {
        self.client.get(&["activity"], &page_query(params))
    }
}
