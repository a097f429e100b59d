use crate::client::Unsent;
use crate::error::Result;
use crate::query::Query;
use crate::types;

/// `/settings` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Settings<'a> {
    client: &'a Unsent,
}

impl<'a> Settings<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn get(&self) -> Result<types::Settings> {
        self.client.get(&["settings"], &Query::new())
    }
}
