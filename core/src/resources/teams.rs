use crate::client::Unsent;
use crate::error::Result;
use crate::query::Query;
use crate::types::Team;

/// `/team` and `/teams` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Teams<'a> {
    client: &'a Unsent,
}

impl<'a> Teams<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    /// The team owning the API key.
    pub fn get(&self) -> Result<Team> {
        self.client.get(&["team"], &Query::new())
    }

    pub fn list(&self) -> Result<Vec<Team>> {
        self.client.get(&["teams"], &Query::new())
    }
}
