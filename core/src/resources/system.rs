use crate::client::Unsent;
use crate::error::Result;
use crate::query::Query;
use crate::types::{Health, VersionInfo};

/// Service status endpoints.
#[derive(Debug, Clone, Copy)]
pub struct System<'a> {
    client: &'a Unsent,
}

impl<'a> System<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn health(&self) -> Result<Health> {
        self.client.get(&["health"], &Query::new())
    }

    pub fn version(&self) -> Result<VersionInfo> {
        self.client.get(&["version"], &Query::new())
    }
}
