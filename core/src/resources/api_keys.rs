use crate::client::{RequestOptions, Unsent};
use crate::error::Result;
use crate::query::Query;
use crate::types::{ApiKey, ApiKeyCreated, CreateApiKey, Deleted};

/// `/api-keys` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ApiKeys<'a> {
    client: &'a Unsent,
}

impl<'a> ApiKeys<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<ApiKey>> {
        self.client.get(&["api-keys"], &Query::new())
    }

    /// Create a key. The returned token is not retrievable later.
    pub fn create(&self, key: &CreateApiKey) -> Result<ApiKeyCreated> {
        self.client.post(&["api-keys"], key, &RequestOptions::default())
    }

    pub fn delete(&self, id: &str) -> Result<Deleted> {
        self.client.delete(&["api-keys", id])
    }
}
