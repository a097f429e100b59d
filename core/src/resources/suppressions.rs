use crate::client::{RequestOptions, Unsent};
use crate::error::Result;
use crate::query::Query;
use crate::types::{
    AddSuppression, Deleted, List, ListSuppressionsParams, Suppression, SuppressionAdded,
};

/// `/suppressions` endpoints. Entries are keyed by email address.
#[derive(Debug, Clone, Copy)]
pub struct Suppressions<'a> {
    client: &'a Unsent,
}

impl<'a> Suppressions<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn list(&self, params: &ListSuppressionsParams) -> Result<List<Suppression>> {
        let mut query = Query::new();
        query
            .push_opt("page", params.page)
            .push_opt("limit", params.limit)
            .push_opt("search", params.search.as_deref())
            .push_opt("reason", params.reason);
        self.client.get(&["suppressions"], &query)
    }

    pub fn add(&self, suppression: &AddSuppression) -> Result<SuppressionAdded> {
        self.client.post(&["suppressions"], suppression, &RequestOptions::default())
    }

    pub fn delete(&self, email: &str) -> Result<Deleted> {
        self.client.delete(&["suppressions", "email", email])
    }
}
