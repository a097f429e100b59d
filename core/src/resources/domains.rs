use crate::client::{RequestOptions, Unsent, NO_BODY};
use crate::error::Result;
use crate::query::Query;
use crate::types::{CreateDomain, Deleted, Domain, DomainVerification};

/// `/domains` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Domains<'a> {
    client: &'a Unsent,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Domain>> {
        self.client.get(&["domains"], &Query::new())
    }

    pub fn get(&self, id: &str) -> Result<Domain> {
        self.client.get(&["domains", id], &Query::new())
    }

    pub fn create(&self, domain: &CreateDomain) -> Result<Domain> {
        self.client.post(&["domains"], domain, &RequestOptions::default())
    }

    /// Ask the API to re-check the domain's DNS records.
    pub fn verify(&self, id: &str) -> Result<DomainVerification> {
        self.client.put(&["domains", id, "verify"], NO_BODY)
    }

    pub fn delete(&self, id: &str) -> Result<Deleted> {
        self.client.delete(&["domains", id])
    }
}
