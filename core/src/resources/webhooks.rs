use crate::client::{RequestOptions, Unsent};
use crate::error::Result;
use crate::query::Query;
use crate::types::{CreateWebhook, Deleted, UpdateWebhook, Webhook, WebhookCreated, WebhookUpdated};

/// `/webhooks` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a Unsent,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Webhook>> {
        self.client.get(&["webhooks"], &Query::new())
    }

    pub fn create(&self, webhook: &CreateWebhook) -> Result<WebhookCreated> {
        self.client.post(&["webhooks"], webhook, &RequestOptions::default())
    }

    pub fn update(&self, id: &str, update: &UpdateWebhook) -> Result<WebhookUpdated> {
        self.client.patch(&["webhooks", id], update)
    }

    pub fn delete(&self, id: &str) -> Result<Deleted> {
        self.client.delete(&["webhooks", id])
    }
}
