use serde_json::json;

use crate::client::{RequestOptions, Unsent};
use crate::error::Result;
use crate::query::Query;
use crate::types::{Campaign, CampaignAction, CreateCampaign, ScheduleCampaign};

/// `/campaigns` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Campaigns<'a> {
    client: &'a Unsent,
}

impl<'a> Campaigns<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Campaign>> {
        self.client.get(&["campaigns"], &Query::new())
    }

    pub fn create(&self, campaign: &CreateCampaign) -> Result<Campaign> {
        self.client.post(&["campaigns"], campaign, &RequestOptions::default())
    }

    pub fn get(&self, id: &str) -> Result<Campaign> {
        self.client.get(&["campaigns", id], &Query::new())
    }

    pub fn schedule(&self, id: &str, schedule: &ScheduleCampaign) -> Result<CampaignAction> {
        self.client.post(
            &["campaigns", id, "schedule"],
            schedule,
            &RequestOptions::default(),
        )
    }

    pub fn pause(&self, id: &str) -> Result<CampaignAction> {
        self.action(id, "pause")
    }

    pub fn resume(&self, id: &str) -> Result<CampaignAction> {
        self.action(id, "resume")
    }

    fn action(&self, id: &str, action: &str) -> Result<CampaignAction> {
        self.client.post(
            &["campaigns", id, action],
            &json!({}),
            &RequestOptions::default(),
        )
    }
}
