use crate::client::{RequestOptions, Unsent};
use crate::error::Result;
use crate::query::Query;
use crate::types::{
    CreateTemplate, Deleted, Template, TemplateCreated, TemplateUpdated, UpdateTemplate,
};

/// `/templates` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Templates<'a> {
    client: &'a Unsent,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Vec<Template>> {
        self.client.get(&["templates"], &Query::new())
    }

    pub fn get(&self, id: &str) -> Result<Template> {
        self.client.get(&["templates", id], &Query::new())
    }

    pub fn create(&self, template: &CreateTemplate) -> Result<TemplateCreated> {
        self.client.post(&["templates"], template, &RequestOptions::default())
    }

    pub fn update(&self, id: &str, update: &UpdateTemplate) -> Result<TemplateUpdated> {
        self.client.patch(&["templates", id], update)
    }

    pub fn delete(&self, id: &str) -> Result<Deleted> {
        self.client.delete(&["templates", id])
    }
}
