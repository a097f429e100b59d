use serde_json::json;

use crate::client::{RequestOptions, Unsent};
use crate::error::Result;
use crate::query::Query;
use crate::types::{
    BatchSent, Email, EmailCancelled, EmailCreated, EmailUpdated, EventRecord, EventsParams, List,
    ListEmailsParams, PageParams, SendEmail, UpdateEmail,
};

/// `/emails` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Emails<'a> {
    client: &'a Unsent,
}

impl<'a> Emails<'a> {
    pub(crate) fn new(client: &'a Unsent) -> Self {
        Self { client }
    }

    pub fn send(&self, email: &SendEmail) -> Result<EmailCreated> {
        self.send_with_options(email, &RequestOptions::default())
    }

    /// Send with per-request headers, typically an idempotency key.
    pub fn send_with_options(
        &self,
        email: &SendEmail,
        options: &RequestOptions,
    ) -> Result<EmailCreated> {
        self.client.post(&["emails"], email, options)
    }

    /// Same as [`send`](Self::send).
    pub fn create(&self, email: &SendEmail) -> Result<EmailCreated> {
        self.send(email)
    }

    pub fn create_with_options(
        &self,
        email: &SendEmail,
        options: &RequestOptions,
    ) -> Result<EmailCreated> {
        self.send_with_options(email, options)
    }

    pub fn batch(&self, emails: &[SendEmail]) -> Result<BatchSent> {
        self.batch_with_options(emails, &RequestOptions::default())
    }

    pub fn batch_with_options(
        &self,
        emails: &[SendEmail],
        options: &RequestOptions,
    ) -> Result<BatchSent> {
        self.client.post(&["emails", "batch"], emails, options)
    }

    pub fn get(&self, id: &str) -> Result<Email> {
        self.client.get(&["emails", id], &Query::new())
    }

    pub fn update(&self, id: &str, update: &UpdateEmail) -> Result<EmailUpdated> {
        self.client.patch(&["emails", id], update)
    }

    /// Cancel a scheduled email.
    pub fn cancel(&self, id: &str) -> Result<EmailCancelled> {
        self.client.post(
            &["emails", id, "cancel"],
            &json!({}),
            &RequestOptions::default(),
        )
    }

    pub fn list(&self, params: &ListEmailsParams) -> Result<List<Email>> {
        let mut query = Query::new();
        query
            .push_opt("page", params.page)
            .push_opt("limit", params.limit)
            .push_time("startDate", params.start_date)
            .push_time("endDate", params.end_date)
            .push_opt("domainId", params.domain_id.as_deref());
        self.client.get(&["emails"], &query)
    }

    pub fn bounces(&self, params: &PageParams) -> Result<List<Email>> {
        self.client.get(&["emails", "bounces"], &page_query(params))
    }

    pub fn complaints(&self, params: &PageParams) -> Result<List<Email>> {
        self.client.get(&["emails", "complaints"], &page_query(params))
    }

    pub fn unsubscribes(&self, params: &PageParams) -> Result<List<Email>> {
        self.client.get(&["emails", "unsubscribes"], &page_query(params))
    }

    /// Delivery events of one email.
    pub fn events(&self, id: &str, params: &EventsParams) -> Result<List<EventRecord>> {
        self.client.get(&["emails", id, "events"], &events_query(params))
    }
}

pub(super) fn page_query(params: &PageParams) -> Query {
    let mut query = Query::new();
    query
        .push_opt("page", params.page)
        .push_opt("limit", params.limit);
    query
}

pub(super) fn events_query(params: &EventsParams) -> Query {
    let mut query = Query::new();
    query
        .push_opt("page", params.page)
        .push_opt("limit", params.limit)
        .push_opt("status", params.status)
        .push_time("startDate", params.start_date);
    query
}
