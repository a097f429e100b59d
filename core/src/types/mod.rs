//! Request and response DTOs for the Unsent API.
//!
//! # Design
//! Field names follow the API's camelCase JSON. Request payloads keep their
//! required fields as plain values and everything else as `Option`, which is
//! left out of the JSON when unset. Response types require only the resource
//! identifier: the API omits fields freely, and an absent field decodes as
//! `None` rather than a made-up default.

pub mod account;
pub mod analytics;
pub mod api_keys;
pub mod campaigns;
pub mod common;
pub mod contact_books;
pub mod contacts;
pub mod domains;
pub mod emails;
pub mod reports;
pub mod suppressions;
pub mod templates;
pub mod webhooks;

pub use account::{Health, Settings, Team, VersionInfo};
pub use analytics::{
    Analytics, EmailCounts, Reputation, ReputationParams, TimeSeriesParams, TimeSeriesPoint,
};
pub use api_keys::{ApiKey, ApiKeyCreated, ApiKeyPermission, CreateApiKey};
pub use campaigns::{Campaign, CampaignAction, CreateCampaign, ScheduleCampaign};
pub use common::{Deleted, EventRecord, List, PageParams};
pub use contact_books::{
    ContactBook, ContactBookCreated, ContactBookDetails, ContactBookUpdated, CreateContactBook,
    UpdateContactBook,
};
pub use contacts::{
    Contact, ContactCreated, ContactUpdated, ContactUpserted, CreateContact, ListContactsParams,
    UpdateContact, UpsertContact,
};
pub use domains::{CreateDomain, Domain, DomainVerification};
pub use emails::{
    Attachment, BatchSent, Email, EmailCancelled, EmailCreated, EmailStatus, EmailUpdated,
    EventsParams, ListEmailsParams, Recipients, SendEmail, UpdateEmail,
};
pub use reports::{Metrics, MetricsParams, MetricsPeriod, Stats, StatsParams};
pub use suppressions::{
    AddSuppression, ListSuppressionsParams, Suppression, SuppressionAdded, SuppressionReason,
};
pub use templates::{CreateTemplate, Template, TemplateCreated, TemplateUpdated, UpdateTemplate};
pub use webhooks::{CreateWebhook, UpdateWebhook, Webhook, WebhookCreated, WebhookUpdated};
