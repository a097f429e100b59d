//! Resource clients, one per API area.
//!
//! Each client borrows the [`Unsent`](crate::Unsent) dispatcher and maps its
//! methods to one endpoint each. Obtain them through the accessors on
//! `Unsent`, e.g. `client.emails().send(&email)`.

mod activity;
mod analytics;
mod api_keys;
mod campaigns;
mod contact_books;
mod contacts;
mod domains;
mod emails;
mod events;
mod metrics;
mod settings;
mod stats;
mod suppressions;
mod system;
mod teams;
mod templates;
mod webhooks;

pub use activity::Activity;
pub use analytics::Analytics;
pub use api_keys::ApiKeys;
pub use campaigns::Campaigns;
pub use contact_books::ContactBooks;
pub use contacts::Contacts;
pub use domains::Domains;
pub use emails::Emails;
pub use events::Events;
pub use metrics::Metrics;
pub use settings::Settings;
pub use stats::Stats;
pub use suppressions::Suppressions;
pub use system::System;
pub use teams::Teams;
pub use templates::Templates;
pub use webhooks::Webhooks;
