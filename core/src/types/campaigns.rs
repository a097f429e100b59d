use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A campaign with its delivery counters.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: Option<String>,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub preview_text: Option<String>,
    pub contact_book_id: Option<String>,
    pub html: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub batch_size: Option<u32>,
    pub batch_window_minutes: Option<u32>,
    pub total: Option<u64>,
    pub sent: Option<u64>,
    pub delivered: Option<u64>,
    pub opened: Option<u64>,
    pub clicked: Option<u64>,
    pub unsubscribed: Option<u64>,
    pub bounced: Option<u64>,
    pub hard_bounced: Option<u64>,
    pub complained: Option<u64>,
    pub failed: Option<u64>,
    pub reply_to: Option<Vec<String>>,
    pub cc: Option<Vec<String>>,
    pub bcc: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaign {
    pub name: String,
    pub from: String,
    pub subject: String,
    pub contact_book_id: String,
    pub html: Option<String>,
    pub content: Option<String>,
    pub preview_text: Option<String>,
    pub reply_to: Option<Vec<String>>,
    pub cc: Option<Vec<String>>,
    pub bcc: Option<Vec<String>>,
    pub send_now: Option<bool>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub batch_size: Option<u32>,
}

impl CreateCampaign {
    pub fn new(
        name: impl Into<String>,
        from: impl Into<String>,
        subject: impl Into<String>,
        contact_book_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
            subject: subject.into(),
            contact_book_id: contact_book_id.into(),
            html: None,
            content: None,
            preview_text: None,
            reply_to: None,
            cc: None,
            bcc: None,
            send_now: None,
            scheduled_at: None,
            batch_size: None,
        }
    }
}

/// Payload for `POST /campaigns/{id}/schedule`.
///
/// `scheduled_at` is a string because the API also accepts relative
/// expressions; use [`ScheduleCampaign::at`] for an absolute instant.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCampaign {
    pub scheduled_at: String,
    pub batch_size: Option<u32>,
}

impl ScheduleCampaign {
    pub fn new(scheduled_at: impl Into<String>) -> Self {
        Self {
            scheduled_at: scheduled_at.into(),
            batch_size: None,
        }
    }

    pub fn at(when: DateTime<Utc>) -> Self {
        Self::new(when.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

/// Acknowledgement of schedule, pause, and resume calls.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignAction {
    pub id: String,
    pub status: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
