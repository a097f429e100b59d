use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::id;

/// One address or several. Serialized as a JSON string or array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Recipients::One(addr) => vec![addr.clone()],
            Recipients::Many(addrs) => addrs.clone(),
        }
    }
}

impl From<&str> for Recipients {
    fn from(addr: &str) -> Self {
        Recipients::One(addr.to_string())
    }
}

impl From<String> for Recipients {
    fn from(addr: String) -> Self {
        Recipients::One(addr)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addrs: Vec<String>) -> Self {
        Recipients::Many(addrs)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addrs: Vec<&str>) -> Self {
        Recipients::Many(addrs.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(addrs: [&str; N]) -> Self {
        Recipients::Many(addrs.iter().map(|a| a.to_string()).collect())
    }
}

/// A file attached to an outgoing email. `content` is base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub content: String,
}

/// Payload for `POST /emails` and each item of `POST /emails/batch`.
///
/// Either `subject` plus `html`/`text`, or `template_id` plus `variables`,
/// is expected by the API; the client sends whatever is set.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmail {
    pub to: Recipients,
    pub from: String,
    pub subject: Option<String>,
    pub html: Option<String>,
    pub text: Option<String>,
    pub template_id: Option<String>,
    pub variables: Option<BTreeMap<String, String>>,
    pub reply_to: Option<Recipients>,
    pub cc: Option<Recipients>,
    pub bcc: Option<Recipients>,
    pub attachments: Option<Vec<Attachment>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub in_reply_to_id: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
}

impl SendEmail {
    pub fn new(from: impl Into<String>, to: impl Into<Recipients>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            subject: None,
            html: None,
            text: None,
            template_id: None,
            variables: None,
            reply_to: None,
            cc: None,
            bcc: None,
            attachments: None,
            scheduled_at: None,
            in_reply_to_id: None,
            headers: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn scheduled_at(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(at);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCreated {
    pub email_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSent {
    pub data: Vec<EmailCreated>,
}

/// A sent or scheduled email as returned by the API.
///
/// Depending on the endpoint the delivery status arrives as `status`,
/// `latestStatus`, or both; [`current_status`](Self::current_status) picks
/// the most recent one.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub id: String,
    pub to: Option<Recipients>,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub html: Option<String>,
    pub text: Option<String>,
    pub status: Option<String>,
    pub latest_status: Option<String>,
    pub reply_to: Option<Recipients>,
    pub cc: Option<Recipients>,
    pub bcc: Option<Recipients>,
    #[serde(default, deserialize_with = "id::deserialize_opt")]
    pub domain_id: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Email {
    pub fn current_status(&self) -> Option<&str> {
        self.latest_status.as_deref().or(self.status.as_deref())
    }
}

/// Payload for `PATCH /emails/{id}`; only scheduled emails can be changed.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmail {
    pub scheduled_at: Option<DateTime<Utc>>,
    pub subject: Option<String>,
    pub html: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailUpdated {
    pub email_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCancelled {
    pub email_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEmailsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub domain_id: Option<String>,
}

/// Delivery status of an email, as used by the event filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailStatus {
    Scheduled,
    Queued,
    Sent,
    DeliveryDelayed,
    Bounced,
    Rejected,
    RenderingFailure,
    Delivered,
    Opened,
    Clicked,
    Complained,
    Failed,
    Cancelled,
}

impl EmailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailStatus::Scheduled => "SCHEDULED",
            EmailStatus::Queued => "QUEUED",
            EmailStatus::Sent => "SENT",
            EmailStatus::DeliveryDelayed => "DELIVERY_DELAYED",
            EmailStatus::Bounced => "BOUNCED",
            EmailStatus::Rejected => "REJECTED",
            EmailStatus::RenderingFailure => "RENDERING_FAILURE",
            EmailStatus::Delivered => "DELIVERED",
            EmailStatus::Opened => "OPENED",
            EmailStatus::Clicked => "CLICKED",
            EmailStatus::Complained => "COMPLAINED",
            EmailStatus::Failed => "FAILED",
            EmailStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for `GET /emails/{id}/events` and `GET /events`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventsParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<EmailStatus>,
    pub start_date: Option<DateTime<Utc>>,
}
