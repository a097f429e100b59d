use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// A contact. Custom fields arrive as `properties`, or as `metadata` from
/// older deployments.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub subscribed: Option<bool>,
    pub properties: Option<Map<String, Value>>,
    pub metadata: Option<Map<String, Value>>,
    pub contact_book_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Contact {
    pub fn custom_fields(&self) -> Option<&Map<String, Value>> {
        self.properties.as_ref().or(self.metadata.as_ref())
    }
}

/// Payload for creating (POST) or upserting (PUT) a contact.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub subscribed: Option<bool>,
    pub properties: Option<Map<String, Value>>,
}

impl CreateContact {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            last_name: None,
            subscribed: None,
            properties: None,
        }
    }
}

pub type UpsertContact = CreateContact;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContact {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub subscribed: Option<bool>,
    pub properties: Option<Map<String, Value>>,
}

/// Acknowledgement body shared by the contact write endpoints. The id is
/// sent as `contactId`, `id`, or both.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAck {
    contact_id: Option<String>,
    id: Option<String>,
    email: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl ContactAck {
    fn take_id(&mut self) -> Result<String, String> {
        self.contact_id
            .take()
            .or_else(|| self.id.take())
            .ok_or_else(|| "missing field `contactId` or `id`".to_string())
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactAck")]
pub struct ContactCreated {
    pub id: String,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<ContactAck> for ContactCreated {
    type Error = String;

    fn try_from(mut ack: ContactAck) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ack.take_id()?,
            email: ack.email,
            created_at: ack.created_at,
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactAck")]
pub struct ContactUpdated {
    pub id: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ContactAck> for ContactUpdated {
    type Error = String;

    fn try_from(mut ack: ContactAck) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ack.take_id()?,
            updated_at: ack.updated_at,
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactAck")]
pub struct ContactUpserted {
    pub id: String,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ContactAck> for ContactUpserted {
    type Error = String;

    fn try_from(mut ack: ContactAck) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ack.take_id()?,
            email: ack.email,
            created_at: ack.created_at,
            updated_at: ack.updated_at,
        })
    }
}

/// Filters for `GET /contactBooks/{id}/contacts`. Multi-valued filters are
/// sent comma-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListContactsParams {
    pub emails: Vec<String>,
    pub ids: Vec<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
