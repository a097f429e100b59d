use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBook {
    pub id: String,
    pub name: Option<String>,
    pub emoji: Option<String>,
    pub properties: Option<BTreeMap<String, String>>,
    pub team_id: Option<String>,
    pub details: Option<ContactBookDetails>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBookDetails {
    pub total_contacts: Option<u64>,
    pub unsubscribed_contacts: Option<u64>,
    pub campaigns: Option<Vec<Value>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContactBook {
    pub name: String,
    pub emoji: Option<String>,
    pub properties: Option<BTreeMap<String, String>>,
}

impl CreateContactBook {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emoji: None,
            properties: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateContactBook {
    pub name: Option<String>,
    pub emoji: Option<String>,
    pub properties: Option<BTreeMap<String, String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBookCreated {
    pub id: String,
    pub name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBookUpdated {
    pub id: String,
    pub updated_at: Option<DateTime<Utc>>,
}
