use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::id;

/// A sending domain. Ids arrive as numbers or strings and are kept as text.
/// The hostname is sent as `name` or `domain`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    #[serde(deserialize_with = "id::deserialize")]
    pub id: String,
    pub name: Option<String>,
    pub domain: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Domain {
    pub fn hostname(&self) -> Option<&str> {
        self.name.as_deref().or(self.domain.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDomain {
    pub name: String,
    pub region: String,
}

impl CreateDomain {
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainVerification {
    #[serde(default, deserialize_with = "id::deserialize_opt")]
    pub id: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}
