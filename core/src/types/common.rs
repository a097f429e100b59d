//! Shapes shared by several resources.

use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// A page of results.
///
/// The API is not consistent about list envelopes: some endpoints return a
/// bare array, others `{"data": [...], "count": n}`. Both decode into the
/// same value; `count` is `None` when the server did not send one.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List<T> {
    pub data: Vec<T>,
    pub count: Option<u64>,
}

impl<T> List<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            count: None,
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Keys that may carry the items of a wrapped list, in order of preference.
const ITEM_KEYS: [&str; 3] = ["data", "events", "activity"];
const COUNT_KEYS: [&str; 2] = ["count", "total"];

impl<'de, T> Deserialize<'de> for List<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (items, count) = match Value::deserialize(deserializer)? {
            Value::Array(items) => (Value::Array(items), None),
            Value::Object(mut map) => {
                let items = ITEM_KEYS
                    .iter()
                    .find_map(|key| map.remove(*key))
                    .ok_or_else(|| D::Error::missing_field("data"))?;
                let count = COUNT_KEYS
                    .iter()
                    .find_map(|key| map.remove(*key))
                    .filter(|count| !count.is_null());
                (items, count)
            }
            other => {
                return Err(D::Error::invalid_type(
                    unexpected(&other),
                    &"an array or an object with a `data` array",
                ))
            }
        };

        let data = Vec::<T>::deserialize(items)
            .map_err(|err| D::Error::custom(format_args!("list item: {err}")))?;
        let count = count
            .map(u64::deserialize)
            .transpose()
            .map_err(|err| D::Error::custom(format_args!("list count: {err}")))?;
        Ok(List { data, count })
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Page-based filters accepted by most list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

/// Result of a delete call. Endpoints disagree on which fields they return,
/// so all of them are optional.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deleted {
    #[serde(default, deserialize_with = "id::deserialize_opt")]
    pub id: Option<String>,
    pub email: Option<String>,
    pub deleted: Option<bool>,
    pub success: Option<bool>,
}

impl Deleted {
    /// True when the server confirmed the deletion by either flag.
    pub fn is_deleted(&self) -> bool {
        self.deleted.or(self.success).unwrap_or(false)
    }
}

/// An entry of an event or activity feed. Well-known fields are typed; the
/// rest of the object is kept as-is.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: Option<String>,
    pub email_id: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Identifiers some endpoints emit as JSON numbers and others as strings.
pub(crate) mod id {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    impl Raw {
        fn into_string(self) -> String {
            match self {
                Raw::Text(s) => s,
                Raw::Number(n) => n.to_string(),
            }
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Raw::deserialize(deserializer).map(Raw::into_string)
    }

    pub fn deserialize_opt<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Option::<Raw>::deserialize(deserializer).map(|raw| raw.map(Raw::into_string))
    }
}
