//! Common types exchanged with the sneaker order API

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a shoe order.
///
/// The API hands out string object ids, but numeric ids show up too; both are
/// normalised to their string form so comparisons are exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShoeId(String);

impl ShoeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShoeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShoeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ShoeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ShoeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Number(id) => Self(id.to_string()),
        })
    }
}

/// A single shoe order as served by the API and the push channel.
///
/// The identifier is read from `_id`, falling back to `id`. When both are
/// present `_id` wins and `id` is kept among the details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawShoe")]
pub struct Shoe {
    #[serde(rename = "_id")]
    pub id: ShoeId,
    pub status: String,
    /// Everything else the API sends along (customer, sizes, colours...)
    #[serde(flatten)]
    pub details: BTreeMap<String, JsonValue>,
}

/// Wire form of [`Shoe`] before the identifier is settled
#[derive(Deserialize)]
struct RawShoe {
    #[serde(rename = "_id", default)]
    mongo_id: Option<ShoeId>,
    #[serde(default)]
    id: Option<JsonValue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    status: String,
    #[serde(flatten)]
    details: BTreeMap<String, JsonValue>,
}

impl TryFrom<RawShoe> for Shoe {
    type Error = String;

    fn try_from(raw: RawShoe) -> Result<Self, Self::Error> {
        let RawShoe {
            mongo_id,
            id,
            status,
            mut details,
        } = raw;

        let id = match (mongo_id, id) {
            (Some(mongo_id), plain) => {
                if let Some(plain) = plain {
                    details.insert("id".to_owned(), plain);
                }
                mongo_id
            }
            (None, Some(plain)) => ShoeId::deserialize(plain).map_err(|err| err.to_string())?,
            (None, None) => return Err("missing field `_id`".to_owned()),
        };

        Ok(Self {
            id,
            status,
            details,
        })
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Shoe {
    pub fn new(id: impl Into<ShoeId>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            details: BTreeMap::new(),
        }
    }

    /// Render a detail field for display, without JSON quoting for strings
    pub fn detail(&self, key: &str) -> Option<String> {
        self.details.get(key).map(|value| match value {
            JsonValue::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}

/// Login / signup request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shoe_accepts_mongo_and_plain_ids() {
        let mongo: Shoe = serde_json::from_value(json!({ "_id": "65a1", "status": "new" })).unwrap();
        let plain: Shoe = serde_json::from_value(json!({ "id": 1, "status": "new" })).unwrap();

        assert_eq!(mongo.id.as_str(), "65a1");
        assert_eq!(plain.id, ShoeId::from(1_u64));
    }

    #[test]
    fn test_shoe_keeps_display_fields() {
        let shoe: Shoe = serde_json::from_value(json!({
            "_id": "65a1",
            "status": "in production",
            "customer": "Sam",
            "size": 43
        }))
        .unwrap();

        assert_eq!(shoe.status, "in production");
        assert_eq!(shoe.detail("customer").as_deref(), Some("Sam"));
        assert_eq!(shoe.detail("size").as_deref(), Some("43"));
        assert!(shoe.detail("_id").is_none());

        let back = serde_json::to_value(&shoe).unwrap();
        assert_eq!(back["_id"], "65a1");
        assert_eq!(back["customer"], "Sam");
    }

    #[test]
    fn test_missing_status_defaults_to_empty() {
        let shoe: Shoe = serde_json::from_value(json!({ "_id": "x" })).unwrap();
        assert!(shoe.status.is_empty());
        assert!(shoe.details.is_empty());

        let shoe: Shoe = serde_json::from_value(json!({ "_id": "x", "status": null })).unwrap();
        assert!(shoe.status.is_empty());
        assert!(shoe.details.is_empty());
    }

    #[test]
    fn test_mongo_id_wins_over_virtual_id() {
        let shoe: Shoe =
            serde_json::from_value(json!({ "_id": "65a1", "id": "65a1", "status": "new" })).unwrap();

        assert_eq!(shoe.id.as_str(), "65a1");
        assert_eq!(shoe.status, "new");
        assert_eq!(shoe.detail("id").as_deref(), Some("65a1"));
    }

    #[test]
    fn test_shoe_without_any_id_is_rejected() {
        let err = serde_json::from_value::<Shoe>(json!({ "status": "new" })).unwrap_err();
        assert!(err.to_string().contains("_id"));
    }
}
