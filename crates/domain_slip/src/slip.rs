//! The slip entity
//!
//! A slip is a free-form text body with an ordered list of tags. The store
//! assigns its identifier and both timestamps; callers only ever supply a
//! [`SlipDraft`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned slip identifier
pub type SlipId = i64;

/// A persisted slip
///
/// Serializes with lower-snake-case keys and RFC 3339 timestamps:
///
/// ```json
/// {"id":1,"body":"Lorem ipsum","tags":["tag1"],"created_at":"2000-02-01T12:13:14.000000015Z","updated_at":"2000-02-01T12:13:14.000000015Z"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slip {
    /// Unique, immutable once created
    pub id: SlipId,
    /// Free-form text
    pub body: String,
    /// Tags in caller order
    pub tags: Vec<String>,
    /// When the store inserted the row
    pub created_at: DateTime<Utc>,
    /// When the store last touched the row
    pub updated_at: DateTime<Utc>,
}

impl Slip {
    /// Returns the caller-controlled part of this slip
    pub fn draft(&self) -> SlipDraft {
        SlipDraft {
            body: self.body.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// The fields a caller may set when creating or updating a slip
///
/// Anything else found in an inbound payload (`id`, timestamps) is dropped
/// during deserialization, so it can never reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlipDraft {
    pub body: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// `"tags": null` reads as no tags
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SlipDraft {
    /// Creates a draft from a body and any iterable of tags
    pub fn new<I, T>(body: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            body: body.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}
