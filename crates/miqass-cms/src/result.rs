//! The normalized outcome of every content-API operation.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Discriminated result of a content fetch.
///
/// Callers branch on the variant before touching data; no error type ever
/// crosses this boundary. Serializes to the wire shape the site's JSON
/// endpoints expose: `{"success":true,"data":…}` on success,
/// `{"success":false,"message":…}` on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentResult<T> {
    Success { data: T },
    Failure { message: String },
}

impl<T> ContentResult<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ContentResult::Success { .. })
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            ContentResult::Success { data } => Some(data),
            ContentResult::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            ContentResult::Success { data } => Some(data),
            ContentResult::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            ContentResult::Success { .. } => None,
            ContentResult::Failure { message } => Some(message),
        }
    }
}

impl<T: Serialize> Serialize for ContentResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            ContentResult::Success { data } => {
                map.serialize_entry("success", &true)?;
                map.serialize_entry("data", data)?;
            }
            ContentResult::Failure { message } => {
                map.serialize_entry("success", &false)?;
                map.serialize_entry("message", message)?;
            }
        }
        map.end()
    }
}
