//! Request DTOs for the API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Request body for `POST /api/books` and `PUT /api/books/:id`.
///
/// Fields are read leniently: a field that is absent or not a string is
/// `None`, and never makes the whole body fail to deserialize. A missing
/// title is then reported by the handler with the route's own message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub author: Option<String>,
}

impl BookRequest {
    /// Returns the title if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

/// One element of the security-question verification body.
///
/// Only built after the body passed
/// [`crate::validation::SECURITY_ANSWERS_SCHEMA`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecurityAnswer {
    pub answer: String,
}

impl SecurityAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}
