use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::validation::ValidateBody;

/// A stored message. The backing file keys each message by its `id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub content: String,
}

impl Message {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self { id: id.into(), content: content.into() }
    }
}

/// Older store files were written with numeric ids; accept both on read.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid message id: {other}"))),
    }
}

/// Body of `POST /messages`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateMessageInput {
    pub content: String,
}

impl ValidateBody for CreateMessageInput {
    fn constraint_violations(body: &Value) -> Vec<String> {
        match body.get("content") {
            Some(Value::String(_)) => Vec::new(),
            _ => vec!["content must be a string".to_string()],
        }
    }
}
