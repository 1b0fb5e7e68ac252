//! Wire types exchanged with the JobZee REST API.

pub mod api;
pub mod application;
pub mod job;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Accepts either a JSON string or a JSON number and yields its string form.
///
/// The backend stores phone numbers as numbers but older records carry strings.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Value::deserialize(deserializer)? {
        Value::Text(text) => text,
        Value::Number(number) => number.to_string(),
    })
}
