use serde::Serialize;

/// Body returned when the event cannot be decoded
pub const MALFORMED_EVENT_BODY: &str = "Error parsing S3 event structure";

/// What the invocation hands back to the runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResult {
    pub fn malformed_event() -> Self {
        Self {
            status_code: 400,
            body: MALFORMED_EVENT_BODY.to_string(),
        }
    }

    pub fn processing_error(key: &str, err: &impl std::fmt::Display) -> Self {
        Self {
            status_code: 500,
            body: json_message(format!("Error processing {}: {}", key, err)),
        }
    }

    pub fn success(key: &str) -> Self {
        Self {
            status_code: 200,
            body: json_message(format!(
                "Successfully processed {} and stored labels.",
                key
            )),
        }
    }
}

/// Encodes the message as a json string literal
fn json_message(message: String) -> String {
    serde_json::Value::String(message).to_string()
}
