use serde_json::Value;
use thiserror::Error;

/// The inbound event does not have the shape of an S3 notification
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeErr {
    #[error("event is missing {0}")]
    MissingField(&'static str),
}

/// The object a notification refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    /// literal object key, already decoded
    pub key: String,
}

impl ObjectLocation {
    /// Reads the bucket and key of the first record of an S3 notification.
    /// Any further records are not looked at.
    pub fn from_event(event: &Value) -> Result<Self, DecodeErr> {
        let s3 = event
            .get("Records")
            .and_then(|records| records.get(0))
            .and_then(|record| record.get("s3"))
            .ok_or(DecodeErr::MissingField("Records[0].s3"))?;

        let bucket = s3
            .get("bucket")
            .and_then(|bucket| bucket.get("name"))
            .and_then(|name| name.as_str())
            .ok_or(DecodeErr::MissingField("Records[0].s3.bucket.name"))?;

        let key = s3
            .get("object")
            .and_then(|object| object.get("key"))
            .and_then(|key| key.as_str())
            .ok_or(DecodeErr::MissingField("Records[0].s3.object.key"))?;

        Ok(Self {
            bucket: bucket.to_string(),
            key: decode_key(key),
        })
    }
}

/// Number of records carried by the event
pub fn record_count(event: &Value) -> usize {
    event
        .get("Records")
        .and_then(|records| records.as_array())
        .map_or(0, |records| records.len())
}

/// S3 encodes spaces in keys as `+` and everything else with percent escapes.
/// Byte sequences that are not valid UTF-8 once unescaped become U+FFFD.
pub fn decode_key(encoded: &str) -> String {
    let spaced = encoded.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
