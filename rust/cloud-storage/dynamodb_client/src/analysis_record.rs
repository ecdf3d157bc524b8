use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use models_image_analysis::{AnalysisRecord, Label};

/// Puts the analysis record into the table.
/// PutItem replaces the whole item so a previous analysis of the same image is overwritten.
#[tracing::instrument(skip(client, record))]
pub async fn put_analysis_record(
    client: &Client,
    table: &str,
    record: &AnalysisRecord,
) -> anyhow::Result<()> {
    client
        .put_item()
        .table_name(table)
        .set_item(Some(to_item(record)))
        .send()
        .await
        .context("failed to put analysis record into DynamoDB")?;

    Ok(())
}

pub(crate) fn to_item(record: &AnalysisRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "ImageName".to_string(),
            AttributeValue::S(record.image_name.clone()),
        ),
        (
            "Labels".to_string(),
            AttributeValue::L(record.labels.iter().map(label_attribute).collect()),
        ),
        (
            "Bucket".to_string(),
            AttributeValue::S(record.bucket.clone()),
        ),
    ])
}

// Numbers travel as strings so the decimal is stored exactly.
fn label_attribute(label: &Label) -> AttributeValue {
    AttributeValue::M(HashMap::from([
        ("Name".to_string(), AttributeValue::S(label.name.clone())),
        (
            "Confidence".to_string(),
            AttributeValue::N(label.confidence.to_string()),
        ),
    ]))
}
