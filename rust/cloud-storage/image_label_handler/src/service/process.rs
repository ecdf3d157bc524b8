use models_image_analysis::AnalysisRecord;
use rekognition_client::DetectLabelsErr;
use thiserror::Error;

use super::{
    AnalysisRecordStore, LabelDetector,
    labels::{self, NormalizeErr},
};
use crate::model::ObjectLocation;

/// Anything that went wrong after the event was decoded.
/// Every variant is reported to the caller the same way.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Labeling(#[from] DetectLabelsErr),
    #[error(transparent)]
    Normalize(#[from] NormalizeErr),
    #[error("{0:#}")]
    Store(anyhow::Error),
}

/// Labels the object and stores the analysis.
/// The record is only written once every label has been normalized.
#[tracing::instrument(skip_all, fields(bucket=%location.bucket, key=%location.key))]
pub async fn process<D, S>(
    detector: &D,
    store: &S,
    location: &ObjectLocation,
) -> Result<AnalysisRecord, ProcessError>
where
    D: LabelDetector,
    S: AnalysisRecordStore,
{
    tracing::info!("detecting labels");
    let detected = detector
        .detect_labels(&location.bucket, &location.key)
        .await?;

    tracing::info!(label_count = detected.len(), "label detection response received");

    let labels = labels::normalize_labels(detected)?;

    tracing::info!(labels=?labels, "detected labels");

    let record = AnalysisRecord {
        image_name: location.key.clone(),
        labels,
        bucket: location.bucket.clone(),
    };

    store
        .put_record(&record)
        .await
        .map_err(ProcessError::Store)?;

    tracing::info!("stored analysis record");

    Ok(record)
}
