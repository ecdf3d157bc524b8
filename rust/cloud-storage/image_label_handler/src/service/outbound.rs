use dynamodb_client::AnalysisResults;
use models_image_analysis::{AnalysisRecord, DetectedLabel, MAX_LABELS, MIN_CONFIDENCE};
use rekognition_client::{DetectLabelsErr, Rekognition};

use super::{AnalysisRecordStore, LabelDetector};

impl LabelDetector for Rekognition {
    async fn detect_labels(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<DetectedLabel>, DetectLabelsErr> {
        Rekognition::detect_labels(self, bucket, key, MAX_LABELS, MIN_CONFIDENCE).await
    }
}

impl AnalysisRecordStore for AnalysisResults {
    async fn put_record(&self, record: &AnalysisRecord) -> anyhow::Result<()> {
        self.put_analysis_record(record).await
    }
}
