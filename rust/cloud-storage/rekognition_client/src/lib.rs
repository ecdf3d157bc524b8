mod detect_labels;

pub use detect_labels::DetectLabelsErr;
use models_image_analysis::DetectedLabel;

#[derive(Clone, Debug)]
pub struct Rekognition {
    /// Inner Rekognition client
    inner: aws_sdk_rekognition::Client,
}

impl Rekognition {
    pub fn new(inner: aws_sdk_rekognition::Client) -> Self {
        Self { inner }
    }

    /// Detects labels for the image stored at the provided bucket and key.
    /// Labels come back in the order the service ranked them.
    #[tracing::instrument(skip(self))]
    pub async fn detect_labels(
        &self,
        bucket: &str,
        key: &str,
        max_labels: i32,
        min_confidence: f32,
    ) -> Result<Vec<DetectedLabel>, DetectLabelsErr> {
        detect_labels::detect_labels(&self.inner, bucket, key, max_labels, min_confidence).await
    }
}
