pub mod labels;
pub mod process;
mod outbound;

use models_image_analysis::{AnalysisRecord, DetectedLabel};
use rekognition_client::DetectLabelsErr;

pub use process::process;

/// Something which can label the image stored at a bucket and key
#[cfg_attr(test, mockall::automock)]
pub trait LabelDetector: Send + Sync + 'static {
    /// returns the labels ranked by the service, most relevant first
    fn detect_labels(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = Result<Vec<DetectedLabel>, DetectLabelsErr>> + Send;
}

/// Where analysis records end up
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisRecordStore: Send + Sync + 'static {
    /// insert the record or fully replace the one with the same image name
    fn put_record(&self, record: &AnalysisRecord)
    -> impl Future<Output = anyhow::Result<()>> + Send;
}
