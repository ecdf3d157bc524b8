use aws_sdk_rekognition::{
    Client,
    error::{DisplayErrorContext, SdkError},
    operation::detect_labels::DetectLabelsError,
    types::{Image, Label, S3Object},
};
use models_image_analysis::DetectedLabel;
use thiserror::Error;

/// Errors returned by [detect_labels], grouped by what the caller could act on
#[derive(Debug, Error)]
pub enum DetectLabelsErr {
    #[error("object not found or not readable: {0}")]
    ObjectNotFound(String),
    #[error("unsupported image: {0}")]
    UnsupportedImage(String),
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("throttled: {0}")]
    Throttled(String),
    #[error("{0}")]
    Service(String),
    #[error("label is missing {0}")]
    MissingField(&'static str),
}

impl<R> From<SdkError<DetectLabelsError, R>> for DetectLabelsErr
where
    R: std::fmt::Debug,
{
    fn from(err: SdkError<DetectLabelsError, R>) -> Self {
        let message = DisplayErrorContext(&err).to_string();
        match err.as_service_error() {
            Some(DetectLabelsError::InvalidS3ObjectException(_)) => Self::ObjectNotFound(message),
            Some(
                DetectLabelsError::InvalidImageFormatException(_)
                | DetectLabelsError::ImageTooLargeException(_),
            ) => Self::UnsupportedImage(message),
            Some(DetectLabelsError::AccessDeniedException(_)) => Self::AccessDenied(message),
            Some(
                DetectLabelsError::ThrottlingException(_)
                | DetectLabelsError::ProvisionedThroughputExceededException(_),
            ) => Self::Throttled(message),
            _ => Self::Service(message),
        }
    }
}

#[tracing::instrument(skip(client))]
pub async fn detect_labels(
    client: &Client,
    bucket: &str,
    key: &str,
    max_labels: i32,
    min_confidence: f32,
) -> Result<Vec<DetectedLabel>, DetectLabelsErr> {
    let image = Image::builder()
        .s3_object(S3Object::builder().bucket(bucket).name(key).build())
        .build();

    let resp = client
        .detect_labels()
        .image(image)
        .max_labels(max_labels)
        .min_confidence(min_confidence)
        .send()
        .await?;

    resp.labels().iter().map(to_detected_label).collect()
}

fn to_detected_label(label: &Label) -> Result<DetectedLabel, DetectLabelsErr> {
    let name = label.name().ok_or(DetectLabelsErr::MissingField("name"))?;
    let confidence = label
        .confidence()
        .ok_or(DetectLabelsErr::MissingField("confidence"))?;

    Ok(DetectedLabel::new(name, confidence))
}
