use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::{
    context::Context,
    model::{InvocationResult, ObjectLocation, event},
    service::{self, AnalysisRecordStore, LabelDetector},
};

/// Processes the s3 event.
/// Failures are reported through the returned [InvocationResult], never as a lambda error.
#[tracing::instrument(skip_all)]
pub async fn handler<D, S>(
    ctx: &Context<D, S>,
    event: LambdaEvent<Value>,
) -> Result<InvocationResult, Error>
where
    D: LabelDetector,
    S: AnalysisRecordStore,
{
    Ok(handle_event(
        ctx.label_detector.as_ref(),
        ctx.record_store.as_ref(),
        &event.payload,
    )
    .await)
}

pub async fn handle_event<D, S>(detector: &D, store: &S, payload: &Value) -> InvocationResult
where
    D: LabelDetector,
    S: AnalysisRecordStore,
{
    tracing::info!(event=%payload, "received event");

    let location = match ObjectLocation::from_event(payload) {
        Ok(location) => location,
        Err(e) => {
            tracing::error!(error=%e, event=%payload, "unable to extract bucket/key from event");
            return InvocationResult::malformed_event();
        }
    };

    let record_count = event::record_count(payload);
    if record_count > 1 {
        tracing::warn!(record_count, "only the first record of the event is processed");
    }

    tracing::info!(bucket=%location.bucket, key=%location.key, "processing object");

    match service::process(detector, store, &location).await {
        Ok(_) => {
            tracing::info!(key=%location.key, "processing complete");
            InvocationResult::success(&location.key)
        }
        Err(e) => {
            tracing::error!(error=%e, key=%location.key, "error during processing");
            InvocationResult::processing_error(&location.key, &e)
        }
    }
}
