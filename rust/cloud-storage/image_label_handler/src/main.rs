mod config;
mod context;
mod handler;
mod model;
mod service;

use anyhow::Context as _;
use config::Config;
use dynamodb_client::DynamodbClient;
use handler::handler;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use pipeline_entrypoint::PipelineEntrypoint;
use rekognition_client::Rekognition;

#[tokio::main]
async fn main() -> Result<(), Error> {
    PipelineEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::info!(
        table=%config.analysis_results_table,
        environment = config.environment.name(),
        "lambda initializing"
    );

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let rekognition = Rekognition::new(aws_sdk_rekognition::Client::new(&aws_config));
    let dynamodb = DynamodbClient::new(&aws_config, config.analysis_results_table.clone());

    tracing::trace!("initialized clients");

    let ctx = context::Context::new(rekognition, dynamodb.analysis_results);

    let func = service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let ctx = ctx.clone();

        async move { handler(&ctx, event).await }
    });

    run(func).await
}
