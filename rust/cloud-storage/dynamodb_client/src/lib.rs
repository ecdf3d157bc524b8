use aws_config::SdkConfig;

mod analysis_record;

use models_image_analysis::AnalysisRecord;

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    pub analysis_results: AnalysisResults,
}

impl DynamodbClient {
    pub fn new(aws_config: &SdkConfig, analysis_results_table: String) -> Self {
        let client = aws_sdk_dynamodb::Client::new(aws_config);

        Self::new_from_client(client, analysis_results_table)
    }

    pub fn new_from_client(
        client: aws_sdk_dynamodb::Client,
        analysis_results_table: String,
    ) -> Self {
        Self {
            analysis_results: AnalysisResults {
                table: analysis_results_table,
                client,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisResults {
    table: String,
    client: aws_sdk_dynamodb::Client,
}

impl AnalysisResults {
    /// Writes the record, replacing any existing record with the same image name.
    #[tracing::instrument(skip(self, record), fields(table=%self.table, image_name=%record.image_name))]
    pub async fn put_analysis_record(&self, record: &AnalysisRecord) -> anyhow::Result<()> {
        analysis_record::put_analysis_record(&self.client, &self.table, record).await
    }
}
