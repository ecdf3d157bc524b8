use anyhow::Context;
use std::env::VarError;

pub use pipeline_entrypoint::Environment;

/// Variable holding the name of the table analysis records are written to
const ANALYSIS_RESULTS_TABLE_VAR: &str = "DYNAMODB_TABLE";

/// Table used when [ANALYSIS_RESULTS_TABLE_VAR] is not set
pub const DEFAULT_ANALYSIS_RESULTS_TABLE: &str = "ImageAnalysisResults";

#[derive(Debug, Clone)]
pub struct Config {
    /// The dynamodb table analysis records are written to
    pub analysis_results_table: String,

    /// The environment we are in
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name), Environment::new_or_prod())
    }

    fn from_lookup<F>(lookup: F, environment: Environment) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let analysis_results_table = match lookup(ANALYSIS_RESULTS_TABLE_VAR) {
            Ok(table) => table,
            Err(VarError::NotPresent) => DEFAULT_ANALYSIS_RESULTS_TABLE.to_string(),
            Err(e) => return Err(e).context("DYNAMODB_TABLE must be valid unicode"),
        };

        Ok(Config {
            analysis_results_table,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_table() {
        let config =
            Config::from_lookup(|_| Err(VarError::NotPresent), Environment::Local).unwrap();
        assert_eq!(config.analysis_results_table, "ImageAnalysisResults");
    }

    #[test]
    fn reads_table_from_env() {
        let config = Config::from_lookup(
            |name| match name {
                "DYNAMODB_TABLE" => Ok("LabelsDev".to_string()),
                _ => Err(VarError::NotPresent),
            },
            Environment::Develop,
        )
        .unwrap();
        assert_eq!(config.analysis_results_table, "LabelsDev");
        assert_eq!(config.environment, Environment::Develop);
    }

    #[test]
    fn rejects_non_unicode_table() {
        let result = Config::from_lookup(
            |_| Err(VarError::NotUnicode("\u{FFFD}".into())),
            Environment::Production,
        );
        assert!(result.is_err());
    }
}
