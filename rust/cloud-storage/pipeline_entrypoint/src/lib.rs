#![deny(missing_docs)]
//! Standardized initialization for the pipeline's lambda binaries.
//! Picks the tracing output format for the environment the binary runs in.

use tracing_subscriber::EnvFilter;

/// Where the binary is running, read from `ENVIRONMENT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// Running on a developer machine
    Local,
}

impl Environment {
    /// read the [Environment] from `ENVIRONMENT`, falling back to production when it is
    /// unset or not recognized
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|v| Self::from_name(&v))
            .unwrap_or(Environment::Production)
    }

    /// the [Environment] for a short name (`prod`, `dev` or `local`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "prod" => Some(Environment::Production),
            "dev" => Some(Environment::Develop),
            "local" => Some(Environment::Local),
            _ => None,
        }
    }

    /// the short name of this environment
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Production => "prod",
            Environment::Develop => "dev",
            Environment::Local => "local",
        }
    }
}

/// sets up tracing for a lambda binary
#[derive(Debug)]
pub struct PipelineEntrypoint {
    env: Environment,
}

impl Default for PipelineEntrypoint {
    fn default() -> Self {
        PipelineEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [PipelineEntrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl PipelineEntrypoint {
    /// consume self, load `.env`, install the panic hook and the global subscriber.
    /// Local runs get pretty ansi output, deployed runs get flattened json lines.
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let fmt = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_file(true)
            .with_line_number(true);

        if self.env == Environment::Local {
            fmt.with_ansi(true).pretty().init();
        } else {
            fmt.with_ansi(false)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init();
        }

        InitializedEntrypoint(())
    }
}
