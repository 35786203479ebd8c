//! # Request pipeline
//!
//! Runs the config stage then the data stage. A config failure
//! short-circuits; the data stage never runs. Each stage inspects its own
//! failure for logging, then wraps it with the stage context and
//! propagates it unchanged underneath.

use crate::config::{ConfigSource, SimulatedConfig};
use crate::fetch::{DataSource, SimulatedStore};
use errchain_error::{
    BoxError, ConfigError, ErrorChainExt, NO_ROWS_AVAILABLE, PATH_DOES_NOT_EXIST,
    RESOURCE_NOT_FOUND,
};
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

/// Stage of the pipeline an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Config,
    Fetch,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Config => "config",
            Stage::Fetch => "fetch",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure of a whole request, tagged with the stage that failed
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed during config stage: {0}")]
    Config(#[source] ConfigError),

    #[error("failed during data fetching stage: {0}")]
    Fetch(#[source] BoxError),
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::Config(_) => Stage::Config,
            PipelineError::Fetch(_) => Stage::Fetch,
        }
    }
}

/// Two-stage request runner over pluggable sources
#[derive(Debug, Clone, Default)]
pub struct Pipeline<C = SimulatedConfig, D = SimulatedStore> {
    config: C,
    store: D,
}

impl Pipeline {
    /// Pipeline over the simulated config and data stages
    pub fn simulated() -> Self {
        Self::default()
    }
}

impl<C: ConfigSource, D: DataSource> Pipeline<C, D> {
    pub fn new(config: C, store: D) -> Self {
        Self { config, store }
    }

    /// Run one request.
    ///
    /// Returns the fetched data, or the failing stage's error with the
    /// original cause still reachable through `source()`.
    pub fn process(&self, resource: &str, query: &str) -> Result<String, PipelineError> {
        info!(resource, query, "Processing request");

        if let Err(err) = self.config.load(resource) {
            inspect_config_failure(&err);
            return Err(PipelineError::Config(err));
        }

        match self.store.fetch(query) {
            Ok(data) => {
                info!(data = %data, "Successfully processed request");
                Ok(data)
            }
            Err(err) => {
                inspect_fetch_failure(err.as_ref());
                Err(PipelineError::Fetch(err))
            }
        }
    }
}

/// Run one request through the simulated stages
pub fn process_request(resource: &str, query: &str) -> Result<String, PipelineError> {
    Pipeline::simulated().process(resource, query)
}

fn inspect_config_failure(err: &ConfigError) {
    warn!(
        operation = err.operation(),
        file = err.resource_identifier(),
        "Detailed config error"
    );
    if err.has_sentinel(&PATH_DOES_NOT_EXIST) {
        info!("Underlying cause: file does not exist, a fallback could be attempted");
    }
}

fn inspect_fetch_failure(err: &(dyn StdError + Send + Sync + 'static)) {
    if err.has_sentinel(&NO_ROWS_AVAILABLE) {
        warn!("Data fetch error: the requested data was not found in the database");
    } else if err.has_sentinel(&RESOURCE_NOT_FOUND) {
        warn!("Data fetch error: a specific resource was not found");
    } else {
        warn!(error = %err, "Unknown error while fetching data");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errchain_error::{Message, Wrapped};
    use tracing_test::traced_test;

    struct FailingConfig;

    impl ConfigSource for FailingConfig {
        fn load(&self, resource: &str) -> Result<(), ConfigError> {
            Err(ConfigError::leaf(resource, "open file"))
        }
    }

    struct PanickingStore;

    impl DataSource for PanickingStore {
        fn fetch(&self, _query: &str) -> Result<String, BoxError> {
            panic!("data stage must not run after a config failure");
        }
    }

    struct LayeredStore;

    impl DataSource for LayeredStore {
        fn fetch(&self, query: &str) -> Result<String, BoxError> {
            let inner = Wrapped::new(format!("query {}", query), &NO_ROWS_AVAILABLE);
            let middle = Wrapped::new("connection pool", inner);
            Err(Box::new(Wrapped::new("repository", middle)))
        }
    }

    #[test]
    fn test_config_failure_short_circuits() {
        let pipeline = Pipeline::new(FailingConfig, PanickingStore);
        let err = pipeline.process("app.json", "123").unwrap_err();
        assert_eq!(err.stage(), Stage::Config);
        assert_eq!(
            err.to_string(),
            "failed during config stage: config error during 'open file' for file 'app.json': <nil>"
        );
    }

    #[test]
    fn test_deep_fetch_chain_keeps_root_cause() {
        let pipeline = Pipeline::new(SimulatedConfig, LayeredStore);
        let err = pipeline.process("valid.json", "7").unwrap_err();
        assert_eq!(err.stage(), Stage::Fetch);
        assert!(err.has_sentinel(&NO_ROWS_AVAILABLE));
        assert_eq!(err.chain().count(), 5);
        assert_eq!(
            err.to_string(),
            "failed during data fetching stage: repository: connection pool: query 7: no rows in result set"
        );
    }

    #[test]
    #[traced_test]
    fn test_config_failure_logs_operation_and_fallback() {
        let err = process_request("missing.json", "123").unwrap_err();
        assert_eq!(err.stage(), Stage::Config);
        assert!(logs_contain("Detailed config error"));
        assert!(logs_contain("operation=\"open file\""));
        assert!(logs_contain("file=\"missing.json\""));
        assert!(logs_contain("a fallback could be attempted"));
    }

    #[test]
    #[traced_test]
    fn test_parse_failure_does_not_suggest_fallback() {
        process_request("invalid.json", "123").unwrap_err();
        assert!(logs_contain("operation=\"parse content\""));
        assert!(!logs_contain("a fallback could be attempted"));
    }

    #[test]
    fn test_success() {
        assert_eq!(process_request("valid.json", "123").unwrap(), "Sample Data");
    }

    #[test]
    fn test_unknown_query_is_fetch_failure() {
        let err = process_request("valid.json", "abc").unwrap_err();
        assert_eq!(err.stage(), Stage::Fetch);
        assert!(err.find_cause::<Message>().is_some());
        assert!(err.sentinel().is_none());
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Config.to_string(), "config");
        assert_eq!(Stage::Fetch.to_string(), "fetch");
    }
}
