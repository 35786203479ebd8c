//! # errchain pipeline
//!
//! A two-stage request that produces and consumes error chains:
//! 1. Config stage loads the config named by a resource identifier
//! 2. Data stage fetches the data for a query identifier
//! 3. A config failure stops the request before the data stage
//! 4. Each stage inspects its failure, wraps it with stage context and
//!    propagates it
//! 5. The top-level handler reads the chain into a [`Diagnosis`]

pub mod config;
pub mod fetch;
pub mod markers;
mod pipeline;
pub mod report;
pub mod scenario;

pub use config::{load_app_config, ConfigSource, SimulatedConfig};
pub use fetch::{fetch_data, DataSource, SimulatedStore};
pub use pipeline::{process_request, Pipeline, PipelineError, Stage};
pub use report::{ChainReport, Diagnosis, Recovery};
pub use scenario::{Expected, Scenario, SCENARIOS};
