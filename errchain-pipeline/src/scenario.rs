//! The fixed demonstration scenarios

use crate::markers::*;
use crate::Stage;
use errchain_error::{Sentinel, NO_ROWS_AVAILABLE, PATH_DOES_NOT_EXIST, RESOURCE_NOT_FOUND};

/// How a scenario is expected to end
#[derive(Debug, Clone, Copy)]
pub enum Expected {
    Success(&'static str),
    Failure {
        stage: Stage,
        sentinel: Option<&'static Sentinel>,
    },
}

/// One request with its inputs and expected outcome
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub resource: &'static str,
    pub query: &'static str,
    pub expected: Expected,
}

pub static SCENARIOS: [Scenario; 5] = [
    Scenario {
        name: "config file missing",
        resource: MISSING_CONFIG,
        query: KNOWN_QUERY,
        expected: Expected::Failure {
            stage: Stage::Config,
            sentinel: Some(&PATH_DOES_NOT_EXIST),
        },
    },
    Scenario {
        name: "invalid config content",
        resource: INVALID_CONFIG,
        query: KNOWN_QUERY,
        expected: Expected::Failure {
            stage: Stage::Config,
            sentinel: None,
        },
    },
    Scenario {
        name: "no rows in database",
        resource: VALID_CONFIG,
        query: NO_ROWS_QUERY,
        expected: Expected::Failure {
            stage: Stage::Fetch,
            sentinel: Some(&NO_ROWS_AVAILABLE),
        },
    },
    Scenario {
        name: "custom resource not found",
        resource: VALID_CONFIG,
        query: MISSING_RESOURCE_QUERY,
        expected: Expected::Failure {
            stage: Stage::Fetch,
            sentinel: Some(&RESOURCE_NOT_FOUND),
        },
    },
    Scenario {
        name: "success",
        resource: VALID_CONFIG,
        query: KNOWN_QUERY,
        expected: Expected::Success(SAMPLE_DATA),
    },
];
