//! # Top-level diagnosis
//!
//! Turns a failed request into what the user sees: a headline, the full
//! rendered chain, and a suggested recovery. Everything here is derived by
//! inspecting the chain; nothing is threaded through the stages by hand.

use crate::pipeline::PipelineError;
use crate::Stage;
use errchain_error::{
    ConfigError, ErrorChainExt, ErrorKind, Sentinel, NO_ROWS_AVAILABLE, PATH_DOES_NOT_EXIST,
    RESOURCE_NOT_FOUND,
};
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;

/// What the caller could do about a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recovery {
    /// Try a fallback resource
    Fallback,
    /// Continue with default data
    UseDefault,
    /// Nothing to recover; report and move on
    None,
}

impl fmt::Display for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recovery::Fallback => "attempt fallback",
            Recovery::UseDefault => "use default data",
            Recovery::None => "none",
        };
        write!(f, "{}", s)
    }
}

/// Operation and file recovered from a [`ConfigError`] in the chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigContext {
    pub operation: String,
    pub resource: String,
}

/// One node of a rendered chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainNode {
    pub kind: &'static str,
    pub message: String,
}

/// Every node of a chain, outermost first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    pub nodes: Vec<ChainNode>,
}

impl ChainReport {
    pub fn of(err: &(dyn StdError + 'static)) -> Self {
        let nodes = err
            .chain()
            .map(|node| ChainNode {
                kind: classify(node).as_str(),
                message: node.to_string(),
            })
            .collect();
        Self { nodes }
    }

    pub fn depth(&self) -> usize {
        self.nodes.len()
    }
}

/// Stage wraps are this crate's own contextual layer, not foreign errors.
fn classify(node: &(dyn StdError + 'static)) -> ErrorKind {
    if node.is::<PipelineError>() {
        ErrorKind::Context
    } else {
        ErrorKind::of(node)
    }
}

/// The top-level handler's reading of a failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub stage: Stage,
    pub headline: String,
    pub rendered: String,
    pub root_sentinel: Option<&'static str>,
    pub config: Option<ConfigContext>,
    pub recovery: Recovery,
    pub chain: ChainReport,
}

impl Diagnosis {
    pub fn of(err: &PipelineError) -> Self {
        let sentinel = err.sentinel();
        let config = err.find_cause::<ConfigError>().map(|config| ConfigContext {
            operation: config.operation().to_string(),
            resource: config.resource_identifier().to_string(),
        });

        Self {
            stage: err.stage(),
            headline: headline(err.stage(), sentinel, config.as_ref()),
            rendered: err.to_string(),
            root_sentinel: sentinel.map(Sentinel::name),
            config,
            recovery: recovery_for(sentinel),
            chain: ChainReport::of(err),
        }
    }
}

fn recovery_for(sentinel: Option<&'static Sentinel>) -> Recovery {
    match sentinel {
        Some(s) if *s == PATH_DOES_NOT_EXIST => Recovery::Fallback,
        Some(s) if *s == NO_ROWS_AVAILABLE => Recovery::UseDefault,
        _ => Recovery::None,
    }
}

fn headline(stage: Stage, sentinel: Option<&'static Sentinel>, config: Option<&ConfigContext>) -> String {
    match (stage, config) {
        (Stage::Config, Some(config)) => match sentinel {
            Some(s) if *s == PATH_DOES_NOT_EXIST => format!(
                "Operation '{}' on file '{}' failed: file does not exist",
                config.operation, config.resource
            ),
            _ => format!(
                "Operation '{}' on file '{}' failed",
                config.operation, config.resource
            ),
        },
        (Stage::Config, None) => "An unexpected error occurred while loading config".to_string(),
        (Stage::Fetch, _) => match sentinel {
            Some(s) if *s == NO_ROWS_AVAILABLE => {
                "The requested data was not found in the database".to_string()
            }
            Some(s) if *s == RESOURCE_NOT_FOUND => "A specific resource was not found".to_string(),
            _ => "An unknown error occurred while fetching data".to_string(),
        },
    }
}
