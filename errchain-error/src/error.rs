//! Structured and contextual error types for errchain

use crate::BoxError;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// A configuration failure with the step and file it happened on.
///
/// `ConfigError` carries:
/// - `resource_identifier`: what was being acted on, usually a file path
/// - `operation`: which step was attempted, e.g. `open file`
/// - `cause`: the underlying error, absent for a leaf
///
/// The cause is fixed at construction and handed back unchanged by
/// [`cause`](Self::cause), [`into_cause`](Self::into_cause) and
/// `std::error::Error::source`.
///
/// # Example
///
/// ```rust
/// use errchain_error::{ConfigError, Message};
///
/// let err = ConfigError::new("invalid.json", "parse content", Message::new("invalid JSON structure"));
///
/// assert_eq!(err.operation(), "parse content");
/// assert_eq!(
///     err.to_string(),
///     "config error during 'parse content' for file 'invalid.json': invalid JSON structure"
/// );
/// ```
pub struct ConfigError {
    resource_identifier: String,
    operation: String,
    cause: Option<BoxError>,
}

impl ConfigError {
    /// Create a config error that owns `cause`
    pub fn new(
        resource_identifier: impl Into<String>,
        operation: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self {
            resource_identifier: resource_identifier.into(),
            operation: operation.into(),
            cause: Some(cause.into()),
        }
    }

    /// Create a config error with no further cause
    pub fn leaf(resource_identifier: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            resource_identifier: resource_identifier.into(),
            operation: operation.into(),
            cause: None,
        }
    }

    /// The resource that was being acted on
    pub fn resource_identifier(&self) -> &str {
        &self.resource_identifier
    }

    /// The step that was attempted
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Borrow the underlying error
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Give up ownership of the underlying error
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config error during '{}' for file '{}': ",
            self.operation, self.resource_identifier
        )?;
        match &self.cause {
            Some(cause) => write!(f, "{}", cause),
            None => write!(f, "<nil>"),
        }
    }
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ConfigError at {}", self.operation)?;
        writeln!(f, "    Resource: {}", self.resource_identifier)?;
        match &self.cause {
            Some(cause) => writeln!(f, "    Cause: {:?}", cause),
            None => writeln!(f, "    Cause: <nil>"),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn StdError + 'static))
    }
}

/// An ad-hoc contextual wrap: a message fragment in front of a cause.
///
/// Renders as `<context>: <cause>`.
#[derive(Debug, Error)]
#[error("{context}: {cause}")]
pub struct Wrapped {
    context: String,
    #[source]
    cause: BoxError,
}

impl Wrapped {
    /// Wrap `cause` under `context`
    pub fn new(context: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            context: context.into(),
            cause: cause.into(),
        }
    }

    /// The message fragment added by this layer
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Borrow the wrapped error
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// Give up ownership of the wrapped error
    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

/// A leaf error that is only a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
