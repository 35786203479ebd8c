//! Error kinds for errchain chain nodes

use crate::{ConfigError, Message, Sentinel, Wrapped};
use std::error::Error as StdError;
use std::fmt;

/// The shape of a single node in an error chain.
///
/// The set of shapes produced by errchain is closed, so callers can match on
/// the kind of each node instead of trying one downcast after another.
/// Anything that did not originate here is classified as `Foreign`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A payload-free sentinel condition, matched by identity
    Sentinel,

    /// A structured configuration error carrying operation and resource
    Config,

    /// An ad-hoc contextual wrap around another error
    Context,

    /// A leaf error with only a message
    Message,

    /// Any error type defined outside errchain
    Foreign,
}

impl ErrorKind {
    /// Classify one chain node. Does not follow `source()`.
    pub fn of(err: &(dyn StdError + 'static)) -> Self {
        if Sentinel::of(err).is_some() {
            ErrorKind::Sentinel
        } else if err.is::<ConfigError>() {
            ErrorKind::Config
        } else if err.is::<Wrapped>() {
            ErrorKind::Context
        } else if err.is::<Message>() {
            ErrorKind::Message
        } else {
            ErrorKind::Foreign
        }
    }

    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Sentinel => "Sentinel",
            ErrorKind::Config => "Config",
            ErrorKind::Context => "Context",
            ErrorKind::Message => "Message",
            ErrorKind::Foreign => "Foreign",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
