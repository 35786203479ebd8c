//! # errchain-error
//!
//! Layered error handling for errchain: failures are classified at the
//! bottom, wrapped with context on the way up, and inspected at the top
//! without losing the root cause.
//!
//! ## Design Philosophy
//!
//! - **Sentinel**: a named, payload-free condition matched by identity
//!   (`RESOURCE_NOT_FOUND`, `NO_ROWS_AVAILABLE`, `PATH_DOES_NOT_EXIST`)
//! - **ConfigError**: a structured error with operation, resource and cause
//! - **Wrapped**: an ad-hoc message fragment in front of a cause
//! - **Chain**: every wrap exposes its cause through `source()`, and all
//!   inspection is built on that alone
//!
//! ## Usage
//!
//! ```rust
//! use errchain_error::{ConfigError, ErrorChainExt, ResultExt, Wrapped, PATH_DOES_NOT_EXIST};
//!
//! fn load(path: &str) -> Result<(), ConfigError> {
//!     Err(ConfigError::new(path, "open file", Wrapped::new("failed to open", &PATH_DOES_NOT_EXIST)))
//! }
//!
//! let err = load("missing.json").wrap_err("failed during config stage").unwrap_err();
//!
//! assert!(err.has_sentinel(&PATH_DOES_NOT_EXIST));
//! assert_eq!(err.find_cause::<ConfigError>().unwrap().resource_identifier(), "missing.json");
//! ```
//!
//! ## Principles
//!
//! - Sentinels are never constructed outside this crate
//! - A wrap never discards its cause
//! - Inspect as much as needed, but always propagate the wrapped error

mod chain;
mod error;
mod ext;
mod kind;
pub mod sentinel;

pub use chain::{matches_sentinel, matches_type, root_cause, Chain, ErrorChainExt};
pub use error::{ConfigError, Message, Wrapped};
pub use ext::ResultExt;
pub use kind::ErrorKind;
pub use sentinel::{Sentinel, NO_ROWS_AVAILABLE, PATH_DOES_NOT_EXIST, RESOURCE_NOT_FOUND};

/// Owned, thread-safe error used as the cause of every wrap
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias using a boxed cause
pub type Result<T> = std::result::Result<T, BoxError>;
