//! Result extension for adding context on the way up

use crate::{BoxError, Wrapped};

/// Wrap the error of a `Result` with a message fragment for this layer.
///
/// The original error is kept as the cause of the returned [`Wrapped`].
///
/// ```rust
/// use errchain_error::{ErrorChainExt, ResultExt, NO_ROWS_AVAILABLE};
///
/// let result: Result<(), _> = Err(&NO_ROWS_AVAILABLE);
/// let err = result.wrap_err_with(|| format!("database query for ID '{}' failed", "7")).unwrap_err();
///
/// assert_eq!(err.to_string(), "database query for ID '7' failed: no rows in result set");
/// assert!(err.has_sentinel(&NO_ROWS_AVAILABLE));
/// ```
pub trait ResultExt<T> {
    /// Wrap the error with a fixed context
    fn wrap_err(self, context: impl Into<String>) -> Result<T, Wrapped>;

    /// Wrap the error with a lazily built context
    fn wrap_err_with<C, F>(self, f: F) -> Result<T, Wrapped>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn wrap_err(self, context: impl Into<String>) -> Result<T, Wrapped> {
        self.map_err(|err| Wrapped::new(context, err))
    }

    fn wrap_err_with<C, F>(self, f: F) -> Result<T, Wrapped>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Wrapped::new(f(), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, ErrorChainExt, Message, PATH_DOES_NOT_EXIST, RESOURCE_NOT_FOUND};
    use std::error::Error as StdError;

    #[test]
    fn test_wrap_err() {
        let result: Result<i32, Message> = Err(Message::new("invalid JSON structure"));
        let err = result.wrap_err("failed during config stage").unwrap_err();

        assert_eq!(err.to_string(), "failed during config stage: invalid JSON structure");
        assert_eq!(err.context(), "failed during config stage");
        assert!(err.source().unwrap().is::<Message>());
    }

    #[test]
    fn test_wrap_err_with_is_lazy() {
        let result: Result<i32, Message> = Ok(3);
        let value = result
            .wrap_err_with(|| -> String { panic!("context built on success") })
            .unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_wrap_preserves_chain() {
        let result: Result<(), ConfigError> = Err(ConfigError::new(
            "missing.json",
            "open file",
            Wrapped::new("failed to open", &PATH_DOES_NOT_EXIST),
        ));
        let err = result.wrap_err("failed during config stage").unwrap_err();

        assert!(err.has_sentinel(&PATH_DOES_NOT_EXIST));
        assert!(!err.has_sentinel(&RESOURCE_NOT_FOUND));
        assert_eq!(err.find_cause::<ConfigError>().unwrap().operation(), "open file");
    }

    #[test]
    fn test_wrap_boxed_error() {
        let result: Result<(), BoxError> = Err(Box::new(Message::new("unknown query ID: x")));
        let err = result.wrap_err("stage").unwrap_err();
        assert_eq!(err.to_string(), "stage: unknown query ID: x");
        assert!(err.find_cause::<Message>().is_some());
    }
}
