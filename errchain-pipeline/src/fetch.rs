//! # Data stage
//!
//! Second stage of a request: fetch the data for a query identifier.
//! Failures come in several shapes, so they are returned boxed.

use crate::markers;
use errchain_error::{BoxError, Message, ResultExt, NO_ROWS_AVAILABLE, RESOURCE_NOT_FOUND};
use tracing::debug;

/// Source of request data
pub trait DataSource {
    fn fetch(&self, query: &str) -> Result<String, BoxError>;
}

/// Data source backed by the reserved query markers
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedStore;

impl DataSource for SimulatedStore {
    fn fetch(&self, query: &str) -> Result<String, BoxError> {
        fetch_data(query)
    }
}

/// Fetch the data for `query`.
///
/// - [`markers::KNOWN_QUERY`] returns [`markers::SAMPLE_DATA`]
/// - [`markers::NO_ROWS_QUERY`] fails with `NO_ROWS_AVAILABLE`
/// - [`markers::MISSING_RESOURCE_QUERY`] fails with `RESOURCE_NOT_FOUND`
/// - anything else fails with `unknown query ID: <query>`
pub fn fetch_data(query: &str) -> Result<String, BoxError> {
    debug!(query, "fetching data");

    match query {
        markers::KNOWN_QUERY => Ok(markers::SAMPLE_DATA.to_string()),
        markers::NO_ROWS_QUERY => Err::<String, _>(&NO_ROWS_AVAILABLE)
            .wrap_err_with(|| format!("database query for ID '{}' failed", query))
            .map_err(BoxError::from),
        markers::MISSING_RESOURCE_QUERY => Err::<String, _>(&RESOURCE_NOT_FOUND)
            .wrap_err("could not retrieve resource data")
            .map_err(BoxError::from),
        _ => Err(Message::new(format!("unknown query ID: {}", query)).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errchain_error::{ErrorChainExt, ErrorKind, Wrapped, PATH_DOES_NOT_EXIST};

    #[test]
    fn test_known_query() {
        assert_eq!(fetch_data("123").unwrap(), "Sample Data");
        assert_eq!(SimulatedStore.fetch("123").unwrap(), "Sample Data");
    }

    #[test]
    fn test_no_rows() {
        let err = fetch_data("notfound_db").unwrap_err();
        assert_eq!(
            err.to_string(),
            "database query for ID 'notfound_db' failed: no rows in result set"
        );
        assert!(err.has_sentinel(&NO_ROWS_AVAILABLE));
        assert!(!err.has_sentinel(&RESOURCE_NOT_FOUND));
        assert!(err.find_cause::<Wrapped>().is_some());
    }

    #[test]
    fn test_missing_resource() {
        let err = fetch_data("custom_resource_err").unwrap_err();
        assert_eq!(err.to_string(), "could not retrieve resource data: resource not found");
        assert!(err.has_sentinel(&RESOURCE_NOT_FOUND));
        assert!(!err.has_sentinel(&NO_ROWS_AVAILABLE));
        assert!(!err.has_sentinel(&PATH_DOES_NOT_EXIST));
    }

    #[test]
    fn test_unknown_query() {
        let err = fetch_data("999").unwrap_err();
        assert_eq!(err.to_string(), "unknown query ID: 999");
        assert_eq!(err.kinds(), vec![ErrorKind::Message]);
        assert!(err.sentinel().is_none());
    }
}
