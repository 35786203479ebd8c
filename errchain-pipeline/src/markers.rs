//! Reserved identifiers recognised by the simulated stages

/// Config file that does not exist on disk
pub const MISSING_CONFIG: &str = "missing.json";

/// Config file whose content cannot be parsed
pub const INVALID_CONFIG: &str = "invalid.json";

/// A config file that loads fine. Any other unreserved name behaves the same.
pub const VALID_CONFIG: &str = "valid.json";

/// Query that returns [`SAMPLE_DATA`]
pub const KNOWN_QUERY: &str = "123";

/// Query whose lookup returns no rows
pub const NO_ROWS_QUERY: &str = "notfound_db";

/// Query whose domain resource is missing
pub const MISSING_RESOURCE_QUERY: &str = "custom_resource_err";

/// Payload returned for [`KNOWN_QUERY`]
pub const SAMPLE_DATA: &str = "Sample Data";
