//! Sentinel conditions for errchain

use std::error::Error as StdError;
use std::fmt;

/// A named, payload-free failure condition compared by identity.
///
/// Every sentinel is a `static` item defined in this module. There is no
/// public constructor and the type is neither `Clone` nor `Copy`, so two
/// references to "the same" condition always point at the same address.
///
/// A sentinel enters an error chain by reference:
///
/// ```rust
/// use errchain_error::{ErrorChainExt, Wrapped, RESOURCE_NOT_FOUND};
///
/// let err = Wrapped::new("could not retrieve resource data", &RESOURCE_NOT_FOUND);
/// assert!(err.has_sentinel(&RESOURCE_NOT_FOUND));
/// ```
pub struct Sentinel {
    name: &'static str,
    message: &'static str,
}

/// The requested domain resource does not exist
pub static RESOURCE_NOT_FOUND: Sentinel = Sentinel::new("ResourceNotFound", "resource not found");

/// A storage query returned no rows
pub static NO_ROWS_AVAILABLE: Sentinel = Sentinel::new("NoRowsAvailable", "no rows in result set");

/// A filesystem path does not exist
pub static PATH_DOES_NOT_EXIST: Sentinel = Sentinel::new("PathDoesNotExist", "file does not exist");

/// Every sentinel known to the system
pub static ALL: [&Sentinel; 3] = [&RESOURCE_NOT_FOUND, &NO_ROWS_AVAILABLE, &PATH_DOES_NOT_EXIST];

impl Sentinel {
    const fn new(name: &'static str, message: &'static str) -> Self {
        Self { name, message }
    }

    /// Stable identifier, e.g. `ResourceNotFound`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rendered message, e.g. `resource not found`
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Check whether a single chain node is this sentinel.
    ///
    /// Matches the sentinel itself (`&RESOURCE_NOT_FOUND as &dyn Error`) as
    /// well as a boxed `&'static Sentinel` sitting inside a chain. Does not
    /// follow `source()`.
    pub fn is(&'static self, err: &(dyn StdError + 'static)) -> bool {
        if let Some(found) = err.downcast_ref::<Sentinel>() {
            return std::ptr::eq(found, self);
        }
        match err.downcast_ref::<&'static Sentinel>() {
            Some(found) => std::ptr::eq(*found, self),
            None => false,
        }
    }

    /// Look up the sentinel a chain node refers to, if any
    pub fn of(err: &(dyn StdError + 'static)) -> Option<&'static Sentinel> {
        ALL.iter().copied().find(|sentinel| sentinel.is(err))
    }
}

impl PartialEq for Sentinel {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Sentinel {}

impl fmt::Debug for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl StdError for Sentinel {}
