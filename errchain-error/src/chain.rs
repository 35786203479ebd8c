//! Walking and querying error chains
//!
//! Everything here is written against `std::error::Error::source`, so it
//! works for errchain's own types and for any foreign error alike.
//!
//! Only single-cause, linear chains are followed. A node that knows about
//! several causes can still expose them through its own API, but the walk
//! only ever takes the one returned by `source()`.

use crate::{ErrorKind, Sentinel};
use std::error::Error as StdError;
use std::iter::FusedIterator;

/// Iterator over an error and its successive causes, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    /// Start a walk at `err`. `None` yields an empty chain.
    pub fn new(err: Option<&'a (dyn StdError + 'static)>) -> Self {
        Self { next: err }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Return the first error in the chain whose concrete type is `T`.
///
/// The starting error itself is checked first, so a match needs zero hops
/// when `err` already is a `T`. A node holding a `&'static T`, which is how
/// sentinels sit in a chain, also counts as a `T`.
pub fn matches_type<'a, T>(err: Option<&'a (dyn StdError + 'static)>) -> Option<&'a T>
where
    T: StdError + 'static,
{
    Chain::new(err).find_map(|node| {
        node.downcast_ref::<T>()
            .or_else(|| node.downcast_ref::<&'static T>().copied())
    })
}

/// Check whether any error in the chain is identical to `sentinel`.
pub fn matches_sentinel(err: Option<&(dyn StdError + 'static)>, sentinel: &'static Sentinel) -> bool {
    Chain::new(err).any(|node| sentinel.is(node))
}

/// The last error in the chain, the one with no further cause
pub fn root_cause<'a>(err: Option<&'a (dyn StdError + 'static)>) -> Option<&'a (dyn StdError + 'static)> {
    Chain::new(err).last()
}

/// Chain queries as methods.
///
/// Implemented for every sized error type as well as for `dyn Error`
/// trait objects, so boxed errors and `anyhow::Error` get it through deref.
///
/// ```rust
/// use errchain_error::{ConfigError, ErrorChainExt, Wrapped, PATH_DOES_NOT_EXIST};
///
/// let err = Wrapped::new(
///     "failed during config stage",
///     ConfigError::new("missing.json", "open file", &PATH_DOES_NOT_EXIST),
/// );
///
/// let config = err.find_cause::<ConfigError>().unwrap();
/// assert_eq!(config.operation(), "open file");
/// assert!(err.has_sentinel(&PATH_DOES_NOT_EXIST));
/// ```
pub trait ErrorChainExt {
    /// View this error as the start of a chain
    fn as_chain_start(&self) -> &(dyn StdError + 'static);

    /// Iterate over this error and its causes
    fn chain(&self) -> Chain<'_> {
        Chain::new(Some(self.as_chain_start()))
    }

    /// First error of type `T` in the chain
    fn find_cause<T: StdError + 'static>(&self) -> Option<&T> {
        matches_type(Some(self.as_chain_start()))
    }

    /// Whether `sentinel` appears anywhere in the chain
    fn has_sentinel(&self, sentinel: &'static Sentinel) -> bool {
        matches_sentinel(Some(self.as_chain_start()), sentinel)
    }

    /// The innermost error
    fn root_cause(&self) -> &(dyn StdError + 'static) {
        let start = self.as_chain_start();
        root_cause(Some(start)).unwrap_or(start)
    }

    /// The first sentinel found walking outermost to innermost
    fn sentinel(&self) -> Option<&'static Sentinel> {
        self.chain().find_map(Sentinel::of)
    }

    /// Kinds of every node, outermost first
    fn kinds(&self) -> Vec<ErrorKind> {
        self.chain().map(ErrorKind::of).collect()
    }
}

impl<E: StdError + 'static> ErrorChainExt for E {
    fn as_chain_start(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl ErrorChainExt for dyn StdError + 'static {
    fn as_chain_start(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl ErrorChainExt for dyn StdError + Send + Sync + 'static {
    fn as_chain_start(&self) -> &(dyn StdError + 'static) {
        self
    }
}
