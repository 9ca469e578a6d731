//! Station catalog.
//!
//! The catalog is static reference data loaded once per session from a JSON
//! document. It is validated on load so that the game algorithms can trust
//! every line reference they see.

mod error;
mod search;
mod snapshot;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::CatalogError;
pub use search::DEFAULT_SUGGESTIONS;
pub use snapshot::Catalog;
