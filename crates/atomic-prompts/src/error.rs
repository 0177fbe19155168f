//! Catalog configuration errors.
//!
//! Resolution and rendering never fail. Only building a catalog can, and a
//! failure there means the snippet data itself is wrong.

use thiserror::Error;

use crate::catalog::Category;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The same atomic key was registered under two categories.
    #[error("duplicate atomic prompt key '{key}' defined in both {first} and {second}")]
    DuplicateKey {
        key: String,
        first: Category,
        second: Category,
    },

    /// A key that could never be selected from a comma-separated key string.
    #[error("invalid atomic prompt key {key:?}: keys must be non-empty and must not contain commas")]
    InvalidKey { key: String },

    #[error("failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
