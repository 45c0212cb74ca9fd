//! Errors surfaced from the back-end loaders.
//!
//! The namespace itself never fails: an absent item or an unmatched name is
//! an empty result. Errors only come from resolving imports, and they
//! propagate to the caller untouched.

use std::path::PathBuf;

use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NamespaceError {
    #[error("library '{name}' could not be found")]
    LibraryNotFound { name: SmolStr },

    #[error("resource file '{}' could not be found", path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("variable file '{}' could not be found", path.display())]
    VariableFileNotFound { path: PathBuf },

    #[error("failed to load '{}': {message}", path.display())]
    Load { path: PathBuf, message: String },

    #[cfg(feature = "interchange")]
    #[error("malformed library spec: {0}")]
    LibSpec(String),
}

pub type Result<T, E = NamespaceError> = std::result::Result<T, E>;
