//! Loader contracts for the back-end caches.
//!
//! Loaders do the actual disk and library introspection work. The caches in
//! this module only memoize what loaders return, so a loader is called at
//! most once per distinct request until the cache is cleared.

use std::path::Path;

use smol_str::SmolStr;

use crate::error::Result;
use crate::hir::{LibraryKeyword, Resource, VariableFile};

/// Introspects keyword libraries.
pub trait LibraryLoader {
    /// Keywords of library `name` imported with `args`.
    ///
    /// Arguments matter: dynamic libraries may expose different keywords
    /// depending on how they are configured. `Ok(None)` means no such
    /// library exists.
    fn load_library(&self, name: &str, args: &[SmolStr]) -> Result<Option<Vec<LibraryKeyword>>>;
}

/// Parses resource files.
pub trait ResourceLoader {
    /// `Ok(None)` means there is no resource at `path`.
    fn load_resource(&self, path: &Path) -> Result<Option<Resource>>;
}

/// Evaluates variable files.
pub trait VariableFileLoader {
    /// `Ok(None)` means there is no variable file at `path`.
    fn load_varfile(&self, path: &Path, args: &[SmolStr]) -> Result<Option<VariableFile>>;
}
