//! Back-end caches for libraries, resource files and variable files.
//!
//! Each cache wraps a loader that does the real work and memoizes its
//! results. The namespace delegates to these without adding logic of its own.

mod library_cache;
mod loader;
mod memory;
mod paths;
mod resource_cache;
mod varfile_cache;

#[cfg(feature = "interchange")]
pub mod libspec;

pub use library_cache::LibraryCache;
pub use loader::{LibraryLoader, ResourceLoader, VariableFileLoader};
pub use memory::{MemoryLibraries, MemoryResources, MemoryVariableFiles};
pub use paths::{normalize_path, resolve_import_path};
pub use resource_cache::ResourceFileCache;
pub use varfile_cache::VariableFileCache;
