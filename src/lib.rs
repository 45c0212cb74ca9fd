//! # kwnamespace
//!
//! Keyword and variable name resolution with content assist for test data
//! editors.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide      → Namespace, content assist, keyword lookups
//!   ↓
//! project  → Library / resource / variable file caches and their loaders
//!   ↓
//! hir      → In-memory model: suites, resources, keywords, imports
//!   ↓
//! base     → Primitives (ItemKey, name normalization)
//! ```
//!
//! Parsing test data and reading files are left to the embedding
//! application: it builds the [`hir`] model and plugs loaders into the
//! [`project`] caches.

/// Foundation types: ItemKey, name normalization
pub mod base;

/// In-memory test data model
pub mod hir;

/// Back-end caches and loader contracts
pub mod project;

/// Namespace and content assist
pub mod ide;

pub mod config;
pub mod error;

pub use config::NamespaceConfig;
pub use error::{NamespaceError, Result};
pub use ide::{ContentAssistItem, KeywordContent, Namespace};
