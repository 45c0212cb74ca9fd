//! In-memory test data model.
//!
//! Parsing is done elsewhere; this module only describes the already-built
//! model graph the namespace resolves names in.
//!
//! - [`Item`] - What content assist is requested for (suite, resource, keyword)
//! - [`Datafile`] - A file that owns keywords
//! - [`Imports`] - Declarative `Library` / `Resource` / `Variables` settings
//! - [`Resource`] - A resolved resource import (authored or spec-described)
//! - [`Project`] - Root suite plus directly opened resources

mod imports;
mod input;
mod items;
mod keyword;

pub use imports::{Import, Imports, LibraryImport};
pub use input::Project;
pub use items::{Datafile, Item, Resource, ResourceFile, TestSuite, VariableFile, XmlResource};
pub use keyword::{KeywordKind, LibraryKeyword, UserKeyword, Variable};
