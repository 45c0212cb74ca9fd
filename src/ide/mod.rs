//! IDE features: content assist and keyword lookups.
//!
//! [`Namespace`] is the entry point. It is created once per editing session
//! and handed to whatever needs it; it is not a global.
//!
//! ```ignore
//! use kwnamespace::ide::Namespace;
//! use kwnamespace::project::{MemoryLibraries, MemoryResources, MemoryVariableFiles};
//!
//! let mut ns = Namespace::new(libraries, MemoryResources::new(), MemoryVariableFiles::new());
//! let values = ns.content_assist_values(Some(&item), "lo")?;
//! ```

mod content_assist;
mod matching;
mod namespace;

pub use content_assist::{CompletionKind, ContentAssistItem, KeywordContent};
pub use crate::hir::KeywordKind;
pub use matching::{Named, filter_by_prefix, match_name, remove_duplicates, sort_by_name};
pub use namespace::{ContentAssistHook, Namespace};
