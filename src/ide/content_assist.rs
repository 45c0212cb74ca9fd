//! Content assist values.
//!
//! [`ContentAssistItem`] is what the editor shows in the completion popup.
//! [`KeywordContent`] carries the extra keyword metadata (long name,
//! arguments, documentation) the namespace needs for lookups and details.

use std::sync::Arc;

use smol_str::{SmolStr, format_smolstr};

use crate::hir::{KeywordKind, LibraryKeyword, UserKeyword};

/// What kind of entity a suggestion completes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompletionKind {
    Keyword,
    Variable,
    /// Contributed by a hook; the namespace knows nothing more about it.
    Other,
}

/// One content assist suggestion.
///
/// Two items are duplicates when both `name` and `source` match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentAssistItem {
    pub name: SmolStr,
    pub source: SmolStr,
    pub kind: CompletionKind,
    pub details: Option<Arc<str>>,
}

impl ContentAssistItem {
    pub fn new(name: impl Into<SmolStr>, source: impl Into<SmolStr>, kind: CompletionKind) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            kind,
            details: None,
        }
    }

    pub fn variable(name: impl Into<SmolStr>, source: impl Into<SmolStr>) -> Self {
        Self::new(name, source, CompletionKind::Variable)
    }

    pub fn with_details(mut self, details: impl Into<Arc<str>>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// A keyword visible from some item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordContent {
    pub name: SmolStr,
    /// `<owner>.<name>`, where owner is a library name or a datafile basename.
    pub longname: SmolStr,
    /// Display source shown next to the suggestion.
    pub source: SmolStr,
    pub kind: KeywordKind,
    pub args: Vec<SmolStr>,
    pub doc: Arc<str>,
}

impl KeywordContent {
    /// Wrap a user keyword declared in the datafile named `owner`.
    ///
    /// `source` is the display label; it differs from `owner` for an item's
    /// own keywords, which are shown as coming from "this file".
    pub fn from_user_keyword(kw: &UserKeyword, owner: &str, source: &str, kind: KeywordKind) -> Self {
        Self {
            name: kw.name.clone(),
            longname: format_smolstr!("{}.{}", basename(owner), kw.name),
            source: SmolStr::new(source),
            kind,
            args: kw.args.clone(),
            doc: kw.doc.clone(),
        }
    }

    /// Wrap a keyword provided by `library`.
    pub fn from_library_keyword(kw: &LibraryKeyword, library: &str) -> Self {
        Self {
            name: kw.name.clone(),
            longname: format_smolstr!("{}.{}", library, kw.name),
            source: SmolStr::new(library),
            kind: KeywordKind::Library,
            args: kw.args.clone(),
            doc: kw.doc.clone(),
        }
    }

    /// Wrap a keyword listed in a resource spec file.
    pub fn from_spec_keyword(kw: &LibraryKeyword, resource: &str) -> Self {
        Self {
            name: kw.name.clone(),
            longname: format_smolstr!("{}.{}", basename(resource), kw.name),
            source: SmolStr::new(resource),
            kind: KeywordKind::ResourceFile,
            args: kw.args.clone(),
            doc: kw.doc.clone(),
        }
    }

    /// Re-label a library keyword imported `WITH NAME alias`.
    pub fn with_library_alias(mut self, alias: &str) -> Self {
        self.longname = format_smolstr!("{}.{}", alias, self.name);
        self.source = SmolStr::new(alias);
        self
    }

    pub fn is_library_keyword(&self) -> bool {
        self.kind == KeywordKind::Library
    }

    /// Human-readable signature and documentation.
    pub fn details(&self) -> String {
        let mut details = format!(
            "Source: {} <{}>\n\nArguments: {}",
            self.source,
            self.kind,
            self.arguments()
        );
        if !self.doc.is_empty() {
            details.push_str("\n\n");
            details.push_str(&self.doc);
        }
        details
    }

    fn arguments(&self) -> String {
        if self.args.is_empty() {
            return "[ ]".to_string();
        }
        let args: Vec<&str> = self.args.iter().map(SmolStr::as_str).collect();
        format!("[ {} ]", args.join(" | "))
    }

    pub fn to_assist_item(&self) -> ContentAssistItem {
        ContentAssistItem::new(self.name.clone(), self.source.clone(), CompletionKind::Keyword)
            .with_details(self.details())
    }
}

impl From<&KeywordContent> for ContentAssistItem {
    fn from(kw: &KeywordContent) -> Self {
        kw.to_assist_item()
    }
}

/// `common.resource` -> `common`, `/data/suite.robot` -> `suite`.
fn basename(name: &str) -> &str {
    let file = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    }
}
