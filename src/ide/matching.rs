//! Candidate matching, de-duplication and ordering.
//!
//! Two matching regimes coexist:
//!
//! - **Prefix matching** for content assist. A plain fragment matches names
//!   that start with it, ignoring case. A fragment with an unclosed `${` or
//!   `@{`, or ending in a bare `@`, completes the identifier inside that
//!   variable instead, and the suggestion is spliced onto what was typed:
//!   `Hello ${GR` offers `Hello ${GREETING`.
//! - **Name matching** for lookups, where the short name or the long name must
//!   equal the query under [`crate::base::eq`].

use indexmap::IndexMap;
use smol_str::{SmolStr, format_smolstr};

use super::content_assist::{CompletionKind, ContentAssistItem, KeywordContent};
use crate::base;

const SCALAR_OPEN: &str = "${";
const LIST_OPEN: &str = "@{";
const LIST_MARKER: &str = "@";

/// Openers a variable name may carry.
const DECORATIONS: [&str; 4] = ["${", "@{", "&{", "%{"];

/// Anything with a display name and source.
pub trait Named {
    fn name(&self) -> &str;
    fn source(&self) -> &str;
}

impl Named for ContentAssistItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> &str {
        &self.source
    }
}

impl Named for KeywordContent {
    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> &str {
        &self.source
    }
}

/// An unclosed variable opener in a fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct VariableStart<'a> {
    marker: &'static str,
    /// Everything up to and including the marker.
    typed: &'a str,
    /// What follows the marker; the prefix to complete.
    needle: &'a str,
}

fn variable_start(start: &str) -> Option<VariableStart<'_>> {
    // A bare `@` only opens a variable as the very last character.
    if start.ends_with(LIST_MARKER) {
        return Some(VariableStart {
            marker: LIST_MARKER,
            typed: start,
            needle: "",
        });
    }

    let (index, marker) = [SCALAR_OPEN, LIST_OPEN]
        .into_iter()
        .filter_map(|marker| start.rfind(marker).map(|index| (index, marker)))
        .max_by_key(|(index, _)| *index)?;

    let end = index + marker.len();
    let needle = &start[end..];
    if needle.contains('}') {
        return None;
    }
    Some(VariableStart {
        marker,
        typed: &start[..end],
        needle,
    })
}

/// The part of a variable name that follows `marker`.
///
/// Undecorated names are returned whole. Names opened with a different
/// decoration cannot complete this marker.
fn bare_identifier<'a>(name: &'a str, marker: &str) -> Option<&'a str> {
    if let Some(rest) = name.strip_prefix(marker) {
        return Some(rest);
    }
    if DECORATIONS.iter().any(|deco| name.starts_with(deco)) {
        return None;
    }
    Some(name)
}

fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Keep the candidates that complete `start`.
pub fn filter_by_prefix(values: Vec<ContentAssistItem>, start: &str) -> Vec<ContentAssistItem> {
    let Some(var) = variable_start(start) else {
        return values
            .into_iter()
            .filter(|value| starts_with_ignore_case(&value.name, start))
            .collect();
    };

    values
        .into_iter()
        .filter(|value| value.kind == CompletionKind::Variable)
        .filter_map(|value| {
            let bare = bare_identifier(&value.name, var.marker)?;
            if !starts_with_ignore_case(bare, var.needle) {
                return None;
            }
            let name: SmolStr = format_smolstr!("{}{}", var.typed, bare);
            Some(ContentAssistItem::variable(name, value.source))
        })
        .collect()
}

/// Keywords whose name or long name equals `name`.
///
/// `None` matches everything.
pub fn match_name<'a>(keywords: &'a [KeywordContent], name: Option<&str>) -> Vec<&'a KeywordContent> {
    match name {
        Some(name) => keywords
            .iter()
            .filter(|kw| base::eq(&kw.name, name) || base::eq(&kw.longname, name))
            .collect(),
        None => keywords.iter().collect(),
    }
}

/// Drop later values with an already-seen `(name, source)` pair.
pub fn remove_duplicates<T: Named>(values: Vec<T>) -> Vec<T> {
    let mut unique: IndexMap<(SmolStr, SmolStr), T> = IndexMap::with_capacity(values.len());
    for value in values {
        let key = (SmolStr::new(value.name()), SmolStr::new(value.source()));
        unique.entry(key).or_insert(value);
    }
    unique.into_values().collect()
}

/// Sort by name, ignoring case. Equal names keep their relative order.
pub fn sort_by_name<T: Named>(values: &mut [T]) {
    values.sort_by_cached_key(|value| value.name().to_lowercase());
}
