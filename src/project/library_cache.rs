//! Library keyword cache.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::loader::LibraryLoader;
use crate::error::{NamespaceError, Result};
use crate::ide::KeywordContent;

/// A library import is identified by its name and its arguments.
type LibraryKey = (SmolStr, Vec<SmolStr>);

/// Memoizes library keywords per `(name, args)`.
///
/// Also owns the default keyword set: keywords of the libraries every
/// datafile imports implicitly.
pub struct LibraryCache {
    loader: Box<dyn LibraryLoader>,
    default_libraries: Vec<SmolStr>,
    libraries: FxHashMap<LibraryKey, Vec<KeywordContent>>,
    default_keywords: Option<Vec<KeywordContent>>,
}

impl LibraryCache {
    pub fn new(loader: Box<dyn LibraryLoader>, default_libraries: Vec<SmolStr>) -> Self {
        Self {
            loader,
            default_libraries,
            libraries: FxHashMap::default(),
            default_keywords: None,
        }
    }

    /// Keywords of library `name` imported with `args`.
    ///
    /// An unknown library has no keywords.
    pub fn get_library_keywords(&mut self, name: &str, args: &[SmolStr]) -> Result<&[KeywordContent]> {
        let key: LibraryKey = (SmolStr::new(name), args.to_vec());
        if !self.libraries.contains_key(&key) {
            let keywords = match self.loader.load_library(name, args)? {
                Some(keywords) => keywords
                    .iter()
                    .map(|kw| KeywordContent::from_library_keyword(kw, name))
                    .collect(),
                None => {
                    trace!(library = name, "unknown library");
                    Vec::new()
                }
            };
            debug!(library = name, ?args, count = keywords.len(), "loaded library keywords");
            self.libraries.insert(key.clone(), keywords);
        }
        Ok(self.libraries[&key].as_slice())
    }

    /// Keywords that are always in scope.
    ///
    /// Every configured default library must exist.
    pub fn get_default_keywords(&mut self) -> Result<&[KeywordContent]> {
        if self.default_keywords.is_none() {
            let mut keywords = Vec::new();
            for name in &self.default_libraries {
                let Some(library) = self.loader.load_library(name, &[])? else {
                    return Err(NamespaceError::LibraryNotFound { name: name.clone() });
                };
                keywords.extend(
                    library
                        .iter()
                        .map(|kw| KeywordContent::from_library_keyword(kw, name)),
                );
            }
            debug!(libraries = ?self.default_libraries, count = keywords.len(), "loaded default keywords");
            self.default_keywords = Some(keywords);
        }
        Ok(self.default_keywords.as_deref().unwrap_or_default())
    }

    pub fn clear(&mut self) {
        self.libraries.clear();
        self.default_keywords = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::LibraryKeyword;
    use crate::project::MemoryLibraries;

    fn cache(libraries: MemoryLibraries) -> LibraryCache {
        LibraryCache::new(Box::new(libraries), vec![SmolStr::new("BuiltIn")])
    }

    #[test]
    fn test_default_keywords() {
        let mut cache = cache(
            MemoryLibraries::new()
                .with_library("BuiltIn", [LibraryKeyword::new("Log"), LibraryKeyword::new("Sleep")]),
        );
        let kws = cache.get_default_keywords().unwrap();
        assert_eq!(kws.len(), 2);
        assert_eq!(kws[0].longname, "BuiltIn.Log");
        assert!(kws.iter().all(KeywordContent::is_library_keyword));
    }

    #[test]
    fn test_missing_default_library_is_an_error() {
        let mut cache = cache(MemoryLibraries::new());
        let err = cache.get_default_keywords().unwrap_err();
        assert!(matches!(err, NamespaceError::LibraryNotFound { name } if name == "BuiltIn"));
    }

    #[test]
    fn test_unknown_library_is_empty() {
        let mut cache = cache(MemoryLibraries::new());
        assert!(cache.get_library_keywords("Nope", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_arguments_select_keywords() {
        let libraries = MemoryLibraries::new().with_dynamic_library("Remote", |args| {
            args.iter()
                .map(|arg| LibraryKeyword::new(format!("Call {arg}")))
                .collect()
        });
        let mut cache = cache(libraries);

        let one: Vec<_> = cache
            .get_library_keywords("Remote", &["A".into()])
            .unwrap()
            .iter()
            .map(|kw| kw.name.clone())
            .collect();
        let two = cache.get_library_keywords("Remote", &["B".into(), "C".into()]).unwrap();

        assert_eq!(one, ["Call A"]);
        assert_eq!(two.len(), 2);
    }
}
