//! The keyword and variable namespace.
//!
//! [`Namespace`] answers "what names are visible from this item": its own
//! keywords and variables, everything reachable through its resource imports
//! (followed transitively for keywords), its library imports, and the
//! default libraries every datafile sees.
//!
//! Two derived caches sit on top of the back-end caches, both keyed by
//! [`ItemKey`]:
//!
//! - the user keyword cache: own keywords plus keywords of imported resources
//! - the library keyword cache: imported library keywords plus defaults
//!
//! They are filled lazily and only ever cleared wholesale. Nothing here
//! watches the model: whoever mutates it must call
//! [`clear_caches`](Namespace::clear_caches) (or use
//! [`new_keyword`](Namespace::new_keyword) for the append-only case).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::content_assist::{ContentAssistItem, KeywordContent};
use super::matching::{filter_by_prefix, match_name, remove_duplicates, sort_by_name};
use crate::base::ItemKey;
use crate::config::NamespaceConfig;
use crate::error::Result;
use crate::hir::{
    Datafile, Import, Imports, Item, KeywordKind, LibraryImport, Project, Resource, UserKeyword, VariableFile,
};
use crate::project::{
    LibraryCache, LibraryLoader, ResourceFileCache, ResourceLoader, VariableFileCache, VariableFileLoader,
    normalize_path, resolve_import_path,
};

/// Contributes extra content assist values for `(item, fragment)`.
///
/// Hook results skip the fragment filter; hooks filter for themselves.
pub type ContentAssistHook = Box<dyn Fn(&Item, &str) -> Vec<ContentAssistItem>>;

/// Name resolution state for one editing session.
///
/// Owns the library, resource and variable file caches plus the derived
/// keyword caches built on top of them.
pub struct Namespace {
    config: NamespaceConfig,
    lib_cache: LibraryCache,
    res_cache: ResourceFileCache,
    var_cache: VariableFileCache,
    hooks: Vec<ContentAssistHook>,
    lib_kw_cache: FxHashMap<ItemKey, Vec<KeywordContent>>,
    user_kw_cache: FxHashMap<ItemKey, Vec<KeywordContent>>,
}

impl Namespace {
    /// A namespace with the default configuration.
    pub fn new(
        libraries: impl LibraryLoader + 'static,
        resources: impl ResourceLoader + 'static,
        varfiles: impl VariableFileLoader + 'static,
    ) -> Self {
        Self::with_config(NamespaceConfig::default(), libraries, resources, varfiles)
    }

    /// A namespace with custom default libraries or own-source label.
    pub fn with_config(
        config: NamespaceConfig,
        libraries: impl LibraryLoader + 'static,
        resources: impl ResourceLoader + 'static,
        varfiles: impl VariableFileLoader + 'static,
    ) -> Self {
        Self {
            lib_cache: LibraryCache::new(Box::new(libraries), config.default_libraries.clone()),
            res_cache: ResourceFileCache::new(Box::new(resources)),
            var_cache: VariableFileCache::new(Box::new(varfiles)),
            config,
            hooks: Vec::new(),
            lib_kw_cache: FxHashMap::default(),
            user_kw_cache: FxHashMap::default(),
        }
    }

    /// The configuration this namespace was built with.
    pub fn config(&self) -> &NamespaceConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Cache maintenance
    // ------------------------------------------------------------------

    /// Record a keyword just authored in `datafile`.
    ///
    /// Appends to that datafile's cached bucket only; other buckets are left
    /// alone.
    pub fn new_keyword(&mut self, keyword: &UserKeyword, datafile: &Datafile) {
        let content =
            KeywordContent::from_user_keyword(keyword, datafile.name(), datafile.name(), datafile.keyword_kind());
        debug!(datafile = datafile.name(), keyword = %keyword.name, "new keyword");
        self.user_kw_cache
            .entry(ItemKey::new(datafile.name()))
            .or_default()
            .push(content);
    }

    /// Forget all derived keyword lists.
    pub fn clear_caches(&mut self) {
        debug!(
            user = self.user_kw_cache.len(),
            library = self.lib_kw_cache.len(),
            "clearing keyword caches"
        );
        self.lib_kw_cache.clear();
        self.user_kw_cache.clear();
    }

    /// Forget loaded resources and variable files too, e.g. after files
    /// changed on disk.
    pub fn reload_resources(&mut self) {
        self.res_cache.clear();
        self.var_cache.clear();
        self.clear_caches();
    }

    /// Cached user keywords for the item named `name`, if computed.
    pub fn user_keyword_bucket(&self, name: &str) -> Option<&[KeywordContent]> {
        self.user_kw_cache.get(&ItemKey::new(name)).map(Vec::as_slice)
    }

    /// Cached library keywords for the item named `name`, if computed.
    pub fn library_keyword_bucket(&self, name: &str) -> Option<&[KeywordContent]> {
        self.lib_kw_cache.get(&ItemKey::new(name)).map(Vec::as_slice)
    }

    /// True when neither derived keyword cache holds a bucket.
    pub fn caches_are_empty(&self) -> bool {
        self.user_kw_cache.is_empty() && self.lib_kw_cache.is_empty()
    }

    // ------------------------------------------------------------------
    // Content assist
    // ------------------------------------------------------------------

    /// Hooks run in registration order.
    pub fn register_content_assist_hook(&mut self, hook: impl Fn(&Item, &str) -> Vec<ContentAssistItem> + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Suggestions completing `start` inside `item`.
    ///
    /// Unique by `(name, source)` and sorted by name ignoring case. No item
    /// means no suggestions.
    pub fn content_assist_values(&mut self, item: Option<&Item>, start: &str) -> Result<Vec<ContentAssistItem>> {
        let Some(item) = item else {
            return Ok(Vec::new());
        };

        let label = self.config.own_source_label.clone();
        let mut values: Vec<ContentAssistItem> = self
            .get_item_keywords(item, &label)?
            .iter()
            .map(KeywordContent::to_assist_item)
            .collect();
        values.extend(self.get_item_variables(item)?);
        values.extend(
            self.lib_cache
                .get_default_keywords()?
                .iter()
                .map(KeywordContent::to_assist_item),
        );
        trace!(item = item.name(), start, candidates = values.len(), "content assist");

        let mut values = filter_by_prefix(values, start);
        for hook in &self.hooks {
            let contributed = hook(item, start);
            trace!(count = contributed.len(), "hook contributed values");
            values.extend(contributed);
        }

        let mut values = remove_duplicates(values);
        sort_by_name(&mut values);
        Ok(values)
    }

    // ------------------------------------------------------------------
    // Gathering
    // ------------------------------------------------------------------

    /// User keywords (own keywords shown as coming from `own_source_label`)
    /// followed by library keywords, unsorted.
    pub fn get_item_keywords(&mut self, item: &Item, own_source_label: &str) -> Result<Vec<KeywordContent>> {
        let mut kws = self.cached_user_keywords(item, own_source_label)?.to_vec();
        kws.extend_from_slice(self.cached_library_keywords(item)?);
        Ok(kws)
    }

    /// Own variables plus variables of directly imported resources and
    /// variable files. Nested resource imports are not followed.
    pub fn get_item_variables(&mut self, item: &Item) -> Result<Vec<ContentAssistItem>> {
        let mut vars: Vec<ContentAssistItem> = item
            .own_variables()
            .into_iter()
            .map(|(source, name)| ContentAssistItem::variable(name, source))
            .collect();

        for import in item.imports().iter() {
            match import {
                Import::Resource { path } => {
                    if let Some(resource) = self.res_cache.get_resource_file(item.source(), path)? {
                        vars.extend(
                            resource
                                .variables()
                                .iter()
                                .map(|var| ContentAssistItem::variable(var.name.clone(), resource.name())),
                        );
                    }
                }
                Import::Variables { path, args } => {
                    if let Some(file) = self.var_cache.find_varfile(item.source(), path, args)? {
                        vars.extend(
                            file.variables
                                .iter()
                                .map(|var| ContentAssistItem::variable(var.name.clone(), file.name.clone())),
                        );
                    }
                }
                Import::Library { .. } => {}
            }
        }
        Ok(vars)
    }

    /// Every keyword of the open project: the root suite and its direct
    /// child suites, every open resource, and the defaults. Unique and
    /// sorted.
    pub fn get_all_keywords(&mut self, project: &Project) -> Result<Vec<KeywordContent>> {
        let mut kws = Vec::new();
        if let Some(root) = &project.suite {
            for suite in std::iter::once(root).chain(root.suites.iter()) {
                let item = Item::Suite(suite.clone());
                kws.extend(self.get_item_keywords(&item, &suite.name)?);
            }
        }
        for res in project.resources() {
            let item = Item::Resource(res.clone());
            kws.extend(self.get_item_keywords(&item, &res.name)?);
        }
        kws.extend_from_slice(self.lib_cache.get_default_keywords()?);

        let mut kws = remove_duplicates(kws);
        sort_by_name(&mut kws);
        Ok(kws)
    }

    /// Keywords of every resource reachable through `item`'s resource
    /// imports, in depth-first import order.
    ///
    /// Each resource contributes once per call, so import cycles terminate.
    /// The item's own datafile counts as already visited.
    pub fn get_user_keywords_from_imports(&mut self, item: &Item) -> Result<Vec<KeywordContent>> {
        let mut visited = FxHashSet::default();
        if !item.source().as_os_str().is_empty() {
            visited.insert(normalize_path(item.source()));
        }
        let mut kws = Vec::new();
        self.collect_imported_keywords(item.imports(), item.source(), &mut visited, &mut kws)?;
        Ok(kws)
    }

    fn collect_imported_keywords(
        &mut self,
        imports: &Imports,
        datafile: &Path,
        visited: &mut FxHashSet<PathBuf>,
        kws: &mut Vec<KeywordContent>,
    ) -> Result<()> {
        for path in imports.resources() {
            let resolved = resolve_import_path(datafile, path);
            if !visited.insert(resolved.clone()) {
                trace!(path = %resolved.display(), "resource already visited");
                continue;
            }
            match self.res_cache.load_resolved(&resolved)? {
                Some(resource) => {
                    kws.extend(resource_keywords(&resource));
                    // Spec-described resources carry a flat keyword list.
                    if let Resource::File(res) = &resource {
                        self.collect_imported_keywords(&res.imports, &resolved, visited, kws)?;
                    }
                }
                None => trace!(path = %resolved.display(), "unresolved resource import"),
            }
        }
        Ok(())
    }

    fn library_import_keywords(&mut self, library: LibraryImport<'_>) -> Result<Vec<KeywordContent>> {
        let kws = self.lib_cache.get_library_keywords(library.name, library.args)?;
        Ok(match library.alias {
            Some(alias) => kws.iter().cloned().map(|kw| kw.with_library_alias(alias)).collect(),
            None => kws.to_vec(),
        })
    }

    // ------------------------------------------------------------------
    // Derived caches
    // ------------------------------------------------------------------

    fn cached_user_keywords(&mut self, item: &Item, own_source_label: &str) -> Result<&[KeywordContent]> {
        let key = item.key();
        if !self.user_kw_cache.contains_key(&key) {
            let owner = item.datafile_name();
            let kind = item.keyword_kind();
            let mut kws: Vec<KeywordContent> = item
                .own_keywords()
                .iter()
                .map(|kw| KeywordContent::from_user_keyword(kw, owner, own_source_label, kind))
                .collect();
            kws.extend(self.get_user_keywords_from_imports(item)?);
            debug!(item = %key, count = kws.len(), "cached user keywords");
            self.user_kw_cache.insert(key.clone(), kws);
        }
        Ok(self.user_kw_cache[&key].as_slice())
    }

    fn cached_library_keywords(&mut self, item: &Item) -> Result<&[KeywordContent]> {
        let key = item.key();
        if !self.lib_kw_cache.contains_key(&key) {
            let mut kws = Vec::new();
            for library in item.imports().libraries() {
                kws.extend(self.library_import_keywords(library)?);
            }
            kws.extend_from_slice(self.lib_cache.get_default_keywords()?);
            debug!(item = %key, count = kws.len(), "cached library keywords");
            self.lib_kw_cache.insert(key.clone(), kws);
        }
        Ok(self.lib_kw_cache[&key].as_slice())
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    /// Own keywords, keywords of direct imports, and defaults. Uncached.
    pub fn get_keywords(&mut self, item: &Item) -> Result<Vec<KeywordContent>> {
        let owner = item.datafile_name();
        let kind = item.keyword_kind();
        let mut kws: Vec<KeywordContent> = item
            .own_keywords()
            .iter()
            .map(|kw| KeywordContent::from_user_keyword(kw, owner, owner, kind))
            .collect();

        for import in item.imports().iter() {
            match import {
                Import::Resource { path } => {
                    if let Some(resource) = self.res_cache.get_resource_file(item.source(), path)? {
                        kws.extend(resource_keywords(&resource));
                    }
                }
                Import::Library { name, args, alias } => {
                    kws.extend(self.library_import_keywords(LibraryImport {
                        name,
                        args,
                        alias: alias.as_deref(),
                    })?);
                }
                Import::Variables { .. } => {}
            }
        }
        kws.extend_from_slice(self.lib_cache.get_default_keywords()?);
        Ok(kws)
    }

    /// First user keyword visible from `item` named `name`.
    pub fn get_user_keyword(&mut self, item: &Item, name: &str) -> Result<Option<KeywordContent>> {
        let label = self.config.own_source_label.clone();
        let kws = self.cached_user_keywords(item, &label)?;
        Ok(match_name(kws, Some(name)).first().map(|kw| (*kw).clone()))
    }

    /// Whether the first keyword named `name` among `item`'s library
    /// keywords (imports and defaults) is a library keyword.
    pub fn is_library_keyword(&mut self, item: &Item, name: &str) -> Result<bool> {
        let kws = self.cached_library_keywords(item)?;
        Ok(match_name(kws, Some(name))
            .first()
            .is_some_and(|kw| kw.is_library_keyword()))
    }

    /// Whether a user keyword named `name` is visible from `datafile`,
    /// through its own keywords or its resource imports.
    pub fn is_user_keyword(&mut self, datafile: &Item, name: &str) -> Result<bool> {
        let label = SmolStr::new(datafile.name());
        let kws = self.cached_user_keywords(datafile, &label)?;
        Ok(!match_name(kws, Some(name)).is_empty())
    }

    /// Signature and documentation of the first keyword named `name`.
    pub fn get_keyword_details(&mut self, item: &Item, name: &str) -> Result<Option<String>> {
        let label = self.config.own_source_label.clone();
        let mut kws = self.get_item_keywords(item, &label)?;
        kws.extend_from_slice(self.lib_cache.get_default_keywords()?);
        Ok(match_name(&kws, Some(name)).first().map(|kw| kw.details()))
    }

    // ------------------------------------------------------------------
    // Back-end delegation
    // ------------------------------------------------------------------

    /// Load a resource imported as `path` by `datafile`.
    pub fn load_resource(&mut self, path: &str, datafile: &Item) -> Result<Resource> {
        self.res_cache.load_resource(path, datafile.source())
    }

    /// The resource imported as `name` from the datafile at `source`, or
    /// `None` when there is none.
    pub fn get_resource_file(&mut self, source: &Path, name: &str) -> Result<Option<Resource>> {
        self.res_cache.get_resource_file(source, name)
    }

    /// The variable file imported as `name` with `args` from the datafile
    /// at `source`.
    pub fn get_varfile(&mut self, source: &Path, name: &str, args: &[SmolStr]) -> Result<Arc<VariableFile>> {
        self.var_cache.get_varfile(source, name, args)
    }

    /// Keywords of library `name` imported with `args`. An unknown library
    /// has none.
    pub fn get_library_keywords(&mut self, name: &str, args: &[SmolStr]) -> Result<Vec<KeywordContent>> {
        Ok(self.lib_cache.get_library_keywords(name, args)?.to_vec())
    }

    /// Keywords of the default libraries.
    pub fn get_default_keywords(&mut self) -> Result<Vec<KeywordContent>> {
        Ok(self.lib_cache.get_default_keywords()?.to_vec())
    }
}

/// Keywords a resource declares itself, without following its imports.
fn resource_keywords(resource: &Resource) -> Vec<KeywordContent> {
    match resource {
        Resource::Xml(res) => res
            .keywords
            .iter()
            .map(|kw| KeywordContent::from_spec_keyword(kw, &res.name))
            .collect(),
        Resource::File(res) => res
            .keywords
            .iter()
            .map(|kw| KeywordContent::from_user_keyword(kw, &res.name, &res.name, KeywordKind::ResourceFile))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::{LibraryKeyword, ResourceFile, TestSuite};
    use crate::project::{MemoryLibraries, MemoryResources, MemoryVariableFiles};

    fn namespace(resources: MemoryResources) -> Namespace {
        let libraries = MemoryLibraries::new().with_library("BuiltIn", [LibraryKeyword::new("Log")]);
        Namespace::new(libraries, resources, MemoryVariableFiles::new())
    }

    fn suite(imports: &[Import]) -> Item {
        Item::Suite(Arc::new(TestSuite {
            name: "Suite".into(),
            source: PathBuf::from("/data/suite.robot"),
            keywords: vec![Arc::new(UserKeyword::new("Local"))],
            imports: imports.iter().cloned().collect(),
            ..Default::default()
        }))
    }

    #[test]
    fn test_own_keywords_come_first() {
        let mut ns = namespace(MemoryResources::new());
        let kws = ns.get_item_keywords(&suite(&[]), "<this file>").unwrap();

        let names: Vec<_> = kws.iter().map(|kw| (kw.name.as_str(), kw.source.as_str())).collect();
        assert_eq!(names, [("Local", "<this file>"), ("Log", "BuiltIn")]);
        assert_eq!(kws[0].longname, "Suite.Local");
    }

    #[test]
    fn test_absent_item_is_empty() {
        let mut ns = namespace(MemoryResources::new());
        assert!(ns.content_assist_values(None, "lo").unwrap().is_empty());
        assert!(ns.caches_are_empty());
    }

    #[test]
    fn test_xml_resource_is_not_followed() {
        let resources = MemoryResources::new().with_xml_resource(crate::hir::XmlResource {
            name: "spec".into(),
            source: PathBuf::from("/data/spec.xml"),
            keywords: vec![LibraryKeyword::new("From Spec")],
        });
        let mut ns = namespace(resources);

        let kws = ns
            .get_user_keywords_from_imports(&suite(&[Import::resource("spec.xml")]))
            .unwrap();
        assert_eq!(kws.len(), 1);
        assert_eq!(kws[0].name, "From Spec");
        assert_eq!(kws[0].kind, KeywordKind::ResourceFile);
    }

    #[test]
    fn test_self_import_is_skipped() {
        let resources = MemoryResources::new().with_resource(ResourceFile {
            name: "self".into(),
            source: PathBuf::from("/data/self.resource"),
            keywords: vec![Arc::new(UserKeyword::new("Mine"))],
            imports: [Import::resource("self.resource")].into_iter().collect(),
            ..Default::default()
        });
        let mut ns = namespace(resources);

        let Resource::File(res) = ns
            .get_resource_file(Path::new("/data/x.robot"), "self.resource")
            .unwrap()
            .unwrap()
        else {
            panic!("expected resource file");
        };
        let kws = ns.get_user_keywords_from_imports(&Item::Resource(res)).unwrap();
        assert!(kws.is_empty());
    }
}
