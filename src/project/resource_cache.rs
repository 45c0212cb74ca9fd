//! Resource file cache.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::debug;

use super::loader::ResourceLoader;
use super::paths::resolve_import_path;
use crate::error::{NamespaceError, Result};
use crate::hir::Resource;

/// Memoizes resources by resolved path.
///
/// Loading the same path twice yields the same model instance, which keeps
/// the namespace's name-keyed caches stable. Missing files are remembered
/// too, until the cache is cleared.
pub struct ResourceFileCache {
    loader: Box<dyn ResourceLoader>,
    resources: FxHashMap<PathBuf, Option<Resource>>,
}

impl ResourceFileCache {
    pub fn new(loader: Box<dyn ResourceLoader>) -> Self {
        Self {
            loader,
            resources: FxHashMap::default(),
        }
    }

    /// Load the resource imported as `path` from the datafile at `datafile`.
    pub fn load_resource(&mut self, path: &str, datafile: &Path) -> Result<Resource> {
        let resolved = resolve_import_path(datafile, path);
        self.load_resolved(&resolved)?
            .ok_or(NamespaceError::ResourceNotFound { path: resolved })
    }

    /// Like [`load_resource`](Self::load_resource), but a missing file is `None`.
    pub fn get_resource_file(&mut self, source: &Path, name: &str) -> Result<Option<Resource>> {
        self.load_resolved(&resolve_import_path(source, name))
    }

    /// Load an already resolved path.
    pub fn load_resolved(&mut self, resolved: &Path) -> Result<Option<Resource>> {
        if let Some(cached) = self.resources.get(resolved) {
            return Ok(cached.clone());
        }
        let resource = self.loader.load_resource(resolved)?;
        debug!(path = %resolved.display(), found = resource.is_some(), "loaded resource");
        self.resources.insert(resolved.to_path_buf(), resource.clone());
        Ok(resource)
    }

    pub fn clear(&mut self) {
        self.resources.clear();
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::hir::ResourceFile;
    use crate::project::MemoryResources;

    fn cache() -> ResourceFileCache {
        let resources = MemoryResources::new().with_resource(ResourceFile {
            name: "common".into(),
            source: PathBuf::from("/data/common.resource"),
            ..Default::default()
        });
        ResourceFileCache::new(Box::new(resources))
    }

    #[test]
    fn test_same_path_same_instance() {
        let mut cache = cache();
        let datafile = Path::new("/data/tests.robot");

        let Resource::File(first) = cache.load_resource("common.resource", datafile).unwrap() else {
            panic!("expected a resource file");
        };
        let Resource::File(second) = cache.load_resource("./common.resource", datafile).unwrap() else {
            panic!("expected a resource file");
        };

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_resource() {
        let mut cache = cache();
        let datafile = Path::new("/data/tests.robot");

        let err = cache.load_resource("missing.resource", datafile).unwrap_err();
        assert!(matches!(err, NamespaceError::ResourceNotFound { .. }));
        assert!(cache.get_resource_file(datafile, "missing.resource").unwrap().is_none());
    }

    #[test]
    fn test_clear() {
        let mut cache = cache();
        cache
            .get_resource_file(Path::new("/data/tests.robot"), "common.resource")
            .unwrap();
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
    }
}
