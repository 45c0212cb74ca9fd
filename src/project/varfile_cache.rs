//! Variable file cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

use super::loader::VariableFileLoader;
use super::paths::resolve_import_path;
use crate::error::{NamespaceError, Result};
use crate::hir::VariableFile;

type VarFileKey = (PathBuf, Vec<SmolStr>);

/// Memoizes variable files per resolved path and arguments.
pub struct VariableFileCache {
    loader: Box<dyn VariableFileLoader>,
    files: FxHashMap<VarFileKey, Option<Arc<VariableFile>>>,
}

impl VariableFileCache {
    pub fn new(loader: Box<dyn VariableFileLoader>) -> Self {
        Self {
            loader,
            files: FxHashMap::default(),
        }
    }

    /// The variable file imported as `name` with `args` from the datafile at `source`.
    pub fn get_varfile(&mut self, source: &Path, name: &str, args: &[SmolStr]) -> Result<Arc<VariableFile>> {
        let resolved = resolve_import_path(source, name);
        self.find_resolved(&resolved, args)?
            .ok_or(NamespaceError::VariableFileNotFound { path: resolved })
    }

    /// Like [`get_varfile`](Self::get_varfile), but a missing file is `None`.
    pub fn find_varfile(&mut self, source: &Path, name: &str, args: &[SmolStr]) -> Result<Option<Arc<VariableFile>>> {
        self.find_resolved(&resolve_import_path(source, name), args)
    }

    fn find_resolved(&mut self, resolved: &Path, args: &[SmolStr]) -> Result<Option<Arc<VariableFile>>> {
        let key: VarFileKey = (resolved.to_path_buf(), args.to_vec());
        if let Some(cached) = self.files.get(&key) {
            return Ok(cached.clone());
        }
        let file = self.loader.load_varfile(resolved, args)?.map(Arc::new);
        debug!(path = %resolved.display(), ?args, found = file.is_some(), "loaded variable file");
        self.files.insert(key, file.clone());
        Ok(file)
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
