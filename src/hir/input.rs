//! The top-level model handed to the namespace.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;

use super::items::{ResourceFile, TestSuite};

/// Everything currently open in the editor.
///
/// Holds the root suite (if a suite is open at all) and every resource file
/// opened directly, keyed by path in the order they were opened.
#[derive(Clone, Debug, Default)]
pub struct Project {
    pub suite: Option<Arc<TestSuite>>,
    resources: IndexMap<PathBuf, Arc<ResourceFile>>,
}

impl Project {
    /// Create a new empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a project rooted at `suite`.
    pub fn with_suite(suite: Arc<TestSuite>) -> Self {
        Self {
            suite: Some(suite),
            resources: IndexMap::new(),
        }
    }

    /// Add an open resource file. Re-adding a path replaces the old model.
    pub fn insert_resource(&mut self, resource: Arc<ResourceFile>) {
        self.resources.insert(resource.source.clone(), resource);
    }

    /// Remove an open resource file.
    pub fn remove_resource(&mut self, path: &Path) -> Option<Arc<ResourceFile>> {
        self.resources.shift_remove(path)
    }

    /// Get the resource opened from `path`.
    pub fn resource(&self, path: &Path) -> Option<&Arc<ResourceFile>> {
        self.resources.get(path)
    }

    /// Iterate over open resources in insertion order.
    pub fn resources(&self) -> impl Iterator<Item = &Arc<ResourceFile>> + '_ {
        self.resources.values()
    }

    /// Get the number of open resources.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}
