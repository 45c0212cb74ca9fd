//! In-memory loaders.
//!
//! Useful when the model graph is built by the embedding application itself
//! rather than read from disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::loader::{LibraryLoader, ResourceLoader, VariableFileLoader};
use crate::error::Result;
use crate::hir::{LibraryKeyword, Resource, ResourceFile, VariableFile, XmlResource};

type DynamicLibrary = Box<dyn Fn(&[SmolStr]) -> Vec<LibraryKeyword>>;

enum LibrarySource {
    Static(Vec<LibraryKeyword>),
    Dynamic(DynamicLibrary),
}

/// Libraries registered by name.
#[derive(Default)]
pub struct MemoryLibraries {
    libraries: FxHashMap<SmolStr, LibrarySource>,
}

impl MemoryLibraries {
    pub fn new() -> Self {
        Self::default()
    }

    /// A library whose keywords do not depend on import arguments.
    pub fn with_library<I>(mut self, name: impl Into<SmolStr>, keywords: I) -> Self
    where
        I: IntoIterator<Item = LibraryKeyword>,
    {
        self.libraries
            .insert(name.into(), LibrarySource::Static(keywords.into_iter().collect()));
        self
    }

    /// A library that computes its keywords from its import arguments.
    pub fn with_dynamic_library(
        mut self,
        name: impl Into<SmolStr>,
        keywords: impl Fn(&[SmolStr]) -> Vec<LibraryKeyword> + 'static,
    ) -> Self {
        self.libraries
            .insert(name.into(), LibrarySource::Dynamic(Box::new(keywords)));
        self
    }
}

impl LibraryLoader for MemoryLibraries {
    fn load_library(&self, name: &str, args: &[SmolStr]) -> Result<Option<Vec<LibraryKeyword>>> {
        Ok(self.libraries.get(name).map(|library| match library {
            LibrarySource::Static(keywords) => keywords.clone(),
            LibrarySource::Dynamic(keywords) => keywords(args),
        }))
    }
}

/// Resources registered by their source path.
#[derive(Default)]
pub struct MemoryResources {
    resources: FxHashMap<PathBuf, Resource>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, resource: ResourceFile) -> Self {
        self.insert(Resource::File(Arc::new(resource)));
        self
    }

    pub fn with_xml_resource(mut self, resource: XmlResource) -> Self {
        self.insert(Resource::Xml(Arc::new(resource)));
        self
    }

    pub fn insert(&mut self, resource: Resource) {
        self.resources.insert(resource.source().to_path_buf(), resource);
    }
}

impl ResourceLoader for MemoryResources {
    fn load_resource(&self, path: &Path) -> Result<Option<Resource>> {
        Ok(self.resources.get(path).cloned())
    }
}

/// Variable files registered by their source path. Import arguments are ignored.
#[derive(Default)]
pub struct MemoryVariableFiles {
    files: FxHashMap<PathBuf, VariableFile>,
}

impl MemoryVariableFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_varfile(mut self, file: VariableFile) -> Self {
        self.files.insert(file.source.clone(), file);
        self
    }
}

impl VariableFileLoader for MemoryVariableFiles {
    fn load_varfile(&self, path: &Path, _args: &[SmolStr]) -> Result<Option<VariableFile>> {
        Ok(self.files.get(path).cloned())
    }
}
