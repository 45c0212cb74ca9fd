//! Datafiles and the items content assist is requested for.
//!
//! An [`Item`] is whatever the editor currently has open: a test suite, a
//! resource file, or a single user keyword inside one of them. Every variant
//! answers the same questions (own keywords, own variables, imports) so the
//! namespace never needs to know which kind it is looking at.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use smol_str::SmolStr;

use super::imports::Imports;
use super::keyword::{KeywordKind, LibraryKeyword, UserKeyword, Variable};
use crate::base::ItemKey;

/// A test case file, possibly a directory suite with child suites.
#[derive(Clone, Debug, Default)]
pub struct TestSuite {
    pub name: SmolStr,
    pub source: PathBuf,
    pub keywords: Vec<Arc<UserKeyword>>,
    pub variables: Vec<Variable>,
    pub imports: Imports,
    pub suites: Vec<Arc<TestSuite>>,
}

/// A resource file authored in the test data format.
#[derive(Clone, Debug, Default)]
pub struct ResourceFile {
    pub name: SmolStr,
    pub source: PathBuf,
    pub keywords: Vec<Arc<UserKeyword>>,
    pub variables: Vec<Variable>,
    pub imports: Imports,
}

/// A resource described by a pre-generated spec file.
///
/// Its keyword list is already flat: spec files carry no imports to follow.
#[derive(Clone, Debug, Default)]
pub struct XmlResource {
    pub name: SmolStr,
    pub source: PathBuf,
    pub keywords: Vec<LibraryKeyword>,
}

/// A resolved `Resource` import.
#[derive(Clone, Debug)]
pub enum Resource {
    File(Arc<ResourceFile>),
    Xml(Arc<XmlResource>),
}

impl Resource {
    pub fn name(&self) -> &str {
        match self {
            Resource::File(res) => &res.name,
            Resource::Xml(res) => &res.name,
        }
    }

    pub fn source(&self) -> &Path {
        match self {
            Resource::File(res) => &res.source,
            Resource::Xml(res) => &res.source,
        }
    }

    /// Variables declared directly in the resource.
    pub fn variables(&self) -> &[Variable] {
        match self {
            Resource::File(res) => &res.variables,
            Resource::Xml(_) => &[],
        }
    }
}

/// A resolved `Variables` import.
#[derive(Clone, Debug, Default)]
pub struct VariableFile {
    pub name: SmolStr,
    pub source: PathBuf,
    pub variables: Vec<Variable>,
}

/// A file that can own keywords: a suite or a resource file.
#[derive(Clone, Debug)]
pub enum Datafile {
    Suite(Arc<TestSuite>),
    Resource(Arc<ResourceFile>),
}

impl Datafile {
    pub fn name(&self) -> &str {
        match self {
            Datafile::Suite(suite) => &suite.name,
            Datafile::Resource(res) => &res.name,
        }
    }

    pub fn source(&self) -> &Path {
        match self {
            Datafile::Suite(suite) => &suite.source,
            Datafile::Resource(res) => &res.source,
        }
    }

    pub fn keywords(&self) -> &[Arc<UserKeyword>] {
        match self {
            Datafile::Suite(suite) => &suite.keywords,
            Datafile::Resource(res) => &res.keywords,
        }
    }

    pub fn variables(&self) -> &[Variable] {
        match self {
            Datafile::Suite(suite) => &suite.variables,
            Datafile::Resource(res) => &res.variables,
        }
    }

    pub fn imports(&self) -> &Imports {
        match self {
            Datafile::Suite(suite) => &suite.imports,
            Datafile::Resource(res) => &res.imports,
        }
    }

    pub fn keyword_kind(&self) -> KeywordKind {
        match self {
            Datafile::Suite(_) => KeywordKind::TestCaseFile,
            Datafile::Resource(_) => KeywordKind::ResourceFile,
        }
    }
}

/// The item content assist and keyword lookups are performed for.
#[derive(Clone, Debug)]
pub enum Item {
    Suite(Arc<TestSuite>),
    Resource(Arc<ResourceFile>),
    /// A user keyword being edited inside its owning datafile.
    Keyword {
        keyword: Arc<UserKeyword>,
        owner: Datafile,
    },
}

impl Item {
    /// Display name, also used as the cache key.
    pub fn name(&self) -> &str {
        match self {
            Item::Suite(suite) => &suite.name,
            Item::Resource(res) => &res.name,
            Item::Keyword { keyword, .. } => &keyword.name,
        }
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.name())
    }

    /// Name of the datafile this item lives in.
    pub fn datafile_name(&self) -> &str {
        match self {
            Item::Keyword { owner, .. } => owner.name(),
            _ => self.name(),
        }
    }

    /// Path of the datafile this item lives in.
    pub fn source(&self) -> &Path {
        match self {
            Item::Suite(suite) => &suite.source,
            Item::Resource(res) => &res.source,
            Item::Keyword { owner, .. } => owner.source(),
        }
    }

    /// Type tag given to keywords declared by this item.
    pub fn keyword_kind(&self) -> KeywordKind {
        match self {
            Item::Suite(_) => KeywordKind::TestCaseFile,
            Item::Resource(_) => KeywordKind::ResourceFile,
            Item::Keyword { owner, .. } => owner.keyword_kind(),
        }
    }

    /// Keywords declared in the item's own datafile.
    pub fn own_keywords(&self) -> &[Arc<UserKeyword>] {
        match self {
            Item::Suite(suite) => &suite.keywords,
            Item::Resource(res) => &res.keywords,
            Item::Keyword { owner, .. } => owner.keywords(),
        }
    }

    /// Variables visible without following imports, as `(source, name)`.
    ///
    /// For a keyword this is the owner's variable table plus the keyword's
    /// own arguments.
    pub fn own_variables(&self) -> Vec<(SmolStr, SmolStr)> {
        match self {
            Item::Suite(suite) => table_variables(&suite.name, &suite.variables),
            Item::Resource(res) => table_variables(&res.name, &res.variables),
            Item::Keyword { keyword, owner } => {
                let mut vars = table_variables(owner.name(), owner.variables());
                vars.extend(
                    keyword
                        .argument_variables()
                        .map(|arg| (keyword.name.clone(), SmolStr::new(arg))),
                );
                vars
            }
        }
    }

    pub fn imports(&self) -> &Imports {
        match self {
            Item::Suite(suite) => &suite.imports,
            Item::Resource(res) => &res.imports,
            Item::Keyword { owner, .. } => owner.imports(),
        }
    }
}

impl From<Datafile> for Item {
    fn from(datafile: Datafile) -> Self {
        match datafile {
            Datafile::Suite(suite) => Item::Suite(suite),
            Datafile::Resource(res) => Item::Resource(res),
        }
    }
}

impl From<Arc<TestSuite>> for Item {
    fn from(suite: Arc<TestSuite>) -> Self {
        Item::Suite(suite)
    }
}

impl From<Arc<ResourceFile>> for Item {
    fn from(res: Arc<ResourceFile>) -> Self {
        Item::Resource(res)
    }
}

fn table_variables(source: &str, variables: &[Variable]) -> Vec<(SmolStr, SmolStr)> {
    variables
        .iter()
        .map(|var| (SmolStr::new(source), var.name.clone()))
        .collect()
}
