//! Import declarations of a datafile.
//!
//! Imports are kept declarative here. The namespace resolves them through
//! the library, resource and variable file caches.

use smol_str::SmolStr;

/// A single import setting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Import {
    /// `Library    Name    arg1    arg2    WITH NAME    Alias`
    Library {
        name: SmolStr,
        args: Vec<SmolStr>,
        alias: Option<SmolStr>,
    },
    /// `Resource    path`
    Resource { path: SmolStr },
    /// `Variables    path    arg1`
    Variables { path: SmolStr, args: Vec<SmolStr> },
}

impl Import {
    pub fn library(name: impl Into<SmolStr>) -> Self {
        Import::Library {
            name: name.into(),
            args: Vec::new(),
            alias: None,
        }
    }

    pub fn resource(path: impl Into<SmolStr>) -> Self {
        Import::Resource { path: path.into() }
    }

    pub fn variables(path: impl Into<SmolStr>) -> Self {
        Import::Variables {
            path: path.into(),
            args: Vec::new(),
        }
    }
}

/// A library import with its arguments.
#[derive(Clone, Copy, Debug)]
pub struct LibraryImport<'a> {
    pub name: &'a str,
    pub args: &'a [SmolStr],
    pub alias: Option<&'a str>,
}

/// The ordered import settings of one datafile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Imports {
    entries: Vec<Import>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, import: Import) {
        self.entries.push(import);
    }

    /// Paths of `Resource` imports, in declaration order.
    pub fn resources(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().filter_map(|imp| match imp {
            Import::Resource { path } => Some(path.as_str()),
            _ => None,
        })
    }

    /// `Library` imports, in declaration order.
    pub fn libraries(&self) -> impl Iterator<Item = LibraryImport<'_>> + '_ {
        self.entries.iter().filter_map(|imp| match imp {
            Import::Library { name, args, alias } => Some(LibraryImport {
                name,
                args,
                alias: alias.as_deref(),
            }),
            _ => None,
        })
    }

    /// `Variables` imports as `(path, args)`, in declaration order.
    pub fn variable_files(&self) -> impl Iterator<Item = (&str, &[SmolStr])> + '_ {
        self.entries.iter().filter_map(|imp| match imp {
            Import::Variables { path, args } => Some((path.as_str(), args.as_slice())),
            _ => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Import> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Import> for Imports {
    fn from_iter<T: IntoIterator<Item = Import>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports_partition_by_kind() {
        let imports: Imports = [
            Import::library("Collections"),
            Import::resource("common.resource"),
            Import::variables("vars.py"),
            Import::Library {
                name: "Remote".into(),
                args: vec!["http://127.0.0.1:8270".into()],
                alias: Some("Svc".into()),
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(imports.len(), 4);
        assert_eq!(imports.resources().collect::<Vec<_>>(), ["common.resource"]);

        let libs: Vec<_> = imports.libraries().map(|l| (l.name, l.alias)).collect();
        assert_eq!(libs, [("Collections", None), ("Remote", Some("Svc"))]);

        let vars: Vec<_> = imports.variable_files().map(|(p, _)| p).collect();
        assert_eq!(vars, ["vars.py"]);
    }
}
