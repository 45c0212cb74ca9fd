//! Keyword and variable declarations.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

/// Where a keyword comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeywordKind {
    TestCaseFile,
    ResourceFile,
    Library,
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeywordKind::TestCaseFile => "test case file",
            KeywordKind::ResourceFile => "resource file",
            KeywordKind::Library => "library",
        })
    }
}

/// A user keyword as authored in a test case file or resource file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserKeyword {
    pub name: SmolStr,
    /// Argument specs as written, e.g. `${name}`, `${level}=INFO`, `@{rest}`.
    pub args: Vec<SmolStr>,
    pub doc: Arc<str>,
}

impl UserKeyword {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            doc: Arc::from(""),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_doc(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Variables the keyword's arguments bind inside its body.
    ///
    /// Default values are dropped: `${level}=INFO` binds `${level}`.
    pub fn argument_variables(&self) -> impl Iterator<Item = &str> + '_ {
        self.args
            .iter()
            .map(|arg| arg.split_once('=').map_or(arg.as_str(), |(name, _)| name))
            .map(str::trim_end)
            .filter(|name| !name.is_empty())
    }
}

/// A keyword provided by a library or described by a spec file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryKeyword {
    pub name: SmolStr,
    pub args: Vec<SmolStr>,
    pub doc: Arc<str>,
}

impl LibraryKeyword {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            doc: Arc::from(""),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_doc(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.doc = doc.into();
        self
    }
}

/// A variable declared in a variable table or variable file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
    /// Full decorated name, e.g. `${GREETING}` or `@{USERS}`.
    pub name: SmolStr,
}

impl Variable {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self { name: name.into() }
    }
}
