//! Shared model fixtures.
//!
//! ```text
//! /data/suite.robot        Suite      imports common.resource, vars.py, Collections
//! /data/common.resource    common     imports nested/deep.resource, Collections
//! /data/nested/deep.resource  deep    imports ../common.resource (cycle)
//! /data/resource.txt       resource.txt  (undecorated GREETING variable)
//! /data/vars.py            vars.py
//! ```
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use kwnamespace::Namespace;
use kwnamespace::hir::{
    Import, Item, LibraryKeyword, ResourceFile, TestSuite, UserKeyword, Variable, VariableFile,
};
use kwnamespace::project::{MemoryLibraries, MemoryResources, MemoryVariableFiles};

pub fn builtin() -> Vec<LibraryKeyword> {
    vec![
        LibraryKeyword::new("Log")
            .with_args(["message", "level=INFO"])
            .with_doc("Logs the given message."),
        LibraryKeyword::new("Log Many").with_args(["*messages"]),
        LibraryKeyword::new("Run Keyword").with_args(["name", "*args"]),
        LibraryKeyword::new("Should Be Equal").with_args(["first", "second"]),
    ]
}

pub fn libraries() -> MemoryLibraries {
    MemoryLibraries::new().with_library("BuiltIn", builtin()).with_library(
        "Collections",
        [
            LibraryKeyword::new("Append To List"),
            LibraryKeyword::new("Get From List"),
        ],
    )
}

pub fn keyword(name: &str) -> Arc<UserKeyword> {
    Arc::new(UserKeyword::new(name))
}

pub fn resource(name: &str, path: &str, keywords: &[&str], imports: &[Import]) -> ResourceFile {
    ResourceFile {
        name: name.into(),
        source: PathBuf::from(path),
        keywords: keywords.iter().map(|kw| keyword(kw)).collect(),
        imports: imports.iter().cloned().collect(),
        ..Default::default()
    }
}

pub fn common() -> ResourceFile {
    let mut res = resource(
        "common",
        "/data/common.resource",
        &["Login", "Logout"],
        &[Import::resource("nested/deep.resource"), Import::library("Collections")],
    );
    res.variables = vec![Variable::new("${HOST}"), Variable::new("${GREETING}")];
    res
}

pub fn deep() -> ResourceFile {
    let mut res = resource(
        "deep",
        "/data/nested/deep.resource",
        &["Deep Keyword"],
        &[Import::resource("../common.resource")],
    );
    res.variables = vec![Variable::new("${DEEP}")];
    res
}

pub fn plain_resource() -> ResourceFile {
    let mut res = resource("resource.txt", "/data/resource.txt", &[], &[]);
    res.variables = vec![Variable::new("GREETING")];
    res
}

pub fn resources() -> MemoryResources {
    MemoryResources::new()
        .with_resource(common())
        .with_resource(deep())
        .with_resource(plain_resource())
}

pub fn varfiles() -> MemoryVariableFiles {
    MemoryVariableFiles::new().with_varfile(VariableFile {
        name: "vars.py".into(),
        source: PathBuf::from("/data/vars.py"),
        variables: vec![Variable::new("${ENV}")],
    })
}

pub fn suite_model() -> TestSuite {
    TestSuite {
        name: "Suite".into(),
        source: PathBuf::from("/data/suite.robot"),
        keywords: vec![keyword("Local Keyword")],
        variables: vec![Variable::new("${SUITE VAR}")],
        imports: [
            Import::resource("common.resource"),
            Import::variables("vars.py"),
            Import::library("Collections"),
        ]
        .into_iter()
        .collect(),
        suites: Vec::new(),
    }
}

pub fn suite() -> Item {
    Item::Suite(Arc::new(suite_model()))
}

pub fn namespace() -> Namespace {
    Namespace::new(libraries(), resources(), varfiles())
}

pub fn names<T: kwnamespace::ide::Named>(values: &[T]) -> Vec<&str> {
    values.iter().map(|v| v.name()).collect()
}
