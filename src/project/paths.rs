//! Import path resolution.

use std::path::{Component, Path, PathBuf};

/// `${CURDIR}` expands to the directory of the importing file.
const CURDIR: &str = "${CURDIR}";

/// Resolve an import `path` as written in the datafile at `datafile`.
///
/// Relative paths are taken from the datafile's directory. The result is
/// lexically normalized so every spelling of one file yields one key.
pub fn resolve_import_path(datafile: &Path, path: &str) -> PathBuf {
    let dir = datafile.parent().unwrap_or_else(|| Path::new(""));
    let expanded = path.replace(CURDIR, &dir.to_string_lossy());
    let path = Path::new(&expanded);
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&dir.join(path))
    }
}

/// Drop `.` segments and fold `..` into the preceding segment.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
