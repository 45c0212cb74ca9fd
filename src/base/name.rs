//! Keyword name normalization.
//!
//! Keyword and variable names compare case-insensitively and ignore spaces
//! and underscores, so `Log Many`, `log_many` and `LOGMANY` all name the same
//! keyword.

use smol_str::SmolStr;

/// Normalize a name for comparison.
///
/// Lower-cases the name and drops whitespace and underscores.
pub fn normalize(name: &str) -> SmolStr {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two names the way keyword lookups do.
pub fn eq(a: &str, b: &str) -> bool {
    // Fast path for the common exact hit.
    a == b || normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Log Many"), "logmany");
        assert_eq!(normalize("  run_keyword  If "), "runkeywordif");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_eq_ignores_case_space_underscore() {
        assert!(eq("Log Many", "log_many"));
        assert!(eq("LOGMANY", "log many"));
        assert!(eq("BuiltIn.Log", "builtin.log"));
        assert!(!eq("Log", "Log Many"));
    }

    #[test]
    fn test_eq_unicode_case() {
        assert!(eq("Öppna Fil", "öppna_fil"));
    }
}
