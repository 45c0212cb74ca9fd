//! Namespace configuration.

use smol_str::SmolStr;

/// Display source given to an item's own keywords in content assist.
pub const OWN_SOURCE_LABEL: &str = "<this file>";

/// Library imported into every datafile without an explicit setting.
pub const BUILTIN_LIBRARY: &str = "BuiltIn";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NamespaceConfig {
    /// Libraries whose keywords are always in scope, resolved with no
    /// arguments and concatenated in this order.
    pub default_libraries: Vec<SmolStr>,
    pub own_source_label: SmolStr,
}

impl NamespaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_libraries<I, S>(mut self, libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.default_libraries = libraries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_own_source_label(mut self, label: impl Into<SmolStr>) -> Self {
        self.own_source_label = label.into();
        self
    }
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            default_libraries: vec![SmolStr::new_static(BUILTIN_LIBRARY)],
            own_source_label: SmolStr::new_static(OWN_SOURCE_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NamespaceConfig::default();
        assert_eq!(config.default_libraries, ["BuiltIn"]);
        assert_eq!(config.own_source_label, "<this file>");
    }

    #[test]
    fn test_builder() {
        let config = NamespaceConfig::new()
            .with_default_libraries(["BuiltIn", "Easter"])
            .with_own_source_label("(local)");
        assert_eq!(config.default_libraries, ["BuiltIn", "Easter"]);
        assert_eq!(config.own_source_label, "(local)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_fills_defaults() {
        let config: NamespaceConfig =
            serde_json::from_str(r#"{ "default_libraries": ["BuiltIn", "Dialogs"] }"#).unwrap();
        assert_eq!(config.default_libraries, ["BuiltIn", "Dialogs"]);
        assert_eq!(config.own_source_label, OWN_SOURCE_LABEL);
    }
}
