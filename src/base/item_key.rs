//! Cache identity for model items.

use std::fmt;

use smol_str::SmolStr;

/// The key the namespace caches derived keyword lists under.
///
/// An `ItemKey` is built from an item's display name. Two distinct items that
/// share a name therefore share cache buckets: whichever is queried first
/// populates the bucket and the other reads it back. Callers that open
/// same-named files side by side must `clear_caches` when switching between
/// them.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ItemKey(SmolStr);

impl ItemKey {
    /// Create a key from an item name.
    #[inline]
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    /// The name this key was built from.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemKey({:?})", self.0.as_str())
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemKey {
    #[inline]
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_key_equality() {
        let a = ItemKey::new("suite.robot");
        let b = ItemKey::from("suite.robot");
        let c = ItemKey::new("other.robot");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_item_key_hash() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(ItemKey::new("a"));
        set.insert(ItemKey::new("b"));
        set.insert(ItemKey::new("a")); // duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_same_name_same_key() {
        // Distinct files with the same display name collapse onto one key.
        let left = ItemKey::new("common.resource");
        let right = ItemKey::new("common.resource");
        assert_eq!(left, right);
    }
}
