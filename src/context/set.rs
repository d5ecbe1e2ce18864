// ABOUTME: ContextSet - a multi-valued key to value mapping that narrows
// ABOUTME: where a permission grant applies (world, server group, ...).

use std::collections::{BTreeMap, BTreeSet};

/// An unordered set of context pairs. A key may carry several values.
///
/// The empty set means "global, unscoped". Keys never map to an empty value set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextSet {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl ContextSet {
    /// Create an empty context set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair, returning the set (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a pair. Returns false if it was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(value.into())
    }

    /// Whether the set holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Whether the exact pair is present.
    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|values| values.contains(value))
    }

    /// Values for a key, in sorted order.
    pub fn values(&self, key: &str) -> impl Iterator<Item = &str> {
        self.entries
            .get(key)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    /// Iterate keys with their value sets.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate every pair.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContextSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ContextSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}
