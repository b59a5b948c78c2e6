//! Composite keys, normalized records and per-key row counts.

use std::collections::BTreeMap;

/// The unit of comparison between the two datasets.
///
/// All three parts are already normalized; `category` is always the full
/// category name, never the short code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompositeKey {
    pub subject_id: String,
    pub visit: String,
    pub category: String,
}

impl CompositeKey {
    pub fn new(
        subject_id: impl Into<String>,
        visit: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            visit: visit.into(),
            category: category.into(),
        }
    }
}

/// One normalized input row.
///
/// `values` holds the original cells aligned with the source header; `key`
/// is derived from them and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub values: Vec<String>,
    pub key: CompositeKey,
}

impl Record {
    pub fn new(values: Vec<String>, key: CompositeKey) -> Self {
        Self { values, key }
    }
}

/// Number of records sharing each [`CompositeKey`].
///
/// Backed by a `BTreeMap` so iteration follows key order and is stable
/// between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyIndex {
    counts: BTreeMap<CompositeKey, usize>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more record for `key`.
    pub fn insert(&mut self, key: CompositeKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Row count for `key`, zero when the key is absent.
    pub fn count(&self, key: &CompositeKey) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the number of indexed records.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CompositeKey, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }
}

impl FromIterator<CompositeKey> for KeyIndex {
    fn from_iter<I: IntoIterator<Item = CompositeKey>>(iter: I) -> Self {
        let mut index = Self::new();
        for key in iter {
            index.insert(key);
        }
        index
    }
}
