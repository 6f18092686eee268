//! Case-insensitive keyed index over reference records.

use std::collections::HashMap;

/// Normalize a lookup key: trimmed and upper-cased.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_uppercase()
}

/// Groups records by a normalized text key, preserving input order per key.
#[derive(Debug, Clone)]
pub struct KeyedIndex<T> {
    inner: HashMap<String, Vec<T>>,
}

impl<T> Default for KeyedIndex<T> {
    fn default() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }
}

impl<T> KeyedIndex<T> {
    pub fn new<I, F>(records: I, key: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> &str,
    {
        let mut inner: HashMap<String, Vec<T>> = HashMap::new();
        for record in records {
            inner
                .entry(normalize_key(key(&record)))
                .or_default()
                .push(record);
        }
        Self { inner }
    }

    /// Records for `key`; empty when the key is unknown.
    pub fn get(&self, key: &str) -> &[T] {
        self.inner
            .get(&normalize_key(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(&normalize_key(key))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
