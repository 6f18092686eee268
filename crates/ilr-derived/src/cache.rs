//! Per-learner memoization of derived predicates.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use tracing::trace;

/// Predicate name plus the position of the delivery it was asked about in
/// the learner's delivery list; `None` for learner-level predicates.
/// Deliveries sharing an aim sequence number get separate entries.
pub type CacheKey = (&'static str, Option<usize>);

/// Memoized derived values for a single learner.
///
/// Built when a learner's evaluation starts and dropped when it ends. The
/// cache uses interior mutability and is not `Sync`.
#[derive(Debug)]
pub struct DerivedDataCache {
    learn_ref_number: String,
    flags: RefCell<HashMap<CacheKey, bool>>,
    categories: RefCell<HashMap<CacheKey, Option<&'static str>>>,
    hits: Cell<usize>,
}

impl DerivedDataCache {
    pub fn new(learn_ref_number: impl Into<String>) -> Self {
        Self {
            learn_ref_number: learn_ref_number.into(),
            flags: RefCell::new(HashMap::new()),
            categories: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
        }
    }

    /// The learner this cache is bound to.
    pub fn learn_ref_number(&self) -> &str {
        &self.learn_ref_number
    }

    pub fn flag(
        &self,
        predicate: &'static str,
        delivery_index: Option<usize>,
        compute: impl FnOnce() -> bool,
    ) -> bool {
        self.memoize(&self.flags, (predicate, delivery_index), compute)
    }

    pub fn category(
        &self,
        predicate: &'static str,
        delivery_index: Option<usize>,
        compute: impl FnOnce() -> Option<&'static str>,
    ) -> Option<&'static str> {
        self.memoize(&self.categories, (predicate, delivery_index), compute)
    }

    /// Number of lookups answered without recomputing.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    /// Number of memoized values.
    pub fn len(&self) -> usize {
        self.flags.borrow().len() + self.categories.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn memoize<V: Copy>(
        &self,
        store: &RefCell<HashMap<CacheKey, V>>,
        key: CacheKey,
        compute: impl FnOnce() -> V,
    ) -> V {
        if let Some(value) = store.borrow().get(&key).copied() {
            self.hits.set(self.hits.get() + 1);
            return value;
        }
        // The borrow is released before computing so predicates may consult
        // the cache themselves.
        let value = compute();
        trace!(predicate = key.0, delivery_index = ?key.1, "derived value computed");
        store.borrow_mut().insert(key, value);
        value
    }
}
