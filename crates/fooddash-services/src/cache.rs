use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use fooddash_core::{Record, Result, Table};
use tracing::trace;

/// Tables memoized by row limit for the life of the process.
///
/// There is no eviction. A failed load is not stored, so the next call with
/// the same limit tries again.
pub struct TableCache<R> {
    entries: Mutex<HashMap<usize, Arc<Table<R>>>>,
    loads: AtomicUsize,
}

impl<R: Record> TableCache<R> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Return the table cached for `limit`, calling `load` only on a miss.
    /// The lock is held across `load` so concurrent callers read the file once.
    pub fn get_or_load<F>(&self, limit: usize, load: F) -> Result<Arc<Table<R>>>
    where
        F: FnOnce() -> Result<Table<R>>,
    {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(table) = entries.get(&limit) {
            trace!(dataset = R::DATASET.as_str(), limit, "Cache hit");
            return Ok(Arc::clone(table));
        }

        self.loads.fetch_add(1, Ordering::Relaxed);
        let table = Arc::new(load()?);
        entries.insert(limit, Arc::clone(&table));
        Ok(table)
    }

    /// Number of times the loader has been invoked
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    /// Number of distinct limits currently cached
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Record> Default for TableCache<R> {
    fn default() -> Self {
        Self::new()
    }
}
