//! CCSID -> table cache shared across rows and connections.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

use super::ConvTable;
use crate::error::Result;

/// Append-only cache of conversion tables keyed by CCSID.
///
/// Lookups take a read lock. A miss builds the table outside the lock and
/// inserts it under the write lock; if another thread won the race its
/// table is kept and ours is dropped, since tables for the same CCSID are
/// interchangeable.
#[derive(Debug, Default)]
pub struct ConvTableCache {
    tables: RwLock<HashMap<u32, Arc<ConvTable>>>,
}

impl ConvTableCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache.
    pub fn global() -> Arc<ConvTableCache> {
        static GLOBAL: OnceLock<Arc<ConvTableCache>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(ConvTableCache::new())).clone()
    }

    /// Get the table for a CCSID, building it on first use.
    pub fn get(&self, ccsid: u32) -> Result<Arc<ConvTable>> {
        if let Some(table) = self.tables.read().get(&ccsid) {
            return Ok(Arc::clone(table));
        }
        let built = Arc::new(ConvTable::new(ccsid)?);
        let mut tables = self.tables.write();
        let table = tables.entry(ccsid).or_insert_with(|| {
            debug!(ccsid, "conversion table cached");
            built
        });
        Ok(Arc::clone(table))
    }

    /// Whether a table for the CCSID has been built.
    pub fn contains(&self, ccsid: u32) -> bool {
        self.tables.read().contains_key(&ccsid)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_get_builds_once_and_reuses() {
        let cache = ConvTableCache::new();
        assert!(cache.is_empty());
        let first = cache.get(37).unwrap();
        let second = cache.get(37).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_unsupported_is_not_cached() {
        let cache = ConvTableCache::new();
        assert!(cache.get(290).is_err());
        assert!(!cache.contains(290));
    }

    #[test]
    fn test_concurrent_lookups_agree() {
        let cache = Arc::new(ConvTableCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get(500).unwrap())
            })
            .collect();
        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for table in &tables[1..] {
            assert!(Arc::ptr_eq(&tables[0], table));
        }
        assert_eq!(cache.len(), 1);
    }
}
