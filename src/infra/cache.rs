// ============================================================
// Layer 6 — Result Caches
// ============================================================
// Implementations of the domain ResultCache trait.
//
//   MemoryCache  — HashMap behind a Mutex, never evicts.
//                  Grows for the life of the process.
//   BoundedCache — Same, plus a FIFO queue of keys. When full,
//                  the oldest inserted entry is dropped.
//   NoopCache    — Stores nothing; every lookup misses.
//
// A poisoned Mutex only means another thread panicked mid-insert;
// the map itself is still consistent, so we keep using it.
//
// Reference: Rust Book §16 (Shared-State Concurrency)

use std::{
    collections::{HashMap, VecDeque},
    sync::{Mutex, MutexGuard},
};

use crate::domain::{result::FactorizationResult, traits::ResultCache};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ─── MemoryCache ──────────────────────────────────────────────────────────────
/// Unbounded, append-only memo table
#[derive(Debug, Default)]
pub struct MemoryCache {
    map: Mutex<HashMap<u64, FactorizationResult>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.map).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultCache for MemoryCache {
    fn get(&self, n: u64) -> Option<FactorizationResult> {
        lock(&self.map).get(&n).cloned()
    }

    fn put(&self, result: &FactorizationResult) {
        lock(&self.map)
            .entry(result.number())
            .or_insert_with(|| result.clone());
    }
}

// ─── BoundedCache ─────────────────────────────────────────────────────────────
#[derive(Debug, Default)]
struct Bounded {
    map:   HashMap<u64, FactorizationResult>,
    order: VecDeque<u64>,
}

/// Keeps at most `capacity` results, evicting the oldest insert first
#[derive(Debug)]
pub struct BoundedCache {
    capacity: usize,
    inner:    Mutex<Bounded>,
}

impl BoundedCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(Bounded::default()),
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultCache for BoundedCache {
    fn get(&self, n: u64) -> Option<FactorizationResult> {
        lock(&self.inner).map.get(&n).cloned()
    }

    fn put(&self, result: &FactorizationResult) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = lock(&self.inner);
        let n = result.number();
        if inner.map.contains_key(&n) {
            return;
        }

        while inner.map.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.map.remove(&oldest);
                    tracing::debug!("Evicted cached result for {}", oldest);
                }
                None => break,
            }
        }

        inner.order.push_back(n);
        inner.map.insert(n, result.clone());
    }
}

// ─── NoopCache ────────────────────────────────────────────────────────────────
/// Never remembers anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

impl ResultCache for NoopCache {
    fn get(&self, _n: u64) -> Option<FactorizationResult> {
        None
    }

    fn put(&self, _result: &FactorizationResult) {}
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread, time::Duration};

    fn result(n: u64) -> FactorizationResult {
        FactorizationResult::new(n, Vec::new(), Duration::from_millis(n))
    }

    #[test]
    fn test_memory_cache_roundtrip() {
        let c = MemoryCache::new();
        assert!(c.get(7).is_none());
        c.put(&result(7));
        assert_eq!(c.get(7), Some(result(7)));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_memory_cache_keeps_first_insert() {
        // append-only: a later put for the same n is ignored
        let c = MemoryCache::new();
        c.put(&FactorizationResult::new(7, Vec::new(), Duration::from_millis(1)));
        c.put(&FactorizationResult::new(7, Vec::new(), Duration::from_millis(9)));
        assert_eq!(c.get(7).map(|r| r.elapsed()), Some(Duration::from_millis(1)));
    }

    #[test]
    fn test_noop_cache_stores_nothing() {
        let c = NoopCache;
        c.put(&result(11));
        assert!(c.get(11).is_none());
    }

    #[test]
    fn test_bounded_cache_evicts_oldest() {
        let c = BoundedCache::new(2);
        c.put(&result(2));
        c.put(&result(3));
        c.put(&result(5));
        assert_eq!(c.len(), 2);
        assert!(c.get(2).is_none());
        assert!(c.get(3).is_some());
        assert!(c.get(5).is_some());
    }

    #[test]
    fn test_bounded_cache_zero_capacity() {
        let c = BoundedCache::new(0);
        c.put(&result(13));
        assert!(c.is_empty());
    }

    #[test]
    fn test_bounded_cache_duplicate_put_does_not_evict() {
        let c = BoundedCache::new(2);
        c.put(&result(2));
        c.put(&result(3));
        c.put(&result(3));
        assert!(c.get(2).is_some());
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_memory_cache_concurrent_inserts() {
        let c = Arc::new(MemoryCache::new());
        let handles: Vec<_> = (0..8u64)
            .map(|t| {
                let c = Arc::clone(&c);
                thread::spawn(move || {
                    for n in 0..50u64 {
                        c.put(&result(t * 50 + n));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(c.len(), 400);
    }
}
