//! Bounded memo of analysis reports.
//!
//! Keys are the exact `(criteria, records)` pair, so any change to either
//! recomputes. Eviction is first-in first-out.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::EngineResult;
use crate::models::{FilterCriteria, Record};

use super::pipeline::{AnalysisReport, analyze};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    criteria: FilterCriteria,
    records: Vec<Record>,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<Arc<CacheKey>, Arc<AnalysisReport>>,
    order: VecDeque<Arc<CacheKey>>,
}

/// Thread-safe FIFO memo for [`analyze`].
///
/// A capacity of zero disables caching.
#[derive(Debug)]
pub struct AnalysisCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

impl AnalysisCache {
    /// Creates a cache holding at most `capacity` reports.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Maximum number of reports kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of reports currently held.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached report.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.order.clear();
    }

    /// Returns the cached report for this input, computing it on a miss.
    ///
    /// Errors are never cached.
    pub fn get_or_compute(
        &self,
        records: &[Record],
        criteria: &FilterCriteria,
    ) -> EngineResult<Arc<AnalysisReport>> {
        if self.capacity == 0 {
            return analyze(records, criteria).map(Arc::new);
        }

        let key = Arc::new(CacheKey {
            criteria: criteria.clone(),
            records: records.to_vec(),
        });

        if let Some(report) = self.lock().entries.get(&key) {
            return Ok(Arc::clone(report));
        }

        // Computed outside the lock; a concurrent miss on the same key just
        // overwrites with an equal report.
        let report = Arc::new(analyze(records, criteria)?);

        let mut inner = self.lock();
        if !inner.entries.contains_key(&key) {
            while inner.order.len() >= self.capacity {
                match inner.order.pop_front() {
                    Some(oldest) => {
                        inner.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
            inner.order.push_back(Arc::clone(&key));
        }
        inner.entries.insert(key, Arc::clone(&report));

        Ok(report)
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
