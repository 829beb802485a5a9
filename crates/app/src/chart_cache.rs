//! Latest chart series, shared between the refresh and render steps.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use sensordash_domain::reading::ChartPoint;

/// Single-writer, multi-reader cell holding the most recent chart points.
///
/// [`replace`](Self::replace) swaps the whole series at once, so a
/// [`snapshot`](Self::snapshot) is always either the previous or the new
/// series, never a mix.
#[derive(Debug, Default)]
pub struct ChartCache {
    points: RwLock<Arc<[ChartPoint]>>,
    generation: AtomicU64,
}

impl ChartCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached series and return the new generation number.
    pub fn replace(&self, points: Vec<ChartPoint>) -> u64 {
        let points: Arc<[ChartPoint]> = points.into();
        *self.points.write().unwrap_or_else(PoisonError::into_inner) = points;
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Cheap, immutable view of the current series.
    #[must_use]
    pub fn snapshot(&self) -> Arc<[ChartPoint]> {
        Arc::clone(&self.points.read().unwrap_or_else(PoisonError::into_inner))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of replacements so far. Zero means nothing was ever fetched.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}
