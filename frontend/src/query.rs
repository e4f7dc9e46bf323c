use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use fit_tracker_lib::workout_record::WorkoutRecord;

use crate::api::ApiError;

/// Cache key of the full workout history request.
pub const ALL_WORKOUTS: &str = "all_workouts";

/// How long a cached result stays fresh before the next request refetches.
pub const STALE_AFTER_MS: f64 = 30_000.0;

struct CacheEntry {
    data: Vec<WorkoutRecord>,
    fetched_at: f64,
    stale_after: f64,
}

/// Keyed request cache: key is the request descriptor, value the decoded
/// payload plus its fetch time and freshness window.
#[derive(Default)]
pub struct QueryCache {
    entries: RefCell<HashMap<&'static str, CacheEntry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Serves `key` from cache while fresh, otherwise awaits `fetcher`
    /// and keeps its payload. Errors are handed back and never cached.
    pub async fn get_or_fetch<Fetcher, Fut>(
        &self,
        key: &'static str,
        fetcher: Fetcher,
    ) -> Result<Vec<WorkoutRecord>, ApiError>
    where
        Fetcher: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<WorkoutRecord>, ApiError>>,
    {
        if let Some(data) = self.get_fresh(key, now_ms()) {
            return Ok(data);
        }

        let data = fetcher().await?;
        self.insert(key, data.clone(), now_ms());
        Ok(data)
    }

    /// Drops `key` so the next request goes back to the network.
    pub fn invalidate(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    pub fn insert(&self, key: &'static str, data: Vec<WorkoutRecord>, fetched_at_ms: f64) {
        self.entries.borrow_mut().insert(
            key,
            CacheEntry {
                data,
                fetched_at: fetched_at_ms,
                stale_after: STALE_AFTER_MS,
            },
        );
    }

    pub fn get_fresh(&self, key: &str, now_ms: f64) -> Option<Vec<WorkoutRecord>> {
        let entries = self.entries.borrow();
        let entry = entries.get(key)?;
        if now_ms - entry.fetched_at < entry.stale_after {
            Some(entry.data.clone())
        } else {
            None
        }
    }
}

thread_local! {
    static QUERY_CACHE: Rc<QueryCache> = Rc::new(QueryCache::new());
}

/// The app-wide cache instance, created at application start.
pub fn query_cache() -> Rc<QueryCache> {
    QUERY_CACHE.with(Rc::clone)
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn records() -> Vec<WorkoutRecord> {
        vec![WorkoutRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            80.0,
        )]
    }

    #[test]
    fn fresh_entry_skips_the_fetcher() {
        let cache = QueryCache::new();
        cache.insert(ALL_WORKOUTS, records(), now_ms());
        let calls = Cell::new(0);

        let result = block_on(cache.get_or_fetch(ALL_WORKOUTS, || {
            calls.set(calls.get() + 1);
            async { Ok(Vec::new()) }
        }));

        assert_eq!(result.unwrap(), records());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn stale_entry_refetches() {
        let cache = QueryCache::new();
        cache.insert(ALL_WORKOUTS, Vec::new(), now_ms() - STALE_AFTER_MS - 1.0);
        let calls = Cell::new(0);

        let result = block_on(cache.get_or_fetch(ALL_WORKOUTS, || {
            calls.set(calls.get() + 1);
            async { Ok(records()) }
        }));

        assert_eq!(result.unwrap(), records());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn entry_is_stale_at_exactly_the_window_edge() {
        let cache = QueryCache::new();
        let now = 1_000_000.0;
        cache.insert(ALL_WORKOUTS, records(), now - STALE_AFTER_MS);

        assert!(cache.get_fresh(ALL_WORKOUTS, now).is_none());
        assert!(cache.get_fresh(ALL_WORKOUTS, now - 1.0).is_some());
    }

    #[test]
    fn invalidate_forces_a_refetch() {
        let cache = QueryCache::new();
        cache.insert(ALL_WORKOUTS, Vec::new(), now_ms());
        cache.invalidate(ALL_WORKOUTS);
        let calls = Cell::new(0);

        let result = block_on(cache.get_or_fetch(ALL_WORKOUTS, || {
            calls.set(calls.get() + 1);
            async { Ok(records()) }
        }));

        assert_eq!(result.unwrap(), records());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn errors_are_returned_and_not_cached() {
        let cache = QueryCache::new();
        let calls = Cell::new(0);

        for _ in 0..2 {
            let result = block_on(cache.get_or_fetch(ALL_WORKOUTS, || {
                calls.set(calls.get() + 1);
                async { Err(ApiError::Status(500)) }
            }));
            assert_eq!(result.unwrap_err(), ApiError::Status(500));
        }

        assert_eq!(calls.get(), 2);
        assert!(cache.get_fresh(ALL_WORKOUTS, now_ms()).is_none());
    }

    #[test]
    fn successful_fetch_is_cached_for_the_next_request() {
        let cache = QueryCache::new();
        let calls = Cell::new(0);

        for _ in 0..2 {
            let result = block_on(cache.get_or_fetch(ALL_WORKOUTS, || {
                calls.set(calls.get() + 1);
                async { Ok(records()) }
            }));
            assert_eq!(result.unwrap(), records());
        }

        assert_eq!(calls.get(), 1);
    }
}
