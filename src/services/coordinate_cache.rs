//! TTL cache for derived or looked-up positions

use std::collections::HashMap;
use std::time::Duration;

use tracing::trace;

use crate::models::position::Position3;

use super::clock::{Clock, SystemClock};

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    value: Position3,
    timestamp: Duration,
}

/// Positions keyed by `type:id`, expiring `max_age` after they were stored.
///
/// Expired entries are dropped lazily by [`get`](Self::get) and eagerly by
/// [`cleanup`](Self::cleanup). Values go in and come out by copy, so callers
/// can never mutate a cached coordinate through a returned value.
pub struct CoordinateCache<C: Clock = SystemClock> {
    entries: HashMap<String, CacheEntry>,
    max_age: Duration,
    clock: C,
}

impl CoordinateCache<SystemClock> {
    pub fn new(max_age: Duration) -> Self {
        Self::with_clock(max_age, SystemClock::new())
    }
}

impl<C: Clock> CoordinateCache<C> {
    pub fn with_clock(max_age: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            max_age,
            clock,
        }
    }

    fn key(id: &str, kind: &str) -> String {
        format!("{}:{}", kind, id)
    }

    fn is_expired(&self, entry: &CacheEntry, now: Duration) -> bool {
        now.saturating_sub(entry.timestamp) > self.max_age
    }

    pub fn set(&mut self, id: &str, kind: &str, coord: Position3) {
        let entry = CacheEntry {
            value: coord,
            timestamp: self.clock.now(),
        };
        self.entries.insert(Self::key(id, kind), entry);
    }

    /// The cached value, or `None` if absent or older than `max_age`.
    pub fn get(&mut self, id: &str, kind: &str) -> Option<Position3> {
        let key = Self::key(id, kind);
        let entry = *self.entries.get(&key)?;
        if self.is_expired(&entry, self.clock.now()) {
            trace!(key = %key, "evicting expired coordinate");
            self.entries.remove(&key);
            return None;
        }
        Some(entry.value)
    }

    pub fn remove(&mut self, id: &str, kind: &str) -> Option<Position3> {
        self.entries.remove(&Self::key(id, kind)).map(|e| e.value)
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        let max_age = self.max_age;
        self.entries
            .retain(|_, entry| now.saturating_sub(entry.timestamp) <= max_age);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::ManualClock;

    fn cache(max_age_ms: u64) -> (CoordinateCache<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let cache = CoordinateCache::with_clock(Duration::from_millis(max_age_ms), clock.clone());
        (cache, clock)
    }

    #[test]
    fn get_returns_stored_value() {
        let (mut cache, _clock) = cache(1000);
        cache.set("7", "ship", Position3::new(1.0, 2.0, 50.0));
        assert_eq!(cache.get("7", "ship"), Some(Position3::new(1.0, 2.0, 50.0)));
    }

    #[test]
    fn type_is_part_of_the_key() {
        let (mut cache, _clock) = cache(1000);
        cache.set("7", "ship", Position3::new(1.0, 2.0, 50.0));
        assert_eq!(cache.get("7", "station"), None);
    }

    #[test]
    fn returned_value_is_a_copy() {
        let (mut cache, _clock) = cache(1000);
        cache.set("a", "ship", Position3::new(1.0, 1.0, 50.0));
        let mut copy = cache.get("a", "ship").unwrap();
        copy.x = 999.0;
        assert_eq!(cache.get("a", "ship").unwrap().x, 1.0);
    }

    #[test]
    fn expires_strictly_after_max_age() {
        let (mut cache, clock) = cache(1000);
        cache.set("a", "ship", Position3::default());

        clock.advance(Duration::from_millis(1000));
        assert!(cache.get("a", "ship").is_some());

        clock.advance(Duration::from_millis(1));
        assert!(cache.get("a", "ship").is_none());
        assert!(cache.is_empty(), "lazy eviction should remove the entry");
    }

    #[test]
    fn set_refreshes_timestamp() {
        let (mut cache, clock) = cache(100);
        cache.set("a", "ship", Position3::default());
        clock.advance(Duration::from_millis(80));
        cache.set("a", "ship", Position3::new(5.0, 5.0, 50.0));
        clock.advance(Duration::from_millis(80));
        assert_eq!(cache.get("a", "ship"), Some(Position3::new(5.0, 5.0, 50.0)));
    }

    #[test]
    fn cleanup_sweeps_only_expired() {
        let (mut cache, clock) = cache(100);
        cache.set("old", "ship", Position3::default());
        clock.advance(Duration::from_millis(60));
        cache.set("new", "ship", Position3::default());
        clock.advance(Duration::from_millis(60));

        assert_eq!(cache.cleanup(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("new", "ship").is_some());
    }

    #[test]
    fn remove_and_clear() {
        let (mut cache, _clock) = cache(100);
        cache.set("a", "ship", Position3::new(3.0, 4.0, 50.0));
        cache.set("b", "ship", Position3::default());
        assert_eq!(cache.remove("a", "ship"), Some(Position3::new(3.0, 4.0, 50.0)));
        cache.clear();
        assert!(cache.is_empty());
    }
}
