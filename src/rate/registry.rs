use std::collections::HashMap;

use super::stream::StreamKey;
use super::tracker::RateTracker;

/// Owns one tracker per stream, created lazily the first time a key is
/// seen. Entries are never removed; a stream that stops appearing in
/// snapshots simply stops being updated.
pub struct StreamRegistry {
    trackers: HashMap<StreamKey, RateTracker>,
}

impl StreamRegistry {
    pub fn new() -> Self {
        Self {
            trackers: HashMap::new(),
        }
    }

    pub fn get_or_create(&mut self, key: StreamKey) -> &mut RateTracker {
        self.trackers.entry(key).or_default()
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}

impl Default for StreamRegistry {
    fn default() -> Self {
        Self::new()
    }
}
