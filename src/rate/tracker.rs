use std::time::Instant;

/// Converts a cumulative counter into a per-second rate by remembering the
/// previous observation. The first observation establishes the baseline and
/// yields 0; a reading taken at or before the stored timestamp yields 0
/// without touching the baseline.
pub struct RateTracker {
    last_value: f64,
    last_at: Option<Instant>,
}

impl RateTracker {
    pub fn new() -> Self {
        Self {
            last_value: 0.0,
            last_at: None,
        }
    }

    pub fn process(&mut self, value: f64, now: Instant) -> f64 {
        let Some(prev) = self.last_at else {
            self.last_value = value;
            self.last_at = Some(now);
            return 0.0;
        };

        let elapsed = match now.checked_duration_since(prev) {
            Some(d) => d.as_secs_f64(),
            None => return 0.0,
        };
        if elapsed <= 0.0 {
            return 0.0;
        }

        let rate = (value - self.last_value) / elapsed;
        self.last_value = value;
        self.last_at = Some(now);
        rate
    }
}

impl Default for RateTracker {
    fn default() -> Self {
        Self::new()
    }
}
