use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Counters the agent exposes about itself, shared between the poll loop
/// and the HTTP API.
#[derive(Debug, Clone)]
pub struct AgentState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    cycles_completed: AtomicU64,
    cycles_failed: AtomicU64,
    metrics_emitted: AtomicU64,
    last_poll_epoch: AtomicU64,
    ready: AtomicBool,
}

impl AgentState {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                cycles_completed: AtomicU64::new(0),
                cycles_failed: AtomicU64::new(0),
                metrics_emitted: AtomicU64::new(0),
                last_poll_epoch: AtomicU64::new(0),
                ready: AtomicBool::new(false),
            }),
        }
    }

    pub fn record_cycle(&self, metrics_emitted: u64) {
        self.inner.cycles_completed.fetch_add(1, Ordering::Relaxed);
        self.inner
            .metrics_emitted
            .fetch_add(metrics_emitted, Ordering::Relaxed);
        let epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        self.inner.last_poll_epoch.store(epoch, Ordering::Relaxed);
    }

    pub fn increment_cycles_failed(&self) {
        self.inner.cycles_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cycles_completed(&self) -> u64 {
        self.inner.cycles_completed.load(Ordering::Relaxed)
    }

    pub fn cycles_failed(&self) -> u64 {
        self.inner.cycles_failed.load(Ordering::Relaxed)
    }

    pub fn metrics_emitted(&self) -> u64 {
        self.inner.metrics_emitted.load(Ordering::Relaxed)
    }

    pub fn last_poll_epoch(&self) -> u64 {
        self.inner.last_poll_epoch.load(Ordering::Relaxed)
    }

    pub fn set_ready(&self, v: bool) {
        self.inner.ready.store(v, Ordering::Relaxed);
    }

    pub fn is_ready(&self) -> bool {
        self.inner.ready.load(Ordering::Relaxed)
    }
}

impl Default for AgentState {
    fn default() -> Self {
        Self::new()
    }
}
