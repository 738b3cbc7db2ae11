use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::jitter::apply_jitter;
use crate::api::AgentState;
use crate::exporter::{MetricSample, SampleBuffer};
use crate::health::SnapshotSource;
use crate::poll::PollCycle;

/// Drives the poll loop: one `run_once` at a time, a jittered sleep
/// between cycles, samples shipped to the exporter task over the channel.
pub struct PollTask<S> {
    pub interval: Duration,
    pub jitter_fraction: f64,
    pub source: S,
}

pub struct TaskHandle {
    handle: JoinHandle<()>,
}

impl TaskHandle {
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl<S: SnapshotSource + Send + Sync + 'static> PollTask<S> {
    pub fn spawn(
        self,
        mut cycle: PollCycle,
        tx: mpsc::Sender<Vec<MetricSample>>,
        state: AgentState,
    ) -> TaskHandle {
        let handle = tokio::spawn(async move {
            loop {
                let mut buf = SampleBuffer::new();
                match cycle.run_once(&self.source, &mut buf, Instant::now()).await {
                    Ok(outcome) => {
                        state.record_cycle(outcome.metrics_emitted as u64);
                        state.set_ready(true);
                        tracing::debug!(
                            metrics = outcome.metrics_emitted,
                            endpoints = outcome.endpoints_seen,
                            streams = cycle.stream_count(),
                            "cycle complete"
                        );
                        if !buf.is_empty() {
                            let _ = tx.send(buf.into_samples()).await;
                        }
                    }
                    Err(e) => {
                        state.increment_cycles_failed();
                        tracing::warn!(error = %e, "snapshot unavailable, skipping cycle");
                    }
                }
                tokio::time::sleep(apply_jitter(self.interval, self.jitter_fraction)).await;
            }
        });
        TaskHandle { handle }
    }
}
