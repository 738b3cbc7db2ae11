use std::time::Instant;

use crate::exporter::{MetricSink, UNIT_MESSAGES_PER_SECOND};
use crate::health::{EndpointHealth, SnapshotError, SnapshotSource};
use crate::rate::{CounterKind, StreamKey, StreamRegistry};

/// What one completed cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    pub metrics_emitted: usize,
    pub endpoints_seen: usize,
}

/// Runs one fetch-compute-report pass per invocation. The registry it owns
/// is the only state carried across cycles; a failed fetch aborts the
/// cycle before anything is emitted and leaves every tracker untouched.
pub struct PollCycle {
    registry: StreamRegistry,
}

impl PollCycle {
    pub fn new() -> Self {
        Self {
            registry: StreamRegistry::new(),
        }
    }

    pub async fn run_once<S: SnapshotSource>(
        &mut self,
        source: &S,
        sink: &mut impl MetricSink,
        now: Instant,
    ) -> Result<CycleOutcome, SnapshotError> {
        let records = source.fetch().await?;
        tracing::debug!(endpoints = records.len(), "snapshot received");

        let mut emitted = 0;

        for kind in CounterKind::ALL {
            let sum: f64 = records.iter().map(|r| r.counter(kind)).sum();
            let rate = self
                .registry
                .get_or_create(StreamKey::summary(kind))
                .process(sum, now);
            sink.report(
                &format!("Summary/{}", kind.label()),
                UNIT_MESSAGES_PER_SECOND,
                rate,
            );
            emitted += 1;
        }

        for record in &records {
            emitted += self.report_endpoint(record, &mut *sink, now);
        }

        Ok(CycleOutcome {
            metrics_emitted: emitted,
            endpoints_seen: records.len(),
        })
    }

    fn report_endpoint(
        &mut self,
        record: &EndpointHealth,
        sink: &mut impl MetricSink,
        now: Instant,
    ) -> usize {
        let mut emitted = 0;
        for kind in CounterKind::ALL {
            let rate = self
                .registry
                .get_or_create(StreamKey::endpoint(&record.name, kind))
                .process(record.counter(kind), now);
            sink.report(
                &format!("Queues/{}/{}", kind.label(), record.name),
                UNIT_MESSAGES_PER_SECOND,
                rate,
            );
            emitted += 1;
        }
        emitted
    }

    pub fn stream_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for PollCycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::SampleBuffer;
    use std::future::Future;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Replays a scripted sequence of snapshot results, one per fetch.
    struct ScriptedSource {
        responses: Mutex<Vec<Result<Vec<EndpointHealth>, SnapshotError>>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<Vec<EndpointHealth>, SnapshotError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    impl SnapshotSource for ScriptedSource {
        fn fetch(
            &self,
        ) -> impl Future<Output = Result<Vec<EndpointHealth>, SnapshotError>> + Send {
            let next = self.responses.lock().unwrap().remove(0);
            async move { next }
        }
    }

    fn record(name: &str, heartbeats: f64, processed: f64) -> EndpointHealth {
        EndpointHealth {
            name: name.into(),
            hostname: "esb01".into(),
            heartbeats,
            errors: 0.0,
            warnings: 0.0,
            messages_processed: processed,
            message_rate: 0.0,
        }
    }

    fn value_of(samples: &[crate::exporter::MetricSample], name: &str) -> f64 {
        samples
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("missing metric {name}"))
            .value
    }

    #[tokio::test]
    async fn empty_snapshot_emits_four_summary_zeros() {
        let source = ScriptedSource::new(vec![Ok(vec![])]);
        let mut cycle = PollCycle::new();
        let mut buf = SampleBuffer::new();

        let outcome = cycle
            .run_once(&source, &mut buf, Instant::now())
            .await
            .unwrap();

        assert_eq!(outcome.metrics_emitted, 4);
        assert_eq!(outcome.endpoints_seen, 0);

        let samples = buf.into_samples();
        let names: Vec<_> = samples.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Summary/Heartbeats",
                "Summary/Errors",
                "Summary/Warnings",
                "Summary/MessagesProcessed"
            ]
        );
        assert!(samples.iter().all(|s| s.value == 0.0));
        assert!(samples.iter().all(|s| s.unit == "Messages/Second"));
    }

    #[tokio::test]
    async fn second_cycle_reports_per_second_rates() {
        let source = ScriptedSource::new(vec![
            Ok(vec![record("A", 10.0, 5.0)]),
            Ok(vec![record("A", 70.0, 35.0)]),
        ]);
        let mut cycle = PollCycle::new();
        let base = Instant::now();

        let mut first = SampleBuffer::new();
        cycle.run_once(&source, &mut first, base).await.unwrap();
        assert!(first.into_samples().iter().all(|s| s.value == 0.0));

        let mut second = SampleBuffer::new();
        cycle
            .run_once(&source, &mut second, base + Duration::from_secs(60))
            .await
            .unwrap();
        let samples = second.into_samples();

        assert!((value_of(&samples, "Summary/Heartbeats") - 1.0).abs() < 1e-9);
        assert!((value_of(&samples, "Queues/Heartbeats/A") - 1.0).abs() < 1e-9);
        assert!((value_of(&samples, "Summary/MessagesProcessed") - 0.5).abs() < 1e-9);
        assert!((value_of(&samples, "Queues/MessagesProcessed/A") - 0.5).abs() < 1e-9);
        assert_eq!(value_of(&samples, "Summary/Errors"), 0.0);
        assert_eq!(value_of(&samples, "Summary/Warnings"), 0.0);
        assert_eq!(value_of(&samples, "Queues/Errors/A"), 0.0);
        assert_eq!(value_of(&samples, "Queues/Warnings/A"), 0.0);
    }

    #[tokio::test]
    async fn new_endpoint_starts_at_zero_then_rates() {
        let source = ScriptedSource::new(vec![
            Ok(vec![record("A", 10.0, 0.0)]),
            Ok(vec![record("A", 20.0, 0.0), record("B", 100.0, 0.0)]),
            Ok(vec![record("A", 30.0, 0.0), record("B", 160.0, 0.0)]),
        ]);
        let mut cycle = PollCycle::new();
        let base = Instant::now();

        let mut buf = SampleBuffer::new();
        cycle.run_once(&source, &mut buf, base).await.unwrap();

        let mut buf = SampleBuffer::new();
        cycle
            .run_once(&source, &mut buf, base + Duration::from_secs(60))
            .await
            .unwrap();
        let samples = buf.into_samples();
        // B is new this cycle: all four of its series report 0.
        assert_eq!(value_of(&samples, "Queues/Heartbeats/B"), 0.0);
        assert_eq!(value_of(&samples, "Queues/MessagesProcessed/B"), 0.0);

        let mut buf = SampleBuffer::new();
        cycle
            .run_once(&source, &mut buf, base + Duration::from_secs(120))
            .await
            .unwrap();
        let samples = buf.into_samples();
        assert!((value_of(&samples, "Queues/Heartbeats/B") - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn failed_cycle_emits_nothing_and_gap_is_absorbed() {
        let source = ScriptedSource::new(vec![
            Ok(vec![record("A", 0.0, 0.0)]),
            Err(SnapshotError::Status(502)),
            Ok(vec![record("A", 120.0, 0.0)]),
        ]);
        let mut cycle = PollCycle::new();
        let base = Instant::now();

        let mut buf = SampleBuffer::new();
        cycle.run_once(&source, &mut buf, base).await.unwrap();

        let mut buf = SampleBuffer::new();
        let err = cycle
            .run_once(&source, &mut buf, base + Duration::from_secs(60))
            .await
            .unwrap_err();
        assert!(matches!(err, SnapshotError::Status(502)));
        assert!(buf.is_empty());

        // Cycle 3 rates against cycle 1's baseline over 120 elapsed seconds.
        let mut buf = SampleBuffer::new();
        cycle
            .run_once(&source, &mut buf, base + Duration::from_secs(120))
            .await
            .unwrap();
        let samples = buf.into_samples();
        assert!((value_of(&samples, "Queues/Heartbeats/A") - 1.0).abs() < 1e-9);
        assert!((value_of(&samples, "Summary/Heartbeats") - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn registry_grows_with_new_endpoints_only() {
        let source = ScriptedSource::new(vec![
            Ok(vec![record("A", 1.0, 1.0)]),
            Ok(vec![record("A", 2.0, 2.0)]),
        ]);
        let mut cycle = PollCycle::new();
        let base = Instant::now();

        let mut buf = SampleBuffer::new();
        cycle.run_once(&source, &mut buf, base).await.unwrap();
        // 4 summary streams + 4 for endpoint A.
        assert_eq!(cycle.stream_count(), 8);

        let mut buf = SampleBuffer::new();
        cycle
            .run_once(&source, &mut buf, base + Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(cycle.stream_count(), 8);
    }
}
