pub const UNIT_MESSAGES_PER_SECOND: &str = "Messages/Second";

/// A named rate value produced by one poll cycle.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MetricSample {
    pub name: String,
    pub unit: String,
    pub value: f64,
}

/// Destination for the metrics of one cycle. Each report is independent;
/// the sink must tolerate new metric names appearing at any time.
pub trait MetricSink {
    fn report(&mut self, name: &str, unit: &str, value: f64);
}

/// Collects one cycle's samples in emission order so they can be shipped
/// to the exporter task as a single batch.
pub struct SampleBuffer {
    samples: Vec<MetricSample>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    pub fn into_samples(self) -> Vec<MetricSample> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSink for SampleBuffer {
    fn report(&mut self, name: &str, unit: &str, value: f64) {
        self.samples.push(MetricSample {
            name: name.to_string(),
            unit: unit.to_string(),
            value,
        });
    }
}
