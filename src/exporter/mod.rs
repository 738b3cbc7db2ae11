mod http;
mod sink;

pub use http::{ExportError, HttpExporter};
pub use sink::{MetricSample, MetricSink, SampleBuffer, UNIT_MESSAGES_PER_SECOND};
