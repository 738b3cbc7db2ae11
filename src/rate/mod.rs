mod registry;
mod stream;
mod tracker;

pub use registry::StreamRegistry;
pub use stream::{CounterKind, StreamKey};
pub use tracker::RateTracker;
