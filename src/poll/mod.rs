mod cycle;

pub use cycle::{CycleOutcome, PollCycle};
