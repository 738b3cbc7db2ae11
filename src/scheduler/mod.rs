mod jitter;
mod task;

pub use jitter::apply_jitter;
pub use task::{PollTask, TaskHandle};
