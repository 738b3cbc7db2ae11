mod health;
mod metrics;
mod server;
mod state;

pub use health::{healthz, ready};
pub use metrics::metrics;
pub use server::{router, serve};
pub use state::AgentState;
