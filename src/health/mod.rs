mod client;
mod types;

pub use client::{HttpSnapshotSource, SnapshotError, SnapshotSource};
pub use types::EndpointHealth;
