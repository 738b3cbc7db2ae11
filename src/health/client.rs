use std::future::Future;

use super::types::EndpointHealth;

#[derive(Debug)]
pub enum SnapshotError {
    Transport(String),
    Status(u16),
    Decode(String),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::Status(code) => write!(f, "unexpected status {code}"),
            Self::Decode(e) => write!(f, "decode: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Produces one decoded endpoint-health snapshot per call. The poll cycle
/// is generic over this so tests can script responses.
pub trait SnapshotSource {
    fn fetch(&self)
        -> impl Future<Output = Result<Vec<EndpointHealth>, SnapshotError>> + Send;
}

/// Fetches endpoint health from the Neuron ESB management API.
pub struct HttpSnapshotSource {
    url: String,
    http: reqwest::Client,
}

impl HttpSnapshotSource {
    pub fn new(host: &str, port: u16, instance: &str) -> Self {
        Self {
            url: format!("http://{host}:{port}/neuronesb/api/v1/endpointhealth/{instance}"),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SnapshotSource for HttpSnapshotSource {
    fn fetch(
        &self,
    ) -> impl Future<Output = Result<Vec<EndpointHealth>, SnapshotError>> + Send {
        async move {
            let resp = self
                .http
                .get(&self.url)
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| SnapshotError::Transport(e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(SnapshotError::Status(status.as_u16()));
            }

            resp.json::<Vec<EndpointHealth>>()
                .await
                .map_err(|e| SnapshotError::Decode(e.to_string()))
        }
    }
}
