use super::sink::MetricSample;

#[derive(Debug)]
pub enum ExportError {
    Serialize(String),
    Transport(String),
    Rejected(u16),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(e) => write!(f, "serialize: {e}"),
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::Rejected(code) => write!(f, "rejected with status {code}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Ships one cycle's samples to the collector as a JSON array. Delivery is
/// fire-and-forget per cycle; a failed push drops that cycle's samples.
pub struct HttpExporter {
    url: String,
    agent_name: String,
    http: reqwest::Client,
}

#[derive(serde::Serialize)]
struct ExportPayload<'a> {
    agent: &'a str,
    metrics: &'a [MetricSample],
}

impl HttpExporter {
    pub fn new(url: &str, agent_name: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            agent_name,
            http: reqwest::Client::new(),
        }
    }

    pub async fn push(&self, samples: &[MetricSample]) -> Result<(), ExportError> {
        let body = serde_json::to_vec(&ExportPayload {
            agent: &self.agent_name,
            metrics: samples,
        })
        .map_err(|e| ExportError::Serialize(e.to_string()))?;

        let resp = self
            .http
            .post(&self.url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ExportError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ExportError::Rejected(status))
        }
    }
}
