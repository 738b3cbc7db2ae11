use serde::Deserialize;

use crate::rate::CounterKind;

/// One endpoint's health entry as returned by the Neuron ESB API. Counters
/// are cumulative since the ESB started; a field absent from the payload
/// reads as 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointHealth {
    pub name: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub heartbeats: f64,
    #[serde(default)]
    pub errors: f64,
    #[serde(default)]
    pub warnings: f64,
    #[serde(default)]
    pub messages_processed: f64,
    #[serde(default)]
    pub message_rate: f64,
}

impl EndpointHealth {
    pub fn counter(&self, kind: CounterKind) -> f64 {
        match kind {
            CounterKind::Heartbeats => self.heartbeats,
            CounterKind::Errors => self.errors,
            CounterKind::Warnings => self.warnings,
            CounterKind::MessagesProcessed => self.messages_processed,
        }
    }
}
