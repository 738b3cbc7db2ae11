use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AgentConfig {
    pub name: String,
    pub esb: EsbConfig,
    #[serde(default)]
    pub poll: PollConfig,
    pub collector: CollectorConfig,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EsbConfig {
    pub host: String,
    pub port: u16,
    pub instance: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PollConfig {
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
    #[serde(default = "default_jitter")]
    pub jitter_fraction: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CollectorConfig {
    pub url: String,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval(),
            jitter_fraction: default_jitter(),
        }
    }
}

fn default_interval() -> u64 {
    60
}

fn default_jitter() -> f64 {
    0.1
}

fn default_api_port() -> u16 {
    9301
}
