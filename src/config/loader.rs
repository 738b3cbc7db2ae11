use std::path::Path;

use super::schema::AgentConfig;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Validation(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

pub fn load_from_file(path: &Path) -> Result<AgentConfig, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

pub fn load_from_str(yaml: &str) -> Result<AgentConfig, LoadError> {
    let cfg: AgentConfig = serde_yaml::from_str(yaml)?;
    validate(&cfg)?;
    Ok(cfg)
}

// The identity fields are fatal to get wrong: the agent must refuse to
// start rather than poll the wrong ESB or report under an empty name.
fn validate(cfg: &AgentConfig) -> Result<(), LoadError> {
    if cfg.name.is_empty() {
        return Err(LoadError::Validation("name must not be empty".into()));
    }
    if cfg.esb.host.is_empty() {
        return Err(LoadError::Validation("esb.host must not be empty".into()));
    }
    if cfg.esb.port == 0 {
        return Err(LoadError::Validation("esb.port must be > 0".into()));
    }
    if cfg.esb.instance.is_empty() {
        return Err(LoadError::Validation(
            "esb.instance must not be empty".into(),
        ));
    }
    if cfg.poll.interval_seconds == 0 {
        return Err(LoadError::Validation(
            "poll.interval_seconds must be > 0".into(),
        ));
    }
    if cfg.collector.url.is_empty() {
        return Err(LoadError::Validation(
            "collector.url must not be empty".into(),
        ));
    }
    Ok(())
}
