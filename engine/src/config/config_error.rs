use std::fmt;
use std::path::PathBuf;

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io { path: PathBuf, message: String },
    Yaml { line: Option<usize>, message: String },
    Invalid(String),
    CachePoisoned,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Config file {}: {}", path.display(), message)
            }
            ConfigError::Yaml {
                line: Some(line),
                message,
            } => write!(f, "Config YAML error at line {}: {}", line, message),
            ConfigError::Yaml { line: None, message } => {
                write!(f, "Config YAML error: {}", message)
            }
            ConfigError::Invalid(message) => write!(f, "Config validation error: {}", message),
            ConfigError::CachePoisoned => write!(f, "Config cache lock poisoned"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<EngineError> for ConfigError {
    fn from(e: EngineError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ConfigError::Yaml {
            line: e.location().map(|location| location.line()),
            message: e.to_string(),
        }
    }
}

impl From<ConfigError> for String {
    fn from(e: ConfigError) -> Self {
        e.to_string()
    }
}
