mod config_content_provider;
mod config_error;
mod config_manager;
mod config_serializer;
mod engine_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_error::ConfigError;
pub use config_manager::{ConfigManager, StoredConfig};
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use engine_config::{
    AppConfig, DEFAULT_CONFIG_FILE, EngineConfig, SessionConfig, get_config_manager,
};
pub use validate::Validate;
