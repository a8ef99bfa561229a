use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// A config value that can be stored, loaded and checked.
pub trait StoredConfig: Clone + Default + DeserializeOwned + Serialize + Validate {}

impl<T> StoredConfig for T where T: Clone + Default + DeserializeOwned + Serialize + Validate {}

/// Loads, validates and caches a config value. A missing source yields
/// `TConfig::default()`; invalid content is an error and is never replaced
/// by defaults.
pub struct ConfigManager<TProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: StoredConfig,
    TSerializer: ConfigSerializer<TConfig>,
{
    provider: TProvider,
    serializer: TSerializer,
    cache: Mutex<Option<TConfig>>,
}

impl<TConfig: StoredConfig> ConfigManager<FileContentConfigProvider, TConfig> {
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer)
    }
}

impl<TProvider, TConfig, TSerializer> ConfigManager<TProvider, TConfig, TSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: StoredConfig,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            cache: Mutex::new(None),
        }
    }

    /// Cached value if there is one, otherwise read from the provider.
    pub fn load(&self) -> Result<TConfig, ConfigError> {
        let mut cache = self.lock_cache()?;
        if let Some(config) = cache.as_ref() {
            return Ok(config.clone());
        }

        let config = match self.provider.read_content()? {
            Some(content) => self.serializer.deserialize(&content)?,
            None => TConfig::default(),
        };
        config.validate()?;

        *cache = Some(config.clone());
        Ok(config)
    }

    /// Validates before anything is written; a rejected value leaves both the
    /// stored content and the cache untouched.
    pub fn save(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let content = self.serializer.serialize(config)?;
        self.provider.write_content(&content)?;

        *self.lock_cache()? = Some(config.clone());
        Ok(())
    }

    fn lock_cache(&self) -> Result<MutexGuard<'_, Option<TConfig>>, ConfigError> {
        self.cache.lock().map_err(|_| ConfigError::CachePoisoned)
    }
}
