use std::io::ErrorKind;
use std::path::PathBuf;

use super::ConfigError;

/// Where config text lives.
pub trait ConfigContentProvider {
    /// `Ok(None)` when nothing has been stored yet.
    fn read_content(&self) -> Result<Option<String>, ConfigError>;
    fn write_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    fn io_error(&self, err: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.file_path.clone(),
            message: err.to_string(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn read_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn write_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|err| self.io_error(err))
    }
}
