use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Configuration that can be loaded from and saved to a file.
pub trait Persistable<T> {
    /// Returns the default configuration path.
    fn default_path() -> PathBuf;

    /// Loads configuration from the file.
    fn load(path: &Path) -> impl Future<Output = Result<T, ConfigError>> + Send;

    /// Saves configuration to the file.
    fn save(&self, path: &Path) -> impl Future<Output = Result<(), ConfigError>> + Send;
}

/// Loads configuration from `path`, falling back to the default one.\
/// **Note** that the default configuration is written to disk only when the file could not be read,
/// a file that cannot be deserialized is left untouched.
pub async fn load_or_create_default<T: Persistable<T> + Default>(path: &Path) -> Result<T, ConfigError> {
    match T::load(path).await {
        Ok(configuration) => Ok(configuration),
        Err(ConfigError::SerializationError(error)) => {
            tracing::error!("Cannot deserialize config: {}", error);
            Ok(T::default())
        },
        Err(error) => {
            tracing::warn!("Cannot load config: {}, creating the default one", error);
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let configuration = T::default();
            configuration.save(path).await?;
            Ok(configuration)
        },
    }
}
