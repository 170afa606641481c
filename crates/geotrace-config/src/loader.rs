//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use geotrace_core::GeotraceError;
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader.
///
/// Configuration is loaded from multiple sources in order:
/// 1. `config/default.toml` - default values
/// 2. `config/{environment}.toml` - environment-specific overrides
/// 3. Environment variables with `GEOTRACE_` prefix
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the given directory.
    pub fn new(config_dir: impl AsRef<str>) -> Result<Self, GeotraceError> {
        let config = Self::load_config(config_dir.as_ref())?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, GeotraceError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, GeotraceError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("GEOTRACE_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("GEOTRACE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| GeotraceError::Configuration(format!("Failed to build config: {}", e)))?;

        config
            .try_deserialize::<AppConfig>()
            .map_err(|e| GeotraceError::Configuration(format!("Failed to parse config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_missing_directory_uses_defaults() {
        let loader = ConfigLoader::new("/nonexistent/config/dir").unwrap();
        let config = loader.get();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nhost = \"localhost\"\nport = 3000\nrequest_timeout_secs = 30\ncors_enabled = true\ncors_origins = [\"*\"]"
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get();
        assert_eq!(config.server.rest_addr(), "localhost:3000");
    }
}
