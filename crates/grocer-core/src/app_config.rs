use std::path::PathBuf;

use crate::catalog::{load_catalog, Catalog};
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub lookup_timeout_secs: u64,
    pub user_agent: String,
    /// Location used for lookups until the user picks another one.
    pub default_location: String,
    /// Alternate YAML catalog; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Returns the Gemini API key, or an error naming the env var to set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when no key was configured.
    pub fn require_gemini_api_key(&self) -> Result<&str, ConfigError> {
        self.gemini_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))
    }

    /// Resolves the catalog this process should serve.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `catalog_path` is set and the file cannot be
    /// read, parsed, or fails validation.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("lookup_timeout_secs", &self.lookup_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("default_location", &self.default_location)
            .field("catalog_path", &self.catalog_path)
            .finish()
    }
}
