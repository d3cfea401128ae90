use std::path::PathBuf;

use crate::error::ApiError;

/// API key for the catalog API.
#[derive(Debug, Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Load the API key from the environment or the config file.
    ///
    /// Priority: `RAWG_API_KEY` env var > config file.
    pub fn load() -> Result<Self, ApiError> {
        std::env::var("RAWG_API_KEY")
            .ok()
            .or_else(|| load_config_file().and_then(|c| c.api_key))
            .map(Self)
            .ok_or_else(|| {
                ApiError::Config(
                    "Missing API key. Set the RAWG_API_KEY env var or add to the config file"
                        .to_string(),
                )
            })
    }
}

/// Where the API key's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// TOML config file format.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    rawg: Option<RawgConfig>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct RawgConfig {
    api_key: Option<String>,
}

/// Return the path to the credentials config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gamedex").join("credentials.toml"))
}

/// Save the API key to the config file, creating parent directories as
/// needed. Returns the path the file was written to.
pub fn save_to_file(key: &ApiKey) -> Result<PathBuf, ApiError> {
    let path = config_path()
        .ok_or_else(|| ApiError::Config("Could not determine config directory".to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = ConfigFile {
        rawg: Some(RawgConfig {
            api_key: Some(key.value().to_string()),
        }),
    };

    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| ApiError::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(&path, toml_str)?;
    Ok(path)
}

/// Determine where the API key is coming from.
pub fn credential_source() -> CredentialSource {
    if std::env::var("RAWG_API_KEY").is_ok() {
        CredentialSource::EnvVar("RAWG_API_KEY")
    } else if load_config_file().and_then(|c| c.api_key).is_some() {
        CredentialSource::ConfigFile
    } else {
        CredentialSource::Missing
    }
}

fn load_config_file() -> Option<RawgConfig> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.rawg
}
