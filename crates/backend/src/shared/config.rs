use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding the vendor fixture files (JSON and CSV exports).
    pub fixtures_dir: String,
}

/// Which source backs the analytics endpoints.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsMode {
    /// Fixtures plus the local aggregator.
    Preview,
    /// The remote pre-aggregated analytics endpoint.
    Live,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    pub mode: AnalyticsMode,
    /// Base URL of the remote analytics endpoint, required for live mode.
    pub remote_base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// Shared secret for bearer token validation. When unset a random
    /// secret is generated at startup, which rejects externally issued
    /// tokens until one is configured.
    pub jwt_secret: Option<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 8000

[data]
fixtures_dir = "target/fixtures"

[analytics]
mode = "preview"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolve the fixtures directory, relative paths resolved against the
/// executable directory as with config.toml itself.
pub fn get_fixtures_dir(config: &Config) -> anyhow::Result<PathBuf> {
    let dir = Path::new(&config.data.fixtures_dir);

    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(dir));
        }
    }

    Ok(PathBuf::from(&config.data.fixtures_dir))
}
