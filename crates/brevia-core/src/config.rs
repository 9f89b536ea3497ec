use crate::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub export: ExportConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// URL of the summarization endpoint. The service expects a POST with
    /// `{ "text": ... }` and answers `{ "summary": ... }`.
    pub url: String,

    pub timeout_seconds: u64,

    /// When set, no network exchange is made; a fixed placeholder summary
    /// is returned instead.
    pub offline: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5000/summarize".to_string(),
            timeout_seconds: 30,
            offline: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the `summary.pdf` / `summary.docx` artifacts are written to.
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub theme: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    pub async fn load(config_path: Option<&Path>) -> Result<Self> {
        let config_file = match config_path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if config_file.exists() {
            info!("Loading config from: {}", config_file.display());
            let content = tokio::fs::read_to_string(&config_file).await.map_err(|e| {
                crate::BreviaError::FileRead {
                    path: config_file.display().to_string(),
                    source: e,
                }
            })?;
            let mut config: Config =
                toml::from_str(&content).map_err(|e| crate::BreviaError::ConfigLoad {
                    path: config_file.display().to_string(),
                    source: Box::new(e),
                })?;

            // Override with environment variables
            config.load_env_overrides();
            Ok(config)
        } else {
            info!("No config file found, using defaults");
            let mut config = Self::default();
            config.load_env_overrides();
            Ok(config)
        }
    }

    fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "brevia", "brevia").ok_or_else(|| {
            crate::BreviaError::ConfigInvalid {
                issue: "Could not determine config directory".to_string(),
                suggestion: "Ensure your system has proper home directory permissions".to_string(),
            }
        })?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn load_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("BREVIA_URL") {
            self.endpoint.url = url;
        }
        if let Ok(timeout) = std::env::var("BREVIA_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.parse() {
                self.endpoint.timeout_seconds = seconds;
            }
        }
        if let Ok(offline) = std::env::var("BREVIA_OFFLINE") {
            self.endpoint.offline = matches!(offline.as_str(), "1" | "true" | "yes");
        }
        if let Ok(dir) = std::env::var("BREVIA_EXPORT_DIR") {
            self.export.output_dir = PathBuf::from(dir);
        }
        if let Ok(theme) = std::env::var("BREVIA_THEME") {
            self.tui.theme = theme;
        }
    }
}
