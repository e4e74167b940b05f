use crate::constants::{self, env};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the server.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the NHL web API.
    #[serde(default = "default_web_api_domain")]
    pub web_api_domain: String,
    /// Base URL of the NHL stats REST API.
    #[serde(default = "default_stats_api_domain")]
    pub stats_api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_web_api_domain() -> String {
    constants::DEFAULT_WEB_API_DOMAIN.to_string()
}

fn default_stats_api_domain() -> String {
    constants::DEFAULT_STATS_API_DOMAIN.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

/// Adds an `https://` scheme to bare domains and strips trailing slashes so
/// URL builders can append paths directly.
pub fn normalize_api_domain(domain: &str) -> String {
    let domain = domain.trim();
    let with_scheme = if domain.starts_with("https://") || domain.starts_with("http://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    };
    with_scheme.trim_end_matches('/').to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            web_api_domain: default_web_api_domain(),
            stats_api_domain: default_stats_api_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to built-in defaults when no config file exists.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `NHL_MCP_WEB_API_DOMAIN` - Override web API base URL
    /// - `NHL_MCP_STATS_API_DOMAIN` - Override stats API base URL
    /// - `NHL_MCP_LOG_FILE` - Override log file path
    /// - `NHL_MCP_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.normalize();
        config.validate()?;

        Ok(config)
    }

    /// Loads what is stored on disk, or defaults, without env overrides.
    /// Used before saving so overrides never leak into the file.
    pub async fn load_stored() -> Result<Self, AppError> {
        let config_path = get_config_path();
        if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Applies `NHL_MCP_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(domain) = std::env::var(env::WEB_API_DOMAIN) {
            self.web_api_domain = domain;
        }

        if let Ok(domain) = std::env::var(env::STATS_API_DOMAIN) {
            self.stats_api_domain = domain;
        }

        if let Ok(log_file_path) = std::env::var(env::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    fn normalize(&mut self) {
        self.web_api_domain = normalize_api_domain(&self.web_api_domain);
        self.stats_api_domain = normalize_api_domain(&self.stats_api_domain);
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.web_api_domain,
            &self.stats_api_domain,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Prints current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Web API:");
        println!("{}", config.web_api_domain);
        println!("────────────────────────────────────");
        println!("Stats API:");
        println!("{}", config.stats_api_domain);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and normalizes both
    /// API domains before writing.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let content = toml::to_string_pretty(&normalized)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        // SAFETY: env-mutating tests are serialized with #[serial]
        unsafe {
            std::env::remove_var(env::WEB_API_DOMAIN);
            std::env::remove_var(env::STATS_API_DOMAIN);
            std::env::remove_var(env::LOG_FILE);
            std::env::remove_var(env::HTTP_TIMEOUT);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
web_api_domain = "https://web.example.com"
stats_api_domain = "https://stats.example.com/rest"
log_file_path = "/custom/log/path"
http_timeout_seconds = 12
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.web_api_domain, "https://web.example.com");
        assert_eq!(config.stats_api_domain, "https://stats.example.com/rest");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, 12);
    }

    #[tokio::test]
    async fn test_config_missing_fields_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "log_file_path = \"/tmp/nhl.log\"\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.web_api_domain, constants::DEFAULT_WEB_API_DOMAIN);
        assert_eq!(config.stats_api_domain, constants::DEFAULT_STATS_API_DOMAIN);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[tokio::test]
    async fn test_config_save_normalizes_domains() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            web_api_domain: "api-web.nhle.com/".to_string(),
            stats_api_domain: "http://localhost:9000/stats/rest/".to_string(),
            log_file_path: None,
            http_timeout_seconds: 5,
        };

        config.save_to_path(&config_path_str).await.unwrap();
        let loaded = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(loaded.web_api_domain, "https://api-web.nhle.com");
        assert_eq!(loaded.stats_api_domain, "http://localhost:9000/stats/rest");
        assert_eq!(loaded.http_timeout_seconds, 5);
        assert_eq!(loaded.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "web_api_domain = [1, 2")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_log_file_path_not_serialized_when_none() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(toml_string.contains("web_api_domain = \"https://api-web.nhle.com\""));
    }

    #[test]
    fn test_normalize_api_domain() {
        assert_eq!(
            normalize_api_domain("api-web.nhle.com"),
            "https://api-web.nhle.com"
        );
        assert_eq!(
            normalize_api_domain(" https://api.nhle.com/stats/rest/ "),
            "https://api.nhle.com/stats/rest"
        );
        assert_eq!(
            normalize_api_domain("http://127.0.0.1:4000"),
            "http://127.0.0.1:4000"
        );
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains(constants::APP_NAME));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains(constants::APP_NAME));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        // SAFETY: serialized with #[serial]
        unsafe {
            std::env::set_var(env::WEB_API_DOMAIN, "http://127.0.0.1:1234");
            std::env::set_var(env::HTTP_TIMEOUT, "7");
            std::env::set_var(env::LOG_FILE, "/var/log/nhl_mcp.log");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.web_api_domain, "http://127.0.0.1:1234");
        assert_eq!(config.stats_api_domain, constants::DEFAULT_STATS_API_DOMAIN);
        assert_eq!(config.http_timeout_seconds, 7);
        assert_eq!(
            config.log_file_path,
            Some("/var/log/nhl_mcp.log".to_string())
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_timeout_override_is_ignored() {
        clear_env();
        // SAFETY: serialized with #[serial]
        unsafe {
            std::env::set_var(env::HTTP_TIMEOUT, "soon");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );

        clear_env();
    }
}
