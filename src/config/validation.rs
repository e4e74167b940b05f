use crate::error::AppError;
use std::path::Path;

/// Validates an API base URL.
///
/// # Validation Rules
/// - Cannot be empty
/// - Must be a URL with a scheme, or at least look like a domain name
fn validate_api_domain(name: &str, api_domain: &str) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(format!(
                "{name} must be a valid URL or domain name"
            )));
        }
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Both API domains must be non-empty URLs or domain names
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent directory
///   must exist or be creatable
pub fn validate_config(
    web_api_domain: &str,
    stats_api_domain: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_api_domain("Web API domain", web_api_domain)?;
    validate_api_domain("Stats API domain", stats_api_domain)?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const WEB: &str = "https://api-web.nhle.com";
    const STATS: &str = "https://api.nhle.com/stats/rest";

    #[test]
    fn test_valid_defaults() {
        assert!(validate_config(WEB, STATS, 30, &None).is_ok());
    }

    #[test]
    fn test_empty_domain_rejected() {
        let err = validate_config("", STATS, 30, &None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Web API domain cannot be empty"
        );
    }

    #[test]
    fn test_bare_word_domain_rejected() {
        let err = validate_config(WEB, "stats", 30, &None).unwrap_err();
        assert!(err.to_string().contains("Stats API domain must be a valid URL"));
    }

    #[test]
    fn test_localhost_accepted() {
        assert!(validate_config("localhost:8080", STATS, 30, &None).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(validate_config(WEB, STATS, 0, &None).is_err());
    }

    #[test]
    fn test_log_path_parent_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("nhl.log");
        let log_path = Some(log_path.to_string_lossy().to_string());

        assert!(validate_config(WEB, STATS, 30, &log_path).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        assert!(validate_config(WEB, STATS, 30, &Some(String::new())).is_err());
    }
}
