//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SigiloConfig;
use crate::domain::errors::SigiloError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`SigiloConfig`]
/// 4. Applies environment variable overrides (`SIGILO_*` prefix)
/// 5. Validates the configuration
pub fn load_config(path: impl AsRef<Path>) -> Result<SigiloConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SigiloError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SigiloError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SigiloConfig = toml::from_str(&contents)
        .map_err(|e| SigiloError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config
        .validate()
        .map_err(|e| SigiloError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched. A referenced variable that is not set
/// is an error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SigiloError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SigiloError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `SIGILO_*` prefix
///
/// Variables follow the pattern `SIGILO_<SECTION>_<KEY>`, for example
/// `SIGILO_APPLICATION_LOG_LEVEL` or `SIGILO_DETECTION_MODEL_SIZE`.
fn apply_env_overrides(config: &mut SigiloConfig) -> Result<()> {
    if let Ok(val) = std::env::var("SIGILO_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    config.detection.apply_env_overrides()?;

    if let Ok(val) = std::env::var("SIGILO_AUDIT_ENABLED") {
        config.audit.enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SIGILO_AUDIT_LOG_PATH") {
        config.audit.log_path = val.into();
    }
    if let Ok(val) = std::env::var("SIGILO_AUDIT_JSON_FORMAT") {
        config.audit.json_format = val.parse().unwrap_or(true);
    }

    if let Ok(val) = std::env::var("SIGILO_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SIGILO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
