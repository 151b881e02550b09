//! Configuration schema types

use crate::audit::AuditConfig;
use crate::detection::DetectionConfig;
use serde::{Deserialize, Serialize};

/// Main Sigilo configuration
///
/// Root structure mapping to the `sigilo.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SigiloConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Detection pipeline settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Audit logging settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Diagnostic logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SigiloConfig {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.detection.validate().map_err(|e| e.to_string())?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Diagnostic logging configuration (console always on, file sink optional)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable the rolling JSON file sink
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: daily or hourly
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}
