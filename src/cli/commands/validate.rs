//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Model Size: {}", config.detection.model_size);
        match config.detection.model_dir {
            Some(ref dir) => println!("  Model Directory: {}", dir.display()),
            None => println!("  Model Directory: (not set, heuristic name finding)"),
        }
        println!("  Strict Names: {}", config.detection.strict_names);
        match config.detection.pattern_library {
            Some(ref path) => println!("  Pattern Library: {}", path.display()),
            None => println!("  Pattern Library: (built-in)"),
        }
        println!("  Extra Denylist Entries: {}", config.detection.denylist.len());
        println!("  Audit Enabled: {}", config.audit.enabled);
        if config.audit.enabled {
            println!("  Audit Log: {}", config.audit.log_path.display());
        }
        println!();
        Ok(0)
    }
}
