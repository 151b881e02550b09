//! Init command implementation
//!
//! Generates a sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "sigilo.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: sigilo validate-config");
                println!("  3. Classify text: sigilo analyze \"algum texto\"");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Sigilo Configuration File
# PII detection for public-information requests

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[detection]
# NER gazetteer model size (small, medium, large). Larger models recall
# more names at the cost of load time and memory.
model_size = "small"

# Directory holding the gazetteer model files. Comment out to skip NER and
# use the capitalization heuristic for name finding.
# model_dir = "./models"

# When true, an isolated person name with no other signal still marks the
# record as PRIVADO. The default treats such names as citations.
strict_names = false

# Custom pattern library replacing the built-in one.
# pattern_library = "./patterns/pii_patterns.toml"

# Extra denylist entries appended to the default institutional set.
denylist = []

[audit]
# Append-only audit trail of classification decisions. Evidence values are
# stored as SHA-256 hashes, never plaintext.
enabled = false
log_path = "./audit/classification.log"
json_format = true

[logging]
# Console logging is always on; enable the rolling JSON file sink here.
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }
}
