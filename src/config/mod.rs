//! Configuration management for Sigilo.
//!
//! TOML-based configuration with environment variable substitution
//! (`${VAR_NAME}`), `SIGILO_*` overrides, defaults for every section, and
//! validation on load.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [detection]
//! model_size = "small"
//! model_dir = "./models"
//! strict_names = false
//! denylist = ["Ouvidoria Geral"]
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/classification.log"
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, LoggingConfig, SigiloConfig};
