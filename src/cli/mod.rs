//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Sigilo using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Sigilo - PII detection for public-information requests
#[derive(Parser, Debug)]
#[command(name = "sigilo")]
#[command(version, about, long_about = None)]
#[command(author = "Sigilo Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "sigilo.toml", env = "SIGILO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SIGILO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text for PII and print the classification
    Analyze(commands::analyze::AnalyzeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
