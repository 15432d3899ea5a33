//! CLI argument parsing with clap
//!
//! Defines the command-line interface: global configuration flags plus the
//! `serve` and `migrate` subcommands. `run` resolves the final settings from
//! configuration files, environment variables and CLI overrides, executes
//! terminal commands (migrations, dry runs) itself, and hands the settings
//! back to main for a real server start.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigLoader, Environment, Settings};
use crate::db;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// Custom validation functions for CLI arguments
mod validation {
    use std::path::PathBuf;

    /// Validate port number is within valid range (1-65535)
    pub fn validate_port(port_str: &str) -> Result<u16, String> {
        let port: u16 = port_str.parse().map_err(|_| {
            format!(
                "Port must be a valid number between 1 and 65535, got: '{}'",
                port_str
            )
        })?;

        if port == 0 {
            return Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string());
        }

        Ok(port)
    }

    /// Validate that a configuration file path exists and is a file
    pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
        let path = PathBuf::from(path_str);

        if !path.exists() {
            return Err(format!("Configuration file does not exist: '{}'", path_str));
        }

        if !path.is_file() {
            return Err(format!("Configuration path is not a file: '{}'", path_str));
        }

        Ok(path)
    }
}

/// A restaurant-review REST API server
#[derive(Parser, Debug)]
#[command(name = "plateful")]
#[command(about = "A restaurant-review REST API server")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered configuration
    /// directory.
    #[arg(short, long, value_name = "FILE", value_parser = validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Available values: development (dev), test, staging (stage),
    /// production (prod)
    #[arg(short, long, value_name = "ENV")]
    pub env: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(long, value_name = "PORT", value_parser = validation::validate_port)]
        port: Option<u16>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },

    /// Run pending database migrations
    Migrate {
        /// Show pending migrations without applying them
        #[arg(long)]
        dry_run: bool,
    },
}

/// Parses the command line and executes terminal commands.
///
/// # Returns
/// `Some(Settings)` when the server should be started with the resolved
/// settings, `None` when the invoked command already completed (migrations,
/// dry runs).
pub async fn run() -> anyhow::Result<Option<Settings>> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;

    match &cli.command {
        Some(Commands::Migrate { dry_run }) => {
            execute_migrate(&settings, *dry_run).await?;
            Ok(None)
        }
        Some(Commands::Serve { dry_run: true, .. }) => {
            execute_dry_run(&settings)?;
            Ok(None)
        }
        _ => Ok(Some(settings)),
    }
}

/// Loads settings and applies CLI overrides on top.
///
/// Precedence, lowest to highest: configuration files, environment
/// variables, CLI flags.
fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    // The environment override must land before the loader reads it
    if let Some(env) = &cli.env {
        let env = env.parse::<Environment>()?;
        unsafe {
            std::env::set_var(Environment::ENV_VAR, env.as_str());
        }
    }

    let loader = match &cli.config {
        Some(path) => ConfigLoader::from_file(path.clone())?,
        None => ConfigLoader::new()?,
    };
    let mut settings = loader.load()?;

    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    if let Some(Commands::Serve { host, port, .. }) = &cli.command {
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
        if let Some(port) = port {
            settings.server.port = *port;
        }
    }

    settings.validate()?;
    Ok(settings)
}

/// Runs or previews database migrations.
async fn execute_migrate(settings: &Settings, dry_run: bool) -> anyhow::Result<()> {
    settings.database.validate()?;

    if dry_run {
        let pending = db::pending_migrations(&settings.database.url).await?;
        if pending.is_empty() {
            println!("No pending migrations");
        } else {
            println!("Pending migrations:");
            for name in pending {
                println!("  {}", name);
            }
        }
        return Ok(());
    }

    let applied = db::run_pending_migrations(&settings.database.url).await?;
    println!("Applied {} migration(s)", applied);
    Ok(())
}

/// Validates configuration without starting the server.
fn execute_dry_run(settings: &Settings) -> anyhow::Result<()> {
    settings.validate()?;

    println!("✓ Configuration is valid");
    println!("✓ Server would bind to: {}", settings.server.address());
    println!("✓ Database URL is configured");
    println!("Dry run completed successfully - configuration is ready for deployment");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_validate_port_accepts_valid_range() {
        assert_eq!(validation::validate_port("1"), Ok(1));
        assert_eq!(validation::validate_port("3000"), Ok(3000));
        assert_eq!(validation::validate_port("65535"), Ok(65535));
    }

    #[test]
    fn test_validate_port_rejects_invalid() {
        assert!(validation::validate_port("0").is_err());
        assert!(validation::validate_port("65536").is_err());
        assert!(validation::validate_port("abc").is_err());
    }

    #[test]
    fn test_validate_config_file_path_missing() {
        assert!(validation::validate_config_file_path("/does/not/exist.toml").is_err());
    }

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::parse_from(["plateful", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        match cli.command {
            Some(Commands::Serve {
                host,
                port,
                dry_run,
            }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
                assert!(!dry_run);
            }
            _ => panic!("Expected serve command"),
        }
    }

    #[test]
    fn test_parse_migrate_dry_run() {
        let cli = Cli::parse_from(["plateful", "migrate", "--dry-run"]);
        match cli.command {
            Some(Commands::Migrate { dry_run }) => assert!(dry_run),
            _ => panic!("Expected migrate command"),
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["plateful", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }
}
