//! # CLI Configuration
//!
//! Configuration is read from environment variables, then overridden by
//! command-line flags.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--json`, `--size`, ...)
//! 2. Environment variables (`PIZZA_*`)
//! 3. Defaults (this file)
//!
//! ## Environment Variables
//! - `PIZZA_OUTPUT`: `text` (default) or `json`
//! - `PIZZA_LOG`: tracing filter used when `RUST_LOG` is unset

use std::str::FromStr;

use pizza_core::CatalogKind;
use serde::{Deserialize, Serialize};

/// Tracing filter used when neither `RUST_LOG` nor `PIZZA_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,pizza_cli=info";

/// How results are printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The pizza's one-line description.
    #[default]
    Text,

    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                var: "PIZZA_OUTPUT".to_string(),
                value: value.to_string(),
            }),
        }
    }
}

/// Names picked on the command line, not yet resolved against the catalogs.
///
/// Sizes and types are lists so that a repeated flag reaches the core's
/// selection-count check instead of silently overwriting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub sizes: Vec<String>,
    pub types: Vec<String>,
    pub extras: Vec<String>,
}

/// What the CLI was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build a pizza from the selection and print it.
    Build(Selection),
    /// Print all catalogs.
    Menu,
    /// Run the reference walkthrough.
    Demo,
    /// Print usage.
    Help,
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    pub output: OutputFormat,
    pub log_filter: String,
}

impl CliConfig {
    /// Loads configuration from `args` (without the program name) and an
    /// environment lookup.
    ///
    /// The lookup is injected so tests don't touch the process environment:
    /// ```rust
    /// use pizza_cli::config::{CliConfig, Command, OutputFormat};
    ///
    /// let args = vec!["--menu".to_string()];
    /// let config = CliConfig::load(&args, |key| {
    ///     (key == "PIZZA_OUTPUT").then(|| "json".to_string())
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.command, Command::Menu);
    /// assert_eq!(config.output, OutputFormat::Json);
    /// ```
    pub fn load<F>(args: &[String], env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig {
            command: Command::Build(Selection::default()),
            output: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        };

        if let Some(output) = env("PIZZA_OUTPUT") {
            config.output = output.parse()?;
        }

        if let Some(filter) = env("PIZZA_LOG") {
            config.log_filter = filter;
        }

        let mut selection = Selection::default();
        let mut mode: Option<Command> = None;

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--size" | "-s" | "--type" | "-t" | "--extra" | "-e" => {
                    let value = args
                        .get(i + 1)
                        .cloned()
                        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
                    match flag {
                        "--size" | "-s" => selection.sizes.push(value),
                        "--type" | "-t" => selection.types.push(value),
                        _ => selection.extras.push(value),
                    }
                    i += 1;
                }
                "--json" => config.output = OutputFormat::Json,
                "--text" => config.output = OutputFormat::Text,
                "--menu" | "-m" => mode = Some(Command::Menu),
                "--demo" | "-d" => mode = Some(Command::Demo),
                "--help" | "-h" => mode = Some(Command::Help),
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
            i += 1;
        }

        config.command = mode.unwrap_or(Command::Build(selection));
        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("No {kind} named {name} on the menu")]
    UnknownChoice { kind: CatalogKind, name: String },
}
