//! # CLI Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CliConfig::load ─── ConfigError ─────────┐                             │
//! │                                            │                             │
//! │  Pizza operations ── ValidationError ─────┼──► CliError ──► error!()    │
//! │                                            │                  exit 1     │
//! │  JSON output ─────── serde_json::Error ───┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pizza_core::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors reported by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_to_cli_error() {
        let err: CliError = ValidationError::InvalidIngredient {
            name: "CORN".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: Invalid ingredient: CORN");
    }

    #[test]
    fn test_config_converts_to_cli_error() {
        let err: CliError = ConfigError::UnknownOption("--crust".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown option: --crust"
        );
    }
}
