//! # Pizza CLI Library
//!
//! Console harness around `pizza-core`. `main.rs` only calls [`run`]; the
//! setup lives here for testability.
//!
//! ## Module Organization
//! ```text
//! pizza_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── Env + flag configuration
//! ├── commands.rs     ◄─── build / menu / demo
//! └── error.rs        ◄─── CLI error type
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration (env, then flags)
//! 2. Initialize tracing (stderr)
//! 3. Execute the command
//! 4. Print the result to stdout, or log the error and exit 1

pub mod commands;
pub mod config;
pub mod error;

use std::env;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{CliConfig, Command, DEFAULT_LOG_FILTER};
use error::CliResult;

/// Runs the CLI with the process arguments and environment.
pub fn run() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = CliConfig::load(&args, |key| env::var(key).ok());

    let filter = config
        .as_ref()
        .map(|config| config.log_filter.as_str())
        .unwrap_or(DEFAULT_LOG_FILTER);
    init_tracing(filter);

    match config.map_err(Into::into).and_then(|config| execute(&config)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            ExitCode::FAILURE
        }
    }
}

/// Executes a loaded configuration and returns what should be printed.
pub fn execute(config: &CliConfig) -> CliResult<String> {
    match &config.command {
        Command::Build(selection) => {
            let pizza = commands::build(selection)?;
            info!(price = %pizza.price(), extras = pizza.extra_ingredients().len(), "Pizza ready");
            commands::render(&pizza, config.output)
        }
        Command::Menu => commands::menu(config.output),
        Command::Demo => commands::demo(),
        Command::Help => Ok(commands::USAGE.to_string()),
    }
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `PIZZA_LOG=pizza_cli=debug` - Used when `RUST_LOG` is unset
/// - Default: warnings, plus INFO for this crate
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputFormat, Selection};

    fn config(command: Command) -> CliConfig {
        CliConfig {
            command,
            output: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn test_execute_build() {
        let output = execute(&config(Command::Build(Selection::default()))).unwrap();
        assert_eq!(
            output,
            "Size: SMALL, type: VEGGIE; extra ingredients: none; price: 100UAH."
        );
    }

    #[test]
    fn test_execute_help() {
        let output = execute(&config(Command::Help)).unwrap();
        assert!(output.contains("Usage: pizza-cli [OPTIONS]"));
    }

    #[test]
    fn test_execute_surfaces_errors() {
        let selection = Selection {
            extras: vec!["cheese".to_string(), "cheese".to_string()],
            ..Selection::default()
        };
        let err = execute(&config(Command::Build(selection))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Ingredient is already added: CHEESE"
        );
    }
}
