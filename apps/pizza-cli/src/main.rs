//! # Pizza CLI Entry Point
//!
//! ## Usage
//! ```bash
//! # Default pizza (SMALL VEGGIE, no extras)
//! cargo run -p pizza-cli
//!
//! # Pick everything
//! cargo run -p pizza-cli -- --size large --type pepperoni -e meat -e cheese
//!
//! # JSON output, menu, walkthrough
//! cargo run -p pizza-cli -- --json -s medium
//! cargo run -p pizza-cli -- --menu
//! cargo run -p pizza-cli -- --demo
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    pizza_cli::run()
}
