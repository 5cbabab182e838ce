//! # pizza-core: Pure Business Logic for the Pizza Builder
//!
//! This crate contains the whole pizza model as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizza Builder Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pizza-cli (console harness)                  │   │
//! │  │    args/env ──► resolve names ──► build pizza ──► print         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   pizza   │  │ validation│  │   │
//! │  │   │  SIZES    │  │   Money   │  │   Pizza   │  │   rules   │  │   │
//! │  │   │  TYPES    │  │           │  │  Summary  │  │  checks   │  │   │
//! │  │   │  EXTRAS   │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL MUTABLE STATE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Menu entries and the three fixed catalogs
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pizza`] - The configurable pizza and its summary
//! - [`error`] - Domain error type
//! - [`validation`] - Catalog membership and count checks
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::{Pizza, EXTRA_CHEESE, EXTRA_MEAT, EXTRA_TOMATOES, SIZE_L, SIZE_S, TYPE_VEGGIE};
//!
//! let mut pizza = Pizza::new(SIZE_S, TYPE_VEGGIE)?;
//! pizza.add_extra_ingredient(&EXTRA_MEAT)?;
//! pizza.add_extra_ingredient(&EXTRA_CHEESE)?;
//! pizza.add_extra_ingredient(&EXTRA_TOMATOES)?;
//! assert_eq!(pizza.price().to_string(), "121");
//! assert!(pizza.size() != &SIZE_L);
//!
//! pizza.remove_extra_ingredient(&EXTRA_CHEESE)?;
//! assert_eq!(
//!     pizza.info(),
//!     "Size: SMALL, type: VEGGIE; extra ingredients: MEAT, TOMATOES; price: 114UAH."
//! );
//! # Ok::<(), pizza_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pizza;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pizza_core::Money` instead of
// `use pizza_core::money::Money`

pub use catalog::*;
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use pizza::{Pizza, PizzaSummary};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency suffix appended to rendered prices.
pub const CURRENCY_SUFFIX: &str = "UAH";

/// Selections a pizza is built from: one size and one type.
pub const REQUIRED_SELECTIONS: usize = 2;
