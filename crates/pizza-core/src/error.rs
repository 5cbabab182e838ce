//! # Error Types
//!
//! Domain-specific error types for pizza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizza-core errors (this file)                                         │
//! │  └── ValidationError  - Every caller-correctable input mistake         │
//! │                                                                         │
//! │  pizza-cli errors (separate crate)                                     │
//! │  ├── ConfigError      - Bad flags / environment values                 │
//! │  └── CliError         - What the console reports                       │
//! │                                                                         │
//! │  Flow: ValidationError ──► CliError ──► stderr + exit code 1           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending entry name in every message
//! 3. One error type; variants only say which precondition failed

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by [`Pizza`](crate::Pizza) operations.
///
/// Every variant is a caller-correctable mistake. None of them leaves the
/// pizza partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Construction received the wrong number of selections.
    #[error("Invalid number of parameters passed to pizza, given {given} instead of {required}")]
    ArgumentCount { given: usize, required: usize },

    /// Size is not a member of the sizes catalog.
    #[error("Invalid size of pizza: {name}")]
    InvalidSize { name: String },

    /// Type is not a member of the types catalog.
    #[error("Invalid type of pizza: {name}")]
    InvalidType { name: String },

    /// Added entry is not a member of the extras catalog.
    #[error("Invalid ingredient: {name}")]
    InvalidIngredient { name: String },

    /// Added entry is already on the pizza.
    #[error("Ingredient is already added: {name}")]
    DuplicateIngredient { name: String },

    /// Removed entry is not a member of the extras catalog.
    #[error("Ingredient does not exist: {name}")]
    UnknownIngredient { name: String },

    /// Removed entry was never added to this pizza.
    #[error("No such ingredient in this pizza: {name}")]
    IngredientNotAdded { name: String },

    /// A price below zero.
    #[error("Price must not be negative: {price}")]
    NegativePrice { price: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count_message() {
        let err = ValidationError::ArgumentCount {
            given: 1,
            required: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid number of parameters passed to pizza, given 1 instead of 2"
        );
    }

    #[test]
    fn test_messages_name_the_entry() {
        let err = ValidationError::DuplicateIngredient {
            name: "MEAT".to_string(),
        };
        assert_eq!(err.to_string(), "Ingredient is already added: MEAT");

        let err = ValidationError::IngredientNotAdded {
            name: "CHEESE".to_string(),
        };
        assert_eq!(err.to_string(), "No such ingredient in this pizza: CHEESE");

        let err = ValidationError::InvalidType {
            name: "SMALL".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid type of pizza: SMALL");
    }
}
