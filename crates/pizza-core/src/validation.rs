//! # Validation Module
//!
//! Precondition checks shared by [`Pizza`](crate::Pizza) and any front-end
//! that wants to reject input before touching a pizza.
//!
//! ## Validation Order for Construction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pizza::from_selection(&[size, type])                                   │
//! │       │                                                                 │
//! │       ├── len != 2?        → ArgumentCount { given, required: 2 }       │
//! │       │                                                                 │
//! │       ├── size ∉ SIZES?    → InvalidSize                                │
//! │       │                                                                 │
//! │       ├── type ∉ TYPES?    → InvalidType                                │
//! │       │                                                                 │
//! │       └── OK → Pizza { extras: [] }                                     │
//! │                                                                         │
//! │  The first failing check wins.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::validation::{validate_size, validate_type};
//! use pizza_core::{SIZE_L, TYPE_VEGGIE};
//!
//! assert!(validate_size(&SIZE_L).is_ok());
//! assert!(validate_type(&SIZE_L).is_err());
//! assert!(validate_type(&TYPE_VEGGIE).is_ok());
//! ```

use crate::catalog::{MenuItem, EXTRAS, SIZES, TYPES};
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::REQUIRED_SELECTIONS;

/// Checks that construction received exactly one size and one type.
///
/// ```rust
/// use pizza_core::validation::validate_argument_count;
///
/// assert!(validate_argument_count(2).is_ok());
/// assert!(validate_argument_count(1).is_err());
/// assert!(validate_argument_count(3).is_err());
/// ```
pub fn validate_argument_count(given: usize) -> ValidationResult<()> {
    if given != REQUIRED_SELECTIONS {
        return Err(ValidationError::ArgumentCount {
            given,
            required: REQUIRED_SELECTIONS,
        });
    }

    Ok(())
}

/// Checks that `size` is a member of [`SIZES`].
pub fn validate_size(size: &MenuItem) -> ValidationResult<()> {
    if !SIZES.contains(size) {
        return Err(ValidationError::InvalidSize {
            name: size.name().to_string(),
        });
    }

    Ok(())
}

/// Checks that `kind` is a member of [`TYPES`].
pub fn validate_type(kind: &MenuItem) -> ValidationResult<()> {
    if !TYPES.contains(kind) {
        return Err(ValidationError::InvalidType {
            name: kind.name().to_string(),
        });
    }

    Ok(())
}

/// Checks that `extra` is a member of [`EXTRAS`].
///
/// Reports [`ValidationError::InvalidIngredient`]; removal maps the same
/// failure to [`ValidationError::UnknownIngredient`].
pub fn validate_extra(extra: &MenuItem) -> ValidationResult<()> {
    if !EXTRAS.contains(extra) {
        return Err(ValidationError::InvalidIngredient {
            name: extra.name().to_string(),
        });
    }

    Ok(())
}

/// Prices are non-negative. Zero is allowed.
///
/// ```rust
/// use pizza_core::validation::validate_price;
/// use pizza_core::Money;
///
/// assert!(validate_price(Money::from_major(9)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_minor(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::NegativePrice {
            price: price.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
