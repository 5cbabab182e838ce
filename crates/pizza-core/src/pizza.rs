//! # Pizza
//!
//! The configured product: one size, one type, and an ordered set of extra
//! ingredients.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pizza Operations                                     │
//! │                                                                         │
//! │  Operation                      State Change                            │
//! │  ─────────                      ────────────                            │
//! │                                                                         │
//! │  Pizza::new(size, type) ──────► { size, type, extras: [] }             │
//! │                                                                         │
//! │  add_extra_ingredient(x) ─────► extras.push(x)                          │
//! │                                                                         │
//! │  remove_extra_ingredient(x) ──► extras.remove(position of x)            │
//! │                                                                         │
//! │  price() / info() ────────────► (read only)                             │
//! │                                                                         │
//! │  NOTE: a failed operation returns Err and changes nothing.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use pizza_core::{Pizza, EXTRA_MEAT, SIZE_S, TYPE_VEGGIE};
//!
//! let mut pizza = Pizza::new(SIZE_S, TYPE_VEGGIE).unwrap();
//! pizza.add_extra_ingredient(&EXTRA_MEAT).unwrap();
//!
//! assert_eq!(pizza.price().to_string(), "109");
//! assert_eq!(
//!     pizza.info(),
//!     "Size: SMALL, type: VEGGIE; extra ingredients: MEAT; price: 109UAH."
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::MenuItem;
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::validation::{validate_argument_count, validate_extra, validate_size, validate_type};
use crate::CURRENCY_SUFFIX;

/// A pizza built from catalog entries.
///
/// ## Invariants
/// - `size` is a member of [`SIZES`](crate::SIZES)
/// - `kind` is a member of [`TYPES`](crate::TYPES)
/// - every extra is a member of [`EXTRAS`](crate::EXTRAS), at most once,
///   in the order it was added
///
/// Size and type are fixed at construction; only extras change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    size: MenuItem,
    kind: MenuItem,
    extras: Vec<MenuItem>,
}

impl Pizza {
    /// Creates a pizza from a size and a type.
    ///
    /// ## Errors
    /// - [`ValidationError::InvalidSize`] if `size` is not in `SIZES`
    /// - [`ValidationError::InvalidType`] if `kind` is not in `TYPES`
    pub fn new(size: MenuItem, kind: MenuItem) -> ValidationResult<Self> {
        Self::from_selection(&[size, kind])
    }

    /// Creates a pizza from a runtime list of selections: `[size, type]`.
    ///
    /// Checks run in order (count, size, type) and the first failure is
    /// returned.
    ///
    /// ```rust
    /// use pizza_core::{Pizza, ValidationError, SIZE_S};
    ///
    /// let err = Pizza::from_selection(&[SIZE_S]).unwrap_err();
    /// assert_eq!(err, ValidationError::ArgumentCount { given: 1, required: 2 });
    /// ```
    pub fn from_selection(selection: &[MenuItem]) -> ValidationResult<Self> {
        validate_argument_count(selection.len())?;

        let (size, kind) = (&selection[0], &selection[1]);
        validate_size(size)?;
        validate_type(kind)?;

        Ok(Pizza {
            size: size.clone(),
            kind: kind.clone(),
            extras: Vec::new(),
        })
    }

    /// Appends an extra ingredient.
    ///
    /// ## Errors
    /// - [`ValidationError::InvalidIngredient`] if `extra` is not in `EXTRAS`
    /// - [`ValidationError::DuplicateIngredient`] if it is already added
    pub fn add_extra_ingredient(&mut self, extra: &MenuItem) -> ValidationResult<()> {
        validate_extra(extra)?;

        if self.has_extra_ingredient(extra) {
            return Err(ValidationError::DuplicateIngredient {
                name: extra.name().to_string(),
            });
        }

        self.extras.push(extra.clone());
        Ok(())
    }

    /// Removes a previously added extra ingredient, keeping the order of the
    /// others.
    ///
    /// ## Errors
    /// - [`ValidationError::UnknownIngredient`] if `extra` is not in `EXTRAS`
    /// - [`ValidationError::IngredientNotAdded`] if it is not on this pizza
    pub fn remove_extra_ingredient(&mut self, extra: &MenuItem) -> ValidationResult<()> {
        validate_extra(extra).map_err(|_| ValidationError::UnknownIngredient {
            name: extra.name().to_string(),
        })?;

        let index = self
            .extras
            .iter()
            .position(|added| added == extra)
            .ok_or_else(|| ValidationError::IngredientNotAdded {
                name: extra.name().to_string(),
            })?;

        self.extras.remove(index);
        Ok(())
    }

    /// Extra ingredients in the order they were added.
    #[inline]
    pub fn extra_ingredients(&self) -> &[MenuItem] {
        &self.extras
    }

    pub fn has_extra_ingredient(&self, extra: &MenuItem) -> bool {
        self.extras.contains(extra)
    }

    #[inline]
    pub fn size(&self) -> &MenuItem {
        &self.size
    }

    /// The pizza type (`type` is reserved in Rust).
    #[inline]
    pub fn kind(&self) -> &MenuItem {
        &self.kind
    }

    /// Size price + type price + every extra's price.
    pub fn price(&self) -> Money {
        self.size.price()
            + self.kind.price()
            + self.extras.iter().map(MenuItem::price).sum::<Money>()
    }

    /// One-line description with the computed price.
    ///
    /// `Size: SMALL, type: VEGGIE; extra ingredients: MEAT, TOMATOES; price: 114UAH.`
    pub fn info(&self) -> String {
        format!(
            "Size: {}, type: {}; extra ingredients: {}; price: {}{}.",
            self.size.name(),
            self.kind.name(),
            describe_extras(&self.extras),
            self.price(),
            CURRENCY_SUFFIX
        )
    }

    /// Serializable snapshot of the current state.
    pub fn summary(&self) -> PizzaSummary {
        PizzaSummary {
            size: self.size.name().to_string(),
            kind: self.kind.name().to_string(),
            extras: self
                .extras
                .iter()
                .map(|extra| extra.name().to_string())
                .collect(),
            price: self.price(),
            info: self.info(),
        }
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

/// `none` for no extras, otherwise names joined by `", "`.
fn describe_extras(extras: &[MenuItem]) -> String {
    if extras.is_empty() {
        return "none".to_string();
    }

    extras
        .iter()
        .map(MenuItem::name)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Summary
// =============================================================================

/// Pizza snapshot for JSON output.
///
/// ```json
/// {
///   "size": "SMALL",
///   "type": "VEGGIE",
///   "extras": ["MEAT", "TOMATOES"],
///   "price": 11400,
///   "info": "Size: SMALL, type: VEGGIE; extra ingredients: MEAT, TOMATOES; price: 114UAH."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaSummary {
    pub size: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub extras: Vec<String>,
    /// Minor units.
    pub price: Money,
    pub info: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::*;

    fn small_veggie() -> Pizza {
        Pizza::new(SIZE_S, TYPE_VEGGIE).unwrap()
    }

    #[test]
    fn test_new_starts_without_extras() {
        for size in &SIZES {
            for kind in &TYPES {
                let pizza = Pizza::new(size.clone(), kind.clone()).unwrap();
                assert!(pizza.extra_ingredients().is_empty());
                assert_eq!(pizza.price(), size.price() + kind.price());
            }
        }
    }

    #[test]
    fn test_selection_count_checked_first() {
        assert_eq!(
            Pizza::from_selection(&[]),
            Err(ValidationError::ArgumentCount {
                given: 0,
                required: 2
            })
        );
        // Valid entries do not rescue a wrong count.
        assert_eq!(
            Pizza::from_selection(&[SIZE_S, TYPE_VEGGIE, EXTRA_MEAT]),
            Err(ValidationError::ArgumentCount {
                given: 3,
                required: 2
            })
        );
    }

    #[test]
    fn test_size_checked_before_type() {
        // Both invalid: size wins.
        assert_eq!(
            Pizza::new(EXTRA_MEAT, SIZE_S),
            Err(ValidationError::InvalidSize {
                name: "MEAT".to_string()
            })
        );
        assert_eq!(
            Pizza::new(SIZE_S, SIZE_S),
            Err(ValidationError::InvalidType {
                name: "SMALL".to_string()
            })
        );
    }

    #[test]
    fn test_size_is_the_constructed_entry() {
        let pizza = small_veggie();
        assert_eq!(pizza.size(), &SIZE_S);
        assert_ne!(pizza.size(), &SIZE_L);
        assert_eq!(pizza.kind(), &TYPE_VEGGIE);
    }

    #[test]
    fn test_reference_scenario() {
        let mut pizza = small_veggie();
        assert_eq!(pizza.price(), Money::from_major(100));

        pizza.add_extra_ingredient(&EXTRA_MEAT).unwrap();
        assert_eq!(pizza.price(), Money::from_major(109));

        pizza.add_extra_ingredient(&EXTRA_CHEESE).unwrap();
        assert_eq!(pizza.price(), Money::from_major(116));

        pizza.add_extra_ingredient(&EXTRA_TOMATOES).unwrap();
        assert_eq!(pizza.price(), Money::from_major(121));

        pizza.remove_extra_ingredient(&EXTRA_CHEESE).unwrap();
        assert_eq!(pizza.price(), Money::from_major(114));
        assert_eq!(pizza.extra_ingredients().len(), 2);
        assert_eq!(
            pizza.info(),
            "Size: SMALL, type: VEGGIE; extra ingredients: MEAT, TOMATOES; price: 114UAH."
        );
        assert_eq!(pizza.to_string(), pizza.info());
    }

    #[test]
    fn test_extras_rendering() {
        let mut pizza = small_veggie();
        assert!(pizza.info().contains("extra ingredients: none;"));

        pizza.add_extra_ingredient(&EXTRA_MEAT).unwrap();
        assert!(pizza.info().contains("extra ingredients: MEAT;"));

        pizza.add_extra_ingredient(&EXTRA_TOMATOES).unwrap();
        assert!(pizza.info().contains("extra ingredients: MEAT, TOMATOES;"));
    }

    #[test]
    fn test_duplicate_extra_rejected() {
        let mut pizza = small_veggie();
        pizza.add_extra_ingredient(&EXTRA_MEAT).unwrap();
        let before = pizza.clone();

        assert_eq!(
            pizza.add_extra_ingredient(&EXTRA_MEAT),
            Err(ValidationError::DuplicateIngredient {
                name: "MEAT".to_string()
            })
        );
        assert_eq!(pizza, before);
    }

    #[test]
    fn test_non_extra_rejected() {
        let mut pizza = small_veggie();

        assert_eq!(
            pizza.add_extra_ingredient(&SIZE_L),
            Err(ValidationError::InvalidIngredient {
                name: "LARGE".to_string()
            })
        );
        assert_eq!(
            pizza.remove_extra_ingredient(&TYPE_VEGGIE),
            Err(ValidationError::UnknownIngredient {
                name: "VEGGIE".to_string()
            })
        );
        assert!(pizza.extra_ingredients().is_empty());
    }

    #[test]
    fn test_remove_missing_extra_rejected() {
        let mut pizza = small_veggie();
        pizza.add_extra_ingredient(&EXTRA_TOMATOES).unwrap();
        let before = pizza.clone();

        assert_eq!(
            pizza.remove_extra_ingredient(&EXTRA_CHEESE),
            Err(ValidationError::IngredientNotAdded {
                name: "CHEESE".to_string()
            })
        );
        assert_eq!(pizza, before);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut pizza = small_veggie();
        for extra in &EXTRAS {
            pizza.add_extra_ingredient(extra).unwrap();
        }
        pizza.remove_extra_ingredient(&EXTRA_TOMATOES).unwrap();

        assert_eq!(pizza.extra_ingredients(), &[EXTRA_CHEESE, EXTRA_MEAT]);
    }

    #[test]
    fn test_extra_rebuilt_from_json_counts_as_duplicate() {
        let mut pizza = small_veggie();
        pizza.add_extra_ingredient(&EXTRA_CHEESE).unwrap();

        let json = serde_json::to_string(&EXTRA_CHEESE).unwrap();
        let rebuilt: MenuItem = serde_json::from_str(&json).unwrap();

        assert!(pizza.has_extra_ingredient(&rebuilt));
        assert!(pizza.add_extra_ingredient(&rebuilt).is_err());
        pizza.remove_extra_ingredient(&rebuilt).unwrap();
        assert!(pizza.extra_ingredients().is_empty());
    }

    #[test]
    fn test_summary_json() {
        let mut pizza = Pizza::new(SIZE_L, TYPE_PEPPERONI).unwrap();
        pizza.add_extra_ingredient(&EXTRA_CHEESE).unwrap();

        let value = serde_json::to_value(pizza.summary()).unwrap();
        assert_eq!(value["size"], "LARGE");
        assert_eq!(value["type"], "PEPPERONI");
        assert_eq!(value["extras"], serde_json::json!(["CHEESE"]));
        assert_eq!(value["price"], 17700);
        assert_eq!(
            value["info"],
            "Size: LARGE, type: PEPPERONI; extra ingredients: CHEESE; price: 177UAH."
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        /// (add?, index into EXTRAS plus one out-of-catalog entry)
        fn op_strategy() -> impl Strategy<Value = (bool, usize)> {
            (any::<bool>(), 0usize..4)
        }

        fn pick(index: usize) -> MenuItem {
            EXTRAS
                .entries()
                .get(index)
                .cloned()
                .unwrap_or_else(|| MenuItem::custom(CatalogKind::Extra, "CORN", Money::from_major(4)))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: no duplicates, price law holds, failures change nothing.
            #[test]
            fn add_remove_sequences_keep_invariants(
                ops in prop::collection::vec(op_strategy(), 0..32)
            ) {
                let mut pizza = Pizza::new(SIZE_M, TYPE_MARGHERITA).unwrap();

                for (add, index) in ops {
                    let extra = pick(index);
                    let before = pizza.clone();
                    let result = if add {
                        pizza.add_extra_ingredient(&extra)
                    } else {
                        pizza.remove_extra_ingredient(&extra)
                    };

                    if result.is_err() {
                        prop_assert_eq!(&pizza, &before);
                    }

                    let extras = pizza.extra_ingredients();
                    for (i, a) in extras.iter().enumerate() {
                        prop_assert!(EXTRAS.contains(a));
                        prop_assert!(!extras[i + 1..].contains(a));
                    }

                    let expected = SIZE_M.price()
                        + TYPE_MARGHERITA.price()
                        + extras.iter().map(MenuItem::price).sum::<Money>();
                    prop_assert_eq!(pizza.price(), expected);
                }
            }

            /// Property: adding then removing the same extra restores the price.
            #[test]
            fn add_then_remove_round_trips_price(
                present in prop::collection::vec(any::<bool>(), 3),
                index in 0usize..3
            ) {
                let mut pizza = Pizza::new(SIZE_L, TYPE_VEGGIE).unwrap();
                for (extra, keep) in EXTRAS.iter().zip(&present) {
                    if *keep && EXTRAS.entries()[index] != *extra {
                        pizza.add_extra_ingredient(extra).unwrap();
                    }
                }

                let price = pizza.price();
                let extra = pick(index);
                pizza.add_extra_ingredient(&extra).unwrap();
                prop_assert_eq!(pizza.price(), price + extra.price());
                pizza.remove_extra_ingredient(&extra).unwrap();
                prop_assert_eq!(pizza.price(), price);
            }
        }
    }
}
