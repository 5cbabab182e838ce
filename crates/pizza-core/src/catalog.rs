//! # Menu Catalogs
//!
//! The three closed sets of choices a pizza is built from.
//!
//! ## Catalog Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Catalogs                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     SIZES       │   │     TYPES       │   │     EXTRAS      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  SMALL    50    │   │  VEGGIE     50  │   │  TOMATOES   5   │       │
//! │  │  MEDIUM   75    │   │  MARGHERITA 60  │   │  CHEESE     7   │       │
//! │  │  LARGE   100    │   │  PEPPERONI  70  │   │  MEAT       9   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Exactly one SIZE + exactly one TYPE + any subset of EXTRAS            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Entries compare by value: `(kind, name, price)`. An entry rebuilt from
//! JSON is the same entry as the constant it was serialized from.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::slice;

use crate::money::Money;

// =============================================================================
// Catalog Kind
// =============================================================================

/// Which catalog an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// Pizza size (exactly one per pizza).
    Size,
    /// Pizza type (exactly one per pizza).
    Type,
    /// Optional extra ingredient (zero or more per pizza).
    Extra,
}

impl CatalogKind {
    /// Lowercase label used in messages and menus.
    pub const fn label(&self) -> &'static str {
        match self {
            CatalogKind::Size => "size",
            CatalogKind::Type => "type",
            CatalogKind::Extra => "extra",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// An immutable catalog entry: a named choice with a price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    kind: CatalogKind,
    name: Cow<'static, str>,
    price: Money,
}

impl MenuItem {
    /// Builds a compile-time entry. Used for the catalog constants below.
    pub const fn new(kind: CatalogKind, name: &'static str, price: Money) -> Self {
        MenuItem {
            kind,
            name: Cow::Borrowed(name),
            price,
        }
    }

    /// Builds an entry at runtime.
    ///
    /// The result is only accepted by a pizza if it equals a catalog entry.
    ///
    /// ```rust
    /// use pizza_core::{CatalogKind, MenuItem, Money, EXTRA_MEAT, EXTRAS};
    ///
    /// let meat = MenuItem::custom(CatalogKind::Extra, "MEAT", Money::from_major(9));
    /// assert_eq!(meat, EXTRA_MEAT);
    ///
    /// let corn = MenuItem::custom(CatalogKind::Extra, "CORN", Money::from_major(4));
    /// assert!(!EXTRAS.contains(&corn));
    /// ```
    pub fn custom(kind: CatalogKind, name: impl Into<String>, price: Money) -> Self {
        MenuItem {
            kind,
            name: Cow::Owned(name.into()),
            price,
        }
    }

    #[inline]
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =============================================================================
// Catalog Constants
// =============================================================================

pub const SIZE_S: MenuItem = MenuItem::new(CatalogKind::Size, "SMALL", Money::from_major(50));
pub const SIZE_M: MenuItem = MenuItem::new(CatalogKind::Size, "MEDIUM", Money::from_major(75));
pub const SIZE_L: MenuItem = MenuItem::new(CatalogKind::Size, "LARGE", Money::from_major(100));

pub const TYPE_VEGGIE: MenuItem =
    MenuItem::new(CatalogKind::Type, "VEGGIE", Money::from_major(50));
pub const TYPE_MARGHERITA: MenuItem =
    MenuItem::new(CatalogKind::Type, "MARGHERITA", Money::from_major(60));
pub const TYPE_PEPPERONI: MenuItem =
    MenuItem::new(CatalogKind::Type, "PEPPERONI", Money::from_major(70));

pub const EXTRA_TOMATOES: MenuItem =
    MenuItem::new(CatalogKind::Extra, "TOMATOES", Money::from_major(5));
pub const EXTRA_CHEESE: MenuItem =
    MenuItem::new(CatalogKind::Extra, "CHEESE", Money::from_major(7));
pub const EXTRA_MEAT: MenuItem = MenuItem::new(CatalogKind::Extra, "MEAT", Money::from_major(9));

static SIZE_ENTRIES: [MenuItem; 3] = [SIZE_S, SIZE_M, SIZE_L];
static TYPE_ENTRIES: [MenuItem; 3] = [TYPE_VEGGIE, TYPE_MARGHERITA, TYPE_PEPPERONI];
static EXTRA_ENTRIES: [MenuItem; 3] = [EXTRA_TOMATOES, EXTRA_CHEESE, EXTRA_MEAT];

/// All allowed sizes.
pub static SIZES: Catalog = Catalog::new(CatalogKind::Size, &SIZE_ENTRIES);

/// All allowed types.
pub static TYPES: Catalog = Catalog::new(CatalogKind::Type, &TYPE_ENTRIES);

/// All allowed extra ingredients.
pub static EXTRAS: Catalog = Catalog::new(CatalogKind::Extra, &EXTRA_ENTRIES);

/// Returns the catalog for a kind.
pub fn catalog_for(kind: CatalogKind) -> &'static Catalog {
    match kind {
        CatalogKind::Size => &SIZES,
        CatalogKind::Type => &TYPES,
        CatalogKind::Extra => &EXTRAS,
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A fixed, read-only set of allowed entries for one dimension of a pizza.
#[derive(Debug)]
pub struct Catalog {
    kind: CatalogKind,
    entries: &'static [MenuItem],
}

impl Catalog {
    const fn new(kind: CatalogKind, entries: &'static [MenuItem]) -> Self {
        Catalog { kind, entries }
    }

    #[inline]
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// Entries in menu order.
    #[inline]
    pub fn entries(&self) -> &'static [MenuItem] {
        self.entries
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'static, MenuItem> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Membership test by value.
    pub fn contains(&self, item: &MenuItem) -> bool {
        self.entries.contains(item)
    }

    /// Looks an entry up by name, ignoring ASCII case and surrounding
    /// whitespace.
    ///
    /// ```rust
    /// use pizza_core::{SIZES, SIZE_M};
    ///
    /// assert_eq!(SIZES.find("medium"), Some(&SIZE_M));
    /// assert_eq!(SIZES.find("HUGE"), None);
    /// ```
    pub fn find(&self, name: &str) -> Option<&'static MenuItem> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|entry| entry.name().eq_ignore_ascii_case(name))
    }

    /// Entry names in menu order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(MenuItem::name).collect()
    }
}

impl IntoIterator for &Catalog {
    type Item = &'static MenuItem;
    type IntoIter = slice::Iter<'static, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
