//! # Commands
//!
//! Each command turns a [`CliConfig`](crate::config::CliConfig) into the text
//! printed on stdout. Nothing here prints directly, so every command is
//! testable as a plain function.

use pizza_core::{
    catalog_for, CatalogKind, MenuItem, Pizza, CURRENCY_SUFFIX, EXTRAS, EXTRA_CHEESE, EXTRA_MEAT,
    EXTRA_TOMATOES, SIZES, SIZE_L, SIZE_S, TYPES, TYPE_VEGGIE,
};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, OutputFormat, Selection};
use crate::error::CliResult;

pub const USAGE: &str = "\
Pizza Builder

Usage: pizza-cli [OPTIONS]

Options:
  -s, --size <NAME>     Pizza size (default: SMALL)
  -t, --type <NAME>     Pizza type (default: VEGGIE)
  -e, --extra <NAME>    Extra ingredient, repeatable
  -m, --menu            Print all sizes, types and extras
  -d, --demo            Walk through a sample order
      --json            Print JSON instead of text
      --text            Print text (default)
  -h, --help            Show this help message

Environment:
  PIZZA_OUTPUT          text | json
  PIZZA_LOG             tracing filter when RUST_LOG is unset";

// =============================================================================
// Build
// =============================================================================

/// Builds a pizza from names picked on the command line.
///
/// Missing size or type fall back to `SMALL` / `VEGGIE`. Names are looked up
/// case-insensitively; a name found only in another catalog is passed through
/// so the core reports it (`--type small` → "Invalid type of pizza: SMALL").
pub fn build(selection: &Selection) -> CliResult<Pizza> {
    let mut picked: Vec<MenuItem> = Vec::new();

    if selection.sizes.is_empty() {
        picked.push(SIZE_S);
    }
    for name in &selection.sizes {
        picked.push(resolve(CatalogKind::Size, name)?.clone());
    }

    if selection.types.is_empty() {
        picked.push(TYPE_VEGGIE);
    }
    for name in &selection.types {
        picked.push(resolve(CatalogKind::Type, name)?.clone());
    }

    let mut pizza = Pizza::from_selection(&picked)?;
    info!(size = %pizza.size(), kind = %pizza.kind(), "Pizza created");

    for name in &selection.extras {
        let extra = resolve(CatalogKind::Extra, name)?;
        pizza.add_extra_ingredient(extra)?;
        debug!(%extra, price = %pizza.price(), "Extra ingredient added");
    }

    Ok(pizza)
}

/// Finds `name` in the catalog for `kind`, then in any other catalog.
fn resolve(kind: CatalogKind, name: &str) -> Result<&'static MenuItem, ConfigError> {
    catalog_for(kind)
        .find(name)
        .or_else(|| [&SIZES, &TYPES, &EXTRAS].into_iter().find_map(|c| c.find(name)))
        .ok_or_else(|| ConfigError::UnknownChoice {
            kind,
            name: name.to_string(),
        })
}

/// Renders a pizza as its description line or as JSON.
pub fn render(pizza: &Pizza, output: OutputFormat) -> CliResult<String> {
    match output {
        OutputFormat::Text => Ok(pizza.info()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&pizza.summary())?),
    }
}

// =============================================================================
// Menu
// =============================================================================

/// Lists every catalog entry with its price.
pub fn menu(output: OutputFormat) -> CliResult<String> {
    let catalogs = [&SIZES, &TYPES, &EXTRAS];

    if output == OutputFormat::Json {
        let entries: Vec<&MenuItem> = catalogs.into_iter().flat_map(|c| c.iter()).collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let mut lines = Vec::new();
    for catalog in catalogs {
        lines.push(format!("{}:", catalog.kind().label().to_uppercase()));
        for entry in catalog {
            lines.push(format!(
                "  {:<12}{:>5}{}",
                entry.name(),
                entry.price().to_string(),
                CURRENCY_SUFFIX
            ));
        }
    }

    Ok(lines.join("\n"))
}

// =============================================================================
// Demo
// =============================================================================

/// Walks through a sample order, then shows the errors the model rejects.
pub fn demo() -> CliResult<String> {
    let mut lines = Vec::new();

    let mut pizza = Pizza::new(SIZE_S, TYPE_VEGGIE)?;
    info!(price = %pizza.price(), "Demo pizza created");

    pizza.add_extra_ingredient(&EXTRA_MEAT)?;
    lines.push(format!("Price: {} {}", pizza.price(), CURRENCY_SUFFIX));

    pizza.add_extra_ingredient(&EXTRA_CHEESE)?;
    pizza.add_extra_ingredient(&EXTRA_TOMATOES)?;
    lines.push(format!(
        "Price with extra ingredients: {} {}",
        pizza.price(),
        CURRENCY_SUFFIX
    ));

    lines.push(format!("Is pizza large: {}", pizza.size() == &SIZE_L));

    pizza.remove_extra_ingredient(&EXTRA_CHEESE)?;
    lines.push(format!(
        "Extra ingredients: {}",
        pizza.extra_ingredients().len()
    ));
    lines.push(pizza.info());

    // Rejected inputs
    let rejected = [
        Pizza::from_selection(&[SIZE_S]).map(|_| ()),
        Pizza::new(SIZE_S, SIZE_S).map(|_| ()),
        pizza.add_extra_ingredient(&EXTRA_MEAT),
        pizza.remove_extra_ingredient(&EXTRA_CHEESE),
    ];
    for result in rejected {
        if let Err(err) = result {
            warn!(error = %err, "Demo input rejected");
            lines.push(format!("Rejected: {err}"));
        }
    }

    Ok(lines.join("\n"))
}
