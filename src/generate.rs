//! Utility generation: one style variant crossed with every palette
//! color and every size.

use std::fmt;

use log::warn;

use crate::palette::{is_reserved_keyword, FlatPalette};
use crate::shade::ShadeSet;
use crate::theme::SizeScale;
use crate::variant::Variant;

/// One generated utility class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityDeclaration {
    /// Class selector, e.g. `.nm-flat-red-500` or `.nm-flat-red-500-lg`.
    pub selector: String,
    /// The `background` value.
    pub background: String,
    /// The `box-shadow` value.
    pub box_shadow: String,
}

impl UtilityDeclaration {
    /// Renders the rule as a single line of CSS.
    pub fn to_css(&self) -> String {
        format!(
            "{} {{ background: {}; box-shadow: {}; }}",
            self.selector, self.background, self.box_shadow
        )
    }
}

impl fmt::Display for UtilityDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

/// Generates the utilities for one style variant.
///
/// Iterates the palette in insertion order; for each color that survives
/// filtering, emits one declaration per size scale entry, also in
/// insertion order. Colors whose name matches a reserved CSS keyword are
/// filtered silently. Colors whose value cannot be parsed are skipped
/// with a `log` warning naming the entry; a bad entry never aborts the
/// pass or affects its neighbors.
pub fn generate_utilities(
    variant: Variant,
    palette: &FlatPalette,
    sizes: &SizeScale,
) -> Vec<UtilityDeclaration> {
    let mut utilities = Vec::with_capacity(palette.len() * sizes.len());

    for (name, value) in palette {
        if is_reserved_keyword(name) {
            continue;
        }

        let shades = match ShadeSet::derive(value) {
            Ok(shades) => shades,
            Err(_) => {
                warn!("cannot derive shades for '{}' ({}); skipping", name, value);
                continue;
            }
        };

        for (size_key, size) in sizes {
            utilities.push(UtilityDeclaration {
                selector: selector(variant, name, size_key),
                background: variant.background(&shades),
                box_shadow: variant.box_shadow(&shades, size),
            });
        }
    }

    utilities
}

/// Assembles `.nm-{variant}-{name}` with the size key appended for every
/// size except the default one.
fn selector(variant: Variant, name: &str, size_key: &str) -> String {
    if size_key.eq_ignore_ascii_case("default") {
        format!(".nm-{}-{}", variant, name)
    } else {
        format!(".nm-{}-{}-{}", variant, name, size_key)
    }
}
