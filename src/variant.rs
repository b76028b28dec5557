//! The four neumorphic style variants and their CSS formulas.
//!
//! Each variant pairs a background treatment with the common two-part
//! shadow. The set is a closed enum: adding a variant means extending
//! the matches here, checked at compile time, rather than registering
//! entries in a lookup table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shade::ShadeSet;

/// A neumorphic surface treatment.
///
/// | Variant   | Background                           | Shadow          |
/// |-----------|--------------------------------------|-----------------|
/// | `Flat`    | base color                           | outer pair      |
/// | `Concave` | gradient, shadow to highlight        | outer pair      |
/// | `Convex`  | gradient, highlight to shadow        | outer pair      |
/// | `Inset`   | base color                           | inner pair      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Flat,
    Concave,
    Convex,
    Inset,
}

impl Variant {
    /// All variants, in generation order.
    pub const ALL: [Variant; 4] = [
        Variant::Flat,
        Variant::Concave,
        Variant::Convex,
        Variant::Inset,
    ];

    /// The lowercase name used in selectors.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Flat => "flat",
            Variant::Concave => "concave",
            Variant::Convex => "convex",
            Variant::Inset => "inset",
        }
    }

    /// The `background` value for this variant.
    ///
    /// Flat and inset surfaces use the base color. Curved surfaces use a
    /// 145deg gradient between the gradient stops, shadow-first for
    /// concave and highlight-first for convex.
    pub fn background(self, shades: &ShadeSet) -> String {
        match self {
            Variant::Flat | Variant::Inset => shades.base.clone(),
            Variant::Concave => format!(
                "linear-gradient(145deg, {}, {})",
                shades.shadow_gradient, shades.highlight_gradient
            ),
            Variant::Convex => format!(
                "linear-gradient(145deg, {}, {})",
                shades.highlight_gradient, shades.shadow_gradient
            ),
        }
    }

    /// The `box-shadow` value for this variant at the given size.
    ///
    /// Two terms: a shadow offset down-right and a highlight offset
    /// up-left, each blurred at twice the offset. Inset surfaces prefix
    /// both terms with `inset`.
    pub fn box_shadow(self, shades: &ShadeSet, size: &str) -> String {
        match self {
            Variant::Flat | Variant::Concave | Variant::Convex => format!(
                "{s} {s} calc({s} * 2) {shadow}, -{s} -{s} calc({s} * 2) {highlight}",
                s = size,
                shadow = shades.shadow,
                highlight = shades.highlight,
            ),
            Variant::Inset => format!(
                "inset {s} {s} calc({s} * 2) {shadow}, inset -{s} -{s} calc({s} * 2) {highlight}",
                s = size,
                shadow = shades.shadow,
                highlight = shades.highlight,
            ),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
