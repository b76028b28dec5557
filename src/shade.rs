//! Shade derivation: one base color into the five values a neumorphic
//! surface needs.
//!
//! Shadows steer by [`Rgb::is_dark`], highlights by [`Rgb::is_light`];
//! the two predicates are consulted independently.
//!
//! | Field                | Steered by | Matches       | Otherwise    |
//! |----------------------|------------|---------------|--------------|
//! | `shadow`             | `is_dark`  | darken 0.30   | darken 0.25  |
//! | `shadow_gradient`    | `is_dark`  | darken 0.20   | darken 0.15  |
//! | `highlight`          | `is_light` | lighten 0.20  | lighten 0.25 |
//! | `highlight_gradient` | `is_light` | lighten 0.10  | lighten 0.05 |

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::ColorParseError;

/// The five colors derived from one palette entry, each in normalized
/// `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeSet {
    /// The base color itself, normalized.
    pub base: String,
    /// Darker cast for the lower-right shadow.
    pub shadow: String,
    /// Lighter cast for the upper-left highlight.
    pub highlight: String,
    /// Darker gradient stop for curved surfaces.
    pub shadow_gradient: String,
    /// Lighter gradient stop for curved surfaces.
    pub highlight_gradient: String,
}

impl ShadeSet {
    /// Derives the shade set for a color literal.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] when the literal cannot be parsed.
    /// Generation treats that as a per-color skip, never a fatal failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use neumorphism::ShadeSet;
    ///
    /// let shades = ShadeSet::derive("#fff").unwrap();
    /// assert_eq!(shades.base, "#ffffff");
    /// assert_eq!(shades.shadow, "#bfbfbf");
    /// assert_eq!(shades.highlight, "#ffffff");
    /// ```
    pub fn derive(color: &str) -> Result<Self, ColorParseError> {
        let base = Rgb::parse(color)?;
        let dark = base.is_dark();
        let light = base.is_light();

        let shadow = if dark { base.darken(0.3) } else { base.darken(0.25) };
        let highlight = if light { base.lighten(0.2) } else { base.lighten(0.25) };
        let shadow_gradient = if dark { base.darken(0.2) } else { base.darken(0.15) };
        let highlight_gradient = if light { base.lighten(0.1) } else { base.lighten(0.05) };

        Ok(Self {
            base: base.hex(),
            shadow: shadow.hex(),
            highlight: highlight.hex(),
            shadow_gradient: shadow_gradient.hex(),
            highlight_gradient: highlight_gradient.hex(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brightness(hex: &str) -> f32 {
        Rgb::parse(hex).unwrap().brightness()
    }

    #[test]
    fn test_derive_normalizes_base() {
        let shades = ShadeSet::derive("#FFF").unwrap();
        assert_eq!(shades.base, "#ffffff");

        let shades = ShadeSet::derive("white").unwrap();
        assert_eq!(shades.base, "#ffffff");
    }

    #[test]
    fn test_derive_white_exact() {
        let shades = ShadeSet::derive("#fff").unwrap();
        assert_eq!(shades.base, "#ffffff");
        assert_eq!(shades.shadow, "#bfbfbf");
        assert_eq!(shades.highlight, "#ffffff");
        assert_eq!(shades.highlight_gradient, "#ffffff");
        assert!(brightness(&shades.shadow_gradient) > brightness(&shades.shadow));
    }

    #[test]
    fn test_derive_black_exact() {
        let shades = ShadeSet::derive("#000").unwrap();
        assert_eq!(shades.base, "#000000");
        assert_eq!(shades.shadow, "#000000");
        assert_eq!(shades.shadow_gradient, "#000000");
        assert_eq!(shades.highlight, "#404040");
        assert_eq!(shades.highlight_gradient, "#0d0d0d");
    }

    #[test]
    fn test_derive_all_values_parse() {
        let shades = ShadeSet::derive("#f56565").unwrap();
        for value in [
            &shades.base,
            &shades.shadow,
            &shades.highlight,
            &shades.shadow_gradient,
            &shades.highlight_gradient,
        ] {
            assert!(Rgb::parse(value).is_ok(), "invalid shade value {}", value);
        }
    }

    #[test]
    fn test_derive_orders_by_brightness() {
        let shades = ShadeSet::derive("#a0aec0").unwrap();
        assert!(brightness(&shades.shadow) < brightness(&shades.shadow_gradient));
        assert!(brightness(&shades.shadow_gradient) < brightness(&shades.base));
        assert!(brightness(&shades.base) < brightness(&shades.highlight_gradient));
        assert!(brightness(&shades.highlight_gradient) < brightness(&shades.highlight));
    }

    #[test]
    fn test_derive_light_color_uses_light_amounts() {
        // #f56565 sits just above the brightness threshold
        let base = Rgb::parse("#f56565").unwrap();
        let shades = ShadeSet::derive("#f56565").unwrap();
        assert_eq!(shades.shadow, base.darken(0.25).hex());
        assert_eq!(shades.highlight, base.lighten(0.2).hex());
        assert_eq!(shades.shadow_gradient, base.darken(0.15).hex());
        assert_eq!(shades.highlight_gradient, base.lighten(0.1).hex());
    }

    #[test]
    fn test_derive_dark_color_uses_dark_amounts() {
        let base = Rgb::parse("#2d3748").unwrap();
        let shades = ShadeSet::derive("#2d3748").unwrap();
        assert_eq!(shades.shadow, base.darken(0.3).hex());
        assert_eq!(shades.highlight, base.lighten(0.25).hex());
        assert_eq!(shades.shadow_gradient, base.darken(0.2).hex());
        assert_eq!(shades.highlight_gradient, base.lighten(0.05).hex());
    }

    #[test]
    fn test_derive_rejects_keywords_and_garbage() {
        assert!(ShadeSet::derive("transparent").is_err());
        assert!(ShadeSet::derive("currentColor").is_err());
        assert!(ShadeSet::derive("").is_err());
        assert!(ShadeSet::derive("#f5656").is_err());
    }

    #[test]
    fn test_derive_error_carries_input() {
        let err = ShadeSet::derive("currentColor").unwrap_err();
        assert_eq!(err.value, "currentColor");
    }
}
