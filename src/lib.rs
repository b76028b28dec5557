//! Neumorphic CSS utilities derived from a color palette.
//!
//! Takes a palette of named colors (nested theme shape or flat), derives
//! the shadow/highlight shades each color needs, and generates utility
//! class declarations for four surface treatments (`flat`, `concave`,
//! `convex`, `inset`) at a configurable range of shadow sizes:
//!
//! ```css
//! .nm-flat-red-500 {
//!   background: #f56565;
//!   box-shadow: 0.2em 0.2em calc(0.2em * 2) #f01414,
//!               -0.2em -0.2em calc(0.2em * 2) #f78484;
//! }
//! ```
//!
//! # Design
//!
//! - [`flatten_color_palette`] turns the nested theme palette into flat
//!   `name -> color` pairs (`red` + `500` becomes `red-500`).
//! - [`ShadeSet::derive`] expands one color into the five values a
//!   neumorphic surface needs, steering by perceived brightness.
//! - [`Variant`] carries the background and box-shadow formulas for the
//!   four surface treatments.
//! - [`generate_utilities`] crosses one variant with every color and
//!   every size; [`NeumorphismPlugin`] drives all four variants and
//!   hands the result to a [`UtilityRegistrar`].
//!
//! Bad palette entries never fail a generation pass: a color that cannot
//! be parsed is skipped with a `log` warning, and reserved CSS keyword
//! names (`transparent`, `currentColor`, ...) are filtered.
//!
//! # Example
//!
//! ```rust
//! use neumorphism::{ColorEntry, ColorTable, NeumorphismPlugin, ThemeConfig};
//!
//! let mut colors = ColorTable::new();
//! colors.insert("paper".into(), ColorEntry::single("#e2e8f0"));
//! colors.insert(
//!     "red".into(),
//!     ColorEntry::shades([("500", "#f56565"), ("900", "#742a2a")]),
//! );
//!
//! let plugin = NeumorphismPlugin::with_config(ThemeConfig::new().with_colors(colors));
//! let sheet = plugin.stylesheet();
//!
//! let flat = sheet.get(".nm-flat-paper").unwrap();
//! assert_eq!(flat.background, "#e2e8f0");
//! assert!(sheet.get(".nm-concave-red-500-lg").is_some());
//! ```
//!
//! Hosts with their own registration pipeline implement
//! [`UtilityRegistrar`] instead of collecting into a [`Stylesheet`].

mod color;
mod error;
mod generate;
mod palette;
mod plugin;
mod shade;
mod theme;
mod variant;

pub use color::{Rgb, DARK_BRIGHTNESS_MAX, LIGHT_BRIGHTNESS_MIN};
pub use error::ColorParseError;
pub use generate::{generate_utilities, UtilityDeclaration};
pub use palette::{
    flatten_color_palette, is_reserved_keyword, ColorEntry, ColorTable, FlatPalette,
    DEFAULT_COLORS, RESERVED_KEYWORDS,
};
pub use plugin::{NeumorphismPlugin, Stylesheet, UtilityRegistrar};
pub use shade::ShadeSet;
pub use theme::{SizeScale, ThemeConfig, DEFAULT_SIZES, DEFAULT_STATE_VARIANTS};
pub use variant::Variant;
