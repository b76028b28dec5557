//! Color tables and palette flattening.
//!
//! Hosts hand over a palette in the nested theme shape: top-level names
//! mapping either to a single color literal or to a map of shade keys
//! (`"100"`..`"900"`, `"default"`). [`flatten_color_palette`] turns that
//! into the flat name -> color map utility generation iterates over.
//!
//! All maps preserve insertion order; generated utilities appear in the
//! order the palette declares its colors.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A nested palette: color family name to entry.
pub type ColorTable = IndexMap<String, ColorEntry>;

/// A flattened palette: derived name to color literal.
pub type FlatPalette = IndexMap<String, String>;

/// One top-level palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    /// A single color literal, e.g. `"#fff"` or `"currentColor"`.
    Single(String),
    /// Shade-keyed color literals, e.g. `{"100": "#fff5f5", ...}`.
    Shades(IndexMap<String, String>),
}

impl ColorEntry {
    /// Creates a single-literal entry.
    pub fn single<V: Into<String>>(value: V) -> Self {
        ColorEntry::Single(value.into())
    }

    /// Creates a shade-keyed entry, preserving iteration order.
    pub fn shades<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        ColorEntry::Shades(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Color names that never receive utilities.
///
/// Matched case-insensitively against flattened palette names. These are
/// CSS keywords, not colors; no shade set can be derived from them.
pub const RESERVED_KEYWORDS: &[&str] =
    &["currentcolor", "transparent", "unset", "initial", "inherit"];

/// Whether `name` matches a reserved CSS keyword, ignoring case.
pub fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_KEYWORDS
        .iter()
        .any(|keyword| name.eq_ignore_ascii_case(keyword))
}

/// Flattens a nested palette into derived-name -> color pairs.
///
/// Single entries are copied verbatim under their own name. Shade-keyed
/// entries emit one pair per shade: `family-shadeKey`, except the shade
/// key `default` (exact match), which contributes the bare family name.
/// Values are not validated here; unparseable colors surface later, when
/// shades are derived.
///
/// # Example
///
/// ```rust
/// use neumorphism::{flatten_color_palette, ColorEntry, ColorTable};
///
/// let mut colors = ColorTable::new();
/// colors.insert("black".into(), ColorEntry::single("#000"));
/// colors.insert(
///     "red".into(),
///     ColorEntry::shades([("default", "#f56565"), ("900", "#742a2a")]),
/// );
///
/// let flat = flatten_color_palette(&colors);
/// assert_eq!(flat.get("black").map(String::as_str), Some("#000"));
/// assert_eq!(flat.get("red").map(String::as_str), Some("#f56565"));
/// assert_eq!(flat.get("red-900").map(String::as_str), Some("#742a2a"));
/// ```
pub fn flatten_color_palette(colors: &ColorTable) -> FlatPalette {
    let mut flat = FlatPalette::new();

    for (name, entry) in colors {
        match entry {
            ColorEntry::Single(value) => {
                flat.insert(name.clone(), value.clone());
            }
            ColorEntry::Shades(shades) => {
                for (key, value) in shades {
                    let flat_name = if key == "default" {
                        name.clone()
                    } else {
                        format!("{}-{}", name, key)
                    };
                    flat.insert(flat_name, value.clone());
                }
            }
        }
    }

    flat
}

/// The built-in default palette, used when the host supplies no colors.
///
/// Mirrors the classic utility-framework background palette: the
/// `transparent`/`current` aliases, `black`, `white`, and ten color
/// families with shade keys `100`..`900`.
pub static DEFAULT_COLORS: Lazy<ColorTable> = Lazy::new(|| {
    let mut colors = ColorTable::new();
    colors.insert("transparent".into(), ColorEntry::single("transparent"));
    colors.insert("current".into(), ColorEntry::single("currentColor"));
    colors.insert("black".into(), ColorEntry::single("#000"));
    colors.insert("white".into(), ColorEntry::single("#fff"));
    colors.insert(
        "gray".into(),
        ColorEntry::shades([
            ("100", "#f7fafc"),
            ("200", "#edf2f7"),
            ("300", "#e2e8f0"),
            ("400", "#cbd5e0"),
            ("500", "#a0aec0"),
            ("600", "#718096"),
            ("700", "#4a5568"),
            ("800", "#2d3748"),
            ("900", "#1a202c"),
        ]),
    );
    colors.insert(
        "red".into(),
        ColorEntry::shades([
            ("100", "#fff5f5"),
            ("200", "#fed7d7"),
            ("300", "#feb2b2"),
            ("400", "#fc8181"),
            ("500", "#f56565"),
            ("600", "#e53e3e"),
            ("700", "#c53030"),
            ("800", "#9b2c2c"),
            ("900", "#742a2a"),
        ]),
    );
    colors.insert(
        "orange".into(),
        ColorEntry::shades([
            ("100", "#fffaf0"),
            ("200", "#feebc8"),
            ("300", "#fbd38d"),
            ("400", "#f6ad55"),
            ("500", "#ed8936"),
            ("600", "#dd6b20"),
            ("700", "#c05621"),
            ("800", "#9c4221"),
            ("900", "#7b341e"),
        ]),
    );
    colors.insert(
        "yellow".into(),
        ColorEntry::shades([
            ("100", "#fffff0"),
            ("200", "#fefcbf"),
            ("300", "#faf089"),
            ("400", "#f6e05e"),
            ("500", "#ecc94b"),
            ("600", "#d69e2e"),
            ("700", "#b7791f"),
            ("800", "#975a16"),
            ("900", "#744210"),
        ]),
    );
    colors.insert(
        "green".into(),
        ColorEntry::shades([
            ("100", "#f0fff4"),
            ("200", "#c6f6d5"),
            ("300", "#9ae6b4"),
            ("400", "#68d391"),
            ("500", "#48bb78"),
            ("600", "#38a169"),
            ("700", "#2f855a"),
            ("800", "#276749"),
            ("900", "#22543d"),
        ]),
    );
    colors.insert(
        "teal".into(),
        ColorEntry::shades([
            ("100", "#e6fffa"),
            ("200", "#b2f5ea"),
            ("300", "#81e6d9"),
            ("400", "#4fd1c5"),
            ("500", "#38b2ac"),
            ("600", "#319795"),
            ("700", "#2c7a7b"),
            ("800", "#285e61"),
            ("900", "#234e52"),
        ]),
    );
    colors.insert(
        "blue".into(),
        ColorEntry::shades([
            ("100", "#ebf8ff"),
            ("200", "#bee3f8"),
            ("300", "#90cdf4"),
            ("400", "#63b3ed"),
            ("500", "#4299e1"),
            ("600", "#3182ce"),
            ("700", "#2b6cb0"),
            ("800", "#2c5282"),
            ("900", "#2a4365"),
        ]),
    );
    colors.insert(
        "indigo".into(),
        ColorEntry::shades([
            ("100", "#ebf4ff"),
            ("200", "#c3dafe"),
            ("300", "#a3bffa"),
            ("400", "#7f9cf5"),
            ("500", "#667eea"),
            ("600", "#5a67d8"),
            ("700", "#4c51bf"),
            ("800", "#434190"),
            ("900", "#3c366b"),
        ]),
    );
    colors.insert(
        "purple".into(),
        ColorEntry::shades([
            ("100", "#faf5ff"),
            ("200", "#e9d8fd"),
            ("300", "#d6bcfa"),
            ("400", "#b794f4"),
            ("500", "#9f7aea"),
            ("600", "#805ad5"),
            ("700", "#6b46c1"),
            ("800", "#553c9a"),
            ("900", "#44337a"),
        ]),
    );
    colors.insert(
        "pink".into(),
        ColorEntry::shades([
            ("100", "#fff5f7"),
            ("200", "#fed7e2"),
            ("300", "#fbb6ce"),
            ("400", "#f687b3"),
            ("500", "#ed64a6"),
            ("600", "#d53f8c"),
            ("700", "#b83280"),
            ("800", "#97266d"),
            ("900", "#702459"),
        ]),
    );
    colors
});

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ColorTable {
        let mut colors = ColorTable::new();
        colors.insert("transparent".into(), ColorEntry::single("transparent"));
        colors.insert("black".into(), ColorEntry::single("#000"));
        colors.insert(
            "red".into(),
            ColorEntry::shades([
                ("100", "#fff5f5"),
                ("default", "#f56565"),
                ("900", "#742a2a"),
            ]),
        );
        colors
    }

    // =========================================================================
    // Flattening tests
    // =========================================================================

    #[test]
    fn test_flatten_scalar_entries_verbatim() {
        let flat = flatten_color_palette(&sample_table());
        assert_eq!(flat.get("transparent").map(String::as_str), Some("transparent"));
        assert_eq!(flat.get("black").map(String::as_str), Some("#000"));
    }

    #[test]
    fn test_flatten_nested_entries_suffixed() {
        let flat = flatten_color_palette(&sample_table());
        assert_eq!(flat.get("red-100").map(String::as_str), Some("#fff5f5"));
        assert_eq!(flat.get("red-900").map(String::as_str), Some("#742a2a"));
    }

    #[test]
    fn test_flatten_default_shade_key_drops_suffix() {
        let flat = flatten_color_palette(&sample_table());
        assert_eq!(flat.get("red").map(String::as_str), Some("#f56565"));
        assert!(!flat.contains_key("red-default"));
    }

    #[test]
    fn test_flatten_default_shade_key_is_exact_match() {
        let mut colors = ColorTable::new();
        colors.insert(
            "blue".into(),
            ColorEntry::shades([("Default", "#4299e1")]),
        );

        let flat = flatten_color_palette(&colors);
        assert_eq!(flat.get("blue-Default").map(String::as_str), Some("#4299e1"));
        assert!(!flat.contains_key("blue"));
    }

    #[test]
    fn test_flatten_preserves_insertion_order() {
        let flat = flatten_color_palette(&sample_table());
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, ["transparent", "black", "red-100", "red", "red-900"]);
    }

    #[test]
    fn test_flatten_flat_table_is_idempotent() {
        let flat = flatten_color_palette(&sample_table());
        let reflattened = flatten_color_palette(
            &flat
                .iter()
                .map(|(name, value)| (name.clone(), ColorEntry::single(value.clone())))
                .collect(),
        );
        assert_eq!(reflattened, flat);
    }

    #[test]
    fn test_flatten_empty_table() {
        assert!(flatten_color_palette(&ColorTable::new()).is_empty());
    }

    // =========================================================================
    // Reserved keyword tests
    // =========================================================================

    #[test]
    fn test_reserved_keywords_case_insensitive() {
        assert!(is_reserved_keyword("transparent"));
        assert!(is_reserved_keyword("Transparent"));
        assert!(is_reserved_keyword("TRANSPARENT"));
        assert!(is_reserved_keyword("currentColor"));
        assert!(is_reserved_keyword("inherit"));
    }

    #[test]
    fn test_color_names_not_reserved() {
        assert!(!is_reserved_keyword("red"));
        assert!(!is_reserved_keyword("red-500"));
        assert!(!is_reserved_keyword("current"));
    }

    // =========================================================================
    // Default palette tests
    // =========================================================================

    #[test]
    fn test_default_colors_flatten_count() {
        // 4 scalar entries + 10 families of 9 shades
        let flat = flatten_color_palette(&DEFAULT_COLORS);
        assert_eq!(flat.len(), 94);
    }

    #[test]
    fn test_default_colors_well_known_entries() {
        let flat = flatten_color_palette(&DEFAULT_COLORS);
        assert_eq!(flat.get("black").map(String::as_str), Some("#000"));
        assert_eq!(flat.get("white").map(String::as_str), Some("#fff"));
        assert_eq!(flat.get("red-500").map(String::as_str), Some("#f56565"));
        assert_eq!(flat.get("pink-900").map(String::as_str), Some("#702459"));
    }

    #[test]
    fn test_default_colors_keyword_aliases_present() {
        // Filtered at generation time, not from the table itself
        assert!(DEFAULT_COLORS.contains_key("transparent"));
        assert_eq!(
            DEFAULT_COLORS.get("current"),
            Some(&ColorEntry::single("currentColor"))
        );
    }

    // =========================================================================
    // Serde shape tests
    // =========================================================================

    #[test]
    fn test_color_table_deserializes_mixed_shape() {
        let colors: ColorTable = serde_json::from_str(
            r##"{"black": "#000", "red": {"500": "#f56565", "default": "#fc8181"}}"##,
        )
        .unwrap();

        assert_eq!(colors.get("black"), Some(&ColorEntry::single("#000")));
        let flat = flatten_color_palette(&colors);
        assert_eq!(flat.get("red").map(String::as_str), Some("#fc8181"));
        assert_eq!(flat.get("red-500").map(String::as_str), Some("#f56565"));
    }
}
