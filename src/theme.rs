//! Theme configuration: where colors come from, which sizes to emit,
//! and which state variants accompany registration.
//!
//! The palette resolves through three layers: an explicit neumorphism
//! palette when the host sets one, otherwise the host's general
//! background-color table, otherwise the built-in default. Sizes and
//! state variants default to the classic scale and the
//! responsive/hover/focus triple.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::palette::{ColorTable, DEFAULT_COLORS};

/// Shadow offset scale: size key to CSS length.
pub type SizeScale = IndexMap<String, String>;

/// The default size scale. The `default` key produces the unsuffixed
/// selector.
pub static DEFAULT_SIZES: Lazy<SizeScale> = Lazy::new(|| {
    [
        ("xs", "0.05em"),
        ("sm", "0.1em"),
        ("default", "0.2em"),
        ("lg", "0.4em"),
        ("xl", "0.8em"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
});

/// State variants handed to the registrar with every utility group.
///
/// Opaque to this crate; expanding them into media queries and
/// pseudo-class selectors is the host's job.
pub const DEFAULT_STATE_VARIANTS: &[&str] = &["responsive", "hover", "focus"];

/// Configuration supplied by the host's theme mechanism.
///
/// Every field has a default, so `ThemeConfig::new()` alone yields the
/// full built-in palette at five sizes.
///
/// # Example
///
/// ```rust
/// use neumorphism::{ColorEntry, ColorTable, ThemeConfig};
///
/// let mut brand = ColorTable::new();
/// brand.insert("brand".into(), ColorEntry::single("#4299e1"));
///
/// let config = ThemeConfig::new()
///     .with_colors(brand)
///     .with_state_variants(["responsive", "hover"]);
/// assert!(config.resolve_colors().contains_key("brand"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Explicit neumorphism palette; highest precedence.
    pub colors: Option<ColorTable>,
    /// The host's background-color table, used when `colors` is unset.
    pub background_colors: Option<ColorTable>,
    /// Size scale to emit; defaults to [`DEFAULT_SIZES`].
    pub sizes: SizeScale,
    /// State variants passed through at registration; defaults to
    /// [`DEFAULT_STATE_VARIANTS`].
    pub state_variants: Vec<String>,
}

impl ThemeConfig {
    /// Creates a config with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit neumorphism palette.
    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Sets the fallback background-color table.
    pub fn with_background_colors(mut self, colors: ColorTable) -> Self {
        self.background_colors = Some(colors);
        self
    }

    /// Replaces the size scale.
    pub fn with_sizes(mut self, sizes: SizeScale) -> Self {
        self.sizes = sizes;
        self
    }

    /// Replaces the state variant list.
    pub fn with_state_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state_variants = variants.into_iter().map(Into::into).collect();
        self
    }

    /// The palette generation will draw from: `colors`, else
    /// `background_colors`, else the built-in default.
    pub fn resolve_colors(&self) -> &ColorTable {
        self.colors
            .as_ref()
            .or(self.background_colors.as_ref())
            .unwrap_or(&DEFAULT_COLORS)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            colors: None,
            background_colors: None,
            sizes: DEFAULT_SIZES.clone(),
            state_variants: DEFAULT_STATE_VARIANTS
                .iter()
                .map(|variant| variant.to_string())
                .collect(),
        }
    }
}
