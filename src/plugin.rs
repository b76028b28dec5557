//! Plugin entry point and the registration seam.
//!
//! Hosts implement [`UtilityRegistrar`] to receive generated utilities;
//! [`Stylesheet`] is the built-in implementation that collects them
//! in memory and renders CSS text, used standalone and in tests.

use std::fmt;

use crate::generate::{generate_utilities, UtilityDeclaration};
use crate::palette::flatten_color_palette;
use crate::theme::ThemeConfig;
use crate::variant::Variant;

/// Receives generated utility groups, typically a host framework
/// adapter.
pub trait UtilityRegistrar {
    /// Registers one group of utilities under the given state variants.
    ///
    /// Called once per style variant, in [`Variant::ALL`] order, with
    /// the same state variant list every time. The state variants are
    /// opaque pass-through: the host decides what `responsive` or
    /// `hover` expansion means.
    fn add_utilities(&mut self, utilities: Vec<UtilityDeclaration>, state_variants: &[String]);
}

/// A registrar that collects utilities into an in-memory stylesheet.
///
/// Keeps registration order and ignores state variants, since plain CSS
/// text has nowhere to express them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: Vec<UtilityDeclaration>,
}

impl Stylesheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The collected rules, in registration order.
    pub fn rules(&self) -> &[UtilityDeclaration] {
        &self.rules
    }

    /// Looks up a rule by its selector.
    pub fn get(&self, selector: &str) -> Option<&UtilityDeclaration> {
        self.rules.iter().find(|rule| rule.selector == selector)
    }

    /// Renders every rule as CSS text, one rule per line.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            css.push_str(&rule.to_css());
            css.push('\n');
        }
        css
    }
}

impl UtilityRegistrar for Stylesheet {
    fn add_utilities(&mut self, utilities: Vec<UtilityDeclaration>, _state_variants: &[String]) {
        self.rules.extend(utilities);
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// The plugin: resolves the palette once and registers utilities for
/// all four style variants.
///
/// # Example
///
/// ```rust
/// use neumorphism::{ColorEntry, ColorTable, NeumorphismPlugin, ThemeConfig};
///
/// let mut colors = ColorTable::new();
/// colors.insert("red".into(), ColorEntry::shades([("500", "#f56565")]));
///
/// let plugin = NeumorphismPlugin::with_config(ThemeConfig::new().with_colors(colors));
/// let sheet = plugin.stylesheet();
///
/// assert!(sheet.get(".nm-flat-red-500").is_some());
/// assert!(sheet.get(".nm-inset-red-500-xl").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NeumorphismPlugin {
    config: ThemeConfig,
}

impl NeumorphismPlugin {
    /// Creates the plugin with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the plugin with an explicit configuration.
    pub fn with_config(config: ThemeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Generates and registers utilities for every variant, flat first,
    /// then concave, convex, inset.
    pub fn register<R: UtilityRegistrar>(&self, registrar: &mut R) {
        let palette = flatten_color_palette(self.config.resolve_colors());
        for variant in Variant::ALL {
            let utilities = generate_utilities(variant, &palette, &self.config.sizes);
            registrar.add_utilities(utilities, &self.config.state_variants);
        }
    }

    /// Generates every utility into a fresh [`Stylesheet`].
    pub fn stylesheet(&self) -> Stylesheet {
        let mut sheet = Stylesheet::new();
        self.register(&mut sheet);
        sheet
    }
}
