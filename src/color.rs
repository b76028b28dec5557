//! Color parsing, normalization, and lightness adjustment.
//!
//! Palette values arrive as CSS literals (`#f56565`, `#fff`, `white`).
//! [`Rgb::parse`] accepts hash and named forms and rejects everything
//! else, including the CSS-wide keywords (`transparent`, `currentColor`,
//! `inherit`, ...) that a shade set cannot be derived from.
//!
//! Shade derivation steers its adjustment amounts by perceived
//! brightness. [`Rgb::is_dark`] and [`Rgb::is_light`] are independent
//! predicates with their own thresholds, consulted separately per
//! derived field; they are not complements of one another.

use std::fmt;

use cssparser::color::{parse_hash_color, parse_named_color};

use crate::error::ColorParseError;

/// Perceived brightness below which a color counts as dark.
pub const DARK_BRIGHTNESS_MAX: f32 = 128.0;

/// Perceived brightness at or above which a color counts as light.
pub const LIGHT_BRIGHTNESS_MIN: f32 = 128.0;

/// An opaque RGB color.
///
/// Alpha is parsed where the syntax carries it (`#rrggbbaa`, `#rgba`) and
/// discarded; generated utilities are opaque surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses a CSS color literal.
    ///
    /// Accepts `#`-prefixed hex in 3, 4, 6, or 8 digit form and the CSS
    /// named colors (case-insensitive). Functional notations and the
    /// CSS-wide keywords are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] carrying the original input when it is
    /// not a recognizable color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use neumorphism::Rgb;
    ///
    /// assert_eq!(Rgb::parse("#fff").unwrap(), Rgb { r: 255, g: 255, b: 255 });
    /// assert_eq!(Rgb::parse("rebeccapurple").unwrap(), Rgb { r: 102, g: 51, b: 153 });
    /// assert!(Rgb::parse("transparent").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let value = input.trim();
        let parsed = match value.strip_prefix('#') {
            Some(hex) => parse_hash_color(hex.as_bytes()).map(|(r, g, b, _alpha)| (r, g, b)),
            None => parse_named_color(value),
        };
        match parsed {
            Ok((r, g, b)) => Ok(Self { r, g, b }),
            Err(()) => Err(ColorParseError::new(input)),
        }
    }

    /// Returns the normalized lowercase `#rrggbb` form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use neumorphism::Rgb;
    ///
    /// assert_eq!(Rgb::parse("#FFF").unwrap().hex(), "#ffffff");
    /// assert_eq!(Rgb::parse("#F56565").unwrap().hex(), "#f56565");
    /// ```
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness on the 0..255 scale.
    ///
    /// Channel-weighted: `(2126*r + 7152*g + 722*b) / 10000`.
    pub fn brightness(self) -> f32 {
        (2126 * self.r as u32 + 7152 * self.g as u32 + 722 * self.b as u32) as f32 / 10000.0
    }

    /// True when brightness falls below [`DARK_BRIGHTNESS_MAX`].
    pub fn is_dark(self) -> bool {
        self.brightness() < DARK_BRIGHTNESS_MAX
    }

    /// True when brightness reaches [`LIGHT_BRIGHTNESS_MIN`].
    pub fn is_light(self) -> bool {
        self.brightness() >= LIGHT_BRIGHTNESS_MIN
    }

    /// Moves HSL lightness toward 0 by `amount` of the remaining distance.
    ///
    /// `amount` is clamped to `0.0..=1.0`; `darken(1.0)` is black.
    ///
    /// # Example
    ///
    /// ```rust
    /// use neumorphism::Rgb;
    ///
    /// let gray = Rgb { r: 128, g: 128, b: 128 };
    /// assert_eq!(gray.darken(0.25).hex(), "#606060");
    /// ```
    pub fn darken(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, l * (1.0 - amount))
    }

    /// Moves HSL lightness toward 1 by `amount` of the remaining distance.
    ///
    /// `amount` is clamped to `0.0..=1.0`; `lighten(1.0)` is white.
    ///
    /// # Example
    ///
    /// ```rust
    /// use neumorphism::Rgb;
    ///
    /// let gray = Rgb { r: 128, g: 128, b: 128 };
    /// assert_eq!(gray.lighten(0.2).hex(), "#999999");
    /// ```
    pub fn lighten(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, l + amount * (1.0 - l))
    }

    /// Hue in degrees, saturation and lightness in `0.0..=1.0`.
    fn to_hsl(self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h * 60.0, s, l)
    }

    fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Self { r: v, g: v, b: v };
        }

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = h / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;

        Self {
            r: ((r + m) * 255.0).round() as u8,
            g: ((g + m) * 255.0).round() as u8,
            b: ((b + m) * 255.0).round() as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}
