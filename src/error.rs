//! Color parsing errors.

use thiserror::Error;

/// Error returned when a palette value cannot be interpreted as a color.
///
/// Carries the offending string so callers can report which entry was
/// skipped. Shade derivation surfaces this error; utility generation
/// converts it into a per-color skip rather than aborting the pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color value '{value}'")]
pub struct ColorParseError {
    /// The string that failed to parse.
    pub value: String,
}

impl ColorParseError {
    pub(crate) fn new<V: Into<String>>(value: V) -> Self {
        Self {
            value: value.into(),
        }
    }
}
