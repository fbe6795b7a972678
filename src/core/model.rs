// pwaicons - core/model.rs
//
// Core data types: validated icon sizes, proportional coordinates, and the
// rendered document.

use crate::util::constants;
use crate::util::error::IconError;
use std::fmt;

// =============================================================================
// IconSize
// =============================================================================

/// Side length of a square icon in pixels.
///
/// Always in `1..=MAX_ICON_SIZE`; the only way to obtain one is through the
/// validating constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IconSize(u32);

impl IconSize {
    /// Validate a raw integer as an icon size.
    pub fn new(value: i64) -> Result<Self, IconError> {
        if value <= 0 {
            return Err(IconError::invalid_size(value, "size must be positive"));
        }
        if value > i64::from(constants::MAX_ICON_SIZE) {
            return Err(IconError::invalid_size(
                value,
                "size exceeds the maximum supported icon size",
            ));
        }
        Ok(Self(value as u32))
    }

    /// Pixel side length.
    pub fn px(self) -> u32 {
        self.0
    }

    /// `size * factor` as a double-precision product.
    pub fn scale(self, factor: f64) -> Scaled {
        Scaled(f64::from(self.0) * factor)
    }

    /// `size // divisor` (floor division).
    pub fn floor_div(self, divisor: u32) -> u32 {
        self.0 / divisor
    }

    /// `"{size}x{size}"`, as used in file names and manifest entries.
    pub fn dimensions(self) -> String {
        format!("{0}x{0}", self.0)
    }

    /// Output file name, `icon-{size}x{size}.svg`.
    pub fn file_name(self) -> String {
        format!(
            "{}{}.{}",
            constants::ICON_FILE_PREFIX,
            self.dimensions(),
            constants::ICON_FILE_EXTENSION
        )
    }

    /// The canonical PWA size set.
    pub fn defaults() -> Vec<Self> {
        constants::DEFAULT_ICON_SIZES
            .iter()
            .map(|&s| Self(s))
            .collect()
    }
}

impl TryFrom<i64> for IconSize {
    type Error = IconError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u32> for IconSize {
    type Error = IconError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Scaled
// =============================================================================

/// A fractional coordinate derived from an icon size.
///
/// Formats as the shortest decimal that round-trips to the same double, and
/// keeps a trailing `.0` on integral values (`50.0`, not `50`). `f64`'s Debug
/// output has exactly this shape for the magnitudes icons produce.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scaled(pub f64);

impl fmt::Display for Scaled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

// =============================================================================
// IconDocument
// =============================================================================

/// A rendered SVG icon. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDocument {
    size: IconSize,
    markup: String,
}

impl IconDocument {
    pub(crate) fn new(size: IconSize, markup: String) -> Self {
        Self { size, markup }
    }

    pub fn size(&self) -> IconSize {
        self.size
    }

    /// The SVG markup.
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.markup.as_bytes()
    }

    pub fn content_type(&self) -> &'static str {
        constants::SVG_CONTENT_TYPE
    }

    pub fn file_name(&self) -> String {
        self.size.file_name()
    }

    pub fn into_string(self) -> String {
        self.markup
    }
}

impl fmt::Display for IconDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}
