// pwaicons - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "pwaicons";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "pwaicons";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Icon set
// =============================================================================

/// Canonical PWA icon sizes, in generation order.
pub const DEFAULT_ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Largest accepted icon side length in pixels.
///
/// Keeps every proportional coordinate well inside the range where the
/// shortest round-trip decimal never switches to exponent notation.
pub const MAX_ICON_SIZE: u32 = 8_192;

/// Maximum number of sizes accepted in a single run.
pub const MAX_SIZE_COUNT: usize = 64;

/// Output file name prefix; the full name is `icon-{size}x{size}.svg`.
pub const ICON_FILE_PREFIX: &str = "icon-";

/// Output file extension (without dot).
pub const ICON_FILE_EXTENSION: &str = "svg";

/// MIME type of every generated document.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

// =============================================================================
// Icon palette
// =============================================================================

/// Background gradient start (light green).
pub const BACKGROUND_GRADIENT_START: &str = "#4CAF50";

/// Background gradient end (medium green).
pub const BACKGROUND_GRADIENT_END: &str = "#81C784";

/// Accent gradient start (dark green).
pub const ACCENT_GRADIENT_START: &str = "#2E7D32";

/// Accent gradient end.
pub const ACCENT_GRADIENT_END: &str = "#4CAF50";

/// Fill for the body text bars.
pub const BODY_BAR_FILL: &str = "#666";

/// Font family for the badge and letter glyphs.
pub const GLYPH_FONT_FAMILY: &str = "Arial";

/// Text inside the circular badge.
pub const BADGE_TEXT: &str = "AI";

/// Large letter glyph near the bottom of the canvas.
pub const LETTER_TEXT: &str = "F";

// =============================================================================
// Manifest fragment
// =============================================================================

/// Default file name of the manifest icon fragment.
pub const DEFAULT_MANIFEST_FILE_NAME: &str = "icons.json";

/// Default prefix prepended to each icon file name in the manifest `src`.
pub const DEFAULT_MANIFEST_SRC_PREFIX: &str = "/static/icons/";

/// `purpose` value written for every manifest icon.
pub const MANIFEST_ICON_PURPOSE: &str = "any";

// =============================================================================
// Configuration and logging
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
