// pwaicons - core/manifest.rs
//
// PWA web-app-manifest `icons` fragment for a generated icon set.
// Core layer: serialises to any Write trait object.

use crate::core::model::IconSize;
use crate::util::constants;
use crate::util::error::ManifestError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One entry of a web app manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub purpose: String,
}

/// Top-level shape of the fragment file: `{ "icons": [...] }`.
#[derive(Debug, Serialize)]
struct Fragment<'a> {
    icons: &'a [ManifestIcon],
}

/// Build manifest entries for `sizes`, in order.
///
/// `src_prefix` is prepended verbatim to each file name, so it should end with
/// `/` when it names a directory.
pub fn manifest_icons(sizes: &[IconSize], src_prefix: &str) -> Vec<ManifestIcon> {
    sizes
        .iter()
        .map(|size| ManifestIcon {
            src: format!("{src_prefix}{}", size.file_name()),
            sizes: size.dimensions(),
            mime_type: constants::SVG_CONTENT_TYPE.to_string(),
            purpose: constants::MANIFEST_ICON_PURPOSE.to_string(),
        })
        .collect()
}

/// Serialise the fragment as pretty-printed JSON.
///
/// `path` is only used for error context.
pub fn write_fragment<W: Write>(
    icons: &[ManifestIcon],
    writer: W,
    path: &Path,
) -> Result<usize, ManifestError> {
    serde_json::to_writer_pretty(writer, &Fragment { icons }).map_err(|e| ManifestError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(icons.len())
}
