// pwaicons - app/generate.rs
//
// Batch driver: renders each requested size and writes it to the output
// directory, one size at a time, in input order.
//
// Failure policy: continue-and-report. A size that cannot be rendered or
// written is recorded and the remaining sizes are still processed; the batch
// then fails with every per-size error attached.

use crate::core::manifest;
use crate::core::model::IconSize;
use crate::core::render;
use crate::platform::fs;
use crate::util::error::{IconError, Result};
use std::path::{Path, PathBuf};

/// Progress events delivered to the caller's observer, in order.
#[derive(Debug)]
pub enum Progress<'a> {
    /// An icon was written and its file closed.
    Written { size: IconSize, path: &'a Path },
    /// A size failed; later sizes are still attempted.
    Failed { size: i64, error: &'a IconError },
    /// Every size succeeded. Never sent when any size failed.
    Completed { count: usize },
}

/// A successfully written icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: IconSize,
    pub path: PathBuf,
}

/// Output path for one size: `output_dir/icon-{size}x{size}.svg`.
pub fn icon_path(output_dir: &Path, size: IconSize) -> PathBuf {
    output_dir.join(size.file_name())
}

/// Render and write a single icon.
pub fn generate_one(size: i64, output_dir: &Path) -> Result<GeneratedIcon> {
    let document = render::render(size)?;
    let size = document.size();
    let path = icon_path(output_dir, size);
    fs::write_bytes(&path, Some(size.px()), document.as_bytes())?;
    Ok(GeneratedIcon { size, path })
}

/// Generate every size in `sizes` into `output_dir`.
///
/// `output_dir` must already exist. On full success returns the written icons
/// in input order. If any size fails, returns `IconError::Batch` after all
/// sizes have been attempted.
pub fn generate_all<F>(sizes: &[i64], output_dir: &Path, mut on_progress: F) -> Result<Vec<GeneratedIcon>>
where
    F: FnMut(Progress<'_>),
{
    tracing::info!(
        count = sizes.len(),
        output_dir = %output_dir.display(),
        "Generating icons"
    );

    let mut generated = Vec::with_capacity(sizes.len());
    let mut failures = Vec::new();

    for &size in sizes {
        match generate_one(size, output_dir) {
            Ok(icon) => {
                tracing::debug!(size = icon.size.px(), path = %icon.path.display(), "Icon written");
                on_progress(Progress::Written {
                    size: icon.size,
                    path: &icon.path,
                });
                generated.push(icon);
            }
            Err(error) => {
                tracing::warn!(size, error = %error, "Icon generation failed");
                on_progress(Progress::Failed {
                    size,
                    error: &error,
                });
                failures.push(error);
            }
        }
    }

    if failures.is_empty() {
        on_progress(Progress::Completed {
            count: generated.len(),
        });
        Ok(generated)
    } else {
        Err(IconError::Batch {
            total: sizes.len(),
            failures,
        })
    }
}

/// Write the manifest `icons` fragment for `icons` to `output_dir/file_name`.
pub fn write_manifest(
    icons: &[GeneratedIcon],
    output_dir: &Path,
    file_name: &str,
    src_prefix: &str,
) -> Result<PathBuf> {
    let sizes: Vec<IconSize> = icons.iter().map(|i| i.size).collect();
    let entries = manifest::manifest_icons(&sizes, src_prefix);
    let path = output_dir.join(file_name);

    let count = fs::write_with(&path, None, |w| {
        manifest::write_fragment(&entries, w, &path).map_err(IconError::from)
    })?;

    tracing::info!(path = %path.display(), entries = count, "Manifest fragment written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_path_joins_file_name() {
        let size = IconSize::new(144).unwrap();
        assert_eq!(
            icon_path(Path::new("out"), size),
            Path::new("out").join("icon-144x144.svg")
        );
    }

    #[test]
    fn progress_order_matches_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut seen = Vec::new();
        generate_all(&[512, 72, 96], dir.path(), |p| {
            if let Progress::Written { size, .. } = p {
                seen.push(size.px());
            }
        })
        .unwrap();
        assert_eq!(seen, vec![512, 72, 96]);
    }

    #[test]
    fn invalid_size_does_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let mut completed = false;
        let mut failed = Vec::new();
        let err = generate_all(&[72, 0, 96], dir.path(), |p| match p {
            Progress::Failed { size, error } => {
                assert!(error.is_invalid_argument());
                failed.push(size);
            }
            Progress::Completed { .. } => completed = true,
            Progress::Written { .. } => {}
        })
        .unwrap_err();

        assert_eq!(failed, vec![0]);
        assert!(!completed, "banner must not be sent on partial failure");
        assert!(dir.path().join("icon-72x72.svg").exists());
        assert!(dir.path().join("icon-96x96.svg").exists());
        match err {
            IconError::Batch { total, failures } => {
                assert_eq!(total, 3);
                assert_eq!(failures.len(), 1);
            }
            other => panic!("expected Batch, got {other:?}"),
        }
    }

    #[test]
    fn manifest_lists_generated_icons() {
        let dir = tempfile::tempdir().unwrap();
        let icons = generate_all(&[72, 192], dir.path(), |_| {}).unwrap();
        let path = write_manifest(&icons, dir.path(), "icons.json", "/static/icons/").unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        let entries = value["icons"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["src"], "/static/icons/icon-192x192.svg");
    }
}
