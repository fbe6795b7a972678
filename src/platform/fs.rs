// pwaicons - platform/fs.rs
//
// Scoped file writes. The file handle is owned by the function that opens it,
// so it is closed on every exit path; buffered data is flushed explicitly so
// that flush failures surface as errors instead of being lost in Drop.

use crate::util::error::IconError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Create (or truncate) `path`, hand a buffered writer to `body`, then flush.
///
/// `size` is attached to any I/O error so batch reports can name the icon.
/// Errors returned by `body` are passed through unchanged.
pub fn write_with<T, F>(path: &Path, size: Option<u32>, body: F) -> Result<T, IconError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T, IconError>,
{
    let io_err = move |operation: &'static str| {
        move |source: std::io::Error| IconError::Io {
            path: path.to_path_buf(),
            size,
            operation,
            source,
        }
    };

    let file = File::create(path).map_err(io_err("create"))?;
    let mut writer = BufWriter::new(file);
    let value = body(&mut writer)?;
    writer.flush().map_err(io_err("flush"))?;
    let file = writer
        .into_inner()
        .map_err(|e| io_err("flush")(e.into_error()))?;
    drop(file);

    tracing::trace!(path = %path.display(), "File closed");
    Ok(value)
}

/// Write `bytes` to `path` in one scoped operation.
pub fn write_bytes(path: &Path, size: Option<u32>, bytes: &[u8]) -> Result<(), IconError> {
    write_with(path, size, |w| {
        w.write_all(bytes).map_err(|source| IconError::Io {
            path: path.to_path_buf(),
            size,
            operation: "write",
            source,
        })
    })
}
