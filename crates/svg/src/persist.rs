use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::RenderError;

/// Replace the file at `path` with `markup` in one step.
///
/// The markup goes to a temporary file beside the target which is then
/// renamed over it, so a failed write never leaves a truncated document.
pub(crate) fn write_atomic(path: &Path, markup: &str) -> Result<(), RenderError> {
    let fail = |source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(fail)?;
    file.write_all(markup.as_bytes()).map_err(fail)?;
    file.persist(path).map_err(|e| fail(e.error))?;
    Ok(())
}
