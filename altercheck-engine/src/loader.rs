//! Query source loading. No parsing happens here.

use std::io;
use std::path::{Path, PathBuf};

/// Read one query source. `None` means the file is absent; "found but
/// empty" is a `Some` the caller classifies.
pub fn load_source(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read query source");
            None
        }
    }
}

/// Read each source into a raw statement string, index-aligned with
/// `paths`. Missing files yield `None` at their index rather than an
/// error so one absent source cannot fail the whole batch.
pub fn load_sources(paths: &[PathBuf]) -> Vec<Option<String>> {
    paths.iter().map(|path| load_source(path)).collect()
}
