//! The `!include` resolver.
//!
//! Produces the lines of the included file, directory or URL; the
//! dispatcher then re-enters itself on those lines. HTTPS content is
//! fetched through the opaque [`RemoteLoader`] handler, so the engine
//! itself never talks to the network.

use std::path::{Path, PathBuf};

use super::files;

/// Fetches the body of a URL include. Installed by the caller via
/// [`crate::DslParser::set_remote_loader`]; without one, URL includes
/// fail cleanly.
pub trait RemoteLoader {
    fn fetch(&self, url: &str) -> Result<String, String>;
}

/// The lines produced by one `!include`, with the anchor for relative
/// paths inside them and the key used for cycle detection.
pub(crate) struct IncludedContent {
    pub lines: Vec<String>,
    /// "Current file" while the included lines parse; nested relative
    /// includes resolve against its parent directory.
    pub file: PathBuf,
    /// Canonical identity of what was included.
    pub origin: PathBuf,
}

pub(crate) fn resolve(
    current_file: &Path,
    target: &str,
    remote: Option<&dyn RemoteLoader>,
) -> Result<IncludedContent, String> {
    if target.starts_with("https://") || target.starts_with("http://") {
        let Some(remote) = remote else {
            return Err(format!(
                "Cannot include {target}: no remote loader is configured"
            ));
        };
        let body = remote.fetch(target)?;
        return Ok(IncludedContent {
            lines: files::split_lines(&body),
            file: current_file.to_path_buf(),
            origin: PathBuf::from(target),
        });
    }

    let base = current_file.parent().unwrap_or_else(|| Path::new("."));
    let path = base.join(target);

    if path.is_dir() {
        let mut lines = Vec::new();
        for file in files::collect_file_paths(&path)? {
            lines.extend(files::read_lines(&file)?);
        }
        let origin = canonical(&path);
        // Joining "." makes the directory itself the anchor for
        // relative includes inside the collected files.
        Ok(IncludedContent {
            lines,
            file: path.join("."),
            origin,
        })
    } else if path.is_file() {
        let origin = canonical(&path);
        Ok(IncludedContent {
            lines: files::read_lines(&path)?,
            file: path,
            origin,
        })
    } else {
        Err(format!("{} could not be found", path.display()))
    }
}

pub(crate) fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
