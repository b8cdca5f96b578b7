/// File-argument classification and extension-based MIME lookup.
use std::path::{Path, PathBuf};

use url::Url;

/// Classification of one user-supplied file argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileArg {
    /// A plain path, or a `file:` URL resolved to a local path.
    Local(PathBuf),
    /// A URL in any other scheme.
    Remote {
        /// The scheme, lower-cased by the URL parser.
        scheme: String,
    },
}

/// Classify a raw argument as a local path or a remote URL.
///
/// Anything that does not parse as an absolute URL is taken as a local path.
/// A `file:` URL with a foreign authority resolves to an empty path, which
/// fails the existence check downstream.
#[must_use]
pub fn classify(raw: &str) -> FileArg {
    match Url::parse(raw) {
        Ok(url) if url.scheme() == "file" => FileArg::Local(url.to_file_path().unwrap_or_default()),
        Ok(url) => FileArg::Remote {
            scheme: url.scheme().to_owned(),
        },
        Err(_) => FileArg::Local(PathBuf::from(raw)),
    }
}

/// MIME-type name for a local path, by extension only.
///
/// Directories report `inode/directory`; unknown extensions fall back to
/// `application/octet-stream`.
#[must_use]
pub fn mime_type(path: &Path) -> String {
    if path.is_dir() {
        return "inode/directory".to_owned();
    }
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}
