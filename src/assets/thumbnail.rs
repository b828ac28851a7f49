use std::path::{Path, PathBuf};

use base64::Engine as _;

use crate::{
    foundation::error::{VaultError, VaultResult},
    model::playlist::ThumbnailRef,
};

/// Resolves stored thumbnail references into raw image bytes.
///
/// Resolution never fails: anything that cannot be turned into bytes is logged and yields `None`,
/// so the card falls back to the plain gradient.
#[derive(Clone, Debug)]
pub struct ThumbnailStore {
    uploads_root: PathBuf,
}

impl ThumbnailStore {
    /// `uploads_root` is the directory `/uploads/...` references are relative to.
    pub fn new(uploads_root: impl Into<PathBuf>) -> Self {
        Self {
            uploads_root: uploads_root.into(),
        }
    }

    pub fn resolve(&self, thumb: &ThumbnailRef) -> Option<Vec<u8>> {
        match thumb {
            ThumbnailRef::Inline { mime, payload } => {
                match base64::engine::general_purpose::STANDARD.decode(payload.trim()) {
                    Ok(bytes) => {
                        tracing::debug!(mime = %mime, len = bytes.len(), "inline thumbnail decoded");
                        Some(bytes)
                    }
                    Err(err) => {
                        tracing::warn!(mime = %mime, error = %err, "inline thumbnail is not valid base64");
                        None
                    }
                }
            }
            ThumbnailRef::Upload { rel_path } => {
                let path = self.uploads_root.join(Path::new(rel_path));
                match std::fs::read(&path) {
                    Ok(bytes) => Some(bytes),
                    Err(err) => {
                        tracing::warn!(path = %path.display(), error = %err, "uploaded thumbnail unreadable");
                        None
                    }
                }
            }
            ThumbnailRef::Remote { url } => {
                tracing::debug!(url = %url, "remote thumbnails are not fetched");
                None
            }
            ThumbnailRef::Unsupported { raw } => {
                tracing::debug!(reference = %raw, "unsupported thumbnail reference");
                None
            }
        }
    }
}

/// Normalize an uploads-relative path to `/`-separated segments without `.` entries.
///
/// Rooted paths, drive prefixes and `..` segments are refused so a reference can never leave the
/// uploads root.
pub fn normalize_upload_path(source: &str) -> VaultResult<String> {
    let unified = source.trim().replace('\\', "/");
    if unified.starts_with('/') {
        return Err(VaultError::validation("upload paths must be relative"));
    }

    let segments = unified
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .map(|seg| match seg {
            ".." => Err(VaultError::validation("upload paths must not contain '..'")),
            s if s.contains(':') => Err(VaultError::validation(format!(
                "upload path segment '{s}' is not a plain name"
            ))),
            s => Ok(s),
        })
        .collect::<VaultResult<Vec<&str>>>()?;

    if segments.is_empty() {
        return Err(VaultError::validation("upload path names no file"));
    }
    Ok(segments.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/thumbnail.rs"]
mod tests;
