//! File identifier validation and preview URL construction.
//!
//! A file identifier is the path segment in `/preview/{id}`. Hosted file IDs
//! are usually 25-44 characters, but anything between [`MIN_LEN`] and
//! [`MAX_LEN`] characters drawn from `[A-Za-z0-9_-]` is accepted.

use std::fmt;

use crate::error::PreviewError;

/// Minimum accepted identifier length (inclusive).
pub const MIN_LEN: usize = 10;

/// Maximum accepted identifier length (inclusive).
pub const MAX_LEN: usize = 100;

/// Default host serving the embeddable preview.
pub const DEFAULT_EMBED_HOST: &str = "https://drive.google.com";

/// Check whether a candidate string looks like a hosted file identifier.
///
/// Returns `false` for absent or empty input, for lengths outside
/// `[MIN_LEN, MAX_LEN]`, and for any character outside `[A-Za-z0-9_-]`.
pub fn is_valid_file_id(candidate: Option<&str>) -> bool {
    let Some(id) = candidate else {
        return false;
    };

    // All accepted characters are ASCII, so byte length is character length
    // for anything that passes the class check below.
    if id.len() < MIN_LEN || id.len() > MAX_LEN {
        return false;
    }

    id.bytes().all(is_id_byte)
}

fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// A validated file identifier.
///
/// Only constructible through [`FileId::parse`], so holding one means the
/// value already passed [`is_valid_file_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(String);

impl FileId {
    /// Validate and wrap a raw path segment.
    pub fn parse(raw: &str) -> Result<Self, PreviewError> {
        if is_valid_file_id(Some(raw)) {
            Ok(Self(raw.to_string()))
        } else {
            Err(PreviewError::InvalidIdentifier(raw.to_string()))
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the embeddable preview, e.g.
    /// `https://drive.google.com/file/d/{id}/preview`.
    pub fn embed_url(&self, host: &str) -> String {
        format!("{host}/file/d/{}/preview", self.0)
    }

    /// URL for opening the document on the host itself.
    pub fn view_url(&self, host: &str) -> String {
        format!("{host}/file/d/{}/view", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
