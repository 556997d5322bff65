//! Path derivation and candidate filtering for batch gzip runs.

use std::path::{Path, PathBuf};

use crate::config::{Mode, GZIP_EXTENSION};

/// Checks if a file path ends with the gzip suffix.
pub fn has_gzip_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.len() > GZIP_EXTENSION.len() + 1
                && name.to_ascii_lowercase().ends_with(&format!(".{GZIP_EXTENSION}"))
        })
}

/// Checks whether a matched path is worth feeding to the codec at all.
///
/// Compression skips files that already carry the gzip suffix; decompression
/// skips files that lack it. Skipped matches are successful no-ops, never
/// errors.
pub fn wants_transform(path: &Path, mode: Mode) -> bool {
    match mode {
        Mode::Compress => !has_gzip_suffix(path),
        Mode::Decompress => has_gzip_suffix(path),
    }
}

/// Derives the output path for a transform.
///
/// Compression appends `.gz` to the full file name, preserving any existing
/// extension. Decompression strips one trailing `.gz` (any letter case);
/// `None` means the name has no usable suffix, or nothing would be left of
/// it after stripping, and the file cannot be decompressed in place.
pub fn output_path(path: &Path, mode: Mode) -> Option<PathBuf> {
    match mode {
        Mode::Compress => {
            let mut name = path.as_os_str().to_os_string();
            name.push(format!(".{GZIP_EXTENSION}"));
            Some(PathBuf::from(name))
        }
        Mode::Decompress => {
            // Strip with the same case-insensitive rule the suffix check
            // uses, so every candidate gets an output name. The suffix is
            // ASCII, so slicing it off cannot split a character.
            if !has_gzip_suffix(path) {
                return None;
            }
            let name = path.file_name()?.to_str()?;
            let stem = name.get(..name.len() - (GZIP_EXTENSION.len() + 1))?;
            Some(path.with_file_name(stem))
        }
    }
}
