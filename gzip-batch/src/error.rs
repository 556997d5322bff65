//! Error types for batch gzip operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for batch gzip operations.
///
/// Only [`Error::Pattern`] is fatal to a whole run; every other variant is
/// scoped to a single file and ends up in that file's outcome.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid glob pattern syntax
    #[error("{pattern}: {source}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Underlying glob error
        #[source]
        source: glob::PatternError,
    },

    /// Failed to open input file
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output file already exists
    #[error("{}: Output file already exists", path.display())]
    OutputExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Compression operation failed
    #[error("{}: Compression failed: {source}", path.display())]
    Compression {
        /// Path to the file being compressed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Decompression operation failed (including malformed gzip framing)
    #[error("{}: Decompression failed: {source}", path.display())]
    Decompression {
        /// Path to the file being decompressed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to rename the finished temporary file onto the output path
    #[error("{}: Cannot finalize output: {source}", path.display())]
    Persist {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to remove input file after a successful transform
    #[error("{}: Cannot remove: {source}", path.display())]
    RemoveFile {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// General I/O error
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Specialized `Result` type for batch gzip operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(source: io::Error) -> Self {
        Error::Io { source }
    }
}

impl Error {
    /// True for errors that abort the whole run before any job starts.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Pattern { .. })
    }
}
