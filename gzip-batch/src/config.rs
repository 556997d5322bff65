//! Configuration types and constants for batch gzip runs.

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// File extension for compressed files
pub const GZIP_EXTENSION: &str = "gz";

/// Direction of the gzip transform applied to every matched file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Compress input files, appending `.gz`
    Compress,
    /// Decompress input files, stripping `.gz`
    Decompress,
}

/// Configuration for one batch run.
///
/// Immutable once built; every worker reads the same instance.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Operation mode
    pub mode: Mode,
    /// Glob pattern selecting the input files
    pub pattern: String,
    /// Number of concurrent workers, always at least 1
    pub threads: usize,
    /// Keep input files after processing
    pub keep_original: bool,
    /// Overwrite existing output files
    pub force: bool,
    /// Per-file progress notes on stderr
    pub verbose: bool,
}

impl RunConfig {
    /// Creates a configuration with a single worker that deletes sources
    /// after a successful transform and fails on output collisions.
    pub fn new(mode: Mode, pattern: impl Into<String>) -> Self {
        Self {
            mode,
            pattern: pattern.into(),
            threads: 1,
            keep_original: false,
            force: false,
            verbose: false,
        }
    }

    /// Sets the worker count. Zero is clamped to 1 here so the pool itself
    /// never has to validate its input.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Keep input files after processing.
    #[must_use]
    pub fn with_keep_original(mut self, keep: bool) -> Self {
        self.keep_original = keep;
        self
    }

    /// Overwrite existing output files instead of failing the job.
    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Emit per-file notes on stderr.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
