//! # gzip-batch
//!
//! Parallel gzip compression and decompression over glob-matched files.
//!
//! A run takes a [`RunConfig`] (mode, glob pattern, worker count, retention
//! flags), feeds every matched file to a bounded pool of workers, and
//! returns a [`Summary`] with per-file results. One file's failure never
//! affects its siblings; only an invalid pattern aborts a run.

mod config;
mod error;
mod io;
mod operations;
mod process;
mod resolver;
mod summary;


pub use config::{Mode, RunConfig, DEFAULT_BUFFER_SIZE, GZIP_EXTENSION};
pub use error::{Error, Result};
pub use io::{has_gzip_suffix, output_path, wants_transform};
pub use operations::transform_file;
pub use process::{process_paths, run};
pub use resolver::resolve_pattern;
pub use summary::{Outcome, Summary};
