//! Per-file outcomes and the run summary built from them.

use std::io::Write;
use std::path::PathBuf;

use crate::error::Error;

/// The result of processing one matched path.
///
/// Exactly one outcome is produced per matched path, by the worker that
/// owned the job.
#[derive(Debug)]
pub struct Outcome {
    /// The matched source path
    pub path: PathBuf,
    /// `Ok` for a completed (or skipped no-op) transform, `Err` otherwise
    pub status: Result<(), Error>,
}

impl Outcome {
    pub fn success(path: PathBuf) -> Self {
        Self {
            path,
            status: Ok(()),
        }
    }

    pub fn failure(path: PathBuf, error: Error) -> Self {
        Self {
            path,
            status: Err(error),
        }
    }
}

/// Aggregated result of a whole batch run.
///
/// `succeeded + failed == total` once every job is accounted for; failures
/// keep their arrival order.
#[derive(Debug, Default)]
pub struct Summary {
    /// Number of matched paths
    pub total: usize,
    /// Jobs that completed
    pub succeeded: usize,
    /// Jobs that failed
    pub failed: usize,
    /// One entry per failed job, in completion order
    pub failures: Vec<(PathBuf, Error)>,
}

impl Summary {
    /// Merges one outcome into the summary.
    pub fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome.status {
            Ok(()) => self.succeeded += 1,
            Err(error) => {
                self.failed += 1;
                self.failures.push((outcome.path, error));
            }
        }
    }

    /// Process exit code derived from the run: 0 iff no file failed.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.failed > 0)
    }

    /// Writes one line per failure, prefixed with the program name.
    pub fn report(&self, program: &str, mut out: impl Write) -> std::io::Result<()> {
        // Every error message already carries its path.
        for (_path, error) in &self.failures {
            writeln!(out, "{program}: {error}")?;
        }
        Ok(())
    }
}
