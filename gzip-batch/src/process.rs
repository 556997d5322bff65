//! Worker pool orchestration for batch runs.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::io::{output_path, wants_transform};
use crate::operations::transform_file;
use crate::resolver::resolve_pattern;
use crate::summary::{Outcome, Summary};

/// Runs one batch: resolves the pattern, processes every match, and returns
/// the aggregated summary.
///
/// Once jobs are running, every per-file error is captured in that file's
/// outcome and the run always completes with a summary covering all matched
/// paths.
///
/// # Errors
///
/// Returns [`Error::Pattern`] if the glob pattern is invalid; nothing else
/// fails the call itself.
pub async fn run(config: &RunConfig) -> Result<Summary> {
    let paths = resolve_pattern(&config.pattern)?;
    Ok(process_paths(config, paths).await)
}

/// Drives `config.threads` workers over an already-resolved path list.
///
/// The workers share one job source, so each path is claimed by exactly one
/// worker and at most `config.threads` files are being transformed at any
/// moment. Outcomes are reported over a channel and merged into the summary
/// by this task alone; completion order is not defined.
pub async fn process_paths(config: &RunConfig, paths: Vec<PathBuf>) -> Summary {
    let mut summary = Summary::default();
    if paths.is_empty() {
        return summary;
    }

    let jobs = Arc::new(Mutex::new(paths.into_iter()));
    let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
    let config = Arc::new(config.clone());

    let mut workers = JoinSet::new();
    for _ in 0..config.threads {
        let jobs = Arc::clone(&jobs);
        let outcome_tx = outcome_tx.clone();
        let config = Arc::clone(&config);
        workers.spawn(async move {
            while let Some(path) = next_job(&jobs) {
                let outcome = process_file(path, &config).await;
                if outcome_tx.send(outcome).is_err() {
                    break;
                }
            }
        });
    }
    drop(outcome_tx);

    // The channel closes once the last worker drops its sender.
    while let Some(outcome) = outcome_rx.recv().await {
        summary.record(outcome);
    }
    while workers.join_next().await.is_some() {}

    summary
}

/// Hands out the next unclaimed path, if any.
fn next_job(jobs: &Mutex<std::vec::IntoIter<PathBuf>>) -> Option<PathBuf> {
    jobs.lock().ok()?.next()
}

/// Processes one job end to end and converts the result into its outcome.
async fn process_file(path: PathBuf, config: &RunConfig) -> Outcome {
    match try_process_file(&path, config).await {
        Ok(()) => Outcome::success(path),
        Err(error) => Outcome::failure(path, error),
    }
}

async fn try_process_file(path: &Path, config: &RunConfig) -> Result<()> {
    // Matches that are not regular files, or that already have (compress) /
    // lack (decompress) the gzip suffix, are successful no-ops. This mirrors
    // running gzip over a directory full of mixed files.
    if !is_regular_file(path).await || !wants_transform(path, config.mode) {
        if config.verbose {
            eprintln!("Skipping {}", path.display());
        }
        return Ok(());
    }

    let Some(output) = output_path(path, config.mode) else {
        // Nothing would be left of the name after stripping the suffix.
        if config.verbose {
            eprintln!("Skipping {}", path.display());
        }
        return Ok(());
    };

    let bytes_written = transform_file(path, &output, config).await?;
    if config.verbose {
        eprintln!(
            "{} -> {} ({bytes_written} bytes)",
            path.display(),
            output.display()
        );
    }

    // The source goes away only once the output is fully in place; a failed
    // removal fails the whole job, since the original was meant to be gone.
    if !config.keep_original {
        tokio::fs::remove_file(path)
            .await
            .map_err(|source| Error::RemoveFile {
                path: path.to_path_buf(),
                source,
            })?;

        if config.verbose {
            eprintln!("Removed input file: {}", path.display());
        }
    }

    Ok(())
}

async fn is_regular_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}
