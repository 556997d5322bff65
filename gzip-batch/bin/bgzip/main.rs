//! Batch gzip compression utility
//!
//! Compresses every file matching a glob pattern, appending a `.gz`
//! extension to each compressed file.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use gzip_batch::{run, Mode, RunConfig};

#[derive(Debug, Parser)]
#[command(name = "bgzip", version, about)]
struct Args {
    /// The glob pattern to match files against
    pattern: String,

    /// Keep the original files after compression. By default, the original
    /// files are deleted.
    #[arg(short, long)]
    keep_original: bool,

    /// Overwrite existing output files instead of failing those jobs
    #[arg(short, long)]
    force: bool,

    /// The maximum number of workers to split the compression across
    #[arg(short = 'n', long, default_value_t = 1)]
    num_threads: usize,

    /// Print per-file progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let program = "bgzip";

    let config = RunConfig::new(Mode::Compress, args.pattern)
        .with_threads(args.num_threads)
        .with_keep_original(args.keep_original)
        .with_force(args.force)
        .with_verbose(args.verbose);

    let start = Instant::now();
    let code = match run(&config).await {
        Ok(summary) => {
            if summary.report(program, std::io::stderr()).is_err() {
                // A report that could not be written counts as a failed run.
                ExitCode::FAILURE
            } else {
                ExitCode::from(summary.exit_code())
            }
        }
        Err(err) => {
            eprintln!("{program}: {err}");
            ExitCode::FAILURE
        }
    };

    if args.verbose {
        eprintln!("Elapsed time: {} ms", start.elapsed().as_millis());
    }

    code
}
