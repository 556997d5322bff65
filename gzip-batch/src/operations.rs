//! Streaming gzip transforms for single files.

use std::path::Path;

use async_compression::tokio::bufread::{GzipDecoder, GzipEncoder};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufReader, BufWriter};

use crate::config::{Mode, RunConfig, DEFAULT_BUFFER_SIZE};
use crate::error::{Error, Result};

/// Streams one file through the gzip codec into `output`.
///
/// The transformed bytes are written to a temporary file in the output's
/// directory and renamed onto `output` only after the whole stream finished
/// without error, so a failed job never truncates or half-writes the output
/// path. On failure the temporary file is removed.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - `output` already exists and `config.force` is not set
/// - The input file cannot be opened or read
/// - The temporary file cannot be created in the output's directory
/// - The gzip transform fails, including malformed framing on decompression
/// - The finished temporary file cannot be renamed onto `output`
pub async fn transform_file(path: &Path, output: &Path, config: &RunConfig) -> Result<u64> {
    if !config.force && tokio::fs::try_exists(output).await.unwrap_or(false) {
        return Err(Error::OutputExists {
            path: output.to_path_buf(),
        });
    }

    let input = File::open(path).await.map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, input);

    // The temp file lives next to the output so the final rename stays on
    // one filesystem; dropping it on any error path unlinks it.
    let dir = output
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let temp = tempfile::Builder::new()
        .prefix(".gzip-batch.")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|source| Error::CreateOutput {
            path: output.to_path_buf(),
            source,
        })?;
    let temp_file = temp.reopen().map_err(|source| Error::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, File::from_std(temp_file));

    let codec_error = |source| match config.mode {
        Mode::Compress => Error::Compression {
            path: path.to_path_buf(),
            source,
        },
        Mode::Decompress => Error::Decompression {
            path: path.to_path_buf(),
            source,
        },
    };

    let bytes_written = match config.mode {
        Mode::Compress => {
            let mut encoder = GzipEncoder::new(reader);
            tokio::io::copy(&mut encoder, &mut writer).await
        }
        Mode::Decompress => {
            let mut decoder = GzipDecoder::new(reader);
            tokio::io::copy(&mut decoder, &mut writer).await
        }
    }
    .map_err(codec_error)?;

    writer.shutdown().await.map_err(codec_error)?;

    temp.persist(output).map_err(|err| Error::Persist {
        path: output.to_path_buf(),
        source: err.error,
    })?;

    Ok(bytes_written)
}
