use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, trace};

use crate::config::{AppendConfig, WriteMode, PAYLOAD};
use crate::error::AppendError;

/**
 * @brief Open an existing file for append-only writing.
 * @param path File to open. It is never created or truncated.
 * @return Write-only handle positioned at end of file on every write.
 */
pub fn open_target(path: &Path) -> Result<File, AppendError> {
    OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| {
            debug!("open {} failed: {}", path.display(), source);
            AppendError::Open { path: path.to_path_buf(), source }
        })
}

/**
 * @brief Write the payload once, or until fully accepted.
 * @param out Destination handle.
 * @param payload Bytes to write.
 * @param mode `Single` issues one write and accepts a short count; `Full` loops.
 * @return Number of bytes the destination accepted.
 */
pub fn write_payload<W: Write>(out: &mut W, payload: &[u8], mode: WriteMode) -> io::Result<usize> {
    match mode {
        WriteMode::Single => out.write(payload),
        WriteMode::Full => out.write_all(payload).map(|()| payload.len()),
    }
}

/**
 * @brief Flush file data and metadata to the device.
 * @param file Handle returned by `open_target`.
 */
pub fn sync_target(file: &File) -> io::Result<()> {
    file.sync_all()
}

/**
 * @brief Append `PAYLOAD` to `cfg.target`, stopping at the first failure.
 * @param cfg Target, write mode and sync flag.
 * @return Bytes written on success.
 */
pub fn append_once(cfg: &AppendConfig) -> Result<usize, AppendError> {
    let write_err = |source: io::Error| {
        debug!("write to {} failed: {}", cfg.target.display(), source);
        AppendError::Write { path: cfg.target.clone(), source }
    };

    let mut file = open_target(&cfg.target)?;
    let written = write_payload(&mut file, PAYLOAD, cfg.mode).map_err(write_err)?;
    if written < PAYLOAD.len() {
        // Single mode only: a short count is not treated as an error.
        debug!("short write to {}: {} of {} bytes", cfg.target.display(), written, PAYLOAD.len());
    }
    if cfg.sync {
        sync_target(&file).map_err(write_err)?;
    }
    trace!("appended {} bytes to {}", written, cfg.target.display());
    Ok(written)
}
