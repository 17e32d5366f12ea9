//! File-backed stream writer.
//!
//! Units are written back to back with no framing, followed by a single line
//! feed.

use alloc::vec::Vec;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, warn};

use crate::{EncodingUnit, StreamError, WriteMode, WriterOptions, encode_char, validate};

/// Writes `units` to `path` with default options, replacing any existing file.
///
/// # Errors
///
/// See [`write_with`].
pub fn write(path: impl AsRef<Path>, units: &[EncodingUnit]) -> Result<(), StreamError> {
    write_with(path, units, &WriterOptions::default())
}

/// Writes `units` to `path`, replacing any existing file, and appends a line
/// feed.
///
/// In [`WriteMode::Buffered`] every unit is validated before the destination
/// is opened, so a rejected sequence leaves an existing file untouched. In
/// [`WriteMode::Streaming`] the destination is truncated first and units are
/// written as they validate; on failure it may hold a prefix of the output.
///
/// # Errors
///
/// [`StreamError::InvalidUnit`] for the first unit that fails
/// [`validate`], [`StreamError::Io`] if the destination cannot be created or
/// written.
pub fn write_with(
    path: impl AsRef<Path>,
    units: &[EncodingUnit],
    options: &WriterOptions,
) -> Result<(), StreamError> {
    let path = path.as_ref();
    let result = match options.mode {
        WriteMode::Buffered => serialize(units).and_then(|bytes| {
            let mut file = File::create(path)?;
            file.write_all(&bytes)?;
            file.flush()?;
            Ok(bytes.len())
        }),
        WriteMode::Streaming => File::create(path)
            .map_err(StreamError::from)
            .and_then(|file| stream(BufWriter::new(file), units)),
    };

    match result {
        Ok(written) => {
            debug!(
                "wrote {} units ({written} bytes) to {}",
                units.len(),
                path.display()
            );
            Ok(())
        }
        Err(err) => {
            warn!("writing {} failed: {err}", path.display());
            Err(err)
        }
    }
}

/// Writes `units` and a trailing line feed to `sink`.
///
/// # Errors
///
/// As [`write_with`].
pub fn write_to<W: Write>(
    mut sink: W,
    units: &[EncodingUnit],
    options: &WriterOptions,
) -> Result<(), StreamError> {
    match options.mode {
        WriteMode::Buffered => {
            let bytes = serialize(units)?;
            sink.write_all(&bytes)?;
            sink.flush()?;
        }
        WriteMode::Streaming => {
            stream(sink, units)?;
        }
    }
    Ok(())
}

fn check(index: usize, unit: &EncodingUnit) -> Result<(), StreamError> {
    validate(unit).map_err(|source| StreamError::InvalidUnit { index, source })
}

/// Encodes the full output, line feed included, or fails without output.
fn serialize(units: &[EncodingUnit]) -> Result<Vec<u8>, StreamError> {
    let mut bytes = Vec::with_capacity(units.iter().map(EncodingUnit::len).sum::<usize>() + 1);
    for (index, unit) in units.iter().enumerate() {
        check(index, unit)?;
        bytes.extend_from_slice(unit.as_bytes());
    }
    bytes.extend_from_slice(encode_char('\n').as_bytes());
    Ok(bytes)
}

fn stream<W: Write>(mut sink: W, units: &[EncodingUnit]) -> Result<usize, StreamError> {
    let mut written = 0;
    for (index, unit) in units.iter().enumerate() {
        check(index, unit)?;
        sink.write_all(unit.as_bytes())?;
        written += unit.len();
    }
    let line_feed = encode_char('\n');
    sink.write_all(line_feed.as_bytes())?;
    sink.flush()?;
    Ok(written + line_feed.len())
}
