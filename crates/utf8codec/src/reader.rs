//! File-backed stream reader.
//!
//! The whole source is loaded into one buffer and decoded in a single pass;
//! any malformed unit fails the read and nothing decoded so far is returned.

use alloc::vec::Vec;
use std::{fs::File, io::Read, path::Path};

use log::{debug, warn};

use crate::{ReaderOptions, StreamError, decode_buffer};

/// Reads and decodes the file at `path` with default options.
///
/// # Errors
///
/// See [`read_with`].
pub fn read(path: impl AsRef<Path>) -> Result<Vec<char>, StreamError> {
    read_with(path, &ReaderOptions::default())
}

/// Reads and decodes the file at `path`.
///
/// # Errors
///
/// [`StreamError::Io`] if the file cannot be opened or read,
/// [`StreamError::EmptyInput`] or [`StreamError::SizeLimitExceeded`] for a
/// file of unusable size, [`StreamError::ShortRead`] if the file yields fewer
/// bytes than its metadata reports, and [`StreamError::Malformed`] for the
/// first malformed unit.
pub fn read_with(
    path: impl AsRef<Path>,
    options: &ReaderOptions,
) -> Result<Vec<char>, StreamError> {
    let path = path.as_ref();
    let (code_points, size) = File::open(path)
        .and_then(|file| file.metadata().map(|metadata| (file, metadata.len())))
        .map_err(StreamError::from)
        .and_then(|(file, size)| read_from(file, size, options).map(|chars| (chars, size)))
        .inspect_err(|err| {
            warn!("reading {} failed: {err}", path.display());
        })?;
    debug!(
        "read {} code points ({size} bytes) from {}",
        code_points.len(),
        path.display()
    );
    Ok(code_points)
}

/// Reads exactly `size` bytes from `source` and decodes them.
///
/// # Errors
///
/// As [`read_with`], with `size` standing in for the file length.
pub fn read_from<R: Read>(
    source: R,
    size: u64,
    options: &ReaderOptions,
) -> Result<Vec<char>, StreamError> {
    if size == 0 {
        return Err(StreamError::EmptyInput);
    }
    let limit = options.max_input_size;
    let too_large = StreamError::SizeLimitExceeded { size, limit };
    if size > limit {
        return Err(too_large);
    }
    let Ok(capacity) = usize::try_from(size) else {
        return Err(too_large);
    };

    let mut buffer = Vec::with_capacity(capacity);
    let actual = source.take(size).read_to_end(&mut buffer)? as u64;
    if actual != size {
        return Err(StreamError::ShortRead {
            expected: size,
            actual,
        });
    }

    Ok(decode_buffer(&buffer)?)
}
