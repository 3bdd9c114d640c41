//! Binary file I/O for interleave
//!
//! Loads whole files into a [`ByteBuffer`] and writes buffers back out.
//! Every failure is classified as a [`FileError`]. File handles are scoped
//! to the call that opened them and are closed on every return path.

use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::engine::buffer::ByteBuffer;
use crate::error::FileError;

/// Load an entire file into memory
///
/// # Arguments
/// * `path` - Path to the file to read
///
/// # Returns
/// * `Ok(ByteBuffer)` - Buffer whose length equals the on-disk size
/// * `Err(FileError)` - Classified failure
///
/// # Errors
/// * `OpenFailed` - The file cannot be opened or is not a regular file
/// * `SizeInvalid` - The file is empty
/// * `AllocationFailed` - No memory for a buffer of the file's size
/// * `IncompleteTransfer` - Fewer bytes were read than the file's size
pub fn load_binary_file(path: &Path) -> std::result::Result<ByteBuffer, FileError> {
    let mut file = File::open(path).map_err(|source| FileError::OpenFailed { source })?;

    let metadata = file
        .metadata()
        .map_err(|source| FileError::OpenFailed { source })?;
    if !metadata.is_file() {
        return Err(FileError::OpenFailed {
            source: std::io::Error::new(ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    let size = metadata.len();
    if size == 0 {
        return Err(FileError::SizeInvalid);
    }

    let buffer = read_into(&mut file, size)?;

    info!("Loaded {} bytes from {}", size, path.display());
    Ok(buffer)
}

/// Write a buffer to a file, creating or truncating it
///
/// The caller keeps ownership of the buffer.
///
/// # Errors
/// * `OpenFailed` - The file cannot be created
/// * `IncompleteTransfer` - Not every byte reached the file
pub fn save_binary_file(buffer: &[u8], path: &Path) -> std::result::Result<(), FileError> {
    let mut file = File::create(path).map_err(|source| FileError::OpenFailed { source })?;

    write_from(&mut file, buffer)?;

    info!("Saved {} bytes to {}", buffer.len(), path.display());
    Ok(())
}

/// Test whether a path can be opened for reading
///
/// Only probes the path; nothing is read. The answer can be stale by the
/// time the caller acts on it.
pub fn file_exists(path: &Path) -> bool {
    let exists = File::open(path).is_ok();
    debug!("Existence probe {}: {}", path.display(), exists);
    exists
}

// ============================================================================
// Internal helper functions
// ============================================================================

/// Read exactly `size` bytes from `reader` into a fresh zeroed buffer
fn read_into<R: Read>(reader: &mut R, size: u64) -> std::result::Result<ByteBuffer, FileError> {
    let len = usize::try_from(size).map_err(|_| FileError::AllocationFailed { bytes: size })?;
    let mut buffer =
        ByteBuffer::zeroed(len).map_err(|_| FileError::AllocationFailed { bytes: size })?;

    let read = read_fully(reader, buffer.as_mut_slice())?;
    if read != len {
        return Err(FileError::IncompleteTransfer {
            expected: len,
            actual: read,
            source: None,
        });
    }
    Ok(buffer)
}

/// Write all of `buf` to `writer` and flush it
fn write_from<W: Write>(writer: &mut W, buf: &[u8]) -> std::result::Result<(), FileError> {
    let written = write_fully(writer, buf)?;
    if written != buf.len() {
        return Err(FileError::IncompleteTransfer {
            expected: buf.len(),
            actual: written,
            source: None,
        });
    }

    writer.flush().map_err(|source| FileError::IncompleteTransfer {
        expected: buf.len(),
        actual: written,
        source: Some(source),
    })
}

/// Read until `buf` is full or the reader hits end of stream
fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::result::Result<usize, FileError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(FileError::IncompleteTransfer {
                    expected: buf.len(),
                    actual: filled,
                    source: Some(e),
                })
            }
        }
    }
    Ok(filled)
}

/// Write all of `buf`, stopping early if the writer accepts no more bytes
fn write_fully<W: Write>(writer: &mut W, buf: &[u8]) -> std::result::Result<usize, FileError> {
    let mut written = 0;
    while written < buf.len() {
        match writer.write(&buf[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(FileError::IncompleteTransfer {
                    expected: buf.len(),
                    actual: written,
                    source: Some(e),
                })
            }
        }
    }
    Ok(written)
}
