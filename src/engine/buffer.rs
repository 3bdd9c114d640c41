//! Byte Buffer
//!
//! Owned, fixed-length block of raw bytes. Buffers are produced by the
//! loader or the interleave transform and handed to the writer by
//! reference; dropping the buffer releases it.

use std::collections::TryReserveError;

/// An owned, contiguous sequence of bytes with a known length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Allocate a zero-filled buffer of exactly `len` bytes
    ///
    /// Uses a fallible reservation so that a failed allocation is reported
    /// to the caller instead of aborting the process.
    pub fn zeroed(len: usize) -> std::result::Result<Self, TryReserveError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, 0);
        Ok(Self { data })
    }

    /// Number of bytes held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return the underlying bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
