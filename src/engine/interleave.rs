//! Even/odd plane interleaving
//!
//! `interleave` merges two equal-length planes so that output byte `2k`
//! comes from the even plane and byte `2k + 1` from the odd plane.
//! `deinterleave` splits such data back into its two planes.

use log::debug;

use crate::engine::buffer::ByteBuffer;
use crate::error::{InterleaveError, Result};

/// Interleave two planes into a buffer of twice their length
///
/// # Arguments
/// * `even` - Plane supplying output bytes 0, 2, 4, ...
/// * `odd` - Plane supplying output bytes 1, 3, 5, ...
///
/// # Errors
/// * `SizeMismatch` - The planes differ in length
/// * `OutputAllocationFailed` - No memory for the merged buffer
pub fn interleave(even: &[u8], odd: &[u8]) -> Result<ByteBuffer> {
    if even.len() != odd.len() {
        return Err(InterleaveError::SizeMismatch {
            even: even.len(),
            odd: odd.len(),
        });
    }

    let mut output = output_buffer(even.len())?;

    for ((pair, &e), &o) in output
        .as_mut_slice()
        .chunks_exact_mut(2)
        .zip(even)
        .zip(odd)
    {
        pair[0] = e;
        pair[1] = o;
    }

    debug!("Interleaved {} + {} bytes", even.len(), odd.len());
    Ok(output)
}

/// Allocate the zeroed merge target for two planes of `plane_len` bytes
fn output_buffer(plane_len: usize) -> Result<ByteBuffer> {
    let alloc_failed = || InterleaveError::OutputAllocationFailed {
        bytes: (plane_len as u64).saturating_mul(2),
    };
    let output_len = plane_len.checked_mul(2).ok_or_else(alloc_failed)?;
    ByteBuffer::zeroed(output_len).map_err(|_| alloc_failed())
}

/// Split interleaved data back into its even and odd planes
///
/// # Errors
/// * `OddLength` - The input cannot be split into byte pairs
pub fn deinterleave(data: &[u8]) -> Result<(ByteBuffer, ByteBuffer)> {
    if data.len() % 2 != 0 {
        return Err(InterleaveError::OddLength { len: data.len() });
    }

    let (even, odd): (Vec<u8>, Vec<u8>) = data
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .unzip();

    Ok((ByteBuffer::from(even), ByteBuffer::from(odd)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_two_byte_planes() {
        let output = interleave(&[0x01, 0x02], &[0xAA, 0xBB]).unwrap();
        assert_eq!(output.into_vec(), vec![0x01, 0xAA, 0x02, 0xBB]);
    }

    #[test_case(&[0x00], &[0xFF], &[0x00, 0xFF] ; "single byte")]
    #[test_case(&[1, 2, 3], &[4, 5, 6], &[1, 4, 2, 5, 3, 6] ; "three bytes")]
    #[test_case(&[], &[], &[] ; "empty planes")]
    fn test_interleave_cases(even: &[u8], odd: &[u8], expected: &[u8]) {
        let output = interleave(even, odd).unwrap();
        assert_eq!(output.as_slice(), expected);
    }

    #[test]
    fn test_output_positions() {
        let even: Vec<u8> = (0..200).map(|i| i as u8).collect();
        let odd: Vec<u8> = (0..200).map(|i| 255 - i as u8).collect();

        let output = interleave(&even, &odd).unwrap();

        assert_eq!(output.len(), 2 * even.len());
        for k in 0..even.len() {
            assert_eq!(output.as_slice()[2 * k], even[k]);
            assert_eq!(output.as_slice()[2 * k + 1], odd[k]);
        }
    }

    #[test]
    fn test_size_mismatch() {
        let result = interleave(&[1, 2, 3], &[1, 2]);
        assert!(matches!(
            result,
            Err(InterleaveError::SizeMismatch { even: 3, odd: 2 })
        ));
    }

    #[test]
    fn test_output_length_overflow_is_allocation_failure() {
        let result = output_buffer(usize::MAX / 2 + 1);
        assert!(matches!(
            result,
            Err(InterleaveError::OutputAllocationFailed { .. })
        ));
    }

    #[test]
    fn test_oversized_output_is_allocation_failure() {
        let plane_len = usize::MAX / 2 - 8;
        let result = output_buffer(plane_len);
        match result {
            Err(InterleaveError::OutputAllocationFailed { bytes }) => {
                assert_eq!(bytes, plane_len as u64 * 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_deinterleave_roundtrip() {
        let even: Vec<u8> = vec![0x10, 0x20, 0x30, 0x40];
        let odd: Vec<u8> = vec![0x11, 0x21, 0x31, 0x41];

        let merged = interleave(&even, &odd).unwrap();
        let (split_even, split_odd) = deinterleave(merged.as_slice()).unwrap();

        assert_eq!(split_even.into_vec(), even);
        assert_eq!(split_odd.into_vec(), odd);
    }

    #[test]
    fn test_deinterleave_odd_length() {
        let result = deinterleave(&[1, 2, 3]);
        assert!(matches!(result, Err(InterleaveError::OddLength { len: 3 })));
    }
}
