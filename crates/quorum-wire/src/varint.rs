//! Unsigned LEB128 varints
//!
//! Run lengths in the compressed payload are framed as LEB128: seven bits
//! per byte, least significant group first, high bit marks continuation.

use bytes::{Buf, BufMut};
use quorum_core::{QuorumError, QuorumResult};

/// Maximum encoded size of a u64 varint
pub const MAX_VARINT_LEN: usize = 10;

/// Append `value` to `buf` as a LEB128 varint
pub fn put_uvarint<B: BufMut>(buf: &mut B, mut value: u64) {
    while value >= 0x80 {
        buf.put_u8((value as u8) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

/// Read a LEB128 varint from the front of `buf`
pub fn get_uvarint<B: Buf>(buf: &mut B) -> QuorumResult<u64> {
    let mut value = 0u64;
    let mut shift = 0u32;

    loop {
        if !buf.has_remaining() {
            return Err(QuorumError::Truncated {
                expected: 1,
                actual: 0,
            });
        }

        let byte = buf.get_u8();
        if shift == 63 && byte > 1 {
            // only the lowest bit of the tenth byte fits into a u64
            return Err(QuorumError::InvalidWireFormat("varint overflows u64".into()));
        }

        value |= u64::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return Ok(value);
        }

        shift += 7;
        if shift >= 64 {
            return Err(QuorumError::InvalidWireFormat("varint too long".into()));
        }
    }
}
