//! Wire envelope for the cluster-state vector
//!
//! Header is 5 bytes:
//! - Byte 0: Flags (bit 0 = compressed, bits 1-7 reserved)
//! - Bytes 1-4: Participant count (BE)
//!
//! The payload that follows is produced by whichever codec the compressed
//! flag selects; a receiver needs nothing beyond the header to pick the
//! right decoder.

use quorum_core::{QuorumError, QuorumResult};

use crate::EnvelopeFlags;

/// Envelope header size in bytes
pub const HEADER_SIZE: usize = 5;

/// Envelope header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Envelope flags
    pub flags: EnvelopeFlags,
    /// Vector length (participant count)
    pub count: u32,
}

impl Header {
    /// Create a header for a vector of `count` states
    pub fn new(count: u32, compressed: bool) -> Self {
        let mut flags = EnvelopeFlags::NONE;
        flags.set_compressed(compressed);
        Header { flags, count }
    }

    /// Parse a header from the front of `buf`.
    ///
    /// Reserved flag bits are accepted and ignored.
    pub fn parse(buf: &[u8]) -> QuorumResult<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(QuorumError::Truncated {
                expected: HEADER_SIZE,
                actual: buf.len(),
            });
        }

        let flags = EnvelopeFlags::new(buf[0]);
        let count = u32::from_be_bytes(buf[1..5].try_into().unwrap());

        Ok(Header { flags, count })
    }

    /// Serialize the header to the front of `buf`
    pub fn serialize(&self, buf: &mut [u8]) -> QuorumResult<()> {
        if buf.len() < HEADER_SIZE {
            return Err(QuorumError::Truncated {
                expected: HEADER_SIZE,
                actual: buf.len(),
            });
        }

        // reserved bits go out as zero
        buf[0] = self.flags.0 & EnvelopeFlags::COMPRESSED;
        buf[1..5].copy_from_slice(&self.count.to_be_bytes());

        Ok(())
    }

    /// Serialize the header to a new Vec
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_SIZE];
        self.serialize(&mut buf).unwrap();
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let header = Header::new(1024, true);

        let bytes = header.to_bytes();
        assert_eq!(bytes.len(), HEADER_SIZE);

        let parsed = Header::parse(&bytes).unwrap();
        assert_eq!(parsed.count, 1024);
        assert!(parsed.flags.is_compressed());
    }

    #[test]
    fn test_header_count_is_big_endian() {
        let header = Header::new(0x0102_0304, false);
        let bytes = header.to_bytes();
        assert_eq!(bytes, vec![0x00, 0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_header_too_short() {
        let buf = [0u8; 4];
        let result = Header::parse(&buf);
        assert!(matches!(result, Err(QuorumError::Truncated { .. })));
    }

    #[test]
    fn test_reserved_bits_ignored_on_read() {
        let buf = [0b1010_0011, 0, 0, 0, 7];
        let header = Header::parse(&buf).unwrap();
        assert!(header.flags.is_compressed());
        assert_eq!(header.count, 7);
    }

    #[test]
    fn test_reserved_bits_zero_on_write() {
        let header = Header {
            flags: EnvelopeFlags::new(0b1111_1111),
            count: 1,
        };
        let bytes = header.to_bytes();
        assert_eq!(bytes[0], EnvelopeFlags::COMPRESSED);
    }
}
