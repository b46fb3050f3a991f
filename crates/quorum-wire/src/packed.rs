//! Fixed-width state packing
//!
//! Each state is 2 bits, four states share a byte. Position i occupies
//! bits [2*(i%4), 2*(i%4)+1] of byte i/4, bit 0 least significant. The
//! final byte is zero padded when the count is not a multiple of four.

use bytes::BufMut;
use quorum_core::{NodeState, QuorumError, QuorumResult, STATES_PER_BYTE, STATE_BITS};

/// Encoded size of `count` states
#[inline]
pub fn packed_len(count: usize) -> usize {
    count.div_ceil(STATES_PER_BYTE)
}

/// Pack up to four states into one byte, low positions first
pub fn pack_states(states: &[NodeState]) -> u8 {
    debug_assert!(states.len() <= STATES_PER_BYTE);

    let mut byte = 0u8;
    for (i, state) in states.iter().enumerate() {
        byte |= state.to_bits() << (STATE_BITS * i);
    }
    byte
}

/// Unpack the four states held in one byte.
///
/// Callers that asked for fewer than four states ignore the tail.
pub fn unpack_states(byte: u8) -> [NodeState; STATES_PER_BYTE] {
    let mut states = [NodeState::Legit; STATES_PER_BYTE];
    for (i, state) in states.iter_mut().enumerate() {
        // masked to two bits, every code is a valid state
        let bits = (byte >> (STATE_BITS * i)) & 0b11;
        *state = NodeState::from_bits(bits).unwrap();
    }
    states
}

/// Pack `states` at minimum bit width into `buf`
pub fn encode<B: BufMut>(buf: &mut B, states: &[NodeState]) {
    for chunk in states.chunks(STATES_PER_BYTE) {
        buf.put_u8(pack_states(chunk));
    }
}

/// Decode exactly `count` states from the front of `buf`.
///
/// Padding bits in the final byte are discarded, never treated as data;
/// bytes past the payload are not consumed.
pub fn decode(buf: &[u8], count: usize) -> QuorumResult<Vec<NodeState>> {
    let need = packed_len(count);
    if buf.len() < need {
        return Err(QuorumError::Truncated {
            expected: need,
            actual: buf.len(),
        });
    }

    let mut states = Vec::with_capacity(count);
    'bytes: for byte in &buf[..need] {
        for state in unpack_states(*byte) {
            if states.len() == count {
                break 'bytes;
            }
            states.push(state);
        }
    }
    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use NodeState::*;

    #[test]
    fn test_pack_unpack_four_states() {
        let data = [Fraud, Inconsistent, TimedOut, Legit];

        let byte = pack_states(&data);
        let unpacked = unpack_states(byte);
        assert_eq!(unpacked, data);
    }

    #[test]
    fn test_pack_unpack_three_states() {
        let data = [Fraud, TimedOut, Legit];

        let byte = pack_states(&data);
        let unpacked = unpack_states(byte);
        assert_eq!(&unpacked[..3], &data);
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(1), 1);
        assert_eq!(packed_len(4), 1);
        assert_eq!(packed_len(5), 2);
        assert_eq!(packed_len(70), 18);
    }

    #[test]
    fn test_encode_decode_with_padding() {
        let states = vec![TimedOut, Fraud, Inconsistent, Legit, TimedOut];

        let mut buf = Vec::new();
        encode(&mut buf, &states);
        assert_eq!(buf.len(), 2);

        let decoded = decode(&buf, states.len()).unwrap();
        assert_eq!(decoded, states);
    }

    #[test]
    fn test_decode_ignores_padding_bits() {
        // one real state plus garbage in the padding positions
        let byte = pack_states(&[TimedOut, Fraud, Fraud, Fraud]);
        let decoded = decode(&[byte], 1).unwrap();
        assert_eq!(decoded, vec![TimedOut]);
    }

    #[test]
    fn test_decode_short_buffer() {
        let err = decode(&[0u8; 2], 12).unwrap_err();
        assert!(matches!(
            err,
            QuorumError::Truncated {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_decode_leaves_trailing_bytes() {
        let mut buf = Vec::new();
        encode(&mut buf, &[Fraud, Fraud, Fraud, Fraud]);
        buf.extend_from_slice(&[0xAB, 0xCD]);

        let decoded = decode(&buf, 4).unwrap();
        assert_eq!(decoded, vec![Fraud; 4]);
    }
}
