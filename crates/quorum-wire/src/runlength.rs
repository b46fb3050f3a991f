//! Run-length codec for mostly uniform vectors
//!
//! The payload is a sequence of runs; each run is one state byte (low two
//! bits) followed by a varint run length. Adjacent equal states merge into
//! one run, so an all-same vector of any size costs a few bytes, while a
//! maximally alternating vector degrades to two bytes per state but stays
//! lossless.
//!
//! The decoder is driven by the target state count, never by buffer
//! exhaustion: trailing bytes beyond the consumed runs are left untouched.

use bytes::{Buf, BufMut};
use quorum_core::{NodeState, QuorumError, QuorumResult};

use crate::varint::{get_uvarint, put_uvarint};

// Cap for the decoder's up-front allocation; attacker-declared counts do
// not allocate beyond this until actual runs arrive.
const MAX_PREALLOC: usize = 4096;

/// Encode `states` as merged runs into `buf`
pub fn encode<B: BufMut>(buf: &mut B, states: &[NodeState]) {
    let mut iter = states.iter();
    let Some(&first) = iter.next() else {
        return;
    };

    let mut current = first;
    let mut run = 1u64;
    for &state in iter {
        if state == current {
            run += 1;
        } else {
            put_run(buf, current, run);
            current = state;
            run = 1;
        }
    }
    put_run(buf, current, run);
}

fn put_run<B: BufMut>(buf: &mut B, state: NodeState, run: u64) {
    buf.put_u8(state.to_bits());
    put_uvarint(buf, run);
}

/// Decode exactly `count` states from the front of `buf`
pub fn decode<B: Buf>(buf: &mut B, count: usize) -> QuorumResult<Vec<NodeState>> {
    let mut states = Vec::with_capacity(count.min(MAX_PREALLOC));

    while states.len() < count {
        // a run is at least a state byte and a one-byte varint
        if buf.remaining() < 2 {
            return Err(QuorumError::Truncated {
                expected: 2,
                actual: buf.remaining(),
            });
        }

        let code = buf.get_u8();
        let state = NodeState::from_bits(code).ok_or_else(|| {
            QuorumError::InvalidWireFormat(format!("bad state code: {:#04x}", code))
        })?;

        let run = get_uvarint(buf)?;
        let remaining = (count - states.len()) as u64;
        if run == 0 {
            return Err(QuorumError::InvalidWireFormat("zero-length run".into()));
        }
        if run > remaining {
            return Err(QuorumError::InvalidWireFormat(format!(
                "run of {} exceeds the {} states left to decode",
                run, remaining
            )));
        }

        states.extend(std::iter::repeat(state).take(run as usize));
    }

    Ok(states)
}
