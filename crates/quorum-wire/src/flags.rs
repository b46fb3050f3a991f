//! Envelope flags for the cluster-state wire header

/// Envelope flags (1 byte)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvelopeFlags(pub u8);

impl EnvelopeFlags {
    pub const NONE: EnvelopeFlags = EnvelopeFlags(0);

    // Flag bits; bits 1-7 are reserved and written as zero
    pub const COMPRESSED: u8 = 0b0000_0001;

    #[inline]
    pub fn new(bits: u8) -> Self {
        EnvelopeFlags(bits)
    }

    #[inline]
    pub fn is_compressed(self) -> bool {
        self.0 & Self::COMPRESSED != 0
    }

    #[inline]
    pub fn set_compressed(&mut self, value: bool) {
        if value {
            self.0 |= Self::COMPRESSED;
        } else {
            self.0 &= !Self::COMPRESSED;
        }
    }
}

impl From<u8> for EnvelopeFlags {
    fn from(bits: u8) -> Self {
        EnvelopeFlags(bits)
    }
}

impl From<EnvelopeFlags> for u8 {
    fn from(flags: EnvelopeFlags) -> Self {
        flags.0
    }
}
