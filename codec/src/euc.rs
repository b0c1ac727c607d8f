//! The codec handle and its trait surface.

use std::str::FromStr;

use descriptor::{CodeSet, DescriptorError, EucDescriptor, Wide};

use crate::decode::Decoded;
use crate::error::{DecodeResult, EncodeResult};
use crate::state::{is_initial, EucState};

/// Single-shift designator announcing code set 2.
pub const SS2: u8 = 0x8E;

/// Single-shift designator announcing code set 3.
pub const SS3: u8 = 0x8F;

/// High bits OR'd back into single-shift payloads on encode: SS2/SS3
/// designate their set into GR, so every continuation byte carries 0x80.
pub const GR_BITS: Wide = 0x8080_8080;

/// Classifies a lead byte into its code set.
pub(crate) const fn classify(lead: u8) -> CodeSet {
    if lead & 0x80 == 0 {
        CodeSet::Set0
    } else if lead == SS3 {
        CodeSet::Set3
    } else if lead == SS2 {
        CodeSet::Set2
    } else {
        CodeSet::Set1
    }
}

/// A generic codec over byte streams of runtime-configured character
/// encodings.
///
/// This is the seam the surrounding runtime holds an instance of, instead
/// of installing conversion functions into process-wide slots: loading a
/// different encoding builds a second value and the two coexist.
pub trait CharCodec {
    /// Per-stream conversion state for this codec.
    type State: Default;

    /// Longest byte sequence one character may occupy; sizes buffers.
    fn max_len(&self) -> usize;

    /// Decodes one character from `input`, resuming from `state`.
    fn decode(&self, input: &[u8], state: &mut Self::State) -> DecodeResult<Decoded>;

    /// Encodes one code point into `out`; `None` requests a shift reset.
    fn encode(&self, wide: Wide, out: Option<&mut [u8]>, state: &Self::State)
        -> EncodeResult<usize>;

    /// Reports whether `state` has no pending partial sequence; an absent
    /// state counts as initial.
    fn is_initial(&self, state: Option<&Self::State>) -> bool;
}

/// The EUC codec: an [`EucDescriptor`] plus the decode/encode state
/// machine.
///
/// Construction replaces the original's load-time activation: parse or
/// build a descriptor, wrap it, and thread the value through every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Euc {
    desc: EucDescriptor,
}

impl Euc {
    /// Wraps a validated descriptor.
    #[must_use]
    pub const fn new(desc: EucDescriptor) -> Self {
        Self { desc }
    }

    /// Borrows the descriptor driving this codec.
    #[must_use]
    pub const fn descriptor(&self) -> &EucDescriptor {
        &self.desc
    }

    /// Longest byte sequence one character may occupy under this
    /// descriptor.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.desc.max_len()
    }
}

impl FromStr for Euc {
    type Err = DescriptorError;

    /// Loads a codec from the textual 9-integer descriptor form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EucDescriptor::parse(s).map(Self::new)
    }
}

impl CharCodec for Euc {
    type State = EucState;

    fn max_len(&self) -> usize {
        Self::max_len(self)
    }

    fn decode(&self, input: &[u8], state: &mut EucState) -> DecodeResult<Decoded> {
        Self::decode(self, input, state)
    }

    fn encode(&self, wide: Wide, out: Option<&mut [u8]>, state: &EucState) -> EncodeResult<usize> {
        Self::encode(self, wide, out, state)
    }

    fn is_initial(&self, state: Option<&EucState>) -> bool {
        is_initial(state)
    }
}
