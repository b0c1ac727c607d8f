//! Chunk-oriented decoding helper.

use descriptor::Wide;

use crate::decode::Decoded;
use crate::error::DecodeResult;
use crate::euc::Euc;
use crate::state::EucState;

/// Decodes one logical byte stream delivered in arbitrary chunks.
///
/// The stream layer owns exactly one [`EucState`]; the codec never retains
/// it between calls. Chunks may split multibyte sequences at any boundary —
/// the carried state resumes them.
///
/// Decoded NULs report zero consumed bytes at the codec level; this helper
/// advances one byte for them so chunked decoding always terminates. That
/// matches descriptors where only a lone zero byte decodes to zero, which
/// holds for every preset.
#[derive(Debug)]
pub struct StreamDecoder<'a> {
    codec: &'a Euc,
    state: EucState,
}

impl<'a> StreamDecoder<'a> {
    /// Creates a decoder for a fresh stream in the initial shift state.
    #[must_use]
    pub fn new(codec: &'a Euc) -> Self {
        Self {
            codec,
            state: EucState::new(),
        }
    }

    /// Decodes every character completed by `chunk`, appending the code
    /// points to `out`.
    ///
    /// A trailing partial sequence is held in the carried state and
    /// finished by the next call. On error the state keeps the partial
    /// progress that led to it; callers that want to salvage the stream
    /// reset via [`Self::reset`].
    pub fn push(&mut self, chunk: &[u8], out: &mut Vec<Wide>) -> DecodeResult<()> {
        let mut pos = 0;
        while pos < chunk.len() {
            match self.codec.decode(&chunk[pos..], &mut self.state)? {
                Decoded::Complete { wide, consumed } => {
                    out.push(wide);
                    // consumed == 0 is the NUL terminator convention.
                    pos += consumed.max(1);
                }
                Decoded::Incomplete => break,
            }
        }
        Ok(())
    }

    /// Returns `true` if no sequence is split across chunk boundaries.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.state.is_initial()
    }

    /// Borrows the carried conversion state.
    #[must_use]
    pub fn state(&self) -> &EucState {
        &self.state
    }

    /// Discards any partial sequence.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
