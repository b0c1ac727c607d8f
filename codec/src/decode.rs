//! Bytes to code point.

use descriptor::Wide;

use crate::error::{DecodeError, DecodeResult};
use crate::euc::{classify, Euc};
use crate::state::EucState;

/// Outcome of one decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A code point was produced and `consumed` input bytes were eaten.
    ///
    /// A decoded NUL reports `consumed == 0`: the terminating zero byte
    /// counts as "already consumed" in the C convention this codec keeps
    /// for compatibility. Stream-oriented callers advance one byte in that
    /// case (see [`crate::StreamDecoder`]).
    Complete { wide: Wide, consumed: usize },

    /// Fewer bytes were available than the sequence requires. Partial
    /// progress is saved in the state; retry with more bytes appended to
    /// the same logical stream.
    Incomplete,
}

impl Euc {
    /// Decodes one character from `input`, resuming from `state`.
    ///
    /// The state is updated on [`Decoded::Incomplete`] and reset to idle on
    /// [`Decoded::Complete`]. On error the sequence is unrecoverable: the
    /// caller should [`EucState::reset`] the state and treat the input as
    /// an invalid character.
    pub fn decode(&self, input: &[u8], state: &mut EucState) -> DecodeResult<Decoded> {
        let desc = self.descriptor();
        if state.pending() > desc.max_len() {
            return Err(DecodeError::StateOutOfRange {
                pending: state.pending(),
                max_len: desc.max_len(),
            });
        }
        if input.is_empty() {
            return Ok(Decoded::Incomplete);
        }

        let mut pos = 0;
        let (set, mut wide, mut need) = if state.is_initial() {
            let set = classify(input[pos]);
            let mut count = desc.count(set);
            if set.is_single_shift() {
                // The configured count includes the designator byte.
                count = count.saturating_sub(1);
                pos += 1;
                if pos == input.len() {
                    state.save(set, 0, count);
                    return Ok(Decoded::Incomplete);
                }
                if input[pos] == 0 {
                    return Err(DecodeError::EmbeddedNul { offset: pos });
                }
            }
            let wide = Wide::from(input[pos]);
            pos += 1;
            (set, wide, count.saturating_sub(1))
        } else {
            (state.set(), state.wide(), state.pending())
        };

        while need > 0 && pos < input.len() {
            if input[pos] == 0 {
                return Err(DecodeError::EmbeddedNul { offset: pos });
            }
            wide = (wide << 8) | Wide::from(input[pos]);
            pos += 1;
            need -= 1;
        }
        if need > 0 {
            state.save(set, wide, need);
            return Ok(Decoded::Incomplete);
        }

        let wide = (wide & !desc.mask()) | desc.bits(set);
        state.reset();
        let consumed = if wide == 0 { 0 } else { pos };
        Ok(Decoded::Complete { wide, consumed })
    }
}
