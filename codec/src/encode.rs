//! Code point to bytes.

use descriptor::{CodeSet, Wide};

use crate::error::{EncodeError, EncodeResult};
use crate::euc::{Euc, GR_BITS, SS2, SS3};
use crate::state::EucState;

impl Euc {
    /// Encodes one code point into `out`, returning the bytes written.
    ///
    /// Every encoded character is self-describing, so nothing is carried
    /// between calls; the state is only inspected to refuse encoding while
    /// the same state has a decode mid-sequence.
    ///
    /// Passing `None` for `out` asks for a reset to the initial shift
    /// state. EUC has no inter-character shift memory, so nothing is
    /// written and the reported length is 1.
    ///
    /// A code point whose masked signal bits match none of the descriptor's
    /// code sets is rendered through code set 1. That fallback mirrors the
    /// historical codec and can mask caller errors; it is pinned by tests
    /// rather than silently changed.
    pub fn encode(
        &self,
        wide: Wide,
        out: Option<&mut [u8]>,
        state: &EucState,
    ) -> EncodeResult<usize> {
        if !state.is_initial() {
            return Err(EncodeError::PendingDecode {
                pending: state.pending(),
            });
        }
        let Some(out) = out else {
            // Reset request: stateless encoding, nothing to emit.
            return Ok(1);
        };

        let desc = self.descriptor();
        let signal = wide & desc.mask();
        let mut payload = wide & !signal;
        let set = desc.code_set_for(signal);
        let len = desc.count(set);
        if out.len() < len {
            return Err(EncodeError::BufferTooSmall {
                needed: len,
                available: out.len(),
            });
        }

        match set {
            CodeSet::Set0 => {
                for (i, slot) in out[..len].iter_mut().enumerate() {
                    *slot = (payload >> ((len - 1 - i) * 8)) as u8;
                }
            }
            CodeSet::Set1 => {
                // Every byte of code set 1 carries the high bit.
                for (i, slot) in out[..len].iter_mut().enumerate() {
                    *slot = (payload >> ((len - 1 - i) * 8)) as u8 | 0x80;
                }
            }
            CodeSet::Set2 | CodeSet::Set3 => {
                out[0] = if set == CodeSet::Set2 { SS2 } else { SS3 };
                payload |= GR_BITS;
                for (i, slot) in out[1..len].iter_mut().enumerate() {
                    *slot = (payload >> ((len - 2 - i) * 8)) as u8;
                }
            }
        }
        Ok(len)
    }
}
