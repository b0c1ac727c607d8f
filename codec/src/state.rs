//! Per-stream conversion state.

use descriptor::{CodeSet, Wide};

/// Conversion state carrying an in-progress multibyte sequence.
///
/// A zeroed (default) state is the initial shift state. The decoder fills
/// it in when input runs out mid-sequence and clears it once a code point
/// is produced; the encoder only inspects it to refuse interleaving with an
/// unfinished decode.
///
/// One state must exist per independent byte stream. Sharing a state across
/// concurrent streams corrupts both; callers that move a state between
/// threads must synchronize externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EucState {
    wide: Wide,
    set: CodeSet,
    pending: usize,
}

impl Default for EucState {
    fn default() -> Self {
        Self {
            wide: 0,
            set: CodeSet::Set0,
            pending: 0,
        }
    }
}

impl EucState {
    /// Creates a state in the initial shift state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no decode is mid-sequence.
    #[must_use]
    pub const fn is_initial(&self) -> bool {
        self.pending == 0
    }

    /// Returns the number of payload bytes still needed to finish the
    /// pending sequence; `0` means idle.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending
    }

    /// Discards any partial sequence, returning to the initial shift state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Code set of the pending sequence. Meaningless while idle.
    pub(crate) const fn set(&self) -> CodeSet {
        self.set
    }

    /// Bytes accumulated so far for the pending sequence.
    pub(crate) const fn wide(&self) -> Wide {
        self.wide
    }

    /// Records partial progress when input runs out mid-sequence.
    pub(crate) fn save(&mut self, set: CodeSet, wide: Wide, pending: usize) {
        self.set = set;
        self.wide = wide;
        self.pending = pending;
    }
}

/// Reports whether a state has no pending partial sequence.
///
/// An absent state is defined as initial, matching the `mbsinit(NULL)`
/// convention of the C interface this codec descends from.
#[must_use]
pub fn is_initial(state: Option<&EucState>) -> bool {
    state.map_or(true, EucState::is_initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_initial() {
        assert!(EucState::default().is_initial());
        assert!(EucState::new().is_initial());
        assert_eq!(EucState::default().pending(), 0);
    }

    #[test]
    fn saved_state_is_not_initial() {
        let mut state = EucState::new();
        state.save(CodeSet::Set1, 0xA4, 1);
        assert!(!state.is_initial());
        assert_eq!(state.pending(), 1);
        assert_eq!(state.set(), CodeSet::Set1);
        assert_eq!(state.wide(), 0xA4);
    }

    #[test]
    fn reset_returns_to_initial() {
        let mut state = EucState::new();
        state.save(CodeSet::Set3, 0x8F, 2);
        state.reset();
        assert!(state.is_initial());
        assert_eq!(state, EucState::default());
    }

    #[test]
    fn absent_state_is_initial() {
        assert!(is_initial(None));
    }

    #[test]
    fn present_state_delegates() {
        let mut state = EucState::new();
        assert!(is_initial(Some(&state)));
        state.save(CodeSet::Set2, 0, 1);
        assert!(!is_initial(Some(&state)));
    }
}
