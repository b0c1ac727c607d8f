//! Descriptor model and validation.

use crate::error::{DescriptorError, DescriptorResult};
use crate::Wide;

/// Identifies one of the four EUC code sets.
///
/// Code set 0 covers lead bytes with the high bit clear; code set 1 covers
/// every other high-bit lead byte; code sets 2 and 3 are announced by the
/// SS2/SS3 single-shift designator bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeSet {
    Set0,
    Set1,
    Set2,
    Set3,
}

/// All four code sets, in index order.
pub const CODE_SETS: [CodeSet; 4] = [CodeSet::Set0, CodeSet::Set1, CodeSet::Set2, CodeSet::Set3];

impl CodeSet {
    /// Returns the array index for this code set.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Set0 => 0,
            Self::Set1 => 1,
            Self::Set2 => 2,
            Self::Set3 => 3,
        }
    }

    /// Returns `true` for the single-shift sets (2 and 3), whose configured
    /// sequence length includes the designator byte itself.
    #[must_use]
    pub const fn is_single_shift(self) -> bool {
        matches!(self, Self::Set2 | Self::Set3)
    }
}

/// An immutable description of one concrete EUC variant.
///
/// A descriptor carries, for each of the four code sets, the total byte
/// length of a sequence and the signal bit pattern that identifies the set
/// in a finalized wide value, plus the mask that separates those signal
/// bits from the payload bits. Once constructed it never changes; the
/// codec borrows it for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EucDescriptor {
    counts: [usize; 4],
    bits: [Wide; 4],
    mask: Wide,
}

/// Largest sequence length a code set may configure.
pub(crate) const MAX_COUNT: usize = 4;

impl EucDescriptor {
    /// Creates a descriptor after validating its invariants.
    ///
    /// Every count must be in `1..=4`. For sets 2 and 3 the count includes
    /// the designator byte.
    pub fn new(counts: [usize; 4], bits: [Wide; 4], mask: Wide) -> DescriptorResult<Self> {
        for set in CODE_SETS {
            let count = counts[set.index()];
            if count == 0 || count > MAX_COUNT {
                return Err(DescriptorError::InvalidByteCount { set, count });
            }
        }
        Ok(Self { counts, bits, mask })
    }

    /// Builds a descriptor from fields already known to satisfy the
    /// invariants. Presets use this; everything else goes through `new`.
    pub(crate) const fn from_parts(counts: [usize; 4], bits: [Wide; 4], mask: Wide) -> Self {
        Self { counts, bits, mask }
    }

    /// Returns the configured sequence length for a code set.
    #[must_use]
    pub const fn count(&self, set: CodeSet) -> usize {
        self.counts[set.index()]
    }

    /// Returns the signal bit pattern for a code set.
    #[must_use]
    pub const fn bits(&self, set: CodeSet) -> Wide {
        self.bits[set.index()]
    }

    /// Returns the mask separating signal bits from payload bits.
    #[must_use]
    pub const fn mask(&self) -> Wide {
        self.mask
    }

    /// Returns the longest sequence length across the four code sets.
    ///
    /// This is the value the surrounding runtime uses to size conversion
    /// buffers (the `MB_CUR_MAX` analog).
    #[must_use]
    pub fn max_len(&self) -> usize {
        // counts is non-empty, so max() always yields a value
        self.counts.iter().copied().max().unwrap_or(1)
    }

    /// Resolves which code set a masked signal pattern belongs to.
    ///
    /// Sets are checked in the order 1, 0, 2, 3. A pattern matching none of
    /// the configured signal bits falls back to code set 1. The fallback is
    /// historical behavior: encoders have always rendered unmatched wide
    /// values through the GR (high-bit) path rather than failing.
    #[must_use]
    pub fn code_set_for(&self, signal: Wide) -> CodeSet {
        for set in [CodeSet::Set1, CodeSet::Set0, CodeSet::Set2, CodeSet::Set3] {
            if signal == self.bits(set) {
                return set;
            }
        }
        CodeSet::Set1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jp() -> EucDescriptor {
        EucDescriptor::new([1, 2, 2, 3], [0, 0x8080, 0x0080, 0x8000], 0x8080).unwrap()
    }

    #[test]
    fn code_set_indices() {
        assert_eq!(CodeSet::Set0.index(), 0);
        assert_eq!(CodeSet::Set1.index(), 1);
        assert_eq!(CodeSet::Set2.index(), 2);
        assert_eq!(CodeSet::Set3.index(), 3);
    }

    #[test]
    fn single_shift_sets() {
        assert!(!CodeSet::Set0.is_single_shift());
        assert!(!CodeSet::Set1.is_single_shift());
        assert!(CodeSet::Set2.is_single_shift());
        assert!(CodeSet::Set3.is_single_shift());
    }

    #[test]
    fn accessors_return_configured_values() {
        let desc = jp();
        assert_eq!(desc.count(CodeSet::Set0), 1);
        assert_eq!(desc.count(CodeSet::Set3), 3);
        assert_eq!(desc.bits(CodeSet::Set1), 0x8080);
        assert_eq!(desc.mask(), 0x8080);
    }

    #[test]
    fn max_len_is_largest_count() {
        assert_eq!(jp().max_len(), 3);

        let desc = EucDescriptor::new([1, 2, 4, 1], [0, 0x8080, 0x808080, 0], 0x8080_8080).unwrap();
        assert_eq!(desc.max_len(), 4);
    }

    #[test]
    fn rejects_zero_count() {
        let err = EucDescriptor::new([1, 0, 2, 3], [0; 4], 0x8080).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::InvalidByteCount {
                set: CodeSet::Set1,
                count: 0
            }
        ));
    }

    #[test]
    fn rejects_count_above_four() {
        let err = EucDescriptor::new([1, 2, 2, 5], [0; 4], 0x8080).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::InvalidByteCount {
                set: CodeSet::Set3,
                count: 5
            }
        ));
    }

    #[test]
    fn code_set_resolution_prefers_set1() {
        let desc = jp();
        assert_eq!(desc.code_set_for(0x8080), CodeSet::Set1);
        assert_eq!(desc.code_set_for(0), CodeSet::Set0);
        assert_eq!(desc.code_set_for(0x0080), CodeSet::Set2);
        assert_eq!(desc.code_set_for(0x8000), CodeSet::Set3);
    }

    #[test]
    fn code_set_resolution_falls_back_to_set1() {
        // No configured signal pattern matches 0x4080.
        assert_eq!(jp().code_set_for(0x4080), CodeSet::Set1);
    }

    #[test]
    fn set0_wins_over_unused_duplicate_signal_bits() {
        // KR-style descriptors leave sets 2/3 configured with the same
        // signal bits as set 0; resolution order makes set 0 win.
        let desc = EucDescriptor::new([1, 2, 1, 1], [0, 0x8080, 0, 0], 0x8080).unwrap();
        assert_eq!(desc.code_set_for(0), CodeSet::Set0);
    }

    #[test]
    fn descriptor_equality() {
        assert_eq!(jp(), jp());
        let other = EucDescriptor::new([1, 2, 2, 3], [0, 0x8080, 0x0080, 0x8000], 0xFFFF).unwrap();
        assert_ne!(jp(), other);
    }
}
