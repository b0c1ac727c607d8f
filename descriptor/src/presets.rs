//! Ready-made descriptors for the common EUC variants.
//!
//! Historically these strings lived in per-locale configuration files and
//! were handed to the codec at activation time. The four shipped here cover
//! the variants in practical use; anything else can still be loaded through
//! [`EucDescriptor::parse`].

use crate::descriptor::EucDescriptor;

/// EUC-JP: ASCII, JIS X 0208 in set 1, half-width katakana behind SS2,
/// JIS X 0212 behind SS3.
pub const EUC_JP: &str = "1 0 2 0x8080 2 0x0080 3 0x8000 0x8080";

/// EUC-KR: ASCII plus KS X 1001 in set 1; the single-shift sets are unused.
pub const EUC_KR: &str = "1 0 2 0x8080 1 0 1 0 0x8080";

/// EUC-CN: ASCII plus GB 2312 in set 1; the single-shift sets are unused.
pub const EUC_CN: &str = "1 0 2 0x8080 1 0 1 0 0x8080";

/// EUC-TW: ASCII, CNS 11643 plane 1 in set 1, the remaining planes behind
/// SS2 as 4-byte sequences (designator, plane byte, two character bytes).
pub const EUC_TW: &str = "1 0 2 0x8080 4 0x808080 1 0 0x80808080";

/// Returns the EUC-JP descriptor.
#[must_use]
pub const fn euc_jp() -> EucDescriptor {
    EucDescriptor::from_parts([1, 2, 2, 3], [0, 0x8080, 0x0080, 0x8000], 0x8080)
}

/// Returns the EUC-KR descriptor.
#[must_use]
pub const fn euc_kr() -> EucDescriptor {
    EucDescriptor::from_parts([1, 2, 1, 1], [0, 0x8080, 0, 0], 0x8080)
}

/// Returns the EUC-CN descriptor.
#[must_use]
pub const fn euc_cn() -> EucDescriptor {
    EucDescriptor::from_parts([1, 2, 1, 1], [0, 0x8080, 0, 0], 0x8080)
}

/// Returns the EUC-TW descriptor.
#[must_use]
pub const fn euc_tw() -> EucDescriptor {
    EucDescriptor::from_parts([1, 2, 4, 1], [0, 0x8080, 0x0080_8080, 0], 0x8080_8080)
}
