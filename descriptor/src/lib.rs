//! Codeset descriptors for the mbeuc EUC multibyte codec.
//!
//! This crate defines how a concrete EUC variant is described:
//! - Per-code-set sequence lengths and signal bit patterns
//! - The mask separating signal bits from payload bits
//! - A loader for the textual 9-integer descriptor form
//! - Presets for the common EUC variants (JP/KR/CN/TW)
//!
//! # Design Principles
//!
//! - **Validate on construction** - A `EucDescriptor` that exists is usable.
//! - **Immutable after load** - No mutation API; the codec borrows it.
//! - **Explicit handles** - No process-wide active descriptor; callers
//!   thread the descriptor (or a codec built from it) through every call.

mod descriptor;
mod error;
mod parse;
pub mod presets;

pub use descriptor::{CodeSet, EucDescriptor, CODE_SETS};
pub use error::{DescriptorError, DescriptorResult};

/// The wide value produced by decoding and consumed by encoding.
pub type Wide = u32;
