//! Incremental decoding and encoding for the mbeuc EUC multibyte codec.
//!
//! This is the main codec crate: one parameterized algorithm, driven by a
//! [`descriptor::EucDescriptor`], converting EUC byte streams to wide code
//! point values and back.
//!
//! # Features
//!
//! - Resumable decoding across arbitrarily fragmented input
//! - Single-shift (SS2/SS3) designator handling for code sets 2 and 3
//! - Per-stream conversion state owned by the caller
//! - A stream helper for chunked input
//!
//! # Design Principles
//!
//! - **Correctness first** - The state machine is byte-exact and tested
//!   against fragmentation.
//! - **No globals** - The descriptor is an explicit handle threaded through
//!   every call; two encodings can run side by side.
//! - **No internal buffering** - All continuity lives in the caller-owned
//!   [`EucState`]; one state per logical stream.

mod decode;
mod encode;
mod error;
mod euc;
mod state;
mod stream;

pub use decode::Decoded;
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use euc::{CharCodec, Euc, GR_BITS, SS2, SS3};
pub use state::{is_initial, EucState};
pub use stream::StreamDecoder;

pub use descriptor::{CodeSet, DescriptorError, EucDescriptor, Wide};
