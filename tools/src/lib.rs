//! Introspection and debugging tools for the mbeuc codec.
//!
//! This crate backs the `mbeuc-tools` binary:
//!
//! - Parse a descriptor string (or preset name) and report its shape
//! - Decode hex byte streams into code points
//! - Encode code points into hex byte streams
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not
//!   afterthoughts.
//! - **Human-readable output** - Make it easy to see what a descriptor
//!   actually configures.

use std::fmt::Write as _;

use anyhow::{anyhow, bail, Context, Result};
use codec::{Euc, EucState, StreamDecoder, Wide};
use descriptor::{presets, EucDescriptor, CODE_SETS};
use serde::Serialize;

/// Report describing one parsed descriptor.
#[derive(Debug, Serialize)]
pub struct DescriptorReport {
    pub max_len: usize,
    pub mask: String,
    pub sets: Vec<CodeSetReport>,
}

/// Per-code-set slice of a [`DescriptorReport`].
#[derive(Debug, Serialize)]
pub struct CodeSetReport {
    pub set: usize,
    pub count: usize,
    pub bits: String,
    pub single_shift: bool,
}

/// Resolves a descriptor argument: a known preset name (`euc-jp`,
/// `euc-kr`, `euc-cn`, `euc-tw`) or a raw 9-integer descriptor string.
pub fn resolve_descriptor(arg: &str) -> Result<EucDescriptor> {
    match arg.to_ascii_lowercase().as_str() {
        "euc-jp" => return Ok(presets::euc_jp()),
        "euc-kr" => return Ok(presets::euc_kr()),
        "euc-cn" => return Ok(presets::euc_cn()),
        "euc-tw" => return Ok(presets::euc_tw()),
        _ => {}
    }
    EucDescriptor::parse(arg).with_context(|| format!("cannot load descriptor {arg:?}"))
}

/// Builds the inspection report for a descriptor.
#[must_use]
pub fn inspect_descriptor(desc: &EucDescriptor) -> DescriptorReport {
    DescriptorReport {
        max_len: desc.max_len(),
        mask: format!("0x{:X}", desc.mask()),
        sets: CODE_SETS
            .iter()
            .map(|&set| CodeSetReport {
                set: set.index(),
                count: desc.count(set),
                bits: format!("0x{:X}", desc.bits(set)),
                single_shift: set.is_single_shift(),
            })
            .collect(),
    }
}

/// Renders an inspection report as aligned text.
#[must_use]
pub fn format_report_pretty(report: &DescriptorReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "max sequence length: {}", report.max_len);
    let _ = writeln!(out, "mask:                {}", report.mask);
    for set in &report.sets {
        let shift = if set.single_shift {
            "  (single shift)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "set {}: count {}  bits {}{}",
            set.set, set.count, set.bits, shift
        );
    }
    out
}

/// Decodes a hex byte string (`"A4A2"` or `"a4 a2"`) into code points.
pub fn decode_hex(desc: &EucDescriptor, hex: &str) -> Result<Vec<Wide>> {
    let bytes = parse_hex(hex)?;
    let codec = Euc::new(desc.clone());
    let mut stream = StreamDecoder::new(&codec);
    let mut out = Vec::new();
    stream
        .push(&bytes, &mut out)
        .context("invalid byte sequence")?;
    if !stream.is_initial() {
        bail!(
            "input ends mid-character: {} more byte(s) expected",
            stream.state().pending()
        );
    }
    Ok(out)
}

/// Encodes code points into a hex byte string.
pub fn encode_wides(desc: &EucDescriptor, wides: &[Wide]) -> Result<String> {
    let codec = Euc::new(desc.clone());
    let state = EucState::new();
    let mut buf = vec![0u8; codec.max_len()];
    let mut out = String::new();
    for &wide in wides {
        let len = codec
            .encode(wide, Some(&mut buf), &state)
            .with_context(|| format!("cannot encode U+{wide:04X}"))?;
        for byte in &buf[..len] {
            let _ = write!(out, "{byte:02X}");
        }
    }
    Ok(out)
}

/// Round-trips a hex byte string through decode and re-encode, reporting
/// the canonical byte form alongside the code points.
pub fn transcode_hex(desc: &EucDescriptor, hex: &str) -> Result<(Vec<Wide>, String)> {
    let wides = decode_hex(desc, hex)?;
    let bytes = encode_wides(desc, &wides)?;
    Ok((wides, bytes))
}

fn parse_hex(hex: &str) -> Result<Vec<u8>> {
    let compact: String = hex.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.len() % 2 != 0 {
        bail!("hex input has an odd number of digits");
    }
    (0..compact.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&compact[i..i + 2], 16)
                .map_err(|_| anyhow!("invalid hex pair {:?}", &compact[i..i + 2]))
        })
        .collect()
}

/// Parses one code point argument in decimal or `0x` hex form.
pub fn parse_wide(arg: &str) -> Result<Wide> {
    let parsed = if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Wide::from_str_radix(hex, 16)
    } else {
        arg.parse::<Wide>()
    };
    parsed.map_err(|_| anyhow!("invalid code point {arg:?}"))
}
