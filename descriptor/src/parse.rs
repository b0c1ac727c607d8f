//! Loader for the textual descriptor form.
//!
//! A descriptor string is 9 space/tab-separated integers:
//!
//! ```text
//! count0 bits0 count1 bits1 count2 bits2 count3 bits3 mask
//! ```
//!
//! Each field accepts decimal, `0x`-prefixed hexadecimal, or `0`-prefixed
//! octal form, the numeral prefixes `strtol` accepts with base 0.

use std::str::FromStr;

use crate::descriptor::{EucDescriptor, CODE_SETS};
use crate::error::{DescriptorError, DescriptorResult};
use crate::Wide;

/// Number of integer fields a descriptor string must carry.
const FIELDS: usize = 9;

impl EucDescriptor {
    /// Parses the 9-integer textual descriptor form.
    ///
    /// Fails without constructing anything if fewer than 9 valid integer
    /// fields are present. Text after the 9th field is ignored.
    pub fn parse(input: &str) -> DescriptorResult<Self> {
        let mut fields = [0 as Wide; FIELDS];
        let mut tokens = input.split_ascii_whitespace();
        for (index, field) in fields.iter_mut().enumerate() {
            let token = tokens.next().ok_or(DescriptorError::MissingTokens {
                expected: FIELDS,
                found: index,
            })?;
            *field = parse_field(index, token)?;
        }

        let mut counts = [0usize; 4];
        let mut bits = [0 as Wide; 4];
        for set in CODE_SETS {
            counts[set.index()] = fields[set.index() * 2] as usize;
            bits[set.index()] = fields[set.index() * 2 + 1];
        }
        Self::new(counts, bits, fields[8])
    }
}

impl FromStr for EucDescriptor {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses one field with base-0 numeral prefixes.
///
/// Sign prefixes are rejected: descriptor fields are bit patterns, not
/// signed quantities.
fn parse_field(index: usize, token: &str) -> DescriptorResult<Wide> {
    let parsed = if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Wide::from_str_radix(hex, 16)
    } else if token.len() > 1 && token.starts_with('0') {
        Wide::from_str_radix(&token[1..], 8)
    } else {
        token.parse::<Wide>()
    };
    parsed.map_err(|_| DescriptorError::InvalidInteger {
        index,
        token: token.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::CodeSet;

    const EUC_JP: &str = "1 0 2 0x8080 2 0x0080 3 0x8000 0x8080";

    #[test]
    fn parses_euc_jp_descriptor() {
        let desc = EucDescriptor::parse(EUC_JP).unwrap();
        assert_eq!(desc.count(CodeSet::Set0), 1);
        assert_eq!(desc.count(CodeSet::Set1), 2);
        assert_eq!(desc.count(CodeSet::Set2), 2);
        assert_eq!(desc.count(CodeSet::Set3), 3);
        assert_eq!(desc.bits(CodeSet::Set0), 0);
        assert_eq!(desc.bits(CodeSet::Set1), 0x8080);
        assert_eq!(desc.bits(CodeSet::Set2), 0x0080);
        assert_eq!(desc.bits(CodeSet::Set3), 0x8000);
        assert_eq!(desc.mask(), 0x8080);
        assert_eq!(desc.max_len(), 3);
    }

    #[test]
    fn accepts_mixed_radix_fields() {
        // Octal 02, hex 0x8080, decimal 3.
        let desc = EucDescriptor::parse("1 00 02 0x8080 2 0X80 3 0100000 0x8080").unwrap();
        assert_eq!(desc.count(CodeSet::Set1), 2);
        assert_eq!(desc.bits(CodeSet::Set2), 0x80);
        assert_eq!(desc.bits(CodeSet::Set3), 0o100_000);
    }

    #[test]
    fn accepts_tab_and_run_separators() {
        let desc = EucDescriptor::parse("1\t0  2\t0x8080\t2 0x0080   3 0x8000\t0x8080").unwrap();
        assert_eq!(desc.mask(), 0x8080);
    }

    #[test]
    fn ignores_trailing_text() {
        let desc = EucDescriptor::parse("1 0 2 0x8080 2 0x0080 3 0x8000 0x8080 extra 42").unwrap();
        assert_eq!(desc.mask(), 0x8080);
    }

    #[test]
    fn rejects_short_descriptor() {
        let err = EucDescriptor::parse("1 0 2 0x8080").unwrap_err();
        assert_eq!(
            err,
            DescriptorError::MissingTokens {
                expected: 9,
                found: 4
            }
        );
    }

    #[test]
    fn rejects_empty_descriptor() {
        let err = EucDescriptor::parse("").unwrap_err();
        assert_eq!(
            err,
            DescriptorError::MissingTokens {
                expected: 9,
                found: 0
            }
        );
    }

    #[test]
    fn rejects_non_integer_field() {
        let err = EucDescriptor::parse("1 0 two 0x8080 2 0x0080 3 0x8000 0x8080").unwrap_err();
        assert_eq!(
            err,
            DescriptorError::InvalidInteger {
                index: 2,
                token: "two".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_bare_hex_prefix() {
        let err = EucDescriptor::parse("1 0x 2 0x8080 2 0x0080 3 0x8000 0x8080").unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::InvalidInteger { index: 1, .. }
        ));
    }

    #[test]
    fn rejects_signed_field() {
        let err = EucDescriptor::parse("1 -1 2 0x8080 2 0x0080 3 0x8000 0x8080").unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::InvalidInteger { index: 1, .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_count() {
        let err = EucDescriptor::parse("1 0 5 0x8080 2 0x0080 3 0x8000 0x8080").unwrap_err();
        assert_eq!(
            err,
            DescriptorError::InvalidByteCount {
                set: CodeSet::Set1,
                count: 5
            }
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let via_parse = EucDescriptor::parse(EUC_JP).unwrap();
        let via_from_str: EucDescriptor = EUC_JP.parse().unwrap();
        assert_eq!(via_parse, via_from_str);
    }
}
