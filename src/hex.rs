//! ASCII hexadecimal codec: `Parse` (hex -> limbs) and `Emit` (limbs ->
//! hex).
//!
//! Digits are most-significant-first, matching how a human writes a hex
//! literal. `Parse` tolerates leading zeros and an empty string (zero);
//! `Emit` never produces leading zeros in the top limb unless `pad_top`
//! is set.

use crate::bigint::{Bigint, Scratch};
use crate::error::BigintError;
use crate::limb::{Limb, LIMB_BITS};

const HEX_DIGITS_PER_LIMB: usize = LIMB_BITS as usize / 4;

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parses `ascii` into `dst`. An empty string denotes zero. On
/// `InvalidInput`, `dst` is left holding the value of the longest valid
/// hex prefix before the first bad byte (empty prefix -> zero).
pub fn parse(ascii: &[u8], dst: &mut Bigint) -> Result<(), BigintError> {
    let first_bad = ascii.iter().position(|&b| hex_value(b).is_none());
    let valid_len = first_bad.unwrap_or(ascii.len());
    parse_valid_prefix(&ascii[..valid_len], dst)?;
    match first_bad {
        Some(i) => Err(BigintError::InvalidInput(ascii[i], i)),
        None => Ok(()),
    }
}

fn parse_valid_prefix(ascii: &[u8], dst: &mut Bigint) -> Result<(), BigintError> {
    if ascii.is_empty() {
        Scratch::new(0)?.finish_into(dst);
        return Ok(());
    }
    let limb_count = ascii.len().div_ceil(HEX_DIGITS_PER_LIMB);
    let mut scratch = Scratch::new(limb_count)?;
    let limbs = scratch.capacity_slice_mut();
    // Walk right to left (least significant hex digit first) so each
    // digit's contribution lands at a fixed limb/shift without knowing
    // the total length in advance.
    for (i, &byte) in ascii.iter().rev().enumerate() {
        let nibble = hex_value(byte).expect("validated by caller") as Limb;
        let limb_index = i / HEX_DIGITS_PER_LIMB;
        let shift = (i % HEX_DIGITS_PER_LIMB) * 4;
        limbs[limb_index] |= nibble << shift;
    }
    scratch.set_len(limb_count);
    scratch.trim();
    scratch.finish_into(dst);
    Ok(())
}

/// Renders `src` as a newly allocated lowercase ASCII hex string, most
/// significant digit first.
///
/// For zero, returns the empty string regardless of `pad_top` — this
/// engine's canonical zero representation, matching the reference hex
/// harness's `lstrip("0")` behavior rather than emitting a literal `"0"`.
/// For non-zero values, `pad_top` selects
/// whether the top limb is zero-padded to a full `HEX_DIGITS_PER_LIMB`
/// width (`true`) or rendered minimally (`false`, the default callers
/// should reach for).
pub fn emit(src: &Bigint, pad_top: bool) -> String {
    let limbs = src.as_slice();
    let Some((&top, rest)) = limbs.split_last() else {
        return String::new();
    };
    let mut out = String::with_capacity(limbs.len() * HEX_DIGITS_PER_LIMB);
    if pad_top {
        out.push_str(&format!("{top:0width$x}", width = HEX_DIGITS_PER_LIMB));
    } else {
        out.push_str(&format!("{top:x}"));
    }
    for &limb in rest.iter().rev() {
        out.push_str(&format!("{limb:0width$x}", width = HEX_DIGITS_PER_LIMB));
    }
    out
}
