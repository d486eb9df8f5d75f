//! Snapshot tests for the hex codec's corner cases, using inline
//! snapshots so the expected value lives next to the assertion.

use bigint_core::{emit_hex, parse_hex, Bigint};

fn from_hex(s: &str) -> Bigint {
    let mut b = Bigint::construct(0);
    parse_hex(s.as_bytes(), &mut b).expect("valid hex literal in test");
    b
}

#[test]
fn snapshot_zero_is_empty_regardless_of_pad_top() {
    let zero = from_hex("");
    insta::assert_snapshot!(emit_hex(&zero, false), @"");
    insta::assert_snapshot!(emit_hex(&zero, true), @"");
}

#[test]
fn snapshot_single_limb_minimal_vs_padded() {
    let v = from_hex("abc");
    insta::assert_snapshot!(emit_hex(&v, false), @"abc");
    insta::assert_snapshot!(emit_hex(&v, true), @"0000000000000abc");
}

#[test]
fn snapshot_multi_limb_top_limb_padding_only_applies_to_the_top() {
    // Three limbs: top limb 0xa, the two below it zero — so minimal form
    // reproduces the input exactly, and padded form only changes the
    // leading digits.
    let v = from_hex(&format!("a{}", "0".repeat(32)));
    insta::assert_snapshot!(emit_hex(&v, false), @"a00000000000000000000000000000000");
    insta::assert_snapshot!(emit_hex(&v, true), @"000000000000000a00000000000000000000000000000000");
}

#[test]
fn snapshot_leading_zeros_on_input_are_dropped_on_output() {
    let v = from_hex("0000000000abc");
    insta::assert_snapshot!(emit_hex(&v, false), @"abc");
}
