//! Worked examples with hand-checked expected values, one per operation.

use bigint_core::{and, divide, emit_hex, mul_classic, mul_karatsuba, not, or, parse_hex, shift_left, shift_right, sub, xor, Bigint};

fn from_hex(s: &str) -> Bigint {
    let mut b = Bigint::construct(0);
    parse_hex(s.as_bytes(), &mut b).expect("valid hex literal in test");
    b
}

fn hex(b: &Bigint) -> String {
    emit_hex(b, false)
}

#[test]
fn parse_tolerates_leading_zeros_and_empty() {
    assert_eq!(hex(&from_hex("")), "");
    assert_eq!(hex(&from_hex("0")), "");
    assert_eq!(hex(&from_hex("00000")), "");
    assert_eq!(hex(&from_hex("00001")), "1");
    assert_eq!(hex(&from_hex("00ff")), "ff");
}

#[test]
fn parse_reports_first_bad_byte_and_keeps_valid_prefix() {
    let mut dst = Bigint::construct(0);
    let err = parse_hex(b"12g4", &mut dst).unwrap_err();
    assert_eq!(err, bigint_core::BigintError::InvalidInput(b'g', 2));
    assert_eq!(hex(&dst), "12");
}

#[test]
fn emit_pads_only_when_requested() {
    // Two limbs: top limb 0xabc, bottom limb 0 — an exact limb boundary
    // so the expected strings aren't ambiguous to hand-compute.
    let literal = format!("abc{}", "0".repeat(16));
    let v = from_hex(&literal);
    assert_eq!(emit_hex(&v, false), literal);
    assert_eq!(emit_hex(&v, true), format!("0000000000000abc{}", "0".repeat(16)));
}

#[test]
fn add_carries_across_a_limb_boundary() {
    let a = from_hex("ffffffffffffffff");
    let b = from_hex("1");
    let mut dst = Bigint::construct(0);
    bigint_core::add(&a, &b, &mut dst).unwrap();
    assert_eq!(hex(&dst), "10000000000000000");
}

#[test]
fn sub_borrows_across_a_limb_boundary() {
    let a = from_hex("10000000000000000");
    let b = from_hex("1");
    let mut dst = Bigint::construct(0);
    sub(&a, &b, &mut dst).unwrap();
    assert_eq!(hex(&dst), "ffffffffffffffff");
}

#[test]
fn sub_underflow_is_reported_and_leaves_dst_untouched() {
    let a = from_hex("1");
    let b = from_hex("2");
    let mut dst = from_hex("dead");
    let err = sub(&a, &b, &mut dst).unwrap_err();
    assert_eq!(err, bigint_core::BigintError::Underflow);
    assert_eq!(hex(&dst), "dead");
}

#[test]
fn mul_classic_and_karatsuba_agree_on_a_512_bit_product() {
    let a = from_hex(&"abcd1234".repeat(4));
    let b = from_hex(&"1357face".repeat(4));
    let mut classic = Bigint::construct(0);
    let mut karatsuba = Bigint::construct(0);
    mul_classic(&a, &b, &mut classic).unwrap();
    mul_karatsuba(&a, &b, &mut karatsuba).unwrap();
    assert_eq!(hex(&classic), hex(&karatsuba));
}

#[test]
fn mul_by_zero_is_zero() {
    let a = from_hex("ffffffffffffffffffffffff");
    let zero = from_hex("");
    let mut dst = from_hex("dead");
    mul_classic(&a, &zero, &mut dst).unwrap();
    assert_eq!(hex(&dst), "");
}

#[test]
fn div_matches_hand_computed_quotient_and_remainder() {
    // 0x100000000000000000 / 0x3 = 0x55555555555555555 r 1
    let a = from_hex("100000000000000000");
    let b = from_hex("3");
    let mut q = Bigint::construct(0);
    let mut r = Bigint::construct(0);
    divide(&a, &b, &mut q, &mut r).unwrap();
    assert_eq!(hex(&q), "55555555555555555");
    assert_eq!(hex(&r), "1");
}

#[test]
fn div_with_multi_limb_divisor_runs_knuth_d() {
    let a = from_hex("ffffffffffffffffffffffffffffffffffffffff");
    let b = from_hex("10000000000000001");
    let mut q = Bigint::construct(0);
    let mut r = Bigint::construct(0);
    divide(&a, &b, &mut q, &mut r).unwrap();

    // a == q * b + r, 0 <= r < b.
    let mut check = Bigint::construct(0);
    mul_classic(&q, &b, &mut check).unwrap();
    bigint_core::add(&check.clone(), &r, &mut check).unwrap();
    assert_eq!(hex(&check), hex(&a));
}

#[test]
fn div_by_zero_is_an_error() {
    let a = from_hex("1");
    let zero = from_hex("");
    let mut q = Bigint::construct(0);
    let mut r = Bigint::construct(0);
    let err = divide(&a, &zero, &mut q, &mut r).unwrap_err();
    assert_eq!(err, bigint_core::BigintError::DivisionByZero);
}

#[test]
fn div_dividend_smaller_than_divisor() {
    let a = from_hex("5");
    let b = from_hex("100");
    let mut q = Bigint::construct(0);
    let mut r = Bigint::construct(0);
    divide(&a, &b, &mut q, &mut r).unwrap();
    assert_eq!(hex(&q), "");
    assert_eq!(hex(&r), "5");
}

#[test]
fn bitwise_and_or_xor_zero_extend_the_shorter_operand() {
    let a = from_hex("ff00ff00ff00ff00ff00ff");
    let b = from_hex("0f");
    let mut dst = Bigint::construct(0);

    and(&a, &b, &mut dst).unwrap();
    assert_eq!(hex(&dst), "f");

    or(&a, &b, &mut dst).unwrap();
    assert_eq!(hex(&dst), "ff00ff00ff00ff00ff00ff");

    xor(&a, &b, &mut dst).unwrap();
    assert_eq!(hex(&dst), "ff00ff00ff00ff00ff00f0");
}

#[test]
fn bit_not_complements_every_occupied_limb() {
    let a = from_hex("0");
    let mut dst = Bigint::construct(0);
    not(&a, &mut dst).unwrap();
    // NOT of zero (zero limbs) has nothing to complement.
    assert_eq!(hex(&dst), "");

    let a = from_hex("1");
    not(&a, &mut dst).unwrap();
    assert_eq!(hex(&dst), "fffffffffffffffe");
}

#[test]
fn shift_left_then_right_is_identity_within_one_limb() {
    let a = from_hex("abcdef");
    let mut shifted = Bigint::construct(0);
    let mut back = Bigint::construct(0);
    shift_left(&a, 17, &mut shifted).unwrap();
    shift_right(&shifted, 17, &mut back).unwrap();
    assert_eq!(hex(&back), hex(&a));
}

#[test]
fn shift_left_crosses_a_limb_boundary() {
    let a = from_hex("1");
    let mut dst = Bigint::construct(0);
    shift_left(&a, 64, &mut dst).unwrap();
    assert_eq!(hex(&dst), "10000000000000000");
}

#[test]
fn shift_right_past_the_bit_length_is_zero() {
    let a = from_hex("ff");
    let mut dst = Bigint::construct(0);
    shift_right(&a, 1000, &mut dst).unwrap();
    assert_eq!(hex(&dst), "");
}

#[test]
fn destination_may_alias_an_operand() {
    let mut a = from_hex("ff");
    let b = from_hex("1");
    let a_snapshot = a.clone();
    bigint_core::add(&a_snapshot, &b, &mut a).unwrap();
    assert_eq!(hex(&a), "100");
}
