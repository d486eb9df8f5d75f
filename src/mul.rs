//! Multiplication: classic schoolbook and recursive Karatsuba.
//!
//! The two algorithms share one contract (inputs `a`, `b`, destination
//! `dst`) and must agree bit-for-bit; `tests/algebraic.rs` checks that
//! directly. Karatsuba falls back to classic below
//! [`KARATSUBA_THRESHOLD_LIMBS`], where the recursive overhead isn't
//! worth it over a 32-64 limb operand; this engine picks the low end of
//! that range.

use log::trace;

use crate::arith;
use crate::bigint::{Bigint, Scratch};
use crate::error::BigintError;
use crate::limb::{DoubleLimb, LIMB_BITS};

/// Operand size, in limbs, below which Karatsuba defers to the classic
/// algorithm.
pub const KARATSUBA_THRESHOLD_LIMBS: usize = 32;

fn zero(dst: &mut Bigint) -> Result<(), BigintError> {
    Scratch::new(0)?.finish_into(dst);
    Ok(())
}

/// `dst <- a * b` via schoolbook long multiplication: a `DoubleLimb`
/// accumulator per output limb, one pass of `a` per limb of `b`.
pub fn mul_classic(a: &Bigint, b: &Bigint, dst: &mut Bigint) -> Result<(), BigintError> {
    if a.is_zero() || b.is_zero() {
        return zero(dst);
    }
    let mut scratch = Scratch::new(a.len() + b.len())?;
    mul_classic_into(a, b, &mut scratch);
    scratch.finish_into(dst);
    Ok(())
}

/// Writes `a * b` into `dst`'s capacity region. `dst` must already have
/// room for `a.len() + b.len()` limbs, zero-filled (as `Scratch::new`
/// guarantees); sets `dst`'s length and trims on exit.
fn mul_classic_into(a: &Bigint, b: &Bigint, dst: &mut Bigint) {
    let limbs = dst.capacity_slice_mut();
    for (j, &bj) in b.as_slice().iter().enumerate() {
        if bj == 0 {
            continue;
        }
        let mut carry: DoubleLimb = 0;
        for (i, &ai) in a.as_slice().iter().enumerate() {
            let idx = i + j;
            let prod = ai as DoubleLimb * bj as DoubleLimb + limbs[idx] as DoubleLimb + carry;
            limbs[idx] = prod as u64;
            carry = prod >> LIMB_BITS;
        }
        let mut k = j + a.len();
        let mut carry_out = carry as u64;
        while carry_out != 0 {
            let (sum, overflow) = limbs[k].overflowing_add(carry_out);
            limbs[k] = sum;
            carry_out = overflow as u64;
            k += 1;
        }
    }
    dst.set_len(a.len() + b.len());
    dst.trim();
}

/// `dst <- a * b` via recursive Karatsuba splitting.
pub fn mul_karatsuba(a: &Bigint, b: &Bigint, dst: &mut Bigint) -> Result<(), BigintError> {
    let result = karatsuba(a, b)?;
    result.finish_into(dst);
    Ok(())
}

fn karatsuba(a: &Bigint, b: &Bigint) -> Result<Scratch, BigintError> {
    if a.is_zero() || b.is_zero() {
        return Scratch::new(0);
    }
    if a.len() <= KARATSUBA_THRESHOLD_LIMBS || b.len() <= KARATSUBA_THRESHOLD_LIMBS {
        trace!(
            "mul: {}x{} limbs at or below Karatsuba threshold, using classic",
            a.len(),
            b.len()
        );
        let mut scratch = Scratch::new(a.len() + b.len())?;
        mul_classic_into(a, b, &mut scratch);
        return Ok(scratch);
    }

    let m = a.len().max(b.len()).div_ceil(2);
    trace!("mul: karatsuba splitting {}x{} limbs at m={}", a.len(), b.len(), m);
    let (a_lo, a_hi) = split(a, m);
    let (b_lo, b_hi) = split(b, m);

    let z0 = karatsuba(&a_lo, &b_lo)?;
    let z2 = karatsuba(&a_hi, &b_hi)?;

    let a_sum = add_new(&a_lo, &a_hi)?;
    let b_sum = add_new(&b_lo, &b_hi)?;
    let z1_raw = karatsuba(&a_sum, &b_sum)?;
    // z1 = (a_lo+a_hi)(b_lo+b_hi) - z0 - z2, always non-negative.
    let z1_minus_z0 = sub_new(&z1_raw, &z0)?;
    let z1 = sub_new(&z1_minus_z0, &z2)?;

    let result_len = a.len() + b.len();
    let mut result = Scratch::new(result_len)?;
    add_shifted(&mut result, &z0, 0);
    add_shifted(&mut result, &z1, m);
    add_shifted(&mut result, &z2, 2 * m);
    result.set_len(result_len);
    result.trim();
    Ok(result)
}

/// Splits `a` into `(lo, hi)` at limb index `m`: `a == hi * B^m + lo`.
fn split(a: &Bigint, m: usize) -> (Scratch, Scratch) {
    let limbs = a.as_slice();
    let lo_len = m.min(limbs.len());
    let mut lo = Bigint::construct(lo_len);
    if lo_len > 0 {
        lo.capacity_slice_mut()[..lo_len].copy_from_slice(&limbs[..lo_len]);
        lo.set_len(lo_len);
        lo.trim();
    }
    let hi_len = limbs.len().saturating_sub(m);
    let mut hi = Bigint::construct(hi_len);
    if hi_len > 0 {
        hi.capacity_slice_mut()[..hi_len].copy_from_slice(&limbs[m..]);
        hi.set_len(hi_len);
        hi.trim();
    }
    (Scratch::from_owned(lo), Scratch::from_owned(hi))
}

fn add_new(a: &Bigint, b: &Bigint) -> Result<Scratch, BigintError> {
    let mut s = Scratch::new(0)?;
    arith::add(a, b, &mut s)?;
    Ok(s)
}

fn sub_new(a: &Bigint, b: &Bigint) -> Result<Scratch, BigintError> {
    let mut s = Scratch::new(0)?;
    arith::sub(a, b, &mut s)?;
    Ok(s)
}

/// Adds `z`'s value into `result`'s capacity region at limb offset
/// `limb_offset`, propagating carry as far as needed. `result` must have
/// enough capacity for the shifted value to fit without truncation.
fn add_shifted(result: &mut Bigint, z: &Bigint, limb_offset: usize) {
    if z.is_zero() {
        return;
    }
    let limbs = result.capacity_slice_mut();
    let mut carry: DoubleLimb = 0;
    let mut k = limb_offset;
    for &zl in z.as_slice() {
        let sum = limbs[k] as DoubleLimb + zl as DoubleLimb + carry;
        limbs[k] = sum as u64;
        carry = sum >> LIMB_BITS;
        k += 1;
    }
    while carry != 0 {
        let sum = limbs[k] as DoubleLimb + carry;
        limbs[k] = sum as u64;
        carry = sum >> LIMB_BITS;
        k += 1;
    }
}
