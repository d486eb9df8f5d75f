//! Bitwise AND/OR/XOR/NOT and left/right shift.
//!
//! AND/OR/XOR zero-extend the shorter operand; NOT complements every bit
//! of every limb the operand actually occupies (a limb-rounded width —
//! callers needing a fixed bit-width complement must pre-extend their
//! operand first).

use crate::bigint::{Bigint, Scratch};
use crate::error::BigintError;
use crate::limb::LIMB_BITS;

macro_rules! zero_extending_bitop {
    ($name:ident, $op:tt) => {
        pub fn $name(a: &Bigint, b: &Bigint, dst: &mut Bigint) -> Result<(), BigintError> {
            let len = a.len().max(b.len());
            let mut scratch = Scratch::new(len)?;
            let limbs = scratch.capacity_slice_mut();
            for i in 0..len {
                limbs[i] = a.limb_at(i) $op b.limb_at(i);
            }
            scratch.set_len(len);
            scratch.trim();
            scratch.finish_into(dst);
            Ok(())
        }
    };
}

zero_extending_bitop!(and, &);
zero_extending_bitop!(or, |);
zero_extending_bitop!(xor, ^);

/// `dst <- !a`, complementing every limb in `a`'s current length. The
/// result can be longer than `a`'s trimmed length if `a`'s top limb's
/// complement is nonzero only in its low bits — trimmed as usual.
pub fn not(a: &Bigint, dst: &mut Bigint) -> Result<(), BigintError> {
    let len = a.len();
    let mut scratch = Scratch::new(len)?;
    let limbs = scratch.capacity_slice_mut();
    for i in 0..len {
        limbs[i] = !a.limb_at(i);
    }
    scratch.set_len(len);
    scratch.trim();
    scratch.finish_into(dst);
    Ok(())
}

fn bit_length(a: &Bigint) -> usize {
    match a.as_slice().last() {
        None => 0,
        Some(&top) => (a.len() - 1) * LIMB_BITS as usize + (LIMB_BITS - top.leading_zeros()) as usize,
    }
}

/// `dst <- a << k`. A shift of 0 is an exact copy.
pub fn shift_left(a: &Bigint, k: u64, dst: &mut Bigint) -> Result<(), BigintError> {
    if a.is_zero() {
        return zero(dst);
    }
    let limb_shift = (k / LIMB_BITS as u64) as usize;
    let bit_shift = (k % LIMB_BITS as u64) as u32;
    let new_bit_len = bit_length(a) + k as usize;
    let len = new_bit_len.div_ceil(LIMB_BITS as usize);
    let mut scratch = Scratch::new(len)?;
    let limbs = scratch.capacity_slice_mut();
    if bit_shift == 0 {
        for i in 0..a.len() {
            limbs[i + limb_shift] = a.limb_at(i);
        }
    } else {
        for i in 0..a.len() {
            limbs[i + limb_shift] |= a.limb_at(i) << bit_shift;
            limbs[i + limb_shift + 1] |= a.limb_at(i) >> (LIMB_BITS - bit_shift);
        }
    }
    scratch.set_len(len);
    scratch.trim();
    scratch.finish_into(dst);
    Ok(())
}

/// `dst <- a >> k`. Bits shifted off the low end are discarded; shifting
/// by at least `a`'s bit length yields zero.
pub fn shift_right(a: &Bigint, k: u64, dst: &mut Bigint) -> Result<(), BigintError> {
    if a.is_zero() || k as usize >= bit_length(a) {
        return zero(dst);
    }
    let limb_shift = (k / LIMB_BITS as u64) as usize;
    let bit_shift = (k % LIMB_BITS as u64) as u32;
    let len = a.len() - limb_shift;
    let mut scratch = Scratch::new(len)?;
    let limbs = scratch.capacity_slice_mut();
    if bit_shift == 0 {
        for i in 0..len {
            limbs[i] = a.limb_at(i + limb_shift);
        }
    } else {
        for i in 0..len {
            let lo = a.limb_at(i + limb_shift) >> bit_shift;
            let hi = a
                .limb_at(i + limb_shift + 1)
                .checked_shl(LIMB_BITS - bit_shift)
                .unwrap_or(0);
            limbs[i] = lo | hi;
        }
    }
    scratch.set_len(len);
    scratch.trim();
    scratch.finish_into(dst);
    Ok(())
}

fn zero(dst: &mut Bigint) -> Result<(), BigintError> {
    Scratch::new(0)?.finish_into(dst);
    Ok(())
}
