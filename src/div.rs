//! Unsigned long division: short division for a single-limb divisor,
//! Knuth's Algorithm D otherwise.
//!
//! The multi-limb path normalizes both operands, estimates each quotient
//! limb from the divisor's top two limbs (`qhat`), corrects the estimate
//! against the third limb (`rhat`), then repairs the rare overshoot with
//! an add-back step after the multiply-subtract.

use log::trace;

use crate::bigint::{Bigint, Scratch};
use crate::bitwise;
use crate::error::BigintError;
use crate::limb::{DoubleLimb, Limb, LIMB_BITS};

fn zero(dst: &mut Bigint) -> Result<(), BigintError> {
    Scratch::new(0)?.finish_into(dst);
    Ok(())
}

/// `q <- a // b`, `r <- a mod b`.
///
/// # Errors
/// [`BigintError::DivisionByZero`] if `b` is zero; `q` and `r` are left
/// untouched in that case.
pub fn divide(a: &Bigint, b: &Bigint, q: &mut Bigint, r: &mut Bigint) -> Result<(), BigintError> {
    if b.is_zero() {
        return Err(BigintError::DivisionByZero);
    }
    if a < b {
        zero(q)?;
        Scratch::from_owned(a.clone()).finish_into(r);
        return Ok(());
    }
    if b.len() == 1 {
        let (quot, rem) = short_divide(a, b.limb_at(0))?;
        quot.finish_into(q);
        rem.finish_into(r);
        return Ok(());
    }
    let (quot, rem) = knuth_divide(a, b)?;
    quot.finish_into(q);
    rem.finish_into(r);
    Ok(())
}

/// Divisor fits in one limb: one pass over `a`'s limbs high to low with
/// a `DoubleLimb` accumulator.
fn short_divide(a: &Bigint, d: Limb) -> Result<(Scratch, Scratch), BigintError> {
    let mut quot = Scratch::new(a.len())?;
    let qlimbs = quot.capacity_slice_mut();
    let mut rem: DoubleLimb = 0;
    for i in (0..a.len()).rev() {
        let cur = (rem << LIMB_BITS) | a.limb_at(i) as DoubleLimb;
        qlimbs[i] = (cur / d as DoubleLimb) as u64;
        rem = cur % d as DoubleLimb;
    }
    quot.set_len(a.len());
    quot.trim();

    let mut remainder = Scratch::new(1)?;
    if rem != 0 {
        remainder.capacity_slice_mut()[0] = rem as u64;
        remainder.set_len(1);
    }
    Ok((quot, remainder))
}

/// Subtracts `qhat * divisor` from `rem[offset..offset+divisor.len()+1]`,
/// returning true on borrow (meaning `qhat` overshot by 1).
fn mul_sub(rem: &mut [Limb], offset: usize, divisor: &[Limb], qhat: Limb) -> bool {
    let mut borrow: DoubleLimb = 0;
    for (i, &d) in divisor.iter().enumerate() {
        let prod = qhat as DoubleLimb * d as DoubleLimb + borrow;
        let (diff, b) = rem[offset + i].overflowing_sub(prod as u64);
        rem[offset + i] = diff;
        borrow = (prod >> LIMB_BITS) + b as DoubleLimb;
    }
    let (diff, b) = rem[offset + divisor.len()].overflowing_sub(borrow as u64);
    rem[offset + divisor.len()] = diff;
    b
}

/// Adds `divisor` back into `rem[offset..offset+divisor.len()+1]` after
/// `mul_sub` overshot.
fn add_back(rem: &mut [Limb], offset: usize, divisor: &[Limb]) {
    let mut carry = false;
    for (i, &d) in divisor.iter().enumerate() {
        let (sum, c1) = rem[offset + i].overflowing_add(d);
        let (sum, c2) = sum.overflowing_add(carry as u64);
        rem[offset + i] = sum;
        carry = c1 || c2;
    }
    rem[offset + divisor.len()] = rem[offset + divisor.len()].wrapping_add(carry as u64);
}

/// Knuth's Algorithm D for a multi-limb divisor.
fn knuth_divide(a: &Bigint, b: &Bigint) -> Result<(Scratch, Scratch), BigintError> {
    let n = b.len();
    let m = a.len() - n;
    let s = b.as_slice().last().copied().unwrap().leading_zeros() as u64;
    trace!(
        "div: knuth m={} n={} normalizing shift s={}",
        m, n, s
    );

    let mut b_norm = Scratch::new(0)?;
    bitwise::shift_left(b, s, &mut b_norm)?;
    debug_assert_eq!(b_norm.len(), n);

    // Working buffer holds the normalized dividend plus one headroom
    // limb, exactly as Knuth D requires (u[0..=m+n]).
    let mut rem = Scratch::new(m + n + 1)?;
    {
        let mut a_norm = Scratch::new(0)?;
        bitwise::shift_left(a, s, &mut a_norm)?;
        let src = a_norm.as_slice();
        rem.capacity_slice_mut()[..src.len()].copy_from_slice(src);
    }

    let mut quot = Scratch::new(m + 1)?;
    let divisor = b_norm.as_slice().to_vec();
    let b_top = divisor[n - 1] as DoubleLimb;
    let b_second = divisor[n - 2] as DoubleLimb;

    for j in (0..=m).rev() {
        let rem_limbs = rem.capacity_slice_mut();
        let top = rem_limbs[j + n] as DoubleLimb;
        let next = rem_limbs[j + n - 1] as DoubleLimb;
        let top2 = (top << LIMB_BITS) | next;

        let mut qhat: DoubleLimb;
        let mut rhat: DoubleLimb;
        if top >= b_top {
            qhat = Limb::MAX as DoubleLimb;
            rhat = top2 - qhat * b_top;
        } else {
            qhat = top2 / b_top;
            rhat = top2 % b_top;
        }
        while rhat <= Limb::MAX as DoubleLimb
            && qhat * b_second > (rhat << LIMB_BITS) | rem_limbs[j + n - 2] as DoubleLimb
        {
            qhat -= 1;
            rhat += b_top;
        }

        let mut qhat = qhat as Limb;
        if mul_sub(rem.capacity_slice_mut(), j, &divisor, qhat) {
            qhat -= 1;
            trace!("div: knuth repair step firing at j={}", j);
            add_back(rem.capacity_slice_mut(), j, &divisor);
        }
        quot.capacity_slice_mut()[j] = qhat;
    }
    quot.set_len(m + 1);
    quot.trim();

    rem.set_len(n);
    rem.trim();
    let mut remainder_raw = Scratch::new(0)?;
    bitwise::shift_right(&rem, s, &mut remainder_raw)?;

    Ok((quot, remainder_raw))
}
