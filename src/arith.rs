//! Addition and subtraction.

use crate::bigint::{Bigint, Scratch};
use crate::error::BigintError;
use crate::limb::DoubleLimb;

/// `dst <- a + b`.
pub fn add(a: &Bigint, b: &Bigint, dst: &mut Bigint) -> Result<(), BigintError> {
    let len = a.len().max(b.len());
    let mut scratch = Scratch::new(len + 1)?;
    let limbs = scratch.capacity_slice_mut();
    let mut carry: DoubleLimb = 0;
    for i in 0..len {
        let sum = a.limb_at(i) as DoubleLimb + b.limb_at(i) as DoubleLimb + carry;
        limbs[i] = sum as u64;
        carry = sum >> crate::limb::LIMB_BITS;
    }
    limbs[len] = carry as u64;
    scratch.set_len(len + 1);
    scratch.trim();
    scratch.finish_into(dst);
    Ok(())
}

/// `dst <- a - b`.
///
/// # Errors
/// Returns [`BigintError::Underflow`] if `a < b`, leaving `dst`
/// untouched, rather than computing a meaningless wrapped result.
pub fn sub(a: &Bigint, b: &Bigint, dst: &mut Bigint) -> Result<(), BigintError> {
    if a < b {
        return Err(BigintError::Underflow);
    }
    let len = a.len();
    let mut scratch = Scratch::new(len)?;
    let limbs = scratch.capacity_slice_mut();
    let mut borrow: i128 = 0;
    for i in 0..len {
        let diff = a.limb_at(i) as i128 - b.limb_at(i) as i128 - borrow;
        if diff < 0 {
            limbs[i] = (diff + (1i128 << crate::limb::LIMB_BITS)) as u64;
            borrow = 1;
        } else {
            limbs[i] = diff as u64;
            borrow = 0;
        }
    }
    scratch.set_len(len);
    scratch.trim();
    scratch.finish_into(dst);
    Ok(())
}
