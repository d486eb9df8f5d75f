//! Limb width used by the engine.
//!
//! A limb is one fixed-width component of a big integer's little-endian
//! representation. All multi-limb arithmetic accumulates into a
//! double-width value before splitting back into limbs, so a 64x64
//! product or a carry chain never loses bits mid-computation.

/// One component of a [`crate::Bigint`]'s little-endian limb array.
pub type Limb = u64;

/// Double-width accumulator used for carries, products, and quotient
/// digit estimation.
pub type DoubleLimb = u128;

/// Bit width of a single limb.
pub const LIMB_BITS: u32 = Limb::BITS;
