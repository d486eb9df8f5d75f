//! A fixed-radix arbitrary-precision unsigned integer engine, exposed
//! both as a safe Rust API and as a C ABI.
//!
//! Values are stored as little-endian arrays of 64-bit limbs behind the
//! [`Bigint`] type, which is deliberately a bare `#[repr(C)]` struct with
//! no `Drop` impl — its layout and lifecycle are the ABI contract the
//! `ffi` module exposes to C callers. Every operation follows the same
//! shape: compute into fresh scratch storage, then swap it into the
//! destination, so the destination may freely alias an operand.

mod arith;
mod bigint;
mod bitwise;
mod div;
mod error;
pub mod ffi;
mod hex;
mod limb;
mod mul;

pub use arith::{add, sub};
pub use bigint::Bigint;
pub use bitwise::{and, not, or, shift_left, shift_right, xor};
pub use div::divide;
pub use error::{last_error_code, BigintError, BigintErrorKind};
pub use hex::{emit as emit_hex, parse as parse_hex};
pub use limb::{DoubleLimb, Limb, LIMB_BITS};
pub use mul::{mul_classic, mul_karatsuba, KARATSUBA_THRESHOLD_LIMBS};
