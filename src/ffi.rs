//! The C-callable ABI surface.
//!
//! Every entry point takes raw, caller-owned pointers: operand `Bigint`s
//! are read-only, the destination is grown in place and may alias an
//! operand — an accumulate-in-place call like `bigint_add(x, y, x)` is a
//! documented, supported use. A null argument is treated as invalid input
//! rather than dereferenced.
//!
//! Aliasing needs care beyond what the core ops already give us: the core
//! `Scratch`-then-swap protocol (`src/bigint.rs`) only guarantees a
//! destination never observes its own partially written state, not that
//! forming the references themselves is sound. Rust's aliasing model
//! forbids a live `&Bigint` and `&mut Bigint` over the same allocation at
//! once, full stop, regardless of what the function body goes on to do
//! with them — so every entry point below checks raw-pointer equality
//! *before* forming any reference, and snapshots an aliased operand into
//! an owned clone rather than ever holding a shared and an exclusive
//! reference to the same `Bigint` concurrently. See [`snapshot_if_aliased`].
//!
//! # Safety
//! Every `*const Bigint`/`*mut Bigint` argument must be null or point to
//! a live, correctly laid out `Bigint` for the duration of the call. Two
//! arguments may point to the same `Bigint` (that's the aliasing case
//! this module handles); two arguments must never point to
//! overlapping-but-distinct allocations.

use std::ffi::{c_char, c_int, CStr, CString};

use crate::arith;
use crate::bigint::Bigint;
use crate::bitwise;
use crate::div;
use crate::error::{self, BigintError};
use crate::hex;
use crate::mul;

/// If `ptr` aliases `other`, returns an owned clone of `*ptr`; otherwise
/// `None`. Callers must invoke this for every operand before forming a
/// `&mut` to `other`'s allocation — reading through the clone afterwards
/// never overlaps a live exclusive reference to the same memory.
///
/// # Safety
/// `ptr` must be non-null and point to a live `Bigint`.
unsafe fn snapshot_if_aliased(ptr: *const Bigint, other: *const Bigint) -> Option<Bigint> {
    std::ptr::eq(ptr, other).then(|| unsafe { (*ptr).clone() })
}

/// Allocates a new `Bigint` container with value 0 and room for `n`
/// limbs. The container itself is owned by the caller from this point
/// on; only its limb buffer has an explicit destructor.
#[no_mangle]
pub extern "C" fn bigint_new_capacity(n: usize) -> *mut Bigint {
    Box::into_raw(Box::new(Bigint::construct(n)))
}

/// Frees `x`'s limb buffer and resets it to capacity 0, length 0. Does
/// not free `x` itself.
///
/// # Safety
/// `x` must be null or point to a live `Bigint`.
#[no_mangle]
pub unsafe extern "C" fn bigint_free_limbs(x: *mut Bigint) {
    if x.is_null() {
        return;
    }
    unsafe { (*x).destroy() };
}

/// Parses `ascii` (null-terminated) into `dst`.
///
/// # Safety
/// `ascii` must be null or a valid null-terminated C string; `dst` must
/// be null or point to a live `Bigint`.
#[no_mangle]
pub unsafe extern "C" fn bigint_set_hex(ascii: *const c_char, dst: *mut Bigint) {
    if ascii.is_null() || dst.is_null() {
        error::set_last_error(Some(BigintError::InvalidInput(0, 0)));
        return;
    }
    let bytes = unsafe { CStr::from_ptr(ascii) }.to_bytes();
    let dst = unsafe { &mut *dst };
    let result = hex::parse(bytes, dst);
    error::set_last_error(result.err());
}

/// Returns a newly allocated, null-terminated lowercase ASCII hex string
/// for `src` (empty string for zero). Free it with [`bigint_free_hex`].
///
/// # Safety
/// `src` must be null or point to a live `Bigint`.
#[no_mangle]
pub unsafe extern "C" fn bigint_get_hex(src: *const Bigint, pad_top: bool) -> *mut c_char {
    if src.is_null() {
        error::set_last_error(None);
        return std::ptr::null_mut();
    }
    let src = unsafe { &*src };
    let text = hex::emit(src, pad_top);
    error::set_last_error(None);
    CString::new(text)
        .expect("hex digits never contain a NUL byte")
        .into_raw()
}

/// Frees a string previously returned by [`bigint_get_hex`].
///
/// # Safety
/// `ptr` must be null or a pointer previously returned by
/// `bigint_get_hex` and not already freed.
#[no_mangle]
pub unsafe extern "C" fn bigint_free_hex(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr) });
}

/// # Safety
/// `a` and `dst` must be null or point to live `Bigint`s.
#[no_mangle]
pub unsafe extern "C" fn bigint_bit_not(a: *const Bigint, dst: *mut Bigint) {
    if a.is_null() || dst.is_null() {
        error::set_last_error(Some(BigintError::InvalidInput(0, 0)));
        return;
    }
    let a_owned = unsafe { snapshot_if_aliased(a, dst as *const Bigint) };
    let dst_ref = unsafe { &mut *dst };
    let a_ref = a_owned.as_ref().unwrap_or_else(|| unsafe { &*a });
    let result = bitwise::not(a_ref, dst_ref);
    error::set_last_error(result.err());
}

/// # Safety
/// `a`, `dst` must be null or point to live `Bigint`s.
#[no_mangle]
pub unsafe extern "C" fn bigint_bit_shiftl(a: *const Bigint, k: u64, dst: *mut Bigint) {
    if a.is_null() || dst.is_null() {
        error::set_last_error(Some(BigintError::InvalidInput(0, 0)));
        return;
    }
    let a_owned = unsafe { snapshot_if_aliased(a, dst as *const Bigint) };
    let dst_ref = unsafe { &mut *dst };
    let a_ref = a_owned.as_ref().unwrap_or_else(|| unsafe { &*a });
    let result = bitwise::shift_left(a_ref, k, dst_ref);
    error::set_last_error(result.err());
}

/// # Safety
/// `a`, `dst` must be null or point to live `Bigint`s.
#[no_mangle]
pub unsafe extern "C" fn bigint_bit_shiftr(a: *const Bigint, k: u64, dst: *mut Bigint) {
    if a.is_null() || dst.is_null() {
        error::set_last_error(Some(BigintError::InvalidInput(0, 0)));
        return;
    }
    let a_owned = unsafe { snapshot_if_aliased(a, dst as *const Bigint) };
    let dst_ref = unsafe { &mut *dst };
    let a_ref = a_owned.as_ref().unwrap_or_else(|| unsafe { &*a });
    let result = bitwise::shift_right(a_ref, k, dst_ref);
    error::set_last_error(result.err());
}

/// # Safety
/// `a`, `b`, `q`, `r` must be null or point to live `Bigint`s, and `q`
/// must not alias `r` (they are independent output parameters; an
/// operand may alias either one, but the two destinations may not alias
/// each other).
#[no_mangle]
pub unsafe extern "C" fn bigint_div(a: *const Bigint, b: *const Bigint, q: *mut Bigint, r: *mut Bigint) {
    if a.is_null() || b.is_null() || q.is_null() || r.is_null() {
        error::set_last_error(Some(BigintError::InvalidInput(0, 0)));
        return;
    }
    if std::ptr::eq(q, r) {
        error::set_last_error(Some(BigintError::InvalidInput(0, 0)));
        return;
    }
    let a_owned = unsafe {
        snapshot_if_aliased(a, q as *const Bigint).or_else(|| snapshot_if_aliased(a, r as *const Bigint))
    };
    let b_owned = unsafe {
        snapshot_if_aliased(b, q as *const Bigint).or_else(|| snapshot_if_aliased(b, r as *const Bigint))
    };
    let (q_ref, r_ref) = unsafe { (&mut *q, &mut *r) };
    let a_ref = a_owned.as_ref().unwrap_or_else(|| unsafe { &*a });
    let b_ref = b_owned.as_ref().unwrap_or_else(|| unsafe { &*b });
    let result = div::divide(a_ref, b_ref, q_ref, r_ref);
    error::set_last_error(result.err());
}

/// Stable per-variant code for this thread's most recent error, or 0 if
/// the previous call succeeded. Gives callers an out-of-band error
/// channel without constraining any other symbol's return shape.
#[no_mangle]
pub extern "C" fn bigint_last_error_code() -> c_int {
    error::last_error_code()
}

macro_rules! ffi_binary_op {
    ($(#[$meta:meta])* $name:ident, $core:path) => {
        $(#[$meta])*
        ///
        /// # Safety
        /// `a`, `b`, `dst` must be null or point to live `Bigint`s. `dst`
        /// may alias `a` and/or `b`.
        #[no_mangle]
        pub unsafe extern "C" fn $name(a: *const Bigint, b: *const Bigint, dst: *mut Bigint) {
            if a.is_null() || b.is_null() || dst.is_null() {
                error::set_last_error(Some(BigintError::InvalidInput(0, 0)));
                return;
            }
            let a_owned = unsafe { snapshot_if_aliased(a, dst as *const Bigint) };
            let b_owned = unsafe { snapshot_if_aliased(b, dst as *const Bigint) };
            let dst_ref = unsafe { &mut *dst };
            let a_ref = a_owned.as_ref().unwrap_or_else(|| unsafe { &*a });
            let b_ref = b_owned.as_ref().unwrap_or_else(|| unsafe { &*b });
            let result = $core(a_ref, b_ref, dst_ref);
            error::set_last_error(result.err());
        }
    };
}

ffi_binary_op!(bigint_bit_and, bitwise::and);
ffi_binary_op!(bigint_bit_or, bitwise::or);
ffi_binary_op!(bigint_bit_xor, bitwise::xor);
ffi_binary_op!(bigint_add, arith::add);
ffi_binary_op!(bigint_sub, arith::sub);
ffi_binary_op!(bigint_mul_classic, mul::mul_classic);
ffi_binary_op!(bigint_mul_karatsuba, mul::mul_karatsuba);
