//! Error taxonomy and the out-of-band last-error channel.
//!
//! Core operations return [`Result<T, BigintError>`] to safe Rust callers.
//! The FFI boundary (`ffi.rs`) cannot propagate a `Result` across the ABI,
//! so every fallible entry point also records the error kind in a
//! thread-local slot, queryable via `bigint_last_error_code`.

use std::cell::Cell;
use std::fmt;

/// Errors the engine's documented domain can produce.
///
/// Every operation is total except at the documented edges (division by
/// zero, subtraction underflow, malformed hex, allocation failure); these
/// variants cover exactly those edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BigintError {
    /// A hex string contained a byte that isn't an ASCII hex digit.
    #[error("invalid hex digit {0:#04x} at byte offset {1}")]
    InvalidInput(u8, usize),
    /// `bigint_div`'s divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// `bigint_sub` was called with `a < b`.
    #[error("subtraction underflow: minuend smaller than subtrahend")]
    Underflow,
    /// `Reserve` could not grow the destination's limb buffer.
    #[error("allocation failure reserving {0} limbs")]
    AllocationFailure(usize),
}

/// Stable per-variant code for the ABI's last-error channel.
///
/// 0 is reserved for "no error"; `bigint_last_error_code` never returns 0
/// for an error condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum BigintErrorKind {
    InvalidInput = 1,
    DivisionByZero = 2,
    Underflow = 3,
    AllocationFailure = 4,
}

impl From<BigintError> for BigintErrorKind {
    fn from(e: BigintError) -> Self {
        match e {
            BigintError::InvalidInput(..) => BigintErrorKind::InvalidInput,
            BigintError::DivisionByZero => BigintErrorKind::DivisionByZero,
            BigintError::Underflow => BigintErrorKind::Underflow,
            BigintError::AllocationFailure(_) => BigintErrorKind::AllocationFailure,
        }
    }
}

impl fmt::Display for BigintErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as i32)
    }
}

thread_local! {
    static LAST_ERROR: Cell<Option<BigintErrorKind>> = const { Cell::new(None) };
}

/// Records `err` (or clears the slot if `None`) as this thread's last
/// error. Called by every fallible entry point before it returns.
pub fn set_last_error(err: Option<BigintError>) {
    LAST_ERROR.with(|slot| slot.set(err.map(BigintErrorKind::from)));
}

/// Returns the stable code for this thread's last error, or 0 if the most
/// recent call succeeded.
pub fn last_error_code() -> i32 {
    LAST_ERROR.with(|slot| slot.get().map_or(0, |kind| kind as i32))
}

/// Runs `f`, recording its outcome in the last-error slot, and returns its
/// result unchanged. Every ABI entry point that can fail funnels through
/// this so the last-error slot and the Rust-facing `Result` never drift
/// apart.
pub fn track<T>(f: impl FnOnce() -> Result<T, BigintError>) -> Result<T, BigintError> {
    let result = f();
    set_last_error(result.as_ref().err().copied());
    result
}
