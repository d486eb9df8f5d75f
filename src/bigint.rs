//! Limb storage, normalization, and the ABI-facing `Bigint` struct.
//!
//! `Bigint`'s three fields are the entire ABI contract, so it is a bare
//! `#[repr(C)]` struct backed by a manually managed allocation rather
//! than a `Vec<Limb>` whose layout and destructor the ABI cannot depend
//! on.

use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use log::trace;

use crate::error::BigintError;
use crate::limb::Limb;

/// A non-negative arbitrary-precision integer: `limbs[0..len)` in
/// little-endian limb order, `len <= capacity`.
///
/// Canonical form: `len == 0` represents zero, otherwise `limbs[len-1] !=
/// 0`. Every safe constructor in this crate maintains that invariant;
/// `Trim` is how operations that might produce trailing zero limbs
/// restore it.
#[repr(C)]
pub struct Bigint {
    limbs: *mut Limb,
    capacity: usize,
    len: usize,
}

impl Bigint {
    fn layout(capacity: usize) -> Layout {
        Layout::array::<Limb>(capacity).expect("limb count overflows isize")
    }

    /// Allocates a new `Bigint` with value 0 and room for `capacity`
    /// limbs (no allocation when `capacity == 0`).
    pub fn construct(capacity: usize) -> Self {
        if capacity == 0 {
            return Self {
                limbs: ptr::null_mut(),
                capacity: 0,
                len: 0,
            };
        }
        let layout = Self::layout(capacity);
        // SAFETY: layout has nonzero size (capacity > 0, Limb is nonzero-sized).
        let ptr = unsafe { alloc::alloc_zeroed(layout) } as *mut Limb;
        if ptr.is_null() {
            alloc::handle_alloc_error(layout);
        }
        Self {
            limbs: ptr,
            capacity,
            len: 0,
        }
    }

    /// Ensures `self.capacity() >= n`, growing geometrically (at least
    /// doubling) and zero-filling the newly exposed region. Existing
    /// limbs in `[0, len)` are preserved.
    pub fn reserve(&mut self, n: usize) -> Result<(), BigintError> {
        if self.capacity >= n {
            return Ok(());
        }
        let new_capacity = (self.capacity.max(1) * 2).max(n);
        trace!(
            "bigint: growing capacity {} -> {} limbs",
            self.capacity, new_capacity
        );
        let new_layout = Self::layout(new_capacity);
        let new_ptr = if self.limbs.is_null() {
            // SAFETY: new_layout has nonzero size.
            unsafe { alloc::alloc_zeroed(new_layout) }
        } else {
            let old_layout = Self::layout(self.capacity);
            // SAFETY: self.limbs was allocated with old_layout by a
            // previous call to alloc_zeroed/realloc on this same Bigint.
            unsafe { alloc::realloc(self.limbs as *mut u8, old_layout, new_layout.size()) }
        } as *mut Limb;
        if new_ptr.is_null() {
            return Err(BigintError::AllocationFailure(new_capacity));
        }
        if new_capacity > self.capacity {
            // realloc only preserves [0, old_capacity); zero the rest so
            // algorithms that extend len into it never read garbage.
            // SAFETY: new_ptr has room for new_capacity limbs and the
            // range [self.capacity, new_capacity) is within bounds.
            unsafe {
                new_ptr
                    .add(self.capacity)
                    .write_bytes(0u8, new_capacity - self.capacity);
            }
        }
        self.limbs = new_ptr;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Drops trailing zero limbs until `len == 0` or the top limb is
    /// nonzero.
    pub fn trim(&mut self) {
        let limbs = self.as_slice();
        let mut len = self.len;
        while len > 0 && limbs[len - 1] == 0 {
            len -= 1;
        }
        self.len = len;
    }

    /// Frees the limb buffer and resets `self` to the zero value with
    /// zero capacity. Does not free `self` itself — the container is
    /// owned by the caller.
    pub fn destroy(&mut self) {
        if !self.limbs.is_null() {
            let layout = Self::layout(self.capacity);
            // SAFETY: self.limbs was allocated with this layout.
            unsafe { alloc::dealloc(self.limbs as *mut u8, layout) };
        }
        self.limbs = ptr::null_mut();
        self.capacity = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True iff this `Bigint` represents the value 0.
    pub fn is_zero(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Limb] {
        if self.limbs.is_null() {
            &[]
        } else {
            // SAFETY: [0, len) is always initialized and len <= capacity.
            unsafe { std::slice::from_raw_parts(self.limbs, self.len) }
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [Limb] {
        if self.limbs.is_null() {
            &mut []
        } else {
            // SAFETY: [0, len) is always initialized and len <= capacity.
            unsafe { std::slice::from_raw_parts_mut(self.limbs, self.len) }
        }
    }

    /// The limb at `i`, or 0 if `i` is beyond `len` (the zero-extension
    /// every bitwise/additive op applies to the shorter operand).
    pub(crate) fn limb_at(&self, i: usize) -> Limb {
        self.as_slice().get(i).copied().unwrap_or(0)
    }

    /// View over the full capacity, for writing limbs at indices beyond
    /// the current `len` before calling `set_len`.
    pub(crate) fn capacity_slice_mut(&mut self) -> &mut [Limb] {
        if self.limbs.is_null() {
            &mut []
        } else {
            // SAFETY: capacity limbs are allocated and, beyond len, kept
            // zero-filled by reserve.
            unsafe { std::slice::from_raw_parts_mut(self.limbs, self.capacity) }
        }
    }

    /// Sets `len` directly. Callers must have already written (or relied
    /// on `reserve`'s zero-fill for) every index below `new_len`.
    pub(crate) fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity);
        self.len = new_len;
    }
}

impl fmt::Debug for Bigint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bigint")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("limbs", &self.as_slice())
            .finish()
    }
}

impl Clone for Bigint {
    fn clone(&self) -> Self {
        let mut out = Bigint::construct(self.len);
        if self.len > 0 {
            out.capacity_slice_mut()[..self.len].copy_from_slice(self.as_slice());
        }
        out.set_len(self.len);
        out
    }
}

impl PartialEq for Bigint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Bigint {}

impl PartialOrd for Bigint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bigint {
    /// Total order on non-negative bigints: length first, then limbs
    /// high to low.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.len.cmp(&other.len) {
            Ordering::Equal => {
                let (a, b) = (self.as_slice(), other.as_slice());
                for i in (0..self.len).rev() {
                    match a[i].cmp(&b[i]) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                Ordering::Equal
            }
            ord => ord,
        }
    }
}

/// Internal-only RAII guard around a `Bigint` that frees its buffer on
/// drop. Recursive algorithms (Karatsuba, Knuth D) allocate several of
/// these as working storage; none of them cross the ABI, where the
/// caller owns the `Bigint` lifecycle explicitly.
pub(crate) struct Scratch(Bigint);

impl Scratch {
    /// Allocates fresh working storage for `capacity` limbs, through the
    /// same fallible `reserve` path every destination buffer grows
    /// through, so a true allocation failure surfaces as
    /// `BigintError::AllocationFailure` instead of aborting the process.
    pub fn new(capacity: usize) -> Result<Self, BigintError> {
        let mut bigint = Bigint::construct(0);
        bigint.reserve(capacity)?;
        Ok(Scratch(bigint))
    }

    /// Wraps an already-built `Bigint` so it's freed on drop. Used when a
    /// helper builds the value with `Bigint::construct` directly (e.g.
    /// `mul::split`) instead of through `Scratch::new`.
    pub fn from_owned(bigint: Bigint) -> Self {
        Scratch(bigint)
    }

    /// Moves this buffer's contents into `dst`, freeing whatever `dst`
    /// previously held first. This is the standard aliasing-safe finish:
    /// every op computes into a fresh `Scratch` (so it's never affected
    /// by a later write to `dst`), then swaps it in only once it's done
    /// reading the inputs, which may themselves alias `dst`.
    pub fn finish_into(mut self, dst: &mut Bigint) {
        dst.destroy();
        *dst = std::mem::replace(&mut self.0, Bigint::construct(0));
    }
}

impl std::ops::Deref for Scratch {
    type Target = Bigint;
    fn deref(&self) -> &Bigint {
        &self.0
    }
}

impl std::ops::DerefMut for Scratch {
    fn deref_mut(&mut self) -> &mut Bigint {
        &mut self.0
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        self.0.destroy();
    }
}
