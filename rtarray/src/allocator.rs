//! Allocation policies: where an [`RtArray`][crate::RtArray] gets its storage from, and how
//! elements are placed into and removed from that storage.
//!
//! # Examples
//!
//! The default policy is the global heap:
//!
//! ```
//! use rtarray::prelude::*;
//! let arr: RtArray<u32> = RtArray::from_elem(4, 9);
//! assert_eq!(&arr[..], &[9, 9, 9, 9]);
//! ```
//!
//! Arena allocation, if the "bumpalo" crate feature is enabled:
//!
//! ```
//! # #[cfg(feature = "bumpalo")] {
//! use rtarray::prelude::*;
//! let arena = bumpalo::Bump::new();
//! let arr: RtArray<u32, &bumpalo::Bump> = RtArray::from_fn_in(4, |i| i as u32, &arena);
//! assert_eq!(&arr[..], &[0, 1, 2, 3]);
//! drop(arr); // Runs element destructors.
//! drop(arena); // Frees the storage.
//! # }
//! ```

use crate::AllocError;

use core::alloc::Layout;
use core::ptr::NonNull;

/// Strategy for obtaining raw storage for `len` elements and for constructing and destroying
/// elements within it.
///
/// An [`RtArray`][crate::RtArray] calls [`allocate`][ArrayAllocator::allocate] once, then
/// [`construct`][ArrayAllocator::construct] for each slot in increasing index order. When it is
/// dropped it calls [`destroy`][ArrayAllocator::destroy] for each slot in decreasing index order
/// and then [`deallocate`][ArrayAllocator::deallocate] once, with the same element count. The
/// container never calls `allocate` or `deallocate` for a zero-byte request (empty arrays or
/// zero-sized `T`); it uses a dangling pointer instead.
///
/// # Examples
///
/// A policy that counts live blocks:
///
/// ```
/// use rtarray::prelude::*;
/// use rtarray::AllocError;
/// use std::cell::Cell;
/// use std::ptr::NonNull;
///
/// #[derive(Default)]
/// struct Counting {
///     live: Cell<usize>,
/// }
///
/// unsafe impl ArrayAllocator for Counting {
///     fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError> {
///         let p = Global.allocate(len)?;
///         self.live.set(self.live.get() + 1);
///         Ok(p)
///     }
///
///     unsafe fn deallocate<T>(&self, ptr: NonNull<T>, len: usize) {
///         self.live.set(self.live.get() - 1);
///         Global.deallocate(ptr, len)
///     }
/// }
///
/// let counting = Counting::default();
/// let arr: RtArray<u64, &Counting> = RtArray::from_elem_in(16, 1, &counting);
/// assert_eq!(counting.live.get(), 1);
/// drop(arr);
/// assert_eq!(counting.live.get(), 0);
/// ```
///
/// # Safety
///
/// An implementor must guarantee that a pointer returned by `allocate::<T>(len)` is valid for
/// reads and writes of `len` values of `T`, is aligned for `T`, and stays valid until it is
/// passed back to `deallocate` (or until the allocator itself is gone, for arenas whose
/// `deallocate` does nothing). `construct` must leave the slot initialized with the given value,
/// and `destroy` must leave it logically uninitialized.
pub unsafe trait ArrayAllocator {
    /// Obtains uninitialized storage for `len` values of `T`.
    ///
    /// [`RtArray`][crate::RtArray] only calls this when `len * size_of::<T>()` is non-zero, but
    /// implementations may still be called directly with a zero-byte request.
    fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError>;

    /// Releases storage returned by [`allocate`][ArrayAllocator::allocate].
    ///
    /// # Safety
    ///
    /// `ptr` must come from `self.allocate::<T>(len)` with the same `len`, and every element
    /// in it must already have been destroyed.
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, len: usize);

    /// Moves `value` into the uninitialized slot `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must lie inside a live allocation from this allocator and must not hold a
    /// constructed value.
    #[inline]
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        slot.as_ptr().write(value)
    }

    /// Runs the destructor of the value in `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must hold a value that was constructed and not yet destroyed.
    #[inline]
    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        core::ptr::drop_in_place(slot.as_ptr())
    }
}

/// Computes the layout of `len` consecutive `T`s, as used by every bundled allocator.
///
/// # Examples
///
/// ```
/// use rtarray::allocator::array_layout;
/// assert_eq!(array_layout::<u32>(3).unwrap().size(), 12);
/// assert!(array_layout::<u32>(usize::MAX).is_err());
/// ```
#[inline]
pub fn array_layout<T>(len: usize) -> Result<Layout, AllocError> {
    Layout::array::<T>(len).map_err(|_| AllocError::CapacityOverflow { len })
}

/// The global heap, via the `alloc` crate's allocator functions.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let arr = RtArray::from_elem_in(2, 'x', Global);
/// assert_eq!(&arr[..], &['x', 'x']);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Global;

unsafe impl ArrayAllocator for Global {
    fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError> {
        let layout = array_layout::<T>(len)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        // Safety: the layout has a non-zero size.
        let p = unsafe { alloc::alloc::alloc(layout) };
        NonNull::new(p.cast::<T>()).ok_or(AllocError::Exhausted {
            size: layout.size(),
            align: layout.align(),
        })
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, len: usize) {
        let size = core::mem::size_of::<T>() * len;
        if size == 0 {
            return;
        }
        // Safety: the same layout succeeded in `allocate`.
        let layout = Layout::from_size_align_unchecked(size, core::mem::align_of::<T>());
        alloc::alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout)
    }
}

unsafe impl<A: ArrayAllocator + ?Sized> ArrayAllocator for &A {
    #[inline]
    fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError> {
        (**self).allocate(len)
    }

    #[inline]
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, len: usize) {
        (**self).deallocate(ptr, len)
    }

    #[inline]
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        (**self).construct(slot, value)
    }

    #[inline]
    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        (**self).destroy(slot)
    }
}

/// Arena storage. Elements are still dropped individually when the array is dropped, but the
/// memory itself is only reclaimed when the arena is reset or dropped.
#[cfg(feature = "bumpalo")]
unsafe impl ArrayAllocator for bumpalo::Bump {
    fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError> {
        let layout = array_layout::<T>(len)?;
        self.try_alloc_layout(layout)
            .map(|p| p.cast::<T>())
            .map_err(|_| AllocError::Exhausted {
                size: layout.size(),
                align: layout.align(),
            })
    }

    #[inline]
    unsafe fn deallocate<T>(&self, _ptr: NonNull<T>, _len: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_round_trip() {
        let p: NonNull<u64> = Global.allocate(8).unwrap();
        unsafe {
            for i in 0..8 {
                Global.construct(NonNull::new_unchecked(p.as_ptr().add(i)), i as u64);
            }
            assert_eq!(*p.as_ptr().add(7), 7);
            Global.deallocate(p, 8);
        }
    }

    #[test]
    fn global_zero_byte_requests_are_dangling() {
        let empty: NonNull<u8> = Global.allocate(0).unwrap();
        assert_eq!(empty, NonNull::dangling());
        let units: NonNull<()> = Global.allocate(1000).unwrap();
        assert_eq!(units, NonNull::dangling());
        unsafe {
            Global.deallocate(empty, 0);
            Global.deallocate(units, 1000);
        }
    }

    #[test]
    fn oversized_request_is_capacity_overflow() {
        assert_eq!(
            Global.allocate::<u64>(usize::MAX / 4).unwrap_err(),
            AllocError::CapacityOverflow { len: usize::MAX / 4 }
        );
    }

    #[cfg(feature = "bumpalo")]
    #[test]
    fn bump_allocations_come_from_the_arena() {
        let arena = bumpalo::Bump::new();
        let before = arena.allocated_bytes();
        let p: NonNull<u32> = (&arena).allocate(64).unwrap();
        assert!(arena.allocated_bytes() >= before);
        assert_eq!(p.as_ptr() as usize % core::mem::align_of::<u32>(), 0);
        unsafe { (&arena).deallocate(p, 64) };
    }
}
