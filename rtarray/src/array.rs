//! The fixed-size, runtime-length array.
//!
//! # Examples
//!
//! ```
//! use rtarray::prelude::*;
//!
//! let mut arr: RtArray<u32> = RtArray::from_fn(5, |i| (i * 10) as u32);
//! assert_eq!(arr.len(), 5);
//! arr[2] = 7;
//! assert_eq!(arr.at(2), Ok(&7));
//! assert!(arr.at(5).is_err());
//! assert_eq!(arr.iter().rev().copied().collect::<Vec<_>>(), [40, 30, 7, 10, 0]);
//! ```

use crate::allocator::{array_layout, ArrayAllocator, Global};
use crate::init::{
    ArrayInitializer, CloneFrom, FillSequentially, FillWith, FromIterPrefix, MoveFrom,
    TryFillSequentially,
};
use crate::iter::IntoIter;
use crate::policy::{self, BoundsCheck, CopyPolicy, DebugChecked, DeepCopy, NoCopy};
use crate::{AllocError, InitError, OutOfRange};

use alloc::vec::Vec;
use core::convert::Infallible;
use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr::NonNull;
use core::slice::SliceIndex;

#[doc = svgbob_doc!(
/// A contiguous array whose length is fixed when it is built.
///
/// The elements live in a single block obtained from the allocation policy `A`. Unlike
/// [`Vec<T>`], an `RtArray` has no spare capacity and no way to change its length: every slot
/// from `0` to `len - 1` holds a live `T` from the end of construction until the array is
/// dropped.
///
/// ```svgbob
/// "RtArray<T>"
/// +-------+-----------+-------------+
/// | ptr   | "len = 4" | "allocator" |
/// +-------+-----------+-------------+
///   |
///   |
///   v "storage from A::allocate(4)"
///   +--------+--------+--------+--------+
///   | "T[0]" | "T[1]" | "T[2]" | "T[3]" |
///   +--------+--------+--------+--------+
/// ```
///
/// # Type parameters
///
/// * `A`: where storage comes from. See [`crate::allocator`].
/// * `B`: whether [`get_unchecked`][RtArray::get_unchecked] verifies its index. See
///   [`BoundsCheck`].
/// * `C`: whether the array can be cloned. See [`CopyPolicy`]. Copying is off by default.
///
/// # Lifecycle
///
/// Slots are constructed in increasing index order. If producing a slot fails, the slots
/// already built are dropped (highest index first) and the storage is released before the
/// error is returned. Dropping the array drops every element, from `len - 1` down to `0`, and
/// then releases the storage.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let arr: RtArray<String> = RtArray::from_elem(3, String::from("hi"));
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.front().map(String::as_str), Some("hi"));
/// ```
)]
pub struct RtArray<
    T,
    A: ArrayAllocator = Global,
    B: BoundsCheck = DebugChecked,
    C: CopyPolicy = NoCopy,
> {
    // Dangling if `len == 0` or `T` is zero-sized; otherwise owned storage from `alloc` holding
    // `len` initialized elements. Only `take` and `into_raw_parts` move it out, together with
    // `alloc`.
    ptr: NonNull<T>,
    len: usize,
    alloc: A,
    _bounds: B,
    _copy: C,
    _marker: PhantomData<T>,
}

// Safety: RtArray owns its elements and its allocator, like Vec<T, A>.
unsafe impl<T: Send, A: ArrayAllocator + Send, B: BoundsCheck, C: CopyPolicy> Send
    for RtArray<T, A, B, C>
{
}
unsafe impl<T: Sync, A: ArrayAllocator + Sync, B: BoundsCheck, C: CopyPolicy> Sync
    for RtArray<T, A, B, C>
{
}

#[inline(never)]
#[cold]
fn capacity_overflow() -> ! {
    panic!("RtArray capacity overflow")
}

#[inline(never)]
#[cold]
fn initializer_failed(index: usize) -> ! {
    panic!("RtArray initializer failed at index {}", index)
}

#[inline(never)]
#[cold]
fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index {} out of range for RtArray of length {}", index, len)
}

#[inline(never)]
#[cold]
fn build_failed<E>(err: InitError<E>) -> ! {
    match err {
        InitError::Alloc(AllocError::CapacityOverflow { .. }) => capacity_overflow(),
        InitError::Alloc(AllocError::Exhausted { size, align }) => {
            match core::alloc::Layout::from_size_align(size, align) {
                Ok(layout) => alloc::alloc::handle_alloc_error(layout),
                Err(_) => capacity_overflow(),
            }
        }
        InitError::Initializer { index, .. } => initializer_failed(index),
    }
}

fn infallible_init(err: InitError<Infallible>) -> AllocError {
    match err {
        InitError::Alloc(e) => e,
        InitError::Initializer { error, .. } => match error {},
    }
}

#[inline(always)]
fn needs_storage<T>(len: usize) -> bool {
    len != 0 && core::mem::size_of::<T>() != 0
}

#[inline(always)]
unsafe fn slot<T>(base: NonNull<T>, index: usize) -> NonNull<T> {
    NonNull::new_unchecked(base.as_ptr().add(index))
}

/// Obtains storage for `len` elements, or a dangling pointer if no bytes are needed.
fn allocate_storage<T, A: ArrayAllocator>(alloc: &A, len: usize) -> Result<NonNull<T>, AllocError> {
    let layout = array_layout::<T>(len)?;
    if !needs_storage::<T>(len) {
        return Ok(NonNull::dangling());
    }
    let ptr = alloc.allocate::<T>(len)?;
    log::trace!("RtArray: allocated {} bytes for {} elements", layout.size(), len);
    Ok(ptr)
}

/// Destroys the elements in `constructed`, highest index first, then releases the storage for
/// `len` elements.
///
/// If an element's destructor panics, the lower slots are still destroyed and the storage is
/// still released while unwinding.
///
/// Safety: `ptr` must come from `allocate_storage(alloc, len)` and the slots in `constructed`
/// must hold live values. Neither may be used afterwards.
pub(crate) unsafe fn release_storage<T, A: ArrayAllocator>(
    alloc: &A,
    ptr: NonNull<T>,
    constructed: core::ops::Range<usize>,
    len: usize,
) {
    let mut rest = Release {
        alloc,
        ptr,
        live: constructed,
        len,
    };
    while let Some(i) = rest.live.next_back() {
        alloc.destroy(slot(ptr, i));
    }
}

/// Slots `live` still to destroy, and the block to release afterwards. Does both on drop.
struct Release<'a, T, A: ArrayAllocator> {
    alloc: &'a A,
    ptr: NonNull<T>,
    live: core::ops::Range<usize>,
    len: usize,
}

impl<T, A: ArrayAllocator> Drop for Release<'_, T, A> {
    fn drop(&mut self) {
        // Only non-empty while unwinding out of `release_storage`.
        while let Some(i) = self.live.next_back() {
            // Safety: `live` holds exactly the slots not yet destroyed.
            unsafe { self.alloc.destroy(slot(self.ptr, i)) };
        }
        if needs_storage::<T>(self.len) {
            // Safety: every slot is destroyed and the storage was sized for `len`.
            unsafe { self.alloc.deallocate(self.ptr, self.len) };
            log::trace!(
                "RtArray: released {} bytes for {} elements",
                core::mem::size_of::<T>() * self.len,
                self.len
            );
        }
    }
}

/// Storage whose slots are being constructed. Dropping it rolls back: constructed slots are
/// destroyed in reverse order and the block is released.
struct PartialArray<'a, T, A: ArrayAllocator> {
    ptr: NonNull<T>,
    len: usize,
    constructed: usize,
    alloc: &'a A,
}

impl<T, A: ArrayAllocator> Drop for PartialArray<'_, T, A> {
    fn drop(&mut self) {
        // Safety: exactly `constructed` slots are live, and the storage was sized for `len`.
        unsafe { release_storage(self.alloc, self.ptr, 0..self.constructed, self.len) }
    }
}

impl<T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> RtArray<T, A, B, C> {
    /// Builds an array of `len` elements, taking slot values from `init` in increasing index
    /// order, with storage from `alloc`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let r: Result<RtArray<u8, Global, AlwaysChecked>, _> =
    ///     RtArray::try_new_in(4, FromIterPrefix(1..), Global);
    /// assert_eq!(&r.unwrap()[..], &[1, 2, 3, 4]);
    /// ```
    pub fn try_new_in<I: ArrayInitializer<T>>(
        len: usize,
        mut init: I,
        alloc: A,
    ) -> Result<Self, InitError<I::Error>> {
        let ptr = allocate_storage::<T, A>(&alloc, len)?;
        let mut partial = PartialArray {
            ptr,
            len,
            constructed: 0,
            alloc: &alloc,
        };
        while partial.constructed < len {
            let index = partial.constructed;
            let value = init
                .init_slot(index)
                .map_err(|error| InitError::Initializer { index, error })?;
            // Safety: slot `index` is in bounds and not yet constructed.
            unsafe { alloc.construct(slot(ptr, index), value) };
            partial.constructed += 1;
        }
        core::mem::forget(partial);
        // Safety: all `len` slots were constructed in storage from `alloc`.
        Ok(unsafe { Self::from_raw_parts_in(ptr, len, alloc) })
    }

    /// Like [`try_new_in`][RtArray::try_new_in], but panics if storage cannot be allocated
    /// or the initializer fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let arr: RtArray<i8, Global, Unchecked> = RtArray::new_in(3, FillWith(-1), Global);
    /// assert_eq!(&arr[..], &[-1, -1, -1]);
    /// ```
    pub fn new_in<I: ArrayInitializer<T>>(len: usize, init: I, alloc: A) -> Self {
        Self::try_new_in(len, init, alloc).unwrap_or_else(|e| build_failed(e))
    }

    /// Assembles an array from its raw parts.
    ///
    /// # Safety
    ///
    /// `ptr` must be dangling if `len == 0` or `T` is zero-sized, and otherwise must come from
    /// `alloc.allocate::<T>(len)`. All `len` slots must hold initialized values, which the
    /// array takes ownership of. The usual source is [`into_raw_parts`][RtArray::into_raw_parts].
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let arr: RtArray<u16> = RtArray::from_elem(2, 5);
    /// let arr: RtArray<u16> = unsafe {
    ///     let (ptr, len, alloc) = arr.into_raw_parts();
    ///     RtArray::from_raw_parts_in(ptr, len, alloc)
    /// };
    /// assert_eq!(&arr[..], &[5, 5]);
    /// ```
    pub unsafe fn from_raw_parts_in(ptr: NonNull<T>, len: usize, alloc: A) -> Self {
        RtArray {
            ptr,
            len,
            alloc,
            _bounds: policy::bounds_instance::<B>(),
            _copy: policy::copy_instance::<C>(),
            _marker: PhantomData,
        }
    }

    /// Gives up ownership of the storage without dropping anything.
    ///
    /// The caller becomes responsible for the elements and the block; use
    /// [`from_raw_parts_in`][RtArray::from_raw_parts_in] to hand them back.
    pub fn into_raw_parts(self) -> (NonNull<T>, usize, A) {
        let this = ManuallyDrop::new(self);
        // Safety: `this` is never dropped, so `alloc` is moved out exactly once.
        let alloc = unsafe { core::ptr::read(&this.alloc) };
        (this.ptr, this.len, alloc)
    }

    /// An empty array that uses `alloc`. No storage is allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let arr: RtArray<String> = RtArray::empty_in(Global);
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.front(), None);
    /// ```
    pub fn empty_in(alloc: A) -> Self {
        // Safety: an empty array has a dangling pointer and no elements.
        unsafe { Self::from_raw_parts_in(NonNull::dangling(), 0, alloc) }
    }

    /// Moves the contents out into a new array, leaving `self` empty.
    ///
    /// This is a constant-time transfer of the storage; no element is touched. The storage stays
    /// with the allocator that produced it: the returned array takes `self`'s allocator, and
    /// `self` is left empty with a clone of it. `self` owns nothing afterwards and can still be
    /// queried and dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let mut a: RtArray<u8> = RtArray::from_fn(3, |i| i as u8);
    /// let b = a.take();
    /// assert_eq!(&b[..], &[0, 1, 2]);
    /// assert_eq!(a.len(), 0);
    /// assert!(a.at(0).is_err());
    /// ```
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let empty = Self::empty_in(self.alloc.clone());
        core::mem::replace(self, empty)
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of elements, which for a fixed-size array is always
    /// [`len`][RtArray::len].
    #[inline]
    pub fn capacity(&self) -> usize {
        self.len
    }

    /// Whether the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The allocation policy this array was built with.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Bounds-checked access. Checked in every build profile, regardless of `B`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let arr: RtArray<char> = RtArray::from_exact_iter("abc".chars().collect::<Vec<_>>());
    /// assert_eq!(arr.at(1), Ok(&'b'));
    /// assert_eq!(arr.at(3), Err(OutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len;
        self.as_slice().get(index).ok_or(OutOfRange { index, len })
    }

    /// Bounds-checked mutable access.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(OutOfRange { index, len })
    }

    /// Access without a guaranteed bounds check.
    ///
    /// With [`AlwaysChecked`][crate::AlwaysChecked] the index is still verified, and an
    /// out-of-range index panics. With [`DebugChecked`] it is verified only when
    /// `debug_assertions` are on. With [`Unchecked`][crate::Unchecked] it is never verified.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`][RtArray::len]. Calling this with an out-of-range index
    /// is undefined behaviour whenever the configured mode skips the check.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let arr: RtArray<u8> = RtArray::from_elem(2, 1);
    /// assert_eq!(unsafe { *arr.get_unchecked(1) }, 1);
    /// ```
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        if policy::checks::<B>() && index >= self.len {
            out_of_bounds(index, self.len)
        }
        slot(self.ptr, index).as_ref()
    }

    /// Mutable access without a guaranteed bounds check.
    ///
    /// # Safety
    ///
    /// Same contract as [`get_unchecked`][RtArray::get_unchecked].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        if policy::checks::<B>() && index >= self.len {
            out_of_bounds(index, self.len)
        }
        slot(self.ptr, index).as_mut()
    }

    /// First element, or `None` if the array is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Mutable first element, or `None` if the array is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element (index `len - 1`), or `None` if the array is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let arr: RtArray<usize> = RtArray::from_fn(4, |i| i);
    /// assert_eq!(arr.back(), Some(&3));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable last element, or `None` if the array is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Pointer to the first element, for APIs that take a flat buffer. Dangling if the array
    /// is empty. Ownership stays with the array.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: `ptr` is non-null, aligned and points at `len` live elements.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Iterates over the elements front to back. Call `.rev()` for back to front.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Switches the bounds-check mode. Costs nothing at runtime.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let arr: RtArray<u8> = RtArray::from_elem(1, 0);
    /// let arr: RtArray<u8, Global, AlwaysChecked> = arr.with_bounds_check();
    /// assert_eq!(arr.len(), 1);
    /// ```
    pub fn with_bounds_check<B2: BoundsCheck>(self) -> RtArray<T, A, B2, C> {
        let (ptr, len, alloc) = self.into_raw_parts();
        // Safety: parts come straight from a live array.
        unsafe { RtArray::from_raw_parts_in(ptr, len, alloc) }
    }

    /// Switches the copy policy. Costs nothing at runtime. Use
    /// `with_copy_policy::<DeepCopy>()` to make an array cloneable.
    pub fn with_copy_policy<C2: CopyPolicy>(self) -> RtArray<T, A, B, C2> {
        let (ptr, len, alloc) = self.into_raw_parts();
        // Safety: parts come straight from a live array.
        unsafe { RtArray::from_raw_parts_in(ptr, len, alloc) }
    }
}

impl<T> RtArray<T> {
    /// Builds an array of `len` elements from an initializer, on the global heap.
    ///
    /// Panics if the allocation fails or the initializer reports an error.
    pub fn new<I: ArrayInitializer<T>>(len: usize, init: I) -> Self {
        Self::new_in(len, init, Global)
    }

    /// Builds an array of `len` elements from an initializer, on the global heap.
    pub fn try_new<I: ArrayInitializer<T>>(
        len: usize,
        init: I,
    ) -> Result<Self, InitError<I::Error>> {
        Self::try_new_in(len, init, Global)
    }

    /// An array of `len` clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let mut arr = RtArray::from_elem(3, vec![1]);
    /// arr[0].push(2);
    /// assert_eq!(arr[0], [1, 2]);
    /// assert_eq!(arr[1], [1]);
    /// ```
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(len, value, Global)
    }

    /// An array whose slot `i` holds `f(i)`. `f` is called once per index, in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let mut calls = Vec::new();
    /// let arr = RtArray::from_fn(3, |i| {
    ///     calls.push(i);
    ///     i * i
    /// });
    /// assert_eq!(&arr[..], &[0, 1, 4]);
    /// assert_eq!(calls, [0, 1, 2]);
    /// ```
    pub fn from_fn<F: FnMut(usize) -> T>(len: usize, f: F) -> Self {
        Self::from_fn_in(len, f, Global)
    }

    /// Like [`from_fn`][RtArray::from_fn], but `f` may fail. The first error stops construction;
    /// elements built so far are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let r = RtArray::from_fallible_fn(5, |i| if i < 3 { Ok(i) } else { Err("no") });
    /// assert_eq!(r.unwrap_err(), InitError::Initializer { index: 3, error: "no" });
    /// ```
    pub fn from_fallible_fn<E, F: FnMut(usize) -> Result<T, E>>(
        len: usize,
        f: F,
    ) -> Result<Self, InitError<E>> {
        Self::from_fallible_fn_in(len, f, Global)
    }

    /// An array holding the items of an iterator with a known length, in iterator order.
    ///
    /// Panics if the iterator yields fewer items than it reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtarray::prelude::*;
    /// let arr = RtArray::from_exact_iter(vec!["a", "b"]);
    /// assert_eq!(&arr[..], &["a", "b"]);
    /// ```
    pub fn from_exact_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Self::from_exact_iter_in(iter, Global)
    }

    /// An array holding clones of the elements of `src`.
    pub fn from_slice(src: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_in(src, Global)
    }
}

impl<T, A: ArrayAllocator> RtArray<T, A> {
    /// [`from_elem`][RtArray::from_elem] with storage from `alloc`.
    pub fn from_elem_in(len: usize, value: T, alloc: A) -> Self
    where
        T: Clone,
    {
        Self::new_in(len, FillWith(value), alloc)
    }

    /// [`from_elem_in`][RtArray::from_elem_in], reporting allocation failure instead of
    /// panicking.
    pub fn try_from_elem_in(len: usize, value: T, alloc: A) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        Self::try_new_in(len, FillWith(value), alloc).map_err(infallible_init)
    }

    /// [`from_fn`][RtArray::from_fn] with storage from `alloc`.
    pub fn from_fn_in<F: FnMut(usize) -> T>(len: usize, f: F, alloc: A) -> Self {
        Self::new_in(len, FillSequentially(f), alloc)
    }

    /// [`from_fn_in`][RtArray::from_fn_in], reporting allocation failure instead of panicking.
    pub fn try_from_fn_in<F: FnMut(usize) -> T>(
        len: usize,
        f: F,
        alloc: A,
    ) -> Result<Self, AllocError> {
        Self::try_new_in(len, FillSequentially(f), alloc).map_err(infallible_init)
    }

    /// [`from_fallible_fn`][RtArray::from_fallible_fn] with storage from `alloc`.
    pub fn from_fallible_fn_in<E, F: FnMut(usize) -> Result<T, E>>(
        len: usize,
        f: F,
        alloc: A,
    ) -> Result<Self, InitError<E>> {
        Self::try_new_in(len, TryFillSequentially(f), alloc)
    }

    /// [`from_exact_iter`][RtArray::from_exact_iter] with storage from `alloc`.
    pub fn from_exact_iter_in<I>(iter: I, alloc: A) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = iter.into_iter();
        Self::new_in(iter.len(), FromIterPrefix(iter), alloc)
    }

    /// [`from_slice`][RtArray::from_slice] with storage from `alloc`.
    pub fn from_slice_in(src: &[T], alloc: A) -> Self
    where
        T: Clone,
    {
        Self::new_in(src.len(), CloneFrom(src), alloc)
    }
}

impl<T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> Drop for RtArray<T, A, B, C> {
    fn drop(&mut self) {
        // Safety: all `len` slots are live; a moved-from array has `len == 0` and no storage.
        unsafe { release_storage(&self.alloc, self.ptr, 0..self.len, self.len) }
    }
}

/// Deep copy, available only under the [`DeepCopy`] policy.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let a: RtArray<String, Global, DebugChecked, DeepCopy> =
///     RtArray::new_in(2, FillWith(String::from("x")), Global);
/// let mut b = a.clone();
/// b[0].push('y');
/// assert_eq!(a[0], "x");
/// assert_eq!(b[0], "xy");
/// ```
impl<T: Clone, A: ArrayAllocator + Clone, B: BoundsCheck> Clone for RtArray<T, A, B, DeepCopy> {
    fn clone(&self) -> Self {
        Self::new_in(self.len, CloneFrom(self.as_slice()), self.alloc.clone())
    }
}

impl<T, A: ArrayAllocator + Default, B: BoundsCheck, C: CopyPolicy> Default
    for RtArray<T, A, B, C>
{
    fn default() -> Self {
        Self::empty_in(A::default())
    }
}

impl<T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> Deref for RtArray<T, A, B, C> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> DerefMut for RtArray<T, A, B, C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// `arr[i]` is always bounds-checked and panics on an out-of-range index. See
/// [`get_unchecked`][RtArray::get_unchecked] for the configurable variant.
impl<T, I: SliceIndex<[T]>, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> Index<I>
    for RtArray<T, A, B, C>
{
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> IndexMut<I>
    for RtArray<T, A, B, C>
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> AsRef<[T]> for RtArray<T, A, B, C> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> AsMut<[T]> for RtArray<T, A, B, C> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> core::borrow::Borrow<[T]> for RtArray<T, A, B, C> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> core::borrow::BorrowMut<[T]> for RtArray<T, A, B, C> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: core::fmt::Debug, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> core::fmt::Debug
    for RtArray<T, A, B, C>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: core::hash::Hash, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> core::hash::Hash
    for RtArray<T, A, B, C>
{
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::hash::Hash::hash(self.as_slice(), state)
    }
}

impl<T, U, A1, B1, C1, A2, B2, C2> PartialEq<RtArray<U, A2, B2, C2>> for RtArray<T, A1, B1, C1>
where
    T: PartialEq<U>,
    A1: ArrayAllocator,
    B1: BoundsCheck,
    C1: CopyPolicy,
    A2: ArrayAllocator,
    B2: BoundsCheck,
    C2: CopyPolicy,
{
    fn eq(&self, other: &RtArray<U, A2, B2, C2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> Eq for RtArray<T, A, B, C> {}

impl<T: PartialEq<U>, U, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> PartialEq<[U]>
    for RtArray<T, A, B, C>
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> PartialEq<&[U]>
    for RtArray<T, A, B, C>
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize, A, B, C> PartialEq<[U; N]> for RtArray<T, A, B, C>
where
    T: PartialEq<U>,
    A: ArrayAllocator,
    B: BoundsCheck,
    C: CopyPolicy,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<'a, T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> IntoIterator
    for &'a RtArray<T, A, B, C>
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> IntoIterator
    for &'a mut RtArray<T, A, B, C>
{
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Consumes the array, yielding its elements by value front to back.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let arr = RtArray::from_fn(3, |i| i.to_string());
/// let v: Vec<String> = arr.into_iter().collect();
/// assert_eq!(v, ["0", "1", "2"]);
/// ```
impl<T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> IntoIterator for RtArray<T, A, B, C> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> IntoIter<T, A> {
        let (ptr, len, alloc) = self.into_raw_parts();
        // Safety: parts come straight from a live array.
        unsafe { IntoIter::from_raw_parts_in(ptr, len, alloc) }
    }
}

/// Collects into a temporary buffer first, since the final length is not known up front. Use
/// [`RtArray::from_exact_iter`] when it is.
impl<T> FromIterator<T> for RtArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let buffer: Vec<T> = iter.into_iter().collect();
        RtArray::from_exact_iter(buffer)
    }
}

impl<T> From<Vec<T>> for RtArray<T> {
    fn from(v: Vec<T>) -> Self {
        RtArray::from_exact_iter(v)
    }
}

impl<T, const N: usize> From<[T; N]> for RtArray<T> {
    fn from(arr: [T; N]) -> Self {
        RtArray::new(N, MoveFrom::new(arr))
    }
}

impl<T: Clone> From<&[T]> for RtArray<T> {
    fn from(src: &[T]) -> Self {
        RtArray::from_slice(src)
    }
}

impl<T, A: ArrayAllocator, B: BoundsCheck, C: CopyPolicy> From<RtArray<T, A, B, C>> for Vec<T> {
    fn from(arr: RtArray<T, A, B, C>) -> Vec<T> {
        arr.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{AlwaysChecked, Unchecked};
    use crate::SourceExhausted;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use core::cell::{Cell, RefCell};
    use core::sync::atomic::{AtomicUsize, Ordering};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    /// Records its id in a shared log when dropped.
    struct DropRecorder {
        id: usize,
        log: Rc<RefCell<Vec<usize>>>,
    }

    impl Drop for DropRecorder {
        fn drop(&mut self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    /// Global heap, counting every call and failing allocations above a size limit.
    #[derive(Default)]
    struct Tracking {
        allocs: Cell<usize>,
        deallocs: Cell<usize>,
        constructs: Cell<usize>,
        destroys: Cell<usize>,
        limit: Option<usize>,
    }

    unsafe impl ArrayAllocator for Tracking {
        fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError> {
            let layout = array_layout::<T>(len)?;
            if self.limit.map_or(false, |limit| layout.size() > limit) {
                return Err(AllocError::Exhausted {
                    size: layout.size(),
                    align: layout.align(),
                });
            }
            self.allocs.set(self.allocs.get() + 1);
            Global.allocate(len)
        }

        unsafe fn deallocate<T>(&self, ptr: NonNull<T>, len: usize) {
            self.deallocs.set(self.deallocs.get() + 1);
            Global.deallocate(ptr, len)
        }

        unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
            self.constructs.set(self.constructs.get() + 1);
            slot.as_ptr().write(value)
        }

        unsafe fn destroy<T>(&self, slot: NonNull<T>) {
            self.destroys.set(self.destroys.get() + 1);
            core::ptr::drop_in_place(slot.as_ptr())
        }
    }

    #[test]
    fn fill_makes_independent_copies() {
        let mut arr = RtArray::from_elem(4, String::from("v"));
        assert_eq!(arr.len(), 4);
        assert!(arr.iter().all(|s| s == "v"));
        arr[2].push('!');
        assert_eq!(arr, ["v", "v", "v!", "v"]);
    }

    #[test]
    fn generator_called_once_per_index_in_order() {
        let calls = RefCell::new(Vec::new());
        let arr = RtArray::from_fn(6, |i| {
            calls.borrow_mut().push(i);
            i * 3
        });
        assert_eq!(*calls.borrow(), [0, 1, 2, 3, 4, 5]);
        for i in 0..6 {
            assert_eq!(arr[i], i * 3);
        }
    }

    #[test]
    fn drop_order_is_reverse_of_construction_including_index_zero() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let arr = RtArray::from_fn(5, |id| DropRecorder { id, log: log.clone() });
        assert!(log.borrow().is_empty());
        drop(arr);
        assert_eq!(*log.borrow(), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn back_is_last_valid_element() {
        let arr = RtArray::from_fn(3, |i| i + 1);
        assert_eq!(arr.back(), Some(&3));
        assert_eq!(arr.front(), Some(&1));
        let empty: RtArray<u8> = RtArray::default();
        assert_eq!(empty.back(), None);
        assert_eq!(empty.front(), None);
    }

    #[test]
    fn at_reports_index_and_length() {
        let arr = RtArray::from_elem(4, 0u8);
        for k in 0..10 {
            assert_eq!(arr.at(4 + k), Err(OutOfRange { index: 4 + k, len: 4 }));
        }
        assert_eq!(arr.at(3), Ok(&0));
    }

    #[test]
    fn index_panics_past_the_end() {
        let arr = RtArray::from_elem(2, 0u8);
        let r = catch_unwind(AssertUnwindSafe(|| arr[2]));
        assert!(r.is_err());
    }

    #[test]
    fn always_checked_get_unchecked_panics() {
        let arr: RtArray<u8, Global, AlwaysChecked> = RtArray::from_elem(2, 0).with_bounds_check();
        let r = catch_unwind(AssertUnwindSafe(|| unsafe { *arr.get_unchecked(2) }));
        assert!(r.is_err());
        assert_eq!(unsafe { *arr.get_unchecked(1) }, 0);
    }

    #[test]
    fn unchecked_mode_reads_valid_indices() {
        let mut arr: RtArray<u32, Global, Unchecked> =
            RtArray::from_fn(3, |i| i as u32).with_bounds_check();
        unsafe {
            *arr.get_unchecked_mut(1) = 10;
            assert_eq!(*arr.get_unchecked(1), 10);
        }
    }

    #[test]
    fn take_leaves_source_empty() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut a = RtArray::from_fn(3, |id| DropRecorder { id, log: log.clone() });
        let ptr = a.as_ptr();
        let b = a.take();
        assert_eq!(b.as_ptr(), ptr);
        assert_eq!(b.len(), 3);
        assert_eq!(a.len(), 0);
        assert!(a.is_empty());
        assert_eq!(a.at(0).err(), Some(OutOfRange { index: 0, len: 0 }));
        drop(a);
        assert!(log.borrow().is_empty());
        drop(b);
        assert_eq!(*log.borrow(), [2, 1, 0]);
    }

    /// Heap allocator counting the blocks it has handed out. A clone starts a fresh count, like
    /// a separate pool would.
    struct Pool {
        outstanding: Rc<Cell<isize>>,
    }

    impl Clone for Pool {
        fn clone(&self) -> Self {
            Pool {
                outstanding: Rc::new(Cell::new(0)),
            }
        }
    }

    unsafe impl ArrayAllocator for Pool {
        fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError> {
            self.outstanding.set(self.outstanding.get() + 1);
            Global.allocate(len)
        }

        unsafe fn deallocate<T>(&self, ptr: NonNull<T>, len: usize) {
            self.outstanding.set(self.outstanding.get() - 1);
            Global.deallocate(ptr, len)
        }
    }

    #[test]
    fn take_moves_the_allocator_with_the_storage() {
        let outstanding = Rc::new(Cell::new(0));
        let pool = Pool {
            outstanding: outstanding.clone(),
        };
        let mut a: RtArray<String, Pool> = RtArray::from_elem_in(4, String::from("p"), pool);
        assert_eq!(outstanding.get(), 1);

        let b = a.take();
        assert!(Rc::ptr_eq(&b.allocator().outstanding, &outstanding));
        assert!(!Rc::ptr_eq(&a.allocator().outstanding, &outstanding));
        drop(b);
        assert_eq!(outstanding.get(), 0);
        assert_eq!(a.allocator().outstanding.get(), 0);
        drop(a);
        assert_eq!(outstanding.get(), 0);
    }

    /// Counts drops in `count` and panics when its id is `bad`.
    struct Bomb<'a> {
        id: usize,
        bad: usize,
        count: &'a Cell<usize>,
    }

    impl Drop for Bomb<'_> {
        fn drop(&mut self) {
            self.count.set(self.count.get() + 1);
            if self.id == self.bad {
                panic!("bomb {} went off", self.id);
            }
        }
    }

    #[test]
    fn panicking_destructor_still_drops_the_rest() {
        let count = Cell::new(0);
        let tracking = Tracking::default();
        let arr: RtArray<Bomb<'_>, &Tracking> =
            RtArray::from_fn_in(6, |id| Bomb { id, bad: 3, count: &count }, &tracking);
        let r = catch_unwind(AssertUnwindSafe(move || drop(arr)));
        assert!(r.is_err());
        assert_eq!(count.get(), 6);
        assert_eq!(tracking.destroys.get(), 6);
        assert_eq!(tracking.deallocs.get(), 1);
    }

    #[test]
    fn panicking_destructor_in_owning_iterator_still_drops_the_rest() {
        let count = Cell::new(0);
        let tracking = Tracking::default();
        let arr: RtArray<Bomb<'_>, &Tracking> =
            RtArray::from_fn_in(5, |id| Bomb { id, bad: 2, count: &count }, &tracking);
        let mut it = arr.into_iter();
        drop(it.next());
        let r = catch_unwind(AssertUnwindSafe(move || drop(it)));
        assert!(r.is_err());
        assert_eq!(count.get(), 5);
        assert_eq!(tracking.deallocs.get(), 1);
    }

    #[test]
    fn deep_copy_is_independent() {
        let a = RtArray::from_fn(3, |i| vec![i]).with_copy_policy::<DeepCopy>();
        let mut b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a.as_ptr(), b.as_ptr());
        b[1].push(9);
        assert_eq!(a[1], [1]);
        assert_eq!(b[1], [1, 9]);
    }

    #[test]
    fn range_construction_keeps_source_order() {
        let src = ["x", "y", "z"].map(String::from);
        let arr = RtArray::from_exact_iter(src.iter().cloned());
        assert_eq!(arr.len(), 3);
        assert_eq!(arr, src);
        let arr2: RtArray<String> = src.iter().filter(|s| *s != "y").cloned().collect();
        assert_eq!(arr2, ["x", "z"]);
    }

    #[test]
    fn empty_array_touches_nothing() {
        let tracking = Tracking::default();
        let arr: RtArray<String, &Tracking> = RtArray::from_fn_in(0, |_| unreachable!(), &tracking);
        assert!(arr.is_empty());
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 0);
        assert!(arr.at(0).is_err());
        drop(arr);
        assert_eq!(tracking.allocs.get(), 0);
        assert_eq!(tracking.deallocs.get(), 0);
        assert_eq!(tracking.constructs.get(), 0);
        assert_eq!(tracking.destroys.get(), 0);
    }

    #[test]
    fn allocator_sees_full_lifecycle() {
        let tracking = Tracking::default();
        let arr: RtArray<u64, &Tracking> = RtArray::from_elem_in(8, 5, &tracking);
        assert_eq!(tracking.allocs.get(), 1);
        assert_eq!(tracking.constructs.get(), 8);
        drop(arr);
        assert_eq!(tracking.destroys.get(), 8);
        assert_eq!(tracking.deallocs.get(), 1);
    }

    #[test]
    fn allocation_failure_is_reported() {
        let tracking = Tracking {
            limit: Some(16),
            ..Tracking::default()
        };
        let r: Result<RtArray<u64, &Tracking>, _> = RtArray::try_from_elem_in(3, 1, &tracking);
        assert_eq!(r.unwrap_err(), AllocError::Exhausted { size: 24, align: 8 });
        assert_eq!(tracking.constructs.get(), 0);
        let r: Result<RtArray<u64, &Tracking>, _> =
            RtArray::try_from_elem_in(usize::MAX, 1, &tracking);
        assert_eq!(r.unwrap_err(), AllocError::CapacityOverflow { len: usize::MAX });
    }

    #[test]
    fn failed_initializer_rolls_back() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tracking = Tracking::default();
        let r: Result<RtArray<DropRecorder, &Tracking>, _> = RtArray::from_fallible_fn_in(
            6,
            |id| {
                if id == 4 {
                    Err("boom")
                } else {
                    Ok(DropRecorder { id, log: log.clone() })
                }
            },
            &tracking,
        );
        assert_eq!(r.err().and_then(|e| e.index()), Some(4));
        assert_eq!(*log.borrow(), [3, 2, 1, 0]);
        assert_eq!(tracking.allocs.get(), 1);
        assert_eq!(tracking.deallocs.get(), 1);
    }

    #[test]
    fn panicking_initializer_rolls_back() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tracking = Tracking::default();
        let r = catch_unwind(AssertUnwindSafe(|| {
            let _arr: RtArray<DropRecorder, &Tracking> = RtArray::from_fn_in(
                5,
                |id| {
                    if id == 2 {
                        panic!("generator failed");
                    }
                    DropRecorder { id, log: log.clone() }
                },
                &tracking,
            );
        }));
        assert!(r.is_err());
        assert_eq!(*log.borrow(), [1, 0]);
        assert_eq!(tracking.deallocs.get(), 1);
    }

    #[test]
    fn short_iterator_is_an_initializer_error() {
        let r: Result<RtArray<u8>, _> = RtArray::try_new(4, FromIterPrefix([1u8, 2].into_iter()));
        assert_eq!(r.unwrap_err(), InitError::Initializer { index: 2, error: SourceExhausted });
    }

    #[test]
    fn zero_sized_elements_are_counted_and_dropped() {
        static DROPS: AtomicUsize = AtomicUsize::new(0);
        struct Unit;
        impl Drop for Unit {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::Relaxed);
            }
        }
        let tracking = Tracking::default();
        let arr: RtArray<Unit, &Tracking> = RtArray::from_fn_in(1000, |_| Unit, &tracking);
        assert_eq!(arr.len(), 1000);
        assert_eq!(arr.at(999).map(|_| ()), Ok(()));
        drop(arr);
        assert_eq!(DROPS.load(Ordering::Relaxed), 1000);
        assert_eq!(tracking.allocs.get(), 0);
        assert_eq!(tracking.deallocs.get(), 0);
        assert_eq!(tracking.destroys.get(), 1000);
    }

    #[test]
    fn raw_parts_round_trip() {
        let arr = RtArray::from_fn(4, |i| i.to_string());
        let (ptr, len, alloc) = arr.into_raw_parts();
        let arr: RtArray<String> = unsafe { RtArray::from_raw_parts_in(ptr, len, alloc) };
        assert_eq!(arr, ["0", "1", "2", "3"]);
    }

    #[test]
    fn conversions() {
        let arr: RtArray<i32> = vec![3, 1, 2].into();
        assert_eq!(arr, [3, 1, 2]);
        let arr: RtArray<i32> = [4, 5].into();
        assert_eq!(Vec::from(arr), [4, 5]);
        let arr: RtArray<i32> = (&[6, 7][..]).into();
        assert_eq!(arr.as_slice(), &[6, 7]);
    }

    #[cfg(feature = "bumpalo")]
    #[test]
    fn arena_backed_array_drops_elements() {
        let arena = bumpalo::Bump::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let arr: RtArray<DropRecorder, &bumpalo::Bump> =
            RtArray::from_fn_in(3, |id| DropRecorder { id, log: log.clone() }, &arena);
        assert_eq!(arr.len(), 3);
        drop(arr);
        assert_eq!(*log.borrow(), [2, 1, 0]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fill_has_length_and_value(len in 0usize..512, v in any::<i64>()) {
                let arr = RtArray::from_elem(len, v);
                prop_assert_eq!(arr.len(), len);
                prop_assert!(arr.iter().all(|x| *x == v));
            }

            #[test]
            fn generator_matches_closure(len in 0usize..512, k in any::<u32>()) {
                let g = |i: usize| (i as u64).wrapping_mul(k as u64);
                let mut order = Vec::new();
                let arr = RtArray::from_fn(len, |i| { order.push(i); g(i) });
                prop_assert_eq!(order, (0..len).collect::<Vec<_>>());
                for i in 0..len {
                    prop_assert_eq!(arr[i], g(i));
                }
            }

            #[test]
            fn checked_access_rejects_every_index_past_the_end(len in 0usize..64, k in 0usize..64) {
                let arr = RtArray::from_fn(len, |i| i);
                prop_assert_eq!(arr.at(len + k), Err(OutOfRange { index: len + k, len }));
                if k < len {
                    prop_assert_eq!(arr.at(k), Ok(&k));
                }
            }

            #[test]
            fn move_transfers_contents(src in proptest::collection::vec(any::<u16>(), 0..128)) {
                let mut a = RtArray::from_slice(&src);
                let b = a.take();
                prop_assert_eq!(&b[..], &src[..]);
                prop_assert_eq!(a.len(), 0);
            }

            #[test]
            fn range_matches_source(src in proptest::collection::vec(any::<u8>(), 0..128)) {
                let arr = RtArray::from_exact_iter(src.clone());
                prop_assert_eq!(arr.len(), src.len());
                prop_assert_eq!(&arr[..], &src[..]);
            }
        }
    }
}
