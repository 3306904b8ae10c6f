//! By-value iteration over an [`RtArray`][crate::RtArray].

use crate::allocator::{ArrayAllocator, Global};
use crate::array::release_storage;

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

/// Owning iterator returned by [`RtArray::into_iter`][crate::RtArray].
///
/// Elements not yet yielded are dropped, highest index first, when the iterator is dropped. The
/// storage is released afterwards.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let arr: RtArray<String> = RtArray::from_fn(4, |i| i.to_string());
/// let mut it = arr.into_iter();
/// assert_eq!(it.next().as_deref(), Some("0"));
/// assert_eq!(it.next_back().as_deref(), Some("3"));
/// assert_eq!(it.as_slice(), ["1", "2"]);
/// ```
pub struct IntoIter<T, A: ArrayAllocator = Global> {
    // Storage for `len` elements; slots `front..back` are still live.
    ptr: NonNull<T>,
    len: usize,
    front: usize,
    back: usize,
    alloc: A,
    marker: PhantomData<T>,
}

// Safety: the iterator owns its elements and allocator, like RtArray.
unsafe impl<T: Send, A: ArrayAllocator + Send> Send for IntoIter<T, A> {}
unsafe impl<T: Sync, A: ArrayAllocator + Sync> Sync for IntoIter<T, A> {}

impl<T, A: ArrayAllocator> IntoIter<T, A> {
    /// Safety: same contract as [`RtArray::from_raw_parts_in`][crate::RtArray::from_raw_parts_in].
    pub(crate) unsafe fn from_raw_parts_in(ptr: NonNull<T>, len: usize, alloc: A) -> Self {
        IntoIter {
            ptr,
            len,
            front: 0,
            back: len,
            alloc,
            marker: PhantomData,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // Safety: slots `front..back` are live.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr().add(self.front), self.len()) }
    }

    /// The elements not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let n = self.len();
        // Safety: slots `front..back` are live, and `&mut self` guarantees uniqueness.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr().add(self.front), n) }
    }

    /// The allocator the elements were stored with.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }
}

impl<T, A: ArrayAllocator> Iterator for IntoIter<T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            // Safety: the slot is live, and advancing `front` means it is never read again.
            let t = unsafe { self.ptr.as_ptr().add(self.front).read() };
            self.front += 1;
            Some(t)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    #[inline]
    fn count(self) -> usize {
        self.back - self.front
    }
}

impl<T, A: ArrayAllocator> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // Safety: the slot was live, and `back` no longer covers it.
            Some(unsafe { self.ptr.as_ptr().add(self.back).read() })
        } else {
            None
        }
    }
}

impl<T, A: ArrayAllocator> ExactSizeIterator for IntoIter<T, A> {
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T, A: ArrayAllocator> FusedIterator for IntoIter<T, A> {}

impl<T: core::fmt::Debug, A: ArrayAllocator> core::fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: ArrayAllocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // Safety: exactly `front..back` are live, in storage sized for `len`.
        unsafe { release_storage(&self.alloc, self.ptr, self.front..self.back, self.len) }
    }
}

#[cfg(test)]
mod tests {
    use crate::RtArray;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    struct Noisy(usize, Rc<RefCell<Vec<usize>>>);

    impl Drop for Noisy {
        fn drop(&mut self) {
            self.1.borrow_mut().push(self.0);
        }
    }

    #[test]
    fn yields_in_order_from_both_ends() {
        let arr = RtArray::from_fn(5, |i| i);
        let mut it = arr.into_iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.len(), 3);
        assert_eq!(it.collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn unconsumed_elements_dropped_back_to_front() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let arr = RtArray::from_fn(5, |i| Noisy(i, log.clone()));
        let mut it = arr.into_iter();
        drop(it.next());
        assert_eq!(*log.borrow(), [0]);
        drop(it);
        assert_eq!(*log.borrow(), [0, 4, 3, 2, 1]);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let mut it = RtArray::from_elem(1, 'q').into_iter();
        assert_eq!(it.next(), Some('q'));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.count(), 0);
    }
}
