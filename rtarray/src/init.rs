#![warn(missing_docs)]

//! An [`ArrayInitializer<T>`] produces the initial value of each slot of an
//! [`RtArray<T>`][crate::RtArray], one index at a time.
//!
//! The array drives the initializer: it asks for slot `0`, then `1`, and so on up to `len - 1`,
//! constructing each value in place before asking for the next. An initializer is never asked
//! for the same index twice, and never out of order.
//!
//! # Examples
//!
//! ```
//! use rtarray::prelude::*;
//!
//! let filled: RtArray<u16> = RtArray::new(4, FillWith(7));
//! assert_eq!(&[7, 7, 7, 7], &filled[..]);
//!
//! let squares: RtArray<u16> = RtArray::new(4, FillSequentially(|i| (i * i) as u16));
//! assert_eq!(&[0, 1, 4, 9], &squares[..]);
//! ```

use crate::SourceExhausted;

use core::convert::Infallible;

/// An object that can produce the values of an array's slots in increasing index order.
///
/// # Examples
///
/// An initializer that writes powers of 3:
///
/// ```
/// use rtarray::prelude::*;
/// use std::convert::Infallible;
///
/// struct PowersOf3(u64);
/// impl ArrayInitializer<u64> for PowersOf3 {
///     type Error = Infallible;
///     fn init_slot(&mut self, _index: usize) -> Result<u64, Infallible> {
///         let v = self.0;
///         self.0 *= 3;
///         Ok(v)
///     }
/// }
///
/// let arr: RtArray<u64> = RtArray::new(5, PowersOf3(1));
/// assert_eq!(&[1, 3, 9, 27, 81], &arr[..]);
/// ```
pub trait ArrayInitializer<T> {
    /// Why a slot could not be produced. Use [`Infallible`] for initializers that cannot fail.
    type Error;

    /// Produces the value for slot `index`.
    ///
    /// Called exactly once per index, for `index = 0, 1, ..., len - 1` in that order. Returning
    /// an error stops construction: the slots already built are dropped and the error is
    /// reported to the caller.
    fn init_slot(&mut self, index: usize) -> Result<T, Self::Error>;
}

/// Fills every slot with a clone of the given value.
///
/// Each slot holds its own independent copy.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let mut arr: RtArray<String> = RtArray::new(3, FillWith(String::from("a")));
/// arr[1].push('b');
/// assert_eq!(&arr[..], &["a", "ab", "a"]);
/// ```
pub struct FillWith<T>(pub T);

impl<T: Clone> ArrayInitializer<T> for FillWith<T> {
    type Error = Infallible;

    #[inline]
    fn init_slot(&mut self, _index: usize) -> Result<T, Infallible> {
        Ok(self.0.clone())
    }
}

/// Fills slot `i` with the result of calling the closure on `i`.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let arr: RtArray<usize> = RtArray::new(4, FillSequentially(|i| i * 2));
/// assert_eq!(&arr[..], &[0, 2, 4, 6]);
/// ```
pub struct FillSequentially<Lambda>(pub Lambda);

impl<T, Lambda: FnMut(usize) -> T> ArrayInitializer<T> for FillSequentially<Lambda> {
    type Error = Infallible;

    #[inline]
    fn init_slot(&mut self, index: usize) -> Result<T, Infallible> {
        Ok(self.0(index))
    }
}

/// Like [`FillSequentially`], but the closure may fail. The first error aborts construction.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let r: Result<RtArray<u8>, _> = RtArray::try_new(300, TryFillSequentially(|i| u8::try_from(i)));
/// assert_eq!(r.unwrap_err().index(), Some(256));
/// ```
pub struct TryFillSequentially<Lambda>(pub Lambda);

impl<T, E, Lambda: FnMut(usize) -> Result<T, E>> ArrayInitializer<T>
    for TryFillSequentially<Lambda>
{
    type Error = E;

    #[inline]
    fn init_slot(&mut self, index: usize) -> Result<T, E> {
        self.0(index)
    }
}

/// Fills every slot with `T::default()`.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let arr: RtArray<u32> = RtArray::new(2, FillWithDefault);
/// assert_eq!(&arr[..], &[0, 0]);
/// ```
pub struct FillWithDefault;

impl<T: Default> ArrayInitializer<T> for FillWithDefault {
    type Error = Infallible;

    #[inline]
    fn init_slot(&mut self, _index: usize) -> Result<T, Infallible> {
        Ok(T::default())
    }
}

/// Takes slot values from the front of an iterator. Items beyond the array's length are left in
/// the iterator.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let arr: RtArray<char> = RtArray::new(3, FromIterPrefix("abcdef".chars()));
/// assert_eq!(&arr[..], &['a', 'b', 'c']);
///
/// let short: Result<RtArray<char>, _> = RtArray::try_new(3, FromIterPrefix("ab".chars()));
/// assert_eq!(short.unwrap_err().index(), Some(2));
/// ```
pub struct FromIterPrefix<Iter>(pub Iter);

impl<T, Iter: Iterator<Item = T>> ArrayInitializer<T> for FromIterPrefix<Iter> {
    type Error = SourceExhausted;

    #[inline]
    fn init_slot(&mut self, _index: usize) -> Result<T, SourceExhausted> {
        self.0.next().ok_or(SourceExhausted)
    }
}

/// Clones slot `i` from element `i` of a slice.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let src = vec![String::from("x"), String::from("y")];
/// let arr: RtArray<String> = RtArray::new(src.len(), CloneFrom(&src));
/// assert_eq!(&arr[..], &src[..]);
/// ```
pub struct CloneFrom<'a, T>(pub &'a [T]);

impl<'a, T: Clone> ArrayInitializer<T> for CloneFrom<'a, T> {
    type Error = SourceExhausted;

    #[inline]
    fn init_slot(&mut self, index: usize) -> Result<T, SourceExhausted> {
        self.0.get(index).cloned().ok_or(SourceExhausted)
    }
}

/// Moves the elements of a fixed-size array into the slots, in order. Elements that are not
/// used are dropped with the initializer.
///
/// # Examples
///
/// ```
/// use rtarray::prelude::*;
/// let arr: RtArray<Box<u8>> = RtArray::new(2, MoveFrom::new([Box::new(1), Box::new(2)]));
/// assert_eq!(*arr[1], 2);
/// ```
pub struct MoveFrom<T, const N: usize>(core::array::IntoIter<T, N>);

impl<T, const N: usize> MoveFrom<T, N> {
    /// Wraps `array` so that its elements are moved out one slot at a time.
    pub fn new(array: [T; N]) -> Self {
        MoveFrom(array.into_iter())
    }
}

impl<T, const N: usize> ArrayInitializer<T> for MoveFrom<T, N> {
    type Error = SourceExhausted;

    #[inline]
    fn init_slot(&mut self, _index: usize) -> Result<T, SourceExhausted> {
        self.0.next().ok_or(SourceExhausted)
    }
}

impl<T, I: ArrayInitializer<T> + ?Sized> ArrayInitializer<T> for &mut I {
    type Error = I::Error;

    #[inline]
    fn init_slot(&mut self, index: usize) -> Result<T, I::Error> {
        (**self).init_slot(index)
    }
}
