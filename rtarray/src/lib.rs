//! # `rtarray`
//! Fixed-size arrays whose length is chosen at runtime.
//!
//! 1. [Summary](#summary)
//! 1. [Examples](#examples)
//! 1. [Configuration](#configuration)
//! 1. [Errors](#errors)
//! 1. [Logging](#logging)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! [`RtArray<T>`] sits between `[T; N]` and [`Vec<T>`]. Like `Vec`, its length is only known at
//! runtime and its elements live in a single heap block. Like a fixed-size array, the length
//! never changes after construction: there is no `push`, no `pop`, no spare capacity, and every
//! slot holds a live element for the whole lifetime of the array.
//!
//! The container is parameterized over three policies, all chosen at compile time:
//!
//! * an [allocation policy][crate::allocator] that provides the storage and constructs and
//!   destroys the elements in it;
//! * a [bounds-check mode][BoundsCheck] for [`get_unchecked`][RtArray::get_unchecked];
//! * a [copy policy][CopyPolicy] that decides whether the array is [`Clone`].
//!
//! # Examples
//!
//! ```
//! use rtarray::prelude::*;
//!
//! // Every slot a clone of the same value:
//! let zeros: RtArray<f32> = RtArray::from_elem(8, 0.0);
//! assert_eq!(zeros.len(), 8);
//!
//! // Slot `i` computed from `i`, called in increasing index order:
//! let squares = RtArray::from_fn(5, |i| i * i);
//! assert_eq!(squares.back(), Some(&16));
//!
//! // From anything with a known length:
//! let words = RtArray::from_exact_iter(["to", "be", "or"]);
//! assert_eq!(words.iter().rev().collect::<Vec<_>>(), [&"or", &"be", &"to"]);
//!
//! // Checked access reports the index and the length:
//! assert_eq!(words.at(7), Err(OutOfRange { index: 7, len: 3 }));
//! ```
//!
//! Arena-allocate the elements, if the "bumpalo" crate feature is enabled:
//!
//! ```
//! # #[cfg(feature = "bumpalo")] {
//! use rtarray::prelude::*;
//! let arena = bumpalo::Bump::new();
//! let arr: RtArray<String, &bumpalo::Bump> =
//!     RtArray::from_fn_in(3, |i| format!("item {}", i), &arena);
//! assert_eq!(arr[2], "item 2");
//! # }
//! ```
//!
//! # Configuration
//!
//! All configuration is through type parameters; there are no runtime settings or environment
//! variables. The defaults, `RtArray<T, Global, DebugChecked, NoCopy>`, give a heap-backed,
//! non-cloneable array whose unchecked accessor is verified in debug builds.
//!
//! ```
//! use rtarray::prelude::*;
//! let arr: RtArray<u8> = RtArray::from_elem(3, 1);
//! let arr: RtArray<u8, Global, AlwaysChecked, DeepCopy> =
//!     arr.with_bounds_check().with_copy_policy();
//! let copy = arr.clone();
//! assert_eq!(arr, copy);
//! ```
//!
//! # Errors
//!
//! Panicking constructors (`new`, `from_elem`, `from_fn`, ...) have fallible counterparts that
//! return [`AllocError`] or [`InitError`] instead. Checked access returns [`OutOfRange`]. If
//! construction fails part way, the elements already built are dropped and the storage is
//! released before the error is reported.
//!
//! # Logging
//!
//! Storage allocation and release are logged at `trace` level through the [`log`] facade.
//! Nothing is logged per element.
//!
//! # Feature flags
//!
//! The following feature flags exist:
//!
//! * `bumpalo`. Implements [`ArrayAllocator`] for `bumpalo::Bump`, so an array can keep its
//!   elements in an arena. Adds a dependency on `bumpalo`.
//! * `doc`. Renders diagrams in the documentation as SVG. Adds a dependency on `svgbobdoc`.
//!

#![cfg_attr(not(test), no_std)]
extern crate alloc;

#[cfg(doc)]
extern crate std;
#[cfg(doc)]
use std::vec::Vec;

#[cfg(feature = "doc")]
macro_rules! svgbob_doc {
    ($($t:tt)*) => (svgbobdoc::transform!($($t)*))
}

#[cfg(not(feature = "doc"))]
macro_rules! svgbob_doc {
    ($( #[doc = $d:literal] )*) => (core::concat!($( $d, '\n' ),*))
}

pub mod allocator;
pub mod array;
pub mod error;
pub mod init;
pub mod iter;
pub mod policy;
pub mod prelude;

pub use allocator::{ArrayAllocator, Global};
pub use array::RtArray;
pub use error::{AllocError, InitError, OutOfRange, SourceExhausted};
pub use init::ArrayInitializer;
pub use iter::IntoIter;
pub use policy::{AlwaysChecked, BoundsCheck, CopyPolicy, DebugChecked, DeepCopy, NoCopy, Unchecked};
