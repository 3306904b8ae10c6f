//! Single module with almost all `rtarray` exports
//!
//! # Examples
//!
//! ```
//! use rtarray::prelude::*;
//! let arr: RtArray<u8, Global, AlwaysChecked> = RtArray::new_in(2, FillWithDefault, Global);
//! assert_eq!(&arr[..], &[0, 0]);
//! ```

pub use crate::allocator::{ArrayAllocator, Global};
pub use crate::array::RtArray;
pub use crate::error::{AllocError, InitError, OutOfRange, SourceExhausted};
pub use crate::init::{
    ArrayInitializer, CloneFrom, FillSequentially, FillWith, FillWithDefault, FromIterPrefix,
    MoveFrom, TryFillSequentially,
};
pub use crate::iter::IntoIter;
pub use crate::policy::{
    AlwaysChecked, BoundsCheck, CopyPolicy, DebugChecked, DeepCopy, NoCopy, Unchecked,
};
