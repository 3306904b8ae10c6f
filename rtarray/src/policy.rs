//! Type-level configuration of an [`RtArray`][crate::RtArray]: how strictly
//! [`get_unchecked`][crate::RtArray::get_unchecked] validates its index, and whether the array may
//! be deep-copied.

/// Controls whether [`RtArray::get_unchecked`][crate::RtArray::get_unchecked] verifies its
/// precondition: either [`AlwaysChecked`], [`DebugChecked`] or [`Unchecked`].
///
/// Checked access through [`at`][crate::RtArray::at] and indexing with `arr[i]` are always
/// bounds-checked regardless of this setting.
pub trait BoundsCheck: private::SealedBounds {}

/// Controls whether an [`RtArray`][crate::RtArray] implements [`Clone`]: either [`NoCopy`] or
/// [`DeepCopy`].
pub trait CopyPolicy: private::SealedCopy {}

mod private {
    pub trait SealedBounds {
        const INSTANCE: Self;
        const CHECKS: bool;
    }

    pub trait SealedCopy {
        const INSTANCE: Self;
    }
}

/// [`RtArray::get_unchecked`][crate::RtArray::get_unchecked] asserts `index < len` in every build
/// profile, turning a violated precondition into a panic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AlwaysChecked;

impl private::SealedBounds for AlwaysChecked {
    const INSTANCE: Self = AlwaysChecked;
    const CHECKS: bool = true;
}
impl BoundsCheck for AlwaysChecked {}

/// [`RtArray::get_unchecked`][crate::RtArray::get_unchecked] asserts `index < len` only when
/// `debug_assertions` are on. In optimized builds a violated precondition is undefined behaviour.
///
/// This is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DebugChecked;

impl private::SealedBounds for DebugChecked {
    const INSTANCE: Self = DebugChecked;
    const CHECKS: bool = cfg!(debug_assertions);
}
impl BoundsCheck for DebugChecked {}

/// [`RtArray::get_unchecked`][crate::RtArray::get_unchecked] never checks. A violated
/// precondition is undefined behaviour in every build profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unchecked;

impl private::SealedBounds for Unchecked {
    const INSTANCE: Self = Unchecked;
    const CHECKS: bool = false;
}
impl BoundsCheck for Unchecked {}

/// The array cannot be cloned. Copying every element is expensive and easy to do by accident, so
/// this is the default.
///
/// # Examples
///
/// ```compile_fail
/// use rtarray::prelude::*;
/// let a: RtArray<u8> = RtArray::from_elem(4, 0);
/// let b = a.clone();
/// ```
///
/// Opt in explicitly instead:
///
/// ```
/// use rtarray::prelude::*;
/// let a: RtArray<u8> = RtArray::from_elem(4, 0);
/// let a = a.with_copy_policy::<DeepCopy>();
/// let b = a.clone();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoCopy;

impl private::SealedCopy for NoCopy {
    const INSTANCE: Self = NoCopy;
}
impl CopyPolicy for NoCopy {}

/// The array implements [`Clone`] by allocating a new block and cloning every element into it,
/// in increasing index order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DeepCopy;

impl private::SealedCopy for DeepCopy {
    const INSTANCE: Self = DeepCopy;
}
impl CopyPolicy for DeepCopy {}

#[inline(always)]
pub(crate) fn bounds_instance<B: BoundsCheck>() -> B {
    <B as private::SealedBounds>::INSTANCE
}

#[inline(always)]
pub(crate) fn copy_instance<C: CopyPolicy>() -> C {
    <C as private::SealedCopy>::INSTANCE
}

#[inline(always)]
pub(crate) fn checks<B: BoundsCheck>() -> bool {
    <B as private::SealedBounds>::CHECKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_modes() {
        assert!(checks::<AlwaysChecked>());
        assert!(!checks::<Unchecked>());
        assert_eq!(checks::<DebugChecked>(), cfg!(debug_assertions));
    }
}
