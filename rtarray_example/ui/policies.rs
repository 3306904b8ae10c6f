use rtarray::prelude::*;

fn sum<B: BoundsCheck, C: CopyPolicy>(arr: &RtArray<u64, Global, B, C>) -> u64 {
    arr.iter().sum()
}

fn main() {
    let checked: RtArray<u64, Global, AlwaysChecked> =
        RtArray::from_fn(10, |i| i as u64).with_bounds_check();
    let unchecked: RtArray<u64, Global, Unchecked, DeepCopy> =
        RtArray::new_in(10, FillSequentially(|i| i as u64), Global);
    let copy = unchecked.clone();

    assert_eq!(sum(&checked), 45);
    assert_eq!(sum(&copy), 45);
    assert_eq!(checked, copy);
    assert_eq!(unsafe { *unchecked.get_unchecked(9) }, 9);

    let empty: RtArray<u64> = RtArray::default();
    assert_eq!(sum(&empty), 0);
}
