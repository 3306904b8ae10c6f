use rtarray::prelude::*;
use std::cell::Cell;
use std::ptr::NonNull;

/// Heap allocator that refuses blocks larger than a fixed budget.
struct Budget {
    remaining: Cell<usize>,
}

unsafe impl ArrayAllocator for Budget {
    fn allocate<T>(&self, len: usize) -> Result<NonNull<T>, AllocError> {
        let layout = rtarray::allocator::array_layout::<T>(len)?;
        if layout.size() > self.remaining.get() {
            return Err(AllocError::Exhausted {
                size: layout.size(),
                align: layout.align(),
            });
        }
        self.remaining.set(self.remaining.get() - layout.size());
        Global.allocate(len)
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, len: usize) {
        self.remaining
            .set(self.remaining.get() + std::mem::size_of::<T>() * len);
        Global.deallocate(ptr, len)
    }
}

fn main() {
    let budget = Budget {
        remaining: Cell::new(64),
    };

    let small: RtArray<u32, &Budget> = RtArray::from_elem_in(8, 3, &budget);
    assert_eq!(budget.remaining.get(), 32);

    let too_big = RtArray::<u32, &Budget>::try_from_elem_in(9, 3, &budget);
    assert_eq!(too_big.unwrap_err(), AllocError::Exhausted { size: 36, align: 4 });

    drop(small);
    assert_eq!(budget.remaining.get(), 64);
}
