use std::{alloc::{self, Layout}, ptr::NonNull};

use crate::errors::AllocErr;


#[inline]
pub(super) fn infallible<T>(result: Result<T, AllocErr>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocErr::Layout) => panic!("invalid parameters to Layout::from_size_align"),
        Err(AllocErr::Overflow) => panic!("capacity overflow"),
        Err(AllocErr::Alloc { layout }) => alloc::handle_alloc_error(layout),
    }
}

// Zero-size layouts (ZSTs, or a zero capacity) never touch the allocator;
// a dangling pointer stands in for the block and `deallocate` skips it.
pub(super) fn allocate<T>(cap: usize) -> Result<NonNull<T>, AllocErr> {
    let layout = Layout::array::<T>(cap).map_err(AllocErr::layout)?;
    if layout.size() == 0 { return Ok(NonNull::dangling()) }

    NonNull::new(unsafe { alloc::alloc(layout) })
        .ok_or(AllocErr::alloc(layout))
        .map(|ptr| ptr.cast())
}

/// # Safety
///
/// `ptr` must have come from [`allocate`] (or a prior `reallocate`) with
/// capacity `cap`, and `new_cap` must be at least the count of live elements
/// the caller keeps in the block.
pub(super) unsafe fn reallocate<T>(ptr: NonNull<T>, cap: usize, new_cap: usize) -> Result<NonNull<T>, AllocErr> {
    let new_layout = Layout::array::<T>(new_cap).map_err(AllocErr::layout)?;
    if new_layout.size() == 0 { return Ok(NonNull::dangling()) }

    let prev_layout = Layout::array::<T>(cap).map_err(AllocErr::layout)?;
    debug_assert!(prev_layout.size() > 0);

    let raw = unsafe { alloc::realloc(ptr.as_ptr().cast(), prev_layout, new_layout.size()) };
    NonNull::new(raw)
        .ok_or(AllocErr::alloc(new_layout))
        .map(|ptr| ptr.cast())
}

/// # Safety
///
/// `ptr` must have come from [`allocate`]/[`reallocate`] with capacity `cap`,
/// and must not be used afterwards.
pub(super) unsafe fn deallocate<T>(ptr: NonNull<T>, cap: usize) {
    let layout = Layout::array::<T>(cap).unwrap();
    if layout.size() > 0 {
        unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) };
    }
}
