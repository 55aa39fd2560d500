//! Fallible allocation for nodes, value copies and the queue itself.
//!
//! `Box::new` and `String::from` abort the process when the heap is exhausted.
//! These helpers report [`QueueError::AllocationFailure`] instead, so an insert can fail without side effects.

use crate::error::{QueueError, QueueResult};
use std::alloc::Layout;
use std::ptr::NonNull;

/// Moves `value` into a fresh heap allocation.
///
/// If the allocation fails, `value` is dropped here and nothing else is touched.
pub(crate) fn try_box<T>(value: T) -> QueueResult<Box<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        // zero-sized types never hit the allocator
        return Ok(Box::new(value));
    }
    let ptr = unsafe { std::alloc::alloc(layout) };
    let ptr = match NonNull::new(ptr as *mut T) {
        Some(p) => p,
        None => return Err(QueueError::AllocationFailure),
    };
    // SAFETY: the memory came from the global allocator with `Layout::new::<T>()`, so it can back a `Box<T>` once written
    unsafe {
        ptr.as_ptr().write(value);
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}

/// Copies `s` into newly owned storage of exactly its length.
pub(crate) fn try_copy_str(s: &str) -> QueueResult<String> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}
