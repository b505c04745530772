use std::{alloc::{self, Layout}, ptr::NonNull};

use crate::errors::AllocError;


#[inline]
pub(super) fn infallible<T>(result: Result<T, AllocError>) -> T {
    match result {
        Ok(x) => x,
        Err(AllocError::Layout) => panic!("invalid parameters to Layout::from_size_align"),
        Err(AllocError::Overflow) => panic!("capacity overflow"),
        Err(AllocError::Alloc { layout }) => alloc::handle_alloc_error(layout),
    }
}

#[inline]
pub(super) fn allocate<T>(cap: usize) -> Result<NonNull<T>, AllocError> {
    let layout = Layout::array::<T>(cap).map_err(AllocError::layout)?;
    debug_assert!(layout.size() > 0);

    NonNull::new(unsafe { alloc::alloc(layout) })
        .ok_or(AllocError::alloc(layout))
        .map(|ptr| ptr.cast())
}

/// Best-effort in-place resize; falls back to allocate-and-copy inside the
/// allocator. The old block is still owned by the caller if this fails.
///
/// # Safety
///
/// `ptr` must have been allocated with `Layout::array::<T>(old_cap)`.
#[inline]
pub(super) unsafe fn reallocate<T>(
    ptr: NonNull<T>,
    old_cap: usize,
    new_cap: usize,
) -> Result<NonNull<T>, AllocError> {
    let old_layout = Layout::array::<T>(old_cap).map_err(AllocError::layout)?;
    let new_layout = Layout::array::<T>(new_cap).map_err(AllocError::layout)?;
    debug_assert!(new_layout.size() > 0);

    let ptr = unsafe { alloc::realloc(ptr.as_ptr().cast(), old_layout, new_layout.size()) };

    NonNull::new(ptr)
        .ok_or(AllocError::alloc(new_layout))
        .map(|ptr| ptr.cast())
}

/// # Safety
///
/// `ptr` must have been allocated with `Layout::array::<T>(cap)`.
#[inline]
pub(super) unsafe fn deallocate<T>(ptr: NonNull<T>, cap: usize) {
    let layout = Layout::array::<T>(cap).unwrap();
    unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) };
}

#[cfg(test)]
mod tests {
    use std::panic;
    use super::*;

    #[test]
    fn infallible_() {
        let results: [Result<i32, AllocError>; 3] = [
            Ok(3),
            Err(AllocError::Layout),
            Err(AllocError::Overflow),
        ];

        let fallibles = results
            .into_iter()
            .map(|err| panic::catch_unwind(|| infallible(err)))
            .map(|err| err.is_ok())
            .collect::<Vec<_>>();

        assert_eq!(fallibles, [true, false, false]);
    }

    #[test]
    fn allocate_deallocate() {
        let ptr = allocate::<u64>(8).unwrap();
        unsafe { deallocate(ptr, 8) };
    }

    #[test]
    fn reallocate_() {
        let ptr = allocate::<u64>(4).unwrap();
        unsafe { ptr.write(7) };

        let ptr = unsafe { reallocate(ptr, 4, 16).unwrap() };
        assert_eq!(unsafe { ptr.read() }, 7);

        unsafe { deallocate(ptr, 16) };
    }
}
