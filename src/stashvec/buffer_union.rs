use std::{mem::{ManuallyDrop, MaybeUninit}, ptr::NonNull};


/// Dual storage for [`StashVec`](super::StashVec).
///
/// Exactly one field is live at a time; which one is decided by the owning
/// vector's capacity (`cap > N` means `heap`), never stored here.
pub(super) union BufferUnion<T, const N: usize> {
    pub(super) stack: ManuallyDrop<MaybeUninit<[T; N]>>,
    pub(super) heap: NonNull<T>,
}

unsafe impl<T: Send, const N: usize> Send for BufferUnion<T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for BufferUnion<T, N> {}

impl<T, const N: usize> BufferUnion<T, N> {

    #[inline]
    pub(super) const fn new_stack() -> Self {
        Self { stack: ManuallyDrop::new(MaybeUninit::uninit()) }
    }

    #[inline]
    pub(super) const fn new_heap(ptr: NonNull<T>) -> Self {
        Self { heap: ptr }
    }

    /// # Safety
    ///
    /// The inline array must be the live field.
    #[inline]
    pub(super) unsafe fn stack_ptr_non_null(&mut self) -> NonNull<T> {
        unsafe {
            NonNull::new(self.stack.as_mut_ptr() as *mut T).unwrap_unchecked()
        }
    }
}
