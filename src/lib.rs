//! Growable vectors that keep small element counts inline.
//!
//! [`StashVec<T, N>`] stores up to `N` elements directly in its own memory,
//! with no allocation, and transparently moves to a heap buffer once that
//! capacity is exceeded. Many workloads hold collections that are almost
//! always small; keeping them inline avoids allocator traffic and keeps the
//! elements on the same cache lines as the container.
//!
//! ```
//! use stashvec::{StashVec, stashvec};
//!
//! let mut vec: StashVec<i32, 4> = stashvec![1, 2, 3];
//! assert!(vec.on_stack());
//!
//! // Exceeding the inline capacity spills to the heap...
//! vec.extend([4, 5, 6]);
//! assert!(vec.on_heap());
//! assert_eq!(vec, [1, 2, 3, 4, 5, 6]);
//!
//! // ...and shrinking moves the elements back.
//! vec.truncate(2);
//! vec.shrink_to_fit();
//! assert!(vec.on_stack());
//! ```
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When enabled, [`StashVec`] implements `Serialize` and `Deserialize` as
//! a sequence, independent of the storage representation.

mod errors;
mod stashvec;

#[cfg(feature = "serde")]
mod serde;

pub use errors::AllocError;
pub use stashvec::{Drain, IntoIter, StashVec};

/// Creates a [`StashVec`] containing the arguments, like [`vec!`].
///
/// # Examples
///
/// ```
/// use stashvec::{StashVec, stashvec};
///
/// let vec: StashVec<i32, 4> = stashvec![1, 2, 3];
/// assert_eq!(vec, [1, 2, 3]);
///
/// let vec: StashVec<i32, 4> = stashvec![0; 6];
/// assert!(vec.on_heap());
/// assert_eq!(vec, [0; 6]);
/// ```
#[macro_export]
macro_rules! stashvec {
    () => {
        $crate::StashVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::StashVec::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::StashVec::from([$($x),+])
    };
}
