//! Small-buffer vector: a growable sequence that keeps up to `C` elements
//! in storage embedded in the value itself and spills to a heap block only
//! when it outgrows them.
//!
//! ```
//! use spillvec::SpillVec;
//!
//! let mut vec = SpillVec::<i32, 4>::new();
//! vec.extend([1, 2, 3]);
//! assert!(vec.is_inline()); // no allocation yet
//!
//! vec.extend([4, 5]);
//! assert!(vec.is_spilled());
//! assert_eq!(vec, [1, 2, 3, 4, 5]);
//! ```

mod errors;
mod spill_vec;

pub use errors::AllocErr;
pub use spill_vec::{IntoIter, SpillVec};
