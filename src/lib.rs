//! # Centered Array
//!
//! A double-ended growable array, [`DoubleEndedArray`], backed by a single
//! contiguous buffer with *centered headroom*: the occupied elements sit in a
//! window in the middle of the allocation, so pushing at either end is
//! amortized O(1). When the buffer grows it doubles and the elements are
//! recentered, replenishing headroom on both sides at once.
//!
//! ## Key Features
//!
//! * **Both ends cheap:** `push_front`/`pop_front` move an offset instead of
//!   shifting elements.
//! * **Recentering growth:** doubling redistributes free slots evenly, so
//!   neither end ever starves.
//! * **Slice interop:** the occupied window is contiguous, so the array
//!   dereferences to `[T]` and every slice method just works.
//! * **Numeric layer:** `min`/`max`/`mean`/`median`/`sum` and a `range`
//!   constructor for `f64` arrays.
//! * **Matrix I/O:** CSV reading and writing for arrays-of-arrays, with
//!   format and shape validation.
//!
//! ## Examples
//!
//! ### Pushing at both ends
//!
//! ```rust
//! use centered_array::DoubleEndedArray;
//!
//! let mut a: DoubleEndedArray<i32> = DoubleEndedArray::new();
//! a.push_back(2);
//! a.push_back(3);
//! a.push_front(1);
//!
//! assert_eq!(a.as_slice(), &[1, 2, 3]);
//! assert_eq!(a.take(-2).as_slice(), &[2, 3]);
//! assert_eq!(a.reverse().as_slice(), &[3, 2, 1]);
//! ```
//!
//! ### Numeric reductions
//!
//! ```rust
//! use centered_array::DoubleEndedArray;
//!
//! let a = DoubleEndedArray::range(1.0, 5.0, 1.0);
//! assert_eq!(a.sum(), 15.0);
//! assert_eq!(a.mean().unwrap(), 3.0);
//! assert_eq!(a.median().unwrap(), 3.0);
//! ```
//!
//! ### Matrices over CSV
//!
//! ```rust
//! use centered_array::matrix_csv::{read_matrix, write_matrix};
//!
//! let m = read_matrix("1,2\n3,4\n".as_bytes()).unwrap();
//! assert_eq!(m.get(1).unwrap().as_slice(), &[3.0, 4.0]);
//!
//! let mut out = Vec::new();
//! write_matrix(&mut out, &m).unwrap();
//! assert_eq!(out, b"1,2\n3,4\n");
//! ```

// --- Module Declarations ---

pub mod array;
pub mod error;
pub mod matrix_csv;
pub mod metrics;
pub mod numeric;
pub mod wordcount;

// --- Re-exports ---

pub use array::{DoubleEndedArray, INITIAL_CAPACITY};
pub use error::Error;
pub use matrix_csv::Matrix;
pub use metrics::{InstanceCounter, InstanceGuard};
