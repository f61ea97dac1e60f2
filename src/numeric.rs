//! Reductions and constructors for numeric arrays.
//!
//! These are thin single-pass layers over iteration; only `median` allocates
//! (it sorts a copy so the original stays untouched).

use crate::array::DoubleEndedArray;
use crate::error::Error;

impl DoubleEndedArray<f64> {
    /// Builds the sequence `start, start + step, ...` while the value is
    /// `<= end`.
    ///
    /// The caller must pass a positive `step` for an ascending range; a zero
    /// or wrong-signed `step` yields an empty array rather than looping
    /// forever.
    pub fn range(start: f64, end: f64, step: f64) -> Self {
        let mut result = Self::new();
        if step <= 0.0 {
            return result;
        }
        let mut value = start;
        while value <= end {
            result.push_back(value);
            value += step;
        }
        result
    }

    // --- Reductions ---

    /// Smallest element. Fails with [`Error::Empty`] on an empty array.
    pub fn min(&self) -> Result<f64, Error> {
        self.iter().copied().reduce(f64::min).ok_or(Error::Empty)
    }

    /// Largest element. Fails with [`Error::Empty`] on an empty array.
    pub fn max(&self) -> Result<f64, Error> {
        self.iter().copied().reduce(f64::max).ok_or(Error::Empty)
    }

    /// Sum of all elements; 0.0 for an empty array.
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Arithmetic mean. Fails with [`Error::Empty`] on an empty array.
    pub fn mean(&self) -> Result<f64, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(self.sum() / self.len() as f64)
    }

    /// Middle element of the sorted values, or the average of the two middle
    /// elements for an even length. Sorts a copy; `self` is unmodified.
    /// Fails with [`Error::Empty`] on an empty array.
    pub fn median(&self) -> Result<f64, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let mut sorted = self.as_slice().to_vec();
        sorted.sort_unstable_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
        } else {
            Ok(sorted[mid])
        }
    }

    /// Sorts the array in place by absolute magnitude.
    pub fn sort_by_magnitude(&mut self) {
        self.as_mut_slice()
            .sort_unstable_by(|x, y| x.abs().total_cmp(&y.abs()));
    }
}
