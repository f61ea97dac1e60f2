use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::slice;

use crate::error::Error;

/// Capacity allocated by [`DoubleEndedArray::new`], and the capacity a
/// zero-capacity array jumps to on its first growth.
pub const INITIAL_CAPACITY: usize = 10;

/// A growable array supporting amortized O(1) insertion and removal at both
/// ends, backed by a single contiguous buffer with centered headroom.
///
/// # Overview
/// The buffer is larger than the logical element count. Two offsets `origin`
/// and `end` delimit the occupied window `[origin, end)`; logical index `i`
/// lives at buffer offset `origin + i`. Pushing at the front decrements
/// `origin` instead of shifting elements, which is what makes both ends cheap.
///
/// When either end runs out of room the buffer doubles and the elements are
/// copied in *recentered*, so headroom is replenished symmetrically on every
/// growth and both ends stay amortized O(1) indefinitely.
///
/// # Invariants
/// * `origin <= end <= buffer capacity` at all times.
/// * Every buffer slot holds a live `T`; slots outside the window hold
///   `T::default()`. This is why most operations require `T: Default`.
/// * Capacity only grows, never shrinks.
///
/// The occupied window is contiguous, so the array dereferences to a slice
/// and all slice methods (indexing, `contains`, `chunks`, ...) apply.
///
/// # Examples
///
/// ```rust
/// use centered_array::DoubleEndedArray;
///
/// let mut a: DoubleEndedArray<i32> = DoubleEndedArray::new();
/// a.push_back(2);
/// a.push_back(3);
/// a.push_front(1);
///
/// assert_eq!(a.as_slice(), &[1, 2, 3]);
/// assert_eq!(a.pop_front().unwrap(), 1);
/// assert_eq!(a.pop_back().unwrap(), 3);
/// ```
pub struct DoubleEndedArray<T> {
    buf: Vec<T>,
    origin: usize,
    end: usize,
}

impl<T: Default> DoubleEndedArray<T> {
    /// Creates an empty array with [`INITIAL_CAPACITY`] slots and the window
    /// centered, so both ends have headroom before the first growth.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty array with exactly `capacity` slots, centered.
    ///
    /// `capacity` may be zero; the first operation that needs a slot grows
    /// the buffer to [`INITIAL_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buf = Vec::new();
        buf.resize_with(capacity, T::default);
        Self {
            buf,
            origin: capacity / 2,
            end: capacity / 2,
        }
    }

    // --- Modification ---

    /// Writes `value` at logical index `index`, growing the buffer (doubling
    /// and recentering) until the index fits.
    ///
    /// Writing past the current length extends the array: the gap between the
    /// old end and `index` stays filled with `T::default()` and the length
    /// becomes `index + 1`.
    pub fn set(&mut self, index: usize, value: T) {
        while self.origin + index >= self.buf.len() {
            self.extend_buffer();
        }
        let offset = self.origin + index;
        self.buf[offset] = value;
        if offset >= self.end {
            self.end = offset + 1;
        }
    }

    /// Appends `value` at the logical end. Amortized O(1).
    pub fn push_back(&mut self, value: T) {
        if self.end == self.buf.len() {
            self.extend_buffer();
        }
        self.buf[self.end] = value;
        self.end += 1;
    }

    /// Prepends `value` at logical index 0 by decrementing `origin`.
    /// Amortized O(1); no elements are shifted.
    pub fn push_front(&mut self, value: T) {
        if self.origin == 0 {
            self.extend_buffer();
        }
        self.origin -= 1;
        self.buf[self.origin] = value;
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.end -= 1;
        Ok(mem::take(&mut self.buf[self.end]))
    }

    /// Removes and returns the first element by incrementing `origin`. O(1).
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let value = mem::take(&mut self.buf[self.origin]);
        self.origin += 1;
        Ok(value)
    }

    /// Removes all elements, keeping the allocation and recentering the
    /// window so both ends regain their headroom.
    pub fn clear(&mut self) {
        for slot in &mut self.buf[self.origin..self.end] {
            *slot = T::default();
        }
        self.origin = self.buf.len() / 2;
        self.end = self.origin;
    }

    /// Reverses the element order in place and returns `self` for chaining.
    pub fn reverse(&mut self) -> &mut Self {
        self.buf[self.origin..self.end].reverse();
        self
    }

    // --- Derived constructors ---

    /// Returns a new array holding the elements of `self` followed by the
    /// elements of `other`. Both inputs are deep-copied; the result shares no
    /// storage with either.
    pub fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }

    /// Returns the first `n` elements if `n > 0`, or the last `|n|` elements
    /// if `n < 0`. When the array is shorter than requested the result is
    /// padded with `T::default()` — at the back for a positive `n`, at the
    /// front for a negative one. `n = 0` yields an empty array.
    ///
    /// ```rust
    /// use centered_array::DoubleEndedArray;
    ///
    /// let a: DoubleEndedArray<i32> = [1, 2, 3].into();
    /// assert_eq!(a.take(5).as_slice(), &[1, 2, 3, 0, 0]);
    /// assert_eq!(a.take(-2).as_slice(), &[2, 3]);
    /// ```
    pub fn take(&self, n: isize) -> Self
    where
        T: Clone,
    {
        let mut result = Self::new();
        let len = self.len() as isize;
        if n > 0 {
            for i in 0..n {
                if i < len {
                    result.push_back(self.buf[self.origin + i as usize].clone());
                } else {
                    result.push_back(T::default());
                }
            }
        } else {
            for i in (len + n)..len {
                if i >= 0 {
                    result.push_back(self.buf[self.origin + i as usize].clone());
                } else {
                    result.push_back(T::default());
                }
            }
        }
        result
    }

    /// Returns a new array holding `f` applied to each element in order.
    pub fn map<U, F>(&self, f: F) -> DoubleEndedArray<U>
    where
        U: Default,
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    // --- Internals ---

    /// Doubles the buffer (or allocates [`INITIAL_CAPACITY`] slots when the
    /// capacity is zero) and moves the occupied window in recentered, leaving
    /// equal headroom at both ends.
    fn extend_buffer(&mut self) {
        let size = self.end - self.origin;
        let new_capacity = if self.buf.is_empty() {
            INITIAL_CAPACITY
        } else {
            2 * self.buf.len()
        };
        let mut new_buf = Vec::new();
        new_buf.resize_with(new_capacity, T::default);

        let new_origin = (new_capacity - size) / 2;
        for i in 0..size {
            new_buf[new_origin + i] = mem::take(&mut self.buf[self.origin + i]);
        }

        self.buf = new_buf;
        self.origin = new_origin;
        self.end = new_origin + size;
    }
}

impl<T> DoubleEndedArray<T> {
    // --- Inspection ---

    /// Returns the number of elements in the array. O(1).
    pub fn len(&self) -> usize {
        self.end - self.origin
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.origin
    }

    /// Total number of buffer slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    // --- Access ---
    //
    // Reads are strict: an out-of-range index yields `None` (or
    // `Error::IndexOutOfRange` from `try_get`) and never grows the array.
    // Only `set` extends.

    /// Returns a reference to the element at `index`, or `None` when out of
    /// range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` when
    /// out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Like [`get`](Self::get), but surfaces the failure as an
    /// [`Error::IndexOutOfRange`] carrying the offending index.
    pub fn try_get(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    // --- Slices & Iteration ---

    /// Returns the occupied window as a slice. The window is contiguous by
    /// construction, so this is always the whole logical sequence.
    pub fn as_slice(&self) -> &[T] {
        &self.buf[self.origin..self.end]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[self.origin..self.end]
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

// --- Iterators ---

/// Owning iterator returned by [`DoubleEndedArray::into_iter`]. Drains the
/// array front to back.
pub struct IntoIter<T> {
    array: DoubleEndedArray<T>,
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.array.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.array.len();
        (len, Some(len))
    }
}

impl<T: Default> IntoIterator for DoubleEndedArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { array: self }
    }
}

impl<'a, T> IntoIterator for &'a DoubleEndedArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Traits ---

impl<T> Deref for DoubleEndedArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DoubleEndedArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Default> Default for DoubleEndedArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: the clone owns a fresh buffer and shares no storage with the
/// source, so the array can itself be the element type (matrices).
impl<T: Clone> Clone for DoubleEndedArray<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            origin: self.origin,
            end: self.end,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoubleEndedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoubleEndedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T: PartialEq> PartialEq for DoubleEndedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DoubleEndedArray<T> {}

impl<T: Default> Extend<T> for DoubleEndedArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Default> FromIterator<T> for DoubleEndedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Default + Clone> From<&[T]> for DoubleEndedArray<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<T: Default, const N: usize> From<[T; N]> for DoubleEndedArray<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_new_is_centered() {
        let a: DoubleEndedArray<i32> = DoubleEndedArray::new();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), INITIAL_CAPACITY);
        assert_eq!(a.origin, INITIAL_CAPACITY / 2);
        assert_eq!(a.end, a.origin);
    }

    #[test]
    fn test_array_push_pop_both_ends() {
        let mut a: DoubleEndedArray<i32> = DoubleEndedArray::new();
        a.push_back(2);
        a.push_back(3);
        a.push_front(1);
        a.push_front(0); // [0, 1, 2, 3]

        assert_eq!(a.len(), 4);
        assert_eq!(a.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(a.first(), Some(&0));
        assert_eq!(a.last(), Some(&3));

        assert_eq!(a.pop_front().unwrap(), 0);
        assert_eq!(a.pop_back().unwrap(), 3);
        assert_eq!(a.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_array_pop_empty_fails() {
        let mut a: DoubleEndedArray<i32> = DoubleEndedArray::new();
        assert!(matches!(a.pop_back(), Err(Error::Empty)));
        assert!(matches!(a.pop_front(), Err(Error::Empty)));
    }

    #[test]
    fn test_array_set_get_roundtrip() {
        let mut a: DoubleEndedArray<i32> = DoubleEndedArray::new();
        a.push_back(10);
        a.push_back(20);
        a.set(1, 25);
        assert_eq!(a.get(1), Some(&25));
        assert_eq!(a.get(2), None);
    }

    #[test]
    fn test_array_set_past_end_zero_fills_gap() {
        let mut a: DoubleEndedArray<i32> = DoubleEndedArray::new();
        a.push_back(1);
        a.set(4, 9); // [1, 0, 0, 0, 9]
        assert_eq!(a.len(), 5);
        assert_eq!(a.as_slice(), &[1, 0, 0, 0, 9]);
    }

    #[test]
    fn test_array_set_far_out_grows_repeatedly() {
        // Needs several doublings in one call.
        let mut a: DoubleEndedArray<i32> = DoubleEndedArray::new();
        a.set(100, 7);
        assert_eq!(a.len(), 101);
        assert_eq!(a.get(100), Some(&7));
        assert_eq!(a.get(50), Some(&0));
        assert!(a.capacity() > 100);
    }

    #[test]
    fn test_array_reads_never_grow() {
        let a: DoubleEndedArray<i32> = [1, 2, 3].into();
        assert_eq!(a.get(10), None);
        assert_eq!(a.len(), 3);
        let err = a.try_get(10).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 10, len: 3 }));
    }

    #[test]
    fn test_array_growth_preserves_order() {
        // Push past two doublings and read everything back.
        let n = 2 * INITIAL_CAPACITY + 1;
        let mut a: DoubleEndedArray<usize> = DoubleEndedArray::new();
        for i in 0..n {
            a.push_back(i);
        }
        assert_eq!(a.len(), n);
        for i in 0..n {
            assert_eq!(a.get(i), Some(&i));
        }
    }

    #[test]
    fn test_array_growth_recenters() {
        let mut a: DoubleEndedArray<i32> = DoubleEndedArray::with_capacity(4);
        for i in 0..3 {
            a.push_back(i); // third push forces a growth
        }
        assert_eq!(a.capacity(), 8);
        // After a doubling both ends must have headroom again.
        assert!(a.origin > 0);
        assert!(a.end < a.capacity());
        assert_eq!(a.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_array_zero_capacity_grows_on_first_use() {
        let mut a: DoubleEndedArray<i32> = DoubleEndedArray::with_capacity(0);
        assert_eq!(a.capacity(), 0);
        a.push_front(1);
        a.push_back(2);
        assert_eq!(a.capacity(), INITIAL_CAPACITY);
        assert_eq!(a.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_array_mixed_end_stress_matches_vecdeque() {
        use std::collections::VecDeque;
        let mut a: DoubleEndedArray<i32> = DoubleEndedArray::new();
        let mut reference: VecDeque<i32> = VecDeque::new();
        for i in 0..1000 {
            if i % 2 == 0 {
                a.push_back(i);
                reference.push_back(i);
            } else {
                a.push_front(i);
                reference.push_front(i);
            }
        }
        assert_eq!(a.len(), 1000);
        let expected: Vec<i32> = reference.into_iter().collect();
        assert_eq!(a.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_array_reverse_twice_is_identity() {
        let mut a: DoubleEndedArray<i32> = [1, 2, 3, 4].into();
        a.reverse();
        assert_eq!(a.as_slice(), &[4, 3, 2, 1]);
        a.reverse();
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);

        // Chaining returns self.
        let popped = a.reverse().pop_front().unwrap();
        assert_eq!(popped, 4);
    }

    #[test]
    fn test_array_concat() {
        let a: DoubleEndedArray<i32> = [1, 2].into();
        let b: DoubleEndedArray<i32> = [3, 4, 5].into();
        let c = a.concat(&b);
        assert_eq!(c.len(), a.len() + b.len());
        assert_eq!(c.as_slice(), &[1, 2, 3, 4, 5]);
        // Inputs untouched.
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(b.as_slice(), &[3, 4, 5]);
    }

    #[test]
    fn test_array_take_positive_pads_back() {
        let a: DoubleEndedArray<i32> = [1, 2, 3].into();
        assert_eq!(a.take(2).as_slice(), &[1, 2]);
        assert_eq!(a.take(5).as_slice(), &[1, 2, 3, 0, 0]);
        assert!(a.take(0).is_empty());
    }

    #[test]
    fn test_array_take_negative_takes_from_end() {
        let a: DoubleEndedArray<i32> = [1, 2, 3, 4, 5].into();
        assert_eq!(a.take(-2).as_slice(), &[4, 5]);
        assert_eq!(a.take(-7).as_slice(), &[0, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_array_clone_is_independent() {
        let a: DoubleEndedArray<i32> = [1, 2, 3].into();
        let mut b = a.clone();
        assert_eq!(a, b);
        b.set(0, 99);
        b.push_back(4);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_array_of_arrays_deep_copy() {
        let row: DoubleEndedArray<f64> = [1.0, 2.0].into();
        let mut m: DoubleEndedArray<DoubleEndedArray<f64>> = DoubleEndedArray::new();
        m.push_back(row.clone());
        m.push_back(row);

        let mut copy = m.clone();
        copy.get_mut(0).unwrap().set(0, 99.0);
        assert_eq!(m.get(0).unwrap().get(0), Some(&1.0));
        assert_eq!(copy.get(0).unwrap().get(0), Some(&99.0));
    }

    #[test]
    fn test_array_map() {
        let a: DoubleEndedArray<i32> = [1, 2, 3].into();
        let doubled = a.map(|x| x * 2);
        assert_eq!(doubled.as_slice(), &[2, 4, 6]);
        let strings = a.map(|x| x.to_string());
        assert_eq!(strings.get(2), Some(&"3".to_string()));
    }

    #[test]
    fn test_array_clear_recenters() {
        let mut a: DoubleEndedArray<i32> = DoubleEndedArray::new();
        for i in 0..30 {
            a.push_back(i);
        }
        let capacity = a.capacity();
        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), capacity);
        // Both ends usable again without immediate growth.
        a.push_front(1);
        a.push_back(2);
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(a.capacity(), capacity);
    }

    #[test]
    fn test_array_iterators() {
        let a: DoubleEndedArray<i32> = [1, 2, 3].into();
        let mut iter = a.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);

        let owned = a.clone();
        let (low, high) = owned.into_iter().size_hint();
        assert_eq!((low, high), (3, Some(3)));

        let collected: Vec<i32> = a.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[test]
    fn test_array_slice_interop() {
        let mut a: DoubleEndedArray<i32> = [3, 1, 2].into();
        // Deref gives slice methods for free.
        assert!(a.contains(&1));
        assert_eq!(a[0], 3);
        a.sort_unstable();
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_array_display_and_debug() {
        let a: DoubleEndedArray<i32> = [1, 2, 3].into();
        assert_eq!(a.to_string(), "[1,2,3]");
        assert_eq!(format!("{a:?}"), "[1, 2, 3]");

        let empty: DoubleEndedArray<i32> = DoubleEndedArray::new();
        assert_eq!(empty.to_string(), "[]");
    }

    #[test]
    fn test_array_default_and_eq() {
        let a: DoubleEndedArray<i32> = DoubleEndedArray::default();
        assert!(a.is_empty());

        let b: DoubleEndedArray<i32> = [1, 2].into();
        let c: DoubleEndedArray<i32> = DoubleEndedArray::from(&[1, 2][..]);
        assert_eq!(b, c);
    }

    #[test]
    fn test_array_push_front_then_pop_front_identity() {
        let mut a: DoubleEndedArray<i32> = [5, 6].into();
        a.push_front(4);
        assert_eq!(a.pop_front().unwrap(), 4);
        assert_eq!(a.as_slice(), &[5, 6]);
    }
}
