//! Explicit live-instance accounting.
//!
//! Instead of a process-wide counter, a harness that wants to know how many
//! containers are alive owns an [`InstanceCounter`] and pairs each container
//! with a guard from it. Guards are RAII: creation and cloning increment the
//! count, dropping decrements it. Single-threaded by design, matching the
//! crate's ownership model.

use std::cell::Cell;
use std::rc::Rc;

/// Hands out [`InstanceGuard`]s and reports how many are currently alive.
///
/// ```rust
/// use centered_array::{DoubleEndedArray, InstanceCounter};
///
/// let counter = InstanceCounter::new();
/// {
///     let _tracked = (DoubleEndedArray::<i32>::new(), counter.guard());
///     assert_eq!(counter.live(), 1);
/// }
/// assert_eq!(counter.live(), 0);
/// ```
#[derive(Default)]
pub struct InstanceCounter {
    live: Rc<Cell<usize>>,
}

impl InstanceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of guards currently alive.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Registers one instance and returns the token that unregisters it on
    /// drop.
    pub fn guard(&self) -> InstanceGuard {
        self.live.set(self.live.get() + 1);
        InstanceGuard {
            live: Rc::clone(&self.live),
        }
    }
}

/// RAII registration token issued by [`InstanceCounter::guard`].
pub struct InstanceGuard {
    live: Rc<Cell<usize>>,
}

impl Clone for InstanceGuard {
    fn clone(&self) -> Self {
        self.live.set(self.live.get() + 1);
        Self {
            live: Rc::clone(&self.live),
        }
    }
}

impl Drop for InstanceGuard {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}
