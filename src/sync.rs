//! # Synchronization Utilities
//!
//! The parse cache in [`crate::hex`] is the only shared state in the crate.
//! A thread that panics while holding its lock poisons the mutex; since the
//! cache only ever holds complete, successfully parsed entries, the data is
//! still valid and we recover it instead of propagating the poison.
//!
//! | Scenario | Function |
//! |----------|----------|
//! | Production code | [`lock_recover`] |
//! | Test code | `.lock().unwrap()` |

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Example
///
/// ```rust
/// use std::sync::Mutex;
/// use color_distance::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// let guard = lock_recover(&mutex);
/// assert_eq!(*guard, 42);
/// ```
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("recovered poisoned mutex");
        PoisonError::into_inner(poisoned)
    })
}
