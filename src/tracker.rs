use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/* ---------- */

/// Counts outstanding tasks and lets a thread block until all of them have completed.
///
/// The counter is only ever incremented through [`CompletionTracker::increment`], which hands out a
/// [`Completion`] token. The token decrements the counter exactly once, either explicitly with
/// [`Completion::decrement`] or when dropped. Tokens can't be cloned, so a task can never
/// decrement more than it was accounted for.
///
/// The tracker itself isn't [`Clone`] either: share it by reference.
///
/// # Examples
///
/// ```
/// # use shiftwork::CompletionTracker;
/// let tracker = CompletionTracker::new();
///
/// let handles = (0..4)
///     .map(|_| {
///         let completion = tracker.increment();
///         std::thread::spawn(move || completion.decrement())
///     })
///     .collect::<Vec<_>>();
///
/// tracker.wait();
/// assert_eq!(tracker.pending(), 0);
/// # handles.into_iter().for_each(|h| h.join().unwrap());
/// ```
#[derive(Debug, Default)]
pub struct CompletionTracker {
    inner: Arc<Inner>,
}

impl CompletionTracker {
    /// Returns a tracker with no outstanding task.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for one more outstanding task.
    #[inline]
    pub fn increment(&self) -> Completion {
        *self.inner.lock() += 1;

        Completion {
            inner: self.inner.clone(),
        }
    }

    /// Returns the number of outstanding tasks.
    #[inline]
    pub fn pending(&self) -> usize {
        *self.inner.lock()
    }

    /// Blocks the calling thread until the counter reaches zero.
    pub fn wait(&self) {
        let pending = self.inner.lock();
        let _pending = self
            .inner
            .zero
            .wait_while(pending, |pending| *pending > 0)
            .unwrap_or_else(PoisonError::into_inner);
    }

    /// Blocks the calling thread until the counter reaches zero or `timeout` elapses.
    ///
    /// Returns whether the counter reached zero.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let pending = self.inner.lock();
        let (pending, _) = self
            .inner
            .zero
            .wait_timeout_while(pending, timeout, |pending| *pending > 0)
            .unwrap_or_else(PoisonError::into_inner);

        *pending == 0
    }
}

/* ---------- */

/// Proof that a task was accounted for by a [`CompletionTracker`].
#[derive(Debug)]
#[must_use = "dropping a completion immediately marks its task as finished"]
pub struct Completion {
    inner: Arc<Inner>,
}

impl Completion {
    /// Marks the task as finished.
    #[inline]
    pub fn decrement(self) {}
}

impl Drop for Completion {
    fn drop(&mut self) {
        let mut pending = self.inner.lock();
        *pending -= 1;

        if *pending == 0 {
            self.inner.zero.notify_all();
        }
    }
}

/* ---------- */

#[derive(Debug, Default)]
struct Inner {
    pending: Mutex<usize>,
    zero: Condvar,
}

impl Inner {
    // The counter is only touched through whole increments and decrements,
    // a poisoned lock still guards a consistent value.
    #[inline]
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/* ---------- */

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn empty_wait_returns() {
        let tracker = CompletionTracker::new();

        tracker.wait();
        assert!(tracker.wait_timeout(Duration::ZERO));
    }

    #[test]
    fn balanced_wait_returns() {
        let tracker = CompletionTracker::new();
        let now = Instant::now();
        let delay = Duration::from_millis(50);

        let handles = (0..8)
            .map(|_| {
                let completion = tracker.increment();
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    completion.decrement()
                })
            })
            .collect::<Vec<_>>();

        assert_eq!(tracker.pending(), 8);
        assert!(tracker.wait_timeout(Duration::from_secs(5)));
        assert!(now.elapsed() >= delay);

        for handle in handles {
            handle.join().expect("tracked thread panicked");
        }
    }

    #[test]
    fn unbalanced_wait_times_out() {
        let tracker = CompletionTracker::new();
        let first = tracker.increment();
        let second = tracker.increment();
        let third = tracker.increment();

        first.decrement();
        second.decrement();

        assert_eq!(tracker.pending(), 1);
        assert!(!tracker.wait_timeout(Duration::from_millis(100)));

        third.decrement();
        assert!(tracker.wait_timeout(Duration::from_millis(100)));
    }

    #[test]
    fn dropped_on_panic() {
        let tracker = CompletionTracker::new();
        let completion = tracker.increment();

        let handle = std::thread::spawn(move || {
            let _completion = completion;
            panic!("the tracked task panics")
        });

        assert!(handle.join().is_err());
        assert!(tracker.wait_timeout(Duration::from_secs(1)));
    }

    #[test]
    fn outlives_tracker() {
        let tracker = CompletionTracker::new();
        let completion = tracker.increment();

        drop(tracker);
        completion.decrement();
    }
}
