use std::time::Duration;

use rand::Rng;

/* ---------- */

/// A unit of produced data, tagged with the index of the work that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkItem(usize);

impl WorkItem {
    /// Returns a new item tagged with `id`.
    #[inline]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the index of the work that produced this item.
    #[inline]
    pub fn id(&self) -> usize {
        self.0
    }
}

/* ---------- */

/// Simulates some work taking a variable amount of time before producing an item.
///
/// # Examples
///
/// ```
/// # use shiftwork::{Simulate, WorkItem};
/// struct Instant;
/// impl Simulate for Instant {
///     fn produce(&self, id: usize) -> WorkItem {
///         WorkItem::new(id)
///     }
/// }
///
/// assert_eq!(Instant.produce(3).id(), 3);
/// ```
pub trait Simulate: Send + Sync {
    /// Blocks the calling thread for as long as the work takes, then returns the item tagged with `id`.
    fn produce(&self, id: usize) -> WorkItem;
}

/* ---------- */

/// Sleeps for a random duration uniformly drawn in `[0, max)`, at a millisecond resolution.
#[derive(Debug, Clone, Copy)]
pub struct RandomDelay {
    max: Duration,
}

impl RandomDelay {
    /// Returns a simulator sleeping at most `max`.
    #[inline]
    pub fn new(max: Duration) -> Self {
        Self { max }
    }

    // Saturates instead of truncating bounds beyond `u64::MAX` milliseconds.
    #[inline]
    fn max_millis(&self) -> u64 {
        u64::try_from(self.max.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Simulate for RandomDelay {
    fn produce(&self, id: usize) -> WorkItem {
        let max = self.max_millis();
        if max > 0 {
            let delay = rand::thread_rng().gen_range(0..max);
            std::thread::sleep(Duration::from_millis(delay));
        }

        WorkItem::new(id)
    }
}

/* ---------- */

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn tags_item() {
        let item = RandomDelay::new(Duration::from_millis(5)).produce(7);
        assert_eq!(item, WorkItem::new(7));
        assert_eq!(item.id(), 7);
    }

    #[test]
    fn no_delay() {
        let now = Instant::now();

        for id in 0..100 {
            assert_eq!(RandomDelay::new(Duration::ZERO).produce(id).id(), id);
        }

        assert!(now.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn huge_max_doesnt_truncate() {
        let huge = RandomDelay::new(Duration::from_millis(u64::MAX) + Duration::from_secs(1));
        assert_eq!(huge.max_millis(), u64::MAX);

        let small = RandomDelay::new(Duration::from_millis(1500));
        assert_eq!(small.max_millis(), 1500);
    }

    #[test]
    fn bounded_delay() {
        let simulator = RandomDelay::new(Duration::from_millis(20));
        let now = Instant::now();

        (0..10).for_each(|id| {
            simulator.produce(id);
        });

        assert!(now.elapsed() < Duration::from_secs(2));
    }
}
