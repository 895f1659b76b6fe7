use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::cancel::Cancellation;
use crate::notify::{Notification, Notify};
use crate::worker::{ControlFlow, Worker};

/* ---------- */

/// Cancels after a fixed delay, then reports it.
///
/// Meant to be launched detached: nothing waits for it, the cancellation it triggers is its only effect.
pub struct ShutdownTimer {
    after: Duration,
    cancellation: Cancellation,
    notifier: Arc<dyn Notify>,
}

impl ShutdownTimer {
    /// Returns a timer cancelling `cancellation` once `after` elapsed.
    #[inline]
    pub fn new(after: Duration, cancellation: Cancellation, notifier: Arc<dyn Notify>) -> Self {
        Self {
            after,
            cancellation,
            notifier,
        }
    }
}

impl Worker for ShutdownTimer {
    fn on_update(&mut self) -> ControlFlow {
        std::thread::sleep(self.after);

        if !self.cancellation.cancel() {
            warn!("the shutdown timer fired after a cancellation");
        }

        self.notifier.notify(Notification::Shutdown(self.after));
        ControlFlow::Break
    }
}

/* ---------- */

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::test_utils::*;

    #[test]
    fn cancels_after_delay() {
        let cancellation = Cancellation::new();
        let recorder = Arc::new(Recorder::default());
        let after = Duration::from_millis(100);
        let mut timer = ShutdownTimer::new(after, cancellation.clone(), recorder.clone());

        let now = Instant::now();
        timer.run();

        assert!(now.elapsed() >= after);
        assert!(cancellation.is_cancelled());
        assert_eq!(recorder.notifications(), [Notification::Shutdown(after)]);
    }

    #[test]
    fn already_cancelled() {
        let cancellation = Cancellation::new();
        let recorder = Arc::new(Recorder::default());
        let mut timer = ShutdownTimer::new(Duration::ZERO, cancellation.clone(), recorder.clone());

        cancellation.cancel();
        timer.run();

        assert!(cancellation.is_cancelled());
        assert_eq!(recorder.count(&Notification::Shutdown(Duration::ZERO)), 1);
    }
}
