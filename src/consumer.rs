use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Select;
use tracing::debug;

use crate::cancel::Cancellation;
use crate::config::{IdleMode, DEFAULT_IDLE_INTERVAL};
use crate::notify::{Notification, Notify};
use crate::queue::BoundedQueue;
use crate::simulator::WorkItem;
use crate::worker::{ControlFlow, Worker};

/* ---------- */

/// The states a [`Consumer`] goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsumerState {
    /// Both queues were found empty, or nothing was attempted yet.
    Idle,
    /// The last attempt took an item from one of the queues.
    Draining,
    /// The cancellation was observed with both queues empty. Terminal.
    Stopped,
}

/* ---------- */

/// Drains two queues until cancelled.
///
/// Each iteration checks, in this order: the first queue, the second queue, the cancellation.
/// The first one to yield wins the iteration. When none does, the consumer idles before trying again.
///
/// Items are always drained before the cancellation is honored, even when it was requested
/// long ago: the consumer stops only once both queues are empty *and* it is cancelled.
pub struct Consumer {
    work: BoundedQueue<WorkItem>,
    another_work: BoundedQueue<WorkItem>,
    cancellation: Cancellation,
    notifier: Arc<dyn Notify>,
    idle_interval: Duration,
    idle_mode: IdleMode,
    state: ConsumerState,
}

impl Consumer {
    /// Returns a consumer of `work` and `another_work`, stopped by `cancellation`.
    #[inline]
    pub fn new(
        work: BoundedQueue<WorkItem>,
        another_work: BoundedQueue<WorkItem>,
        cancellation: Cancellation,
        notifier: Arc<dyn Notify>,
    ) -> Self {
        Self {
            work,
            another_work,
            cancellation,
            notifier,
            idle_interval: DEFAULT_IDLE_INTERVAL,
            idle_mode: IdleMode::default(),
            state: ConsumerState::Idle,
        }
    }

    /// Sets how long the consumer idles when both queues are empty.
    #[inline]
    pub fn idle_interval(self, idle_interval: Duration) -> Self {
        Self {
            idle_interval,
            ..self
        }
    }

    /// Sets how the consumer idles when both queues are empty.
    #[inline]
    pub fn idle_mode(self, idle_mode: IdleMode) -> Self {
        Self { idle_mode, ..self }
    }

    /// Returns the current state of the consumer.
    #[inline]
    pub fn state(&self) -> ConsumerState {
        self.state
    }

    fn idle(&self) {
        match self.idle_mode {
            IdleMode::Sleep => std::thread::sleep(self.idle_interval),
            IdleMode::WaitReady => {
                let mut sel = Select::new();
                sel.recv(self.work.recver());
                sel.recv(self.another_work.recver());

                // Readiness only, the next iteration takes the item in order.
                let _ = sel.ready_timeout(self.idle_interval);
            }
        }
    }
}

impl Worker for Consumer {
    fn on_start(&mut self) {
        debug!(idle_mode = ?self.idle_mode, "consumer started");
    }

    fn on_update(&mut self) -> ControlFlow {
        if let Some(item) = self.work.try_receive() {
            self.state = ConsumerState::Draining;
            self.notifier.notify(Notification::Work(item));
            return ControlFlow::Continue;
        }

        if let Some(item) = self.another_work.try_receive() {
            self.state = ConsumerState::Draining;
            self.notifier.notify(Notification::AnotherWork(item));
            return ControlFlow::Continue;
        }

        if self.cancellation.is_cancelled() {
            self.state = ConsumerState::Stopped;
            self.notifier.notify(Notification::Done);
            return ControlFlow::Break;
        }

        self.state = ConsumerState::Idle;
        self.notifier.notify(Notification::Idling);
        self.idle();

        ControlFlow::Continue
    }

    fn on_stop(&mut self) {
        debug!(
            left = self.work.len() + self.another_work.len(),
            "consumer stopped"
        );
    }
}

/* ---------- */
