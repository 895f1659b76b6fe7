use std::fmt::{Display, Formatter, Result};
use std::time::Duration;

use crate::simulator::WorkItem;

/* ---------- */

/// Everything the coordinator reports to the outside world.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// The supervisor started every task and is now waiting for them.
    Alive,
    /// The consumer took an item from the first queue.
    Work(WorkItem),
    /// The consumer took an item from the second queue.
    AnotherWork(WorkItem),
    /// Both queues were empty and no cancellation was requested.
    Idling,
    /// The consumer observed the cancellation and stopped.
    Done,
    /// The shutdown timer fired after the given duration.
    Shutdown(Duration),
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Alive => write!(f, "Still alive, producers and consumer are running!"),
            Self::Work(item) => write!(f, "Doing work #{}...", item.id()),
            Self::AnotherWork(item) => write!(f, "Doing another work #{}...", item.id()),
            Self::Idling => write!(f, "Idling..."),
            Self::Done => write!(f, "Done."),
            Self::Shutdown(after) => write!(f, "Shutdown after {} seconds", after.as_secs_f64()),
        }
    }
}

/* ---------- */

/// A sink for [`Notifications`].
///
/// Closures taking a [`Notification`] are sinks too.
///
/// [`Notifications`]: crate::Notification
pub trait Notify: Send + Sync {
    /// Reports `notification`.
    fn notify(&self, notification: Notification);
}

impl<F> Notify for F
where
    F: Fn(Notification) + Send + Sync,
{
    #[inline]
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/* ---------- */

/// Prints every notification as a line on the standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Notify for Stdout {
    #[inline]
    fn notify(&self, notification: Notification) {
        println!("{notification}")
    }
}

/* ---------- */
