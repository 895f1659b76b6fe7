use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, trace};

use crate::queue::BoundedQueue;
use crate::runtime::Runtime;
use crate::simulator::{Simulate, WorkItem};
use crate::worker::{ControlFlow, Worker};

/* ---------- */

/// Produces a single item and sends it to its queue.
///
/// Blocks on the send while the queue is full.
pub struct Producer {
    id: usize,
    queue: BoundedQueue<WorkItem>,
    simulator: Arc<dyn Simulate>,
}

impl Producer {
    /// Returns a producer for the work #`id`.
    #[inline]
    pub fn new(id: usize, queue: BoundedQueue<WorkItem>, simulator: Arc<dyn Simulate>) -> Self {
        Self {
            id,
            queue,
            simulator,
        }
    }
}

impl Worker for Producer {
    fn on_update(&mut self) -> ControlFlow {
        let item = self.simulator.produce(self.id);

        trace!(id = self.id, "produced an item");
        self.queue.send(item);

        ControlFlow::Break
    }
}

/* ---------- */

/// Launches a pair of [`Producers`] per work index, one per queue.
///
/// As a [`Worker`], the group is done as soon as every producer has been launched:
/// it never waits for them to produce anything.
///
/// [`Producers`]: crate::Producer
pub struct ProducerGroup {
    amount: usize,
    work: BoundedQueue<WorkItem>,
    another_work: BoundedQueue<WorkItem>,
    simulator: Arc<dyn Simulate>,
}

impl ProducerGroup {
    /// Returns a group of `amount` producer pairs, feeding `work` and `another_work`.
    #[inline]
    pub fn new(
        amount: usize,
        work: BoundedQueue<WorkItem>,
        another_work: BoundedQueue<WorkItem>,
        simulator: Arc<dyn Simulate>,
    ) -> Self {
        Self {
            amount,
            work,
            another_work,
            simulator,
        }
    }

    /// Launches every producer and returns without waiting for them.
    ///
    /// A producer that can't be launched is skipped.
    pub fn spawn(&self) -> Producers {
        let producers = Producers::default();

        for id in 0..self.amount {
            let prod = Producer::new(id, self.work.clone(), self.simulator.clone());
            if let Err(err) = producers.work.launch(format!("work-{id}"), prod) {
                error!(id, "failed to launch a work producer: {err:#}")
            }

            let prod = Producer::new(id, self.another_work.clone(), self.simulator.clone());
            if let Err(err) = producers.another_work.launch(format!("another-work-{id}"), prod) {
                error!(id, "failed to launch another work producer: {err:#}")
            }
        }

        producers
    }
}

impl Worker for ProducerGroup {
    fn on_update(&mut self) -> ControlFlow {
        let producers = self.spawn();

        debug!(pending = producers.pending(), "all producers launched");
        ControlFlow::Break
    }
}

/* ---------- */

/// The producers launched by a [`ProducerGroup`], tracked separately for each queue.
///
/// Dropping it doesn't wait for the producers.
#[derive(Debug, Default)]
pub struct Producers {
    work: Runtime,
    another_work: Runtime,
}

impl Producers {
    /// Returns the number of producers that haven't sent their item yet.
    #[inline]
    pub fn pending(&self) -> usize {
        self.work.pending() + self.another_work.pending()
    }

    /// Blocks the calling thread until every producer sent its item.
    #[inline]
    pub fn wait(&self) {
        self.work.wait();
        self.another_work.wait();
    }

    /// Blocks the calling thread until every producer sent its item or `timeout` elapses.
    ///
    /// Returns whether every producer sent its item.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;

        self.work.wait_timeout(timeout)
            && self
                .another_work
                .wait_timeout(deadline.saturating_duration_since(Instant::now()))
    }
}

/* ---------- */
