use crossbeam_channel::{Receiver, Sender};

/* ---------- */

/// A fixed-capacity FIFO channel with a blocking send and a non-blocking receive.
///
/// Clones share the same underlying channel. Every clone holds both ends of it,
/// so the channel never disconnects while a queue is alive: [`BoundedQueue::send`]
/// can't fail and never drops an item. The queue is never closed nor drained,
/// items still inside it when the last clone is dropped are discarded.
#[derive(Debug)]
pub struct BoundedQueue<T> {
    sender: Sender<T>,
    recver: Receiver<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Returns a new queue that holds at most `capacity` items.
    ///
    /// A `capacity` of 0 makes every send wait for a receiver to be there at the same time,
    /// see [`Config::validate`](crate::Config::validate).
    #[inline]
    pub fn new(capacity: usize) -> Self {
        let (sender, recver) = crossbeam_channel::bounded(capacity);

        Self {
            sender,
            recver,
            capacity,
        }
    }

    /// Enqueues `item`, blocking the calling thread while the queue is full.
    #[inline]
    pub fn send(&self, item: T) {
        // The queue owns a receiver, the channel can't be disconnected.
        let _ = self.sender.send(item);
    }

    /// Dequeues the oldest item if there's one, without blocking.
    #[inline]
    pub fn try_receive(&self) -> Option<T> {
        self.recver.try_recv().ok()
    }

    /// Returns the number of items currently in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.recver.len()
    }

    /// Returns `true` if the queue holds no item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.recver.is_empty()
    }

    /// Returns the maximum number of items the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn recver(&self) -> &Receiver<T> {
        &self.recver
    }
}

impl<T> Clone for BoundedQueue<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            recver: self.recver.clone(),
            capacity: self.capacity,
        }
    }
}

/* ---------- */
