//! A small coordinator where producer threads feed two bounded queues, drained by a single consumer until the shift ends.
//!
//! # Philosophy
//!
//! Every task runs as a [`Worker`] on its own OS thread, launched by a [`Runtime`]. Tasks share nothing
//! but three primitives:
//! - [`BoundedQueues`], fixed-capacity FIFO channels. A full queue blocks its producers instead of dropping items.
//! - a [`Cancellation`], a one-shot flag asking the consumer to stop.
//! - [`CompletionTrackers`], counting the tasks that haven't completed yet.
//!
//! [`BoundedQueues`]: crate::BoundedQueue
//! [`CompletionTrackers`]: crate::CompletionTracker
//!
//! # Usage
//!
//! The [`Supervisor`] wires everything together: it starts a [`ShutdownTimer`], a [`ProducerGroup`]
//! and a [`Consumer`], then blocks until the producers are launched and the consumer stopped.
//!
//! ```
//! # use shiftwork::{Config, Supervisor};
//! # use std::time::Duration;
//! let config = Config::new()
//!     .amount(4)
//!     .capacity(2)
//!     .max_delay(Duration::from_millis(100))
//!     .idle_interval(Duration::from_millis(10))
//!     .shutdown_after(Duration::from_millis(300));
//!
//! Supervisor::new(config).run().unwrap();
//! ```
//!
//! ## Backpressure
//!
//! Queues are intentionally smaller than the number of producers. Producers that find their queue full
//! wait for the consumer to make some room.
//!
//! ```
//! # use shiftwork::BoundedQueue;
//! let queue = BoundedQueue::new(1);
//! queue.send(1);
//!
//! let sender = {
//!     let queue = queue.clone();
//!     std::thread::spawn(move || queue.send(2)) // blocks until 1 is received
//! };
//!
//! assert_eq!(queue.try_receive(), Some(1));
//! sender.join().unwrap();
//! assert_eq!(queue.try_receive(), Some(2));
//! ```
//!
//! ## Stopping
//!
//! The consumer only stops once it is cancelled *and* both queues are empty: a pending item is
//! never discarded by the consumer. Items still being produced at that point are abandoned.
//!
//! ```
//! # use shiftwork::*;
//! # use std::sync::Arc;
//! let work = BoundedQueue::new(2);
//! let another_work = BoundedQueue::new(2);
//! let cancellation = Cancellation::new();
//!
//! work.send(WorkItem::new(0));
//! cancellation.cancel();
//!
//! let mut consumer = Consumer::new(work.clone(), another_work, cancellation, Arc::new(Stdout));
//! consumer.run(); // prints "Doing work #0..." then "Done."
//!
//! assert!(work.is_empty());
//! assert_eq!(consumer.state(), ConsumerState::Stopped);
//! ```

#![warn(missing_docs)]

mod cancel;
mod config;
mod consumer;
mod error;
mod notify;
mod producer;
mod queue;
mod runtime;
mod simulator;
mod supervisor;
#[cfg(test)]
mod test_utils;
mod timer;
mod tracker;
mod worker;

pub use cancel::*;
pub use config::*;
pub use consumer::*;
pub use error::*;
pub use notify::*;
pub use producer::*;
pub use queue::*;
pub use runtime::*;
pub use simulator::*;
pub use supervisor::*;
pub use timer::*;
pub use tracker::*;
pub use worker::*;
