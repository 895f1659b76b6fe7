use std::thread::Builder;
use std::time::Duration;

use tracing::debug;

use crate::tracker::{Completion, CompletionTracker};
use crate::worker::Worker;
use crate::Error;

/* ---------- */

/// A runtime that launches [`Workers`] on their own named threads.
///
/// Workers launched with [`Runtime::launch`] are tracked: the runtime accounts for each of them
/// in its [`CompletionTracker`] until their [`Worker::run`] returns, and [`Runtime::wait`] blocks
/// until none is left. Workers launched with [`Runtime::launch_detached`] are fire-and-forget.
///
/// Dropping a runtime neither stops nor joins its workers.
///
/// [`Workers`]: crate::Worker
#[derive(Debug, Default)]
pub struct Runtime {
    tracker: CompletionTracker,
}

impl Runtime {
    /// Returns a new runtime.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a tracked [`Worker`] in a new thread named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ThreadStart`] if the thread can't be spawned, in which case the worker
    /// isn't accounted for anymore.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shiftwork::*;
    /// struct Employee;
    /// // -- skipping the Worker implementation for Employee...
    /// # impl Worker for Employee {}
    ///
    /// let runtime = Runtime::new();
    ///
    /// runtime.launch("employee", Employee).unwrap();
    /// runtime.wait();
    /// ```
    #[inline]
    pub fn launch<W, N>(&self, name: N, worker: W) -> Result<(), Error>
    where
        W: Worker + 'static,
        N: Into<String>,
    {
        spawn_thread(name.into(), worker, Some(self.tracker.increment()))
    }

    /// Runs an untracked [`Worker`] in a new thread named `name`.
    ///
    /// The worker may still be running when [`Runtime::wait`] returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ThreadStart`] if the thread can't be spawned.
    #[inline]
    pub fn launch_detached<W, N>(&self, name: N, worker: W) -> Result<(), Error>
    where
        W: Worker + 'static,
        N: Into<String>,
    {
        spawn_thread(name.into(), worker, None)
    }

    /// Returns the number of tracked workers that are still running.
    #[inline]
    pub fn pending(&self) -> usize {
        self.tracker.pending()
    }

    /// Blocks the calling thread until all the tracked workers stop.
    #[inline]
    pub fn wait(&self) {
        self.tracker.wait()
    }

    /// Blocks the calling thread until all the tracked workers stop or `timeout` elapses.
    ///
    /// Returns whether all the tracked workers stopped.
    #[inline]
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        self.tracker.wait_timeout(timeout)
    }
}

/* ---------- */

fn spawn_thread<W>(
    name: String,
    mut worker: W,
    completion: Option<Completion>,
) -> Result<(), Error>
where
    W: Worker + 'static,
{
    debug!(thread = %name, tracked = completion.is_some(), "launching worker");

    // The completion lives in the closure: it's released once `run` returns, on unwind,
    // or right away if the thread fails to spawn.
    Builder::new().name(name).spawn(move || {
        let _completion = completion;
        worker.run()
    })?;

    Ok(())
}

/* ---------- */
