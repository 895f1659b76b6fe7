/// A worker is a task that runs on its own thread until it decides to stop.
///
/// Workers are defined by one main method, [`Worker::run`], which runs the actual loop. This method
/// has a default implementation that first calls [`Worker::on_start`] once, then calls
/// [`Worker::on_update`] in a loop until it returns [`ControlFlow::Break`], and finally calls
/// [`Worker::on_stop`] once.
///
/// Workers don't get stopped from the outside: the ones that must observe a [`Cancellation`]
/// hold a handle to it and break their loop themselves.
///
/// [`Cancellation`]: crate::Cancellation
///
/// # Examples
///
/// A worker that counts to 10 and stops:
///
/// ```
/// # use shiftwork::{ControlFlow, Runtime, Worker};
/// # use std::time::Duration;
/// #[derive(Debug, Default)]
/// struct Counter {
///     count: usize,
/// }
///
/// impl Worker for Counter {
///     fn on_update(&mut self) -> ControlFlow {
///         self.count += 1;
///
///         // We're done counting, let's leave the loop.
///         if self.count >= 10 {
///             return ControlFlow::Break;
///         }
///
///         ControlFlow::Continue
///     }
/// }
///
/// let runtime = Runtime::new();
/// runtime.launch("counter", Counter::default()).unwrap();
/// runtime.wait();
/// ```
pub trait Worker: Send {
    /// Called once before entering the loop. By default, this does nothing.
    #[inline]
    fn on_start(&mut self) {}

    /// Called on each iteration of the loop, until [`ControlFlow::Break`] is returned.
    ///
    /// By default, this method just returns [`ControlFlow::Break`].
    #[inline]
    fn on_update(&mut self) -> ControlFlow {
        ControlFlow::Break
    }

    /// Called once after leaving the loop. By default, this does nothing.
    #[inline]
    fn on_stop(&mut self) {}

    /// Main worker loop, run in a new thread by a [`Runtime`].
    ///
    /// [`Runtime`]: crate::Runtime
    #[inline]
    fn run(&mut self) {
        self.on_start();

        while let ControlFlow::Continue = self.on_update() {}

        self.on_stop();
    }
}

/* ---------- */

/// Defines the control flow of [`Workers`].
///
/// [`Workers`]: crate::Worker
#[derive(Debug, PartialEq)]
pub enum ControlFlow {
    /// Tells the worker to continue its loop.
    Continue,
    /// Tells the worker to break its loop.
    Break,
}
