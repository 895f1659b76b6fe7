use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;

use crate::Error;

/* ---------- */

/// A one-shot broadcast flag asking every observer to stop cooperatively.
///
/// A cancellation is either active or cancelled. It goes from active to cancelled exactly once,
/// triggering it again is a no-op. Clones are handles to the same flag, so a cancellation
/// created at the top level can be handed to every worker that must observe it.
#[derive(Debug, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
    // Only set by termination signals, a cancellation from elsewhere never arms the kill switch.
    signalled: Arc<AtomicBool>,
}

impl Cancellation {
    /// Returns a new active cancellation.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels, returning `true` if this call performed the transition.
    ///
    /// Any later call returns `false` and leaves the state untouched.
    #[inline]
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::SeqCst)
    }

    /// Returns whether or not the cancellation has been triggered.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Binds the termination signals of the process to this cancellation.
    ///
    /// If for some reasons the process isn't stopped after the first signal,
    /// users can send another signal to kill it ungracefully. Only signals count:
    /// a signal received after [`Cancellation::cancel`] is still the first one.
    pub fn register_signals(&self) -> Result<(), Error> {
        for sig in TERM_SIGNALS {
            flag::register_conditional_shutdown(*sig, 1, self.signalled.clone())
                .map_err(Error::Signal)?;
            flag::register(*sig, self.signalled.clone()).map_err(Error::Signal)?;
            flag::register(*sig, self.cancelled.clone()).map_err(Error::Signal)?;
        }

        Ok(())
    }
}

impl Clone for Cancellation {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            cancelled: self.cancelled.clone(),
            signalled: self.signalled.clone(),
        }
    }
}

/* ---------- */
