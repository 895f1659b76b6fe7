use std::time::Duration;

use crate::Error;

/* ---------- */

/// Default number of producer pairs.
pub const DEFAULT_AMOUNT: usize = 10;
/// Default capacity of each queue, lesser than [`DEFAULT_AMOUNT`] so that producers block on full queues.
pub const DEFAULT_CAPACITY: usize = 2;
/// Default delay before the shutdown timer fires.
pub const DEFAULT_SHUTDOWN_AFTER: Duration = Duration::from_secs(10);
/// Default time the consumer idles when both queues are empty.
pub const DEFAULT_IDLE_INTERVAL: Duration = Duration::from_millis(200);
/// Default upper bound of the simulated work duration.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(10_000);

/* ---------- */

/// How the consumer waits when both queues are empty.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IdleMode {
    /// Sleeps for the whole idle interval.
    #[default]
    Sleep,
    /// Waits for one of the queues to be ready, for at most the idle interval.
    WaitReady,
}

/* ---------- */

/// Used to configure a [`Supervisor`] and the tasks it launches.
///
/// [`Supervisor`]: crate::Supervisor
///
/// # Examples
///
/// ```
/// # use shiftwork::Config;
/// # use std::time::Duration;
/// let config = Config::new()
///     .amount(3)
///     .capacity(1)
///     .shutdown_after(Duration::from_secs(1));
///
/// assert!(config.validate().is_ok());
/// assert!(Config::new().capacity(0).validate().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    amount: usize,
    capacity: usize,
    shutdown_after: Duration,
    idle_interval: Duration,
    max_delay: Duration,
    idle_mode: IdleMode,
}

impl Config {
    /// Returns the base [`Config`] with default parameters.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of producer pairs.
    #[inline]
    pub fn amount(self, amount: usize) -> Self {
        Self { amount, ..self }
    }

    /// Sets the capacity of each queue.
    ///
    /// Must be at least 1.
    #[inline]
    pub fn capacity(self, capacity: usize) -> Self {
        Self { capacity, ..self }
    }

    /// Sets the delay after which the shutdown timer cancels the consumer.
    #[inline]
    pub fn shutdown_after(self, shutdown_after: Duration) -> Self {
        Self {
            shutdown_after,
            ..self
        }
    }

    /// Sets the time the consumer idles when both queues are empty.
    #[inline]
    pub fn idle_interval(self, idle_interval: Duration) -> Self {
        Self {
            idle_interval,
            ..self
        }
    }

    /// Sets the upper bound of the simulated work duration.
    #[inline]
    pub fn max_delay(self, max_delay: Duration) -> Self {
        Self { max_delay, ..self }
    }

    /// Sets how the consumer waits when both queues are empty.
    #[inline]
    pub fn idle_mode(self, idle_mode: IdleMode) -> Self {
        Self { idle_mode, ..self }
    }

    /// Checks the configuration can be run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the queue capacity is 0.
    pub fn validate(&self) -> Result<(), Error> {
        if self.capacity == 0 {
            return Err(Error::config("queue capacity must be at least 1"));
        }

        Ok(())
    }

    #[inline]
    pub(crate) fn get_amount(&self) -> usize {
        self.amount
    }

    #[inline]
    pub(crate) fn get_capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn get_shutdown_after(&self) -> Duration {
        self.shutdown_after
    }

    #[inline]
    pub(crate) fn get_idle_interval(&self) -> Duration {
        self.idle_interval
    }

    #[inline]
    pub(crate) fn get_max_delay(&self) -> Duration {
        self.max_delay
    }

    #[inline]
    pub(crate) fn get_idle_mode(&self) -> IdleMode {
        self.idle_mode
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            capacity: DEFAULT_CAPACITY,
            shutdown_after: DEFAULT_SHUTDOWN_AFTER,
            idle_interval: DEFAULT_IDLE_INTERVAL,
            max_delay: DEFAULT_MAX_DELAY,
            idle_mode: IdleMode::default(),
        }
    }
}

/* ---------- */
