use std::sync::Arc;

use tracing::{debug, info};

use crate::cancel::Cancellation;
use crate::config::Config;
use crate::consumer::Consumer;
use crate::notify::{Notification, Notify, Stdout};
use crate::producer::ProducerGroup;
use crate::queue::BoundedQueue;
use crate::runtime::Runtime;
use crate::simulator::{RandomDelay, Simulate};
use crate::timer::ShutdownTimer;
use crate::Error;

/* ---------- */

/// Wires the producers, the queues, the consumer and the shutdown timer together.
///
/// # Examples
///
/// ```
/// # use shiftwork::{Config, Supervisor};
/// # use std::time::Duration;
/// let config = Config::new()
///     .amount(3)
///     .max_delay(Duration::from_millis(50))
///     .idle_interval(Duration::from_millis(10))
///     .shutdown_after(Duration::from_millis(200));
///
/// Supervisor::new(config).run().unwrap();
/// ```
pub struct Supervisor {
    config: Config,
    notifier: Arc<dyn Notify>,
    simulator: Arc<dyn Simulate>,
    handle_signals: bool,
}

impl Supervisor {
    /// Returns a supervisor printing its notifications on the standard output
    /// and simulating work with a [`RandomDelay`] bounded by the configured max delay.
    #[inline]
    pub fn new(config: Config) -> Self {
        let simulator = Arc::new(RandomDelay::new(config.get_max_delay()));

        Self {
            config,
            notifier: Arc::new(Stdout),
            simulator,
            handle_signals: false,
        }
    }

    /// Sets where the notifications are reported.
    #[inline]
    pub fn notifier(self, notifier: Arc<dyn Notify>) -> Self {
        Self { notifier, ..self }
    }

    /// Sets how producers simulate their work.
    #[inline]
    pub fn simulator(self, simulator: Arc<dyn Simulate>) -> Self {
        Self { simulator, ..self }
    }

    /// Lets the termination signals of the process cancel the consumer, as the shutdown timer does.
    ///
    /// A second signal kills the process ungracefully.
    #[inline]
    pub fn enable_signal_cancellation(self) -> Self {
        Self {
            handle_signals: true,
            ..self
        }
    }

    /// Runs everything, blocking until the producers are launched and the consumer stopped.
    ///
    /// Producers still running, items left in the queues and the shutdown timer are abandoned.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, if the signals can't be registered
    /// or if a thread can't be spawned. In the latter case, the tasks already launched are cancelled.
    pub fn run(self) -> Result<(), Error> {
        self.config.validate()?;

        let cancellation = Cancellation::new();
        if self.handle_signals {
            cancellation.register_signals()?;
            info!("termination signals cancel the consumer");
        }

        let runtime = Runtime::new();
        let timer = ShutdownTimer::new(
            self.config.get_shutdown_after(),
            cancellation.clone(),
            self.notifier.clone(),
        );
        runtime.launch_detached("shutdown-timer", timer)?;

        let work = BoundedQueue::new(self.config.get_capacity());
        let another_work = BoundedQueue::new(self.config.get_capacity());

        let producers = ProducerGroup::new(
            self.config.get_amount(),
            work.clone(),
            another_work.clone(),
            self.simulator.clone(),
        );
        let consumer = Consumer::new(work, another_work, cancellation.clone(), self.notifier.clone())
            .idle_interval(self.config.get_idle_interval())
            .idle_mode(self.config.get_idle_mode());

        // The consumer goes first, so a full queue always has someone draining it.
        runtime
            .launch("consumer", consumer)
            .inspect_err(|_| {
                cancellation.cancel();
            })?;
        runtime
            .launch("producers", producers)
            .inspect_err(|_| {
                cancellation.cancel();
            })?;

        self.notifier.notify(Notification::Alive);
        runtime.wait();

        debug!("producers launched and consumer stopped");
        Ok(())
    }
}

/* ---------- */

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::config::IdleMode;
    use crate::test_utils::*;

    fn config() -> Config {
        Config::new()
            .amount(3)
            .capacity(2)
            .idle_interval(Duration::from_millis(10))
            .shutdown_after(Duration::from_millis(500))
    }

    #[test]
    fn consumes_everything() {
        let recorder = Arc::new(Recorder::default());
        let now = Instant::now();

        Supervisor::new(config())
            .notifier(recorder.clone())
            .simulator(Arc::new(Immediate))
            .run()
            .expect("the supervisor failed");

        assert!(now.elapsed() >= Duration::from_millis(500));
        assert_eq!(recorder.count(&Notification::Alive), 1);
        assert_eq!(recorder.count(&Notification::Done), 1);

        let (mut work, mut another_work) = recorder.consumed();
        work.sort_unstable();
        another_work.sort_unstable();
        assert_eq!(work, [0, 1, 2]);
        assert_eq!(another_work, [0, 1, 2]);
    }

    #[test]
    fn done_is_last_from_consumer() {
        let recorder = Arc::new(Recorder::default());

        Supervisor::new(config().idle_mode(IdleMode::WaitReady))
            .notifier(recorder.clone())
            .simulator(Arc::new(Immediate))
            .run()
            .expect("the supervisor failed");

        let notifications = recorder
            .notifications()
            .into_iter()
            .filter(|notification| {
                !matches!(notification, Notification::Alive | Notification::Shutdown(_))
            })
            .collect::<Vec<_>>();

        assert_eq!(notifications.last(), Some(&Notification::Done));
    }

    #[test]
    fn returns_with_blocked_producers() {
        let recorder = Arc::new(Recorder::default());
        let (_gate, simulator) = Gated::new();

        Supervisor::new(config().shutdown_after(Duration::from_millis(50)))
            .notifier(recorder.clone())
            .simulator(Arc::new(simulator))
            .run()
            .expect("the supervisor failed");

        assert_eq!(recorder.consumed(), (vec![], vec![]));
        assert_eq!(recorder.count(&Notification::Done), 1);
    }

    #[test]
    fn invalid_config() {
        let err = Supervisor::new(config().capacity(0))
            .run()
            .expect_err("a zero capacity should be rejected");

        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
