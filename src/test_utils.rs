use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};

use crate::{ControlFlow, Notification, Notify, Simulate, WorkItem, Worker};

/* ---------- */

pub(crate) struct TestTimedWorker {
    timeout: Duration,
    now: Instant,
}

impl TestTimedWorker {
    pub(crate) fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            now: Instant::now(),
        }
    }
}

impl Worker for TestTimedWorker {
    fn on_start(&mut self) {
        self.now = Instant::now();
    }

    fn on_update(&mut self) -> ControlFlow {
        if self.now.elapsed() >= self.timeout {
            return ControlFlow::Break;
        }

        std::thread::sleep(Duration::from_millis(1));
        ControlFlow::Continue
    }
}

/* ---------- */

pub(crate) struct TestPanickingWorker;

impl Worker for TestPanickingWorker {
    fn on_update(&mut self) -> ControlFlow {
        panic!("the test worker panics")
    }
}

/* ---------- */

pub(crate) struct TestNamedWorker(Sender<Option<String>>);

impl TestNamedWorker {
    pub(crate) fn new(sender: Sender<Option<String>>) -> Self {
        Self(sender)
    }
}

impl Worker for TestNamedWorker {
    fn on_update(&mut self) -> ControlFlow {
        let name = std::thread::current().name().map(ToOwned::to_owned);
        let _ = self.0.send(name);

        ControlFlow::Break
    }
}

/* ---------- */

/// Keeps every notification it receives.
#[derive(Debug, Default)]
pub(crate) struct Recorder(Mutex<Vec<Notification>>);

impl Recorder {
    pub(crate) fn notifications(&self) -> Vec<Notification> {
        self.0.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, notification: &Notification) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|recorded| *recorded == notification)
            .count()
    }

    /// Ids of the consumed items, in consumption order, for both queues.
    pub(crate) fn consumed(&self) -> (Vec<usize>, Vec<usize>) {
        let mut work = Vec::new();
        let mut another_work = Vec::new();

        for notification in self.0.lock().unwrap().iter() {
            match notification {
                Notification::Work(item) => work.push(item.id()),
                Notification::AnotherWork(item) => another_work.push(item.id()),
                _ => (),
            }
        }

        (work, another_work)
    }
}

impl Notify for Recorder {
    fn notify(&self, notification: Notification) {
        self.0.lock().unwrap().push(notification)
    }
}

/* ---------- */

/// Produces items without any delay.
pub(crate) struct Immediate;

impl Simulate for Immediate {
    fn produce(&self, id: usize) -> WorkItem {
        WorkItem::new(id)
    }
}

/* ---------- */

/// Produces an item each time the gate is opened.
pub(crate) struct Gated(Receiver<()>);

impl Gated {
    pub(crate) fn new() -> (Sender<()>, Self) {
        let (sender, recver) = crossbeam_channel::unbounded();
        (sender, Self(recver))
    }
}

impl Simulate for Gated {
    fn produce(&self, id: usize) -> WorkItem {
        let _ = self.0.recv();
        WorkItem::new(id)
    }
}
