/// Errors returned when setting up the coordinator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The [`Config`](crate::Config) can't be run.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A worker thread couldn't be spawned.
    #[error(transparent)]
    ThreadStart(#[from] std::io::Error),

    /// The termination signal handlers couldn't be registered.
    #[error("failed to register signal handlers: {0}")]
    Signal(#[source] std::io::Error),
}

impl Error {
    #[inline]
    pub(crate) fn config<T: ToString>(reason: T) -> Self {
        Self::InvalidConfig(reason.to_string())
    }
}
