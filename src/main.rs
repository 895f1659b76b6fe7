use shiftwork::{Config, Supervisor};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/* ---------- */

fn main() -> anyhow::Result<()> {
    init_tracing();

    Supervisor::new(Config::default())
        .enable_signal_cancellation()
        .run()?;

    Ok(())
}

// Logs go to stderr, stdout is left to the notifications.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shiftwork=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
