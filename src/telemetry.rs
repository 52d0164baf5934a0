//! Tracing subscriber setup

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Logs go to stderr so stdout stays
/// parseable for `--json` and `--plan` output.
///
/// `RUST_LOG` wins over `default_directive`. Calling twice is a no-op.
pub fn init_tracing(default_directive: &str) {
    if INITIALISED.set(()).is_err() {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    // Another subscriber may already be installed (tests, embedding apps).
    let _ = Registry::default().with(filter).with(fmt_layer).try_init();
}
