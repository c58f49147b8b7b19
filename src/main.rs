use std::io;
use std::process::ExitCode;

use em_fields::demo::{self, DemoConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // The demo has no failure exit status; problems are only logged.
    if let Err(err) = demo::run(&DemoConfig::default(), io::stdout().lock()) {
        tracing::error!(%err, "demo aborted");
    }
    ExitCode::SUCCESS
}
