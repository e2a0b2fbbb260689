use std::io;

use anyhow::{Context, Result};
use dummy_service::{run, Config, SystemClock};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout is reserved for the service output.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = Config::default();
    let mut stdout = io::stdout().lock();
    let never = run(&config, &SystemClock, &mut stdout)
        .await
        .context("failed to write to stdout")?;
    match never {}
}
