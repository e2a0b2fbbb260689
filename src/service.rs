use std::{
    convert::Infallible,
    io::{self, Write},
    time::Duration,
};

use tokio::time;
use tracing::{debug, info};

use crate::clock::{format_timestamp, Clock};

pub const DEFAULT_BANNER: &str = "Python pyservice.py started";
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Config {
    pub banner: String,
    pub period: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_owned(),
            period: DEFAULT_PERIOD,
        }
    }
}

pub fn startup_line(config: &Config) -> String {
    config.banner.clone()
}

// NOTE: The double space after the colon is part of the output format.
pub fn running_line(timestamp: &str) -> String {
    format!("Running :  {timestamp}")
}

/// Writes the startup banner to `out`, then every `config.period` writes the
/// current UTC time read from `clock`.
///
/// Each line is flushed as soon as it is written. This never returns unless
/// writing to `out` fails.
pub async fn run<W: Write>(
    config: &Config,
    clock: &dyn Clock,
    out: &mut W,
) -> io::Result<Infallible> {
    info!("service started, ticking every {:?}", config.period);
    writeln!(out, "{}", startup_line(config))?;
    out.flush()?;

    loop {
        time::sleep(config.period).await;
        let now = format_timestamp(clock.now());
        debug!("tick at {now}");
        writeln!(out, "{}", running_line(&now))?;
        out.flush()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(startup_line(&config), "Python pyservice.py started");
        assert_eq!(config.period, Duration::from_secs(5));
    }

    #[test]
    fn running_line_layout() {
        assert_eq!(
            running_line("2024-01-02 03:04:05"),
            "Running :  2024-01-02 03:04:05"
        );
    }
}
